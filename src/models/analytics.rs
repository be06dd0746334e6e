use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Business, Category};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStats {
    pub total: u32,
    pub by_category: HashMap<Category, u32>,
    pub verified_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_views: u64,
    pub total_reviews: u64,
    pub top_businesses: Vec<Business>,
    pub category_views: HashMap<String, u64>,
}
