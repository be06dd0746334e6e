use serde::{Deserialize, Serialize};

use super::ApprovalStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub status: ApprovalStatus,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: JobType,
    pub salary: String,
    pub posted_date: i64,
    pub apply_by_date: i64,
    pub description: String,
    pub contact: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAlert {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreelancerCategory {
    Tech,
    #[serde(rename = "Home Service")]
    HomeService,
    Education,
    Creative,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    pub id: String,
    pub status: ApprovalStatus,
    pub name: String,
    pub skill: String,
    pub category: FreelancerCategory,
    pub experience: String,
    pub contact: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<String>,
    pub image_url: String,
    pub location: String,
    pub joined_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}
