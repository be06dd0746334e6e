use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Plot,
    Commercial,
    Apartment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyPurpose {
    Sale,
    Rent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Sold,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub purpose: PropertyPurpose,
    pub price: String,
    pub area: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    pub status: PropertyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateAgent {
    pub id: String,
    pub name: String,
    pub agency: String,
    pub phone: String,
    pub image_url: String,
    pub bio: String,
    pub experience: String,
    pub verified: bool,
}
