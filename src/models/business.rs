use serde::{Deserialize, Serialize};

use super::{ApprovalStatus, Category};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: f64,
    pub comment: String,
    pub date: i64,
}

/// Ficha de negocio del directorio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub status: ApprovalStatus,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub short_description: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_record_without_optional_fields() {
        let json = serde_json::json!({
            "id": "b1",
            "status": "approved",
            "name": "Sri Lakshmi Tiffins",
            "category": "Restaurant",
            "description": "Breakfast spot",
            "shortDescription": "Idli and dosa",
            "phone": "900000000",
            "email": "tiffins@example.com",
            "whatsapp": "900000000",
            "address": "Main Road",
            "latitude": 15.39,
            "longitude": 77.87,
            "imageUrl": "https://example.com/a.jpg",
            "rating": 4.5,
            "verified": true,
            "createdAt": 1700000000000i64
        });
        let business: Business = serde_json::from_value(json).unwrap();
        assert_eq!(business.status, ApprovalStatus::Approved);
        assert_eq!(business.category, Category::Restaurant);
        assert!(business.reviews.is_none());

        let back = serde_json::to_value(&business).unwrap();
        assert!(back.get("ownerId").is_none());
        assert_eq!(back["shortDescription"], "Idli and dosa");
    }
}
