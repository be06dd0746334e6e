use serde::{Deserialize, Serialize};

use super::{AdType, ApprovalStatus};

/// Página donde se muestra un anuncio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPage {
    Home,
    Realestate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub status: ApprovalStatus,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<AdPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Solicitud de publicidad enviada desde /advertise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRequest {
    pub id: String,
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub ad_type: AdType,
    pub message: String,
    pub status: ApprovalStatus,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advert_page_is_lowercase() {
        let advert: Advert = serde_json::from_value(serde_json::json!({
            "id": "ad1",
            "status": "pending",
            "title": "Grand opening",
            "description": "",
            "imageUrl": "",
            "page": "realestate"
        }))
        .unwrap();
        assert_eq!(advert.page, Some(AdPage::Realestate));
        assert_eq!(advert.status, ApprovalStatus::Pending);
    }
}
