use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Listing,
    Advert,
    Job,
    Realestate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    Card,
    Netbanking,
}

/// Pago registrado por el portal. Sin semántica de cobro: solo el registro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// ID del negocio, anuncio o empleo pagado
    pub reference_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub method: PaymentMethod,
    pub customer_email: String,
    pub customer_name: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    All,
    Category,
    Debtors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastStatus {
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    pub id: String,
    pub message: String,
    pub recipient_type: RecipientType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_category: Option<Category>,
    pub sent_at: i64,
    pub recipient_count: u32,
    pub status: BroadcastStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_field_is_renamed() {
        let tx = Transaction {
            id: "t1".to_string(),
            reference_id: "b1".to_string(),
            kind: TransactionKind::Listing,
            amount: 499.0,
            currency: "INR".to_string(),
            status: TransactionStatus::Success,
            method: PaymentMethod::Upi,
            customer_email: "a@example.com".to_string(),
            customer_name: "A".to_string(),
            created_at: 1,
            item_name: None,
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "listing");
        assert_eq!(value["method"], "UPI");
        assert_eq!(value["referenceId"], "b1");
        assert!(value.get("itemName").is_none());
    }
}
