// ============================================================================
// MODELS - Registros planos del portal (compatibles con el JSON de localStorage)
// ============================================================================

pub mod user;
pub mod stats;
pub mod category;
pub mod business;
pub mod property;
pub mod jobs;
pub mod advert;
pub mod transaction;
pub mod content;
pub mod analytics;

pub use user::{Role, User};
pub use stats::TownStats;
pub use category::{AdType, Category};
pub use business::{Business, Review};
pub use property::{Property, PropertyPurpose, PropertyStatus, PropertyType, RealEstateAgent};
pub use jobs::{Freelancer, FreelancerCategory, Job, JobAlert, JobCategory, JobType};
pub use advert::{AdRequest, AdPage, Advert};
pub use transaction::{Broadcast, Transaction};
pub use content::*;
pub use analytics::{AnalyticsData, BusinessStats};

use serde::{Deserialize, Serialize};

/// Estado de moderación compartido por negocios, anuncios, empleos, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}
