use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product attributes supplied by a merchant
///
/// Carries no SKU, owner or timestamp; those are assigned when the product is accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// A product as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub image_url: Option<String>,
    /// Id of the merchant who added the product
    pub merchant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Accept a candidate on behalf of `merchant_id`, assigning a fresh SKU.
    pub fn for_merchant(candidate: NewProduct, merchant_id: impl Into<String>) -> Self {
        Self {
            sku: Uuid::new_v4().to_string(),
            name: candidate.name,
            description: candidate.description,
            category: candidate.category,
            brand: candidate.brand,
            price: candidate.price,
            image_url: candidate.image_url,
            merchant_id: merchant_id.into(),
            created_at: Utc::now(),
        }
    }
}

/// The authenticated caller, as reported by the users service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub contact_email: String,
}
