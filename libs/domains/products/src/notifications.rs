//! Notification messages emitted by the products domain.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Subject the product-added email request is published on
pub const PRODUCT_ADDED_SUBJECT: &str = "notification.SendProductAddedEmail";

/// Email subject line used for product-added notifications
pub const PRODUCT_ADDED_EMAIL_SUBJECT: &str = "Product added successfully";

/// Request for the notification service to email a merchant about a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAddedEmail {
    pub to: String,
    pub subject: String,
    pub parameters: ProductAddedParameters,
}

/// Template parameters of [`ProductAddedEmail`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAddedParameters {
    pub product_name: String,
    pub product_image_url: String,
    pub product_category: String,
    /// Fixed two-decimal rendering, e.g. `"100000.00"`
    pub product_price: String,
    pub product_description: String,
}

impl ProductAddedEmail {
    pub fn new(to: impl Into<String>, product: &Product) -> Self {
        Self {
            to: to.into(),
            subject: PRODUCT_ADDED_EMAIL_SUBJECT.to_string(),
            parameters: ProductAddedParameters {
                product_name: product.name.clone(),
                product_image_url: product.image_url.clone().unwrap_or_default(),
                product_category: product.category.clone(),
                product_price: format!("{:.2}", product.price),
                product_description: product.description.clone(),
            },
        }
    }
}
