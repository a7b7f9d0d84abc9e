//! SeaORM entity for the `products` table.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::models::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub merchant_id: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            sku: model.sku,
            name: model.name,
            description: model.description,
            category: model.category,
            brand: model.brand,
            price: model.price,
            image_url: model.image_url,
            merchant_id: model.merchant_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        Self {
            sku: Set(product.sku),
            name: Set(product.name),
            description: Set(product.description),
            category: Set(product.category),
            brand: Set(product.brand),
            price: Set(product.price),
            image_url: Set(product.image_url),
            merchant_id: Set(product.merchant_id),
            created_at: Set(product.created_at.into()),
        }
    }
}
