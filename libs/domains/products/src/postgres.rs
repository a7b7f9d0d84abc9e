use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use tracing::instrument;

use crate::{
    context::RequestContext,
    entity,
    error::ProductResult,
    models::Product,
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self, ctx, product), fields(request_id = %ctx.request_id(), sku = %product.sku))]
    async fn insert(&self, ctx: &RequestContext, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.insert(&self.db).await?;

        tracing::debug!(merchant_id = %model.merchant_id, "Inserted product");
        Ok(model.into())
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn find_by_sku(
        &self,
        ctx: &RequestContext,
        sku: &str,
    ) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(sku.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }
}
