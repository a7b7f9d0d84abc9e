use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Keyed by SKU. Implementations honour `ctx` for tracing; the caller bounds
/// each call by the request deadline.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product and return it as persisted
    async fn insert(&self, ctx: &RequestContext, product: Product) -> ProductResult<Product>;

    /// Get a product by SKU
    async fn find_by_sku(&self, ctx: &RequestContext, sku: &str)
        -> ProductResult<Option<Product>>;
}
