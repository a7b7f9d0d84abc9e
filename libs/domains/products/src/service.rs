//! Product Service - Business logic layer

use messaging::{publish_json, Notifier, NotifyError};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn, Span};

use crate::context::RequestContext;
use crate::error::{ProductError, ProductResult};
use crate::identity::IdentityResolver;
use crate::models::{Identity, NewProduct, Product};
use crate::notifications::{ProductAddedEmail, PRODUCT_ADDED_SUBJECT};
use crate::repository::ProductRepository;

/// Product service providing the add and get use cases
///
/// Adding a product resolves the caller's identity, persists the product under
/// that identity and then asks the notification service to email the merchant.
/// The notification is best effort: its failure never fails the add.
pub struct ProductService<R, I, N>
where
    R: ProductRepository,
    I: IdentityResolver,
    N: Notifier,
{
    repository: Arc<R>,
    identities: Arc<I>,
    notifier: Arc<N>,
}

impl<R, I, N> Clone for ProductService<R, I, N>
where
    R: ProductRepository,
    I: IdentityResolver,
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            identities: Arc::clone(&self.identities),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<R, I, N> ProductService<R, I, N>
where
    R: ProductRepository,
    I: IdentityResolver,
    N: Notifier,
{
    pub fn new(repository: R, identities: I, notifier: N) -> Self {
        Self {
            repository: Arc::new(repository),
            identities: Arc::new(identities),
            notifier: Arc::new(notifier),
        }
    }

    /// Register a product on behalf of the holder of `credential`
    #[instrument(
        skip(self, ctx, credential, candidate),
        fields(
            request_id = %ctx.request_id(),
            product_name = %candidate.name,
            merchant_id = tracing::field::Empty,
            sku = tracing::field::Empty,
        )
    )]
    pub async fn add_product(
        &self,
        ctx: &RequestContext,
        credential: &str,
        candidate: NewProduct,
    ) -> ProductResult<Product> {
        if credential.trim().is_empty() {
            warn!("Add product rejected: no credential");
            return Err(ProductError::Unauthenticated);
        }

        let identity = match ctx
            .run(self.identities.resolve_from_credential(ctx, credential))
            .await
        {
            Ok(Ok(identity)) if !identity.id.is_empty() => identity,
            Ok(Ok(_)) => {
                warn!("Add product rejected: identity has no id");
                return Err(ProductError::Unauthenticated);
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Add product rejected: identity resolution failed");
                return Err(ProductError::Unauthenticated);
            }
            Err(e) => {
                warn!(error = %e, "Add product rejected: identity resolution timed out");
                return Err(ProductError::Unauthenticated);
            }
        };
        Span::current().record("merchant_id", identity.id.as_str());

        let product = Product::for_merchant(candidate, identity.id.as_str());
        Span::current().record("sku", product.sku.as_str());

        let stored = match ctx.run(self.repository.insert(ctx, product)).await {
            Ok(Ok(stored)) => stored,
            Ok(Err(e)) => {
                error!(error = %e, "Failed to persist product");
                return Err(ProductError::AddFailed);
            }
            // The insert may still have committed
            Err(e) => {
                error!(error = %e, "Persisting product timed out, outcome unknown");
                return Err(ProductError::AddFailed);
            }
        };

        self.notify_product_added(ctx, &identity, &stored).await;

        info!("Product added");
        Ok(stored)
    }

    /// Get a product by SKU
    ///
    /// A store failure is reported as [`ProductError::NotFound`], same as a missing row.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    pub async fn get_product(&self, ctx: &RequestContext, sku: &str) -> ProductResult<Product> {
        if sku.is_empty() {
            return Err(ProductError::Validation("sku"));
        }

        match ctx.run(self.repository.find_by_sku(ctx, sku)).await {
            Ok(Ok(Some(product))) => Ok(product),
            Ok(Ok(None)) => {
                debug!("Product not found");
                Err(ProductError::NotFound)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Product lookup failed");
                Err(ProductError::NotFound)
            }
            Err(e) => {
                warn!(error = %e, "Product lookup timed out");
                Err(ProductError::NotFound)
            }
        }
    }

    #[instrument(name = "publish_product_added", skip_all, fields(sku = %product.sku))]
    async fn notify_product_added(
        &self,
        ctx: &RequestContext,
        identity: &Identity,
        product: &Product,
    ) {
        let email = ProductAddedEmail::new(identity.contact_email.as_str(), product);

        let outcome = ctx
            .run(publish_json(self.notifier.as_ref(), PRODUCT_ADDED_SUBJECT, &email))
            .await
            .unwrap_or(Err(NotifyError::Timeout));

        match outcome {
            Ok(()) => debug!(subject = PRODUCT_ADDED_SUBJECT, "Product added notification published"),
            Err(e) => warn!(
                subject = PRODUCT_ADDED_SUBJECT,
                error = %e,
                "Failed to publish product added notification"
            ),
        }
    }
}
