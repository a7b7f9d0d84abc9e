//! Products Domain
//!
//! Registers products on behalf of authenticated merchants and looks them up by SKU.
//!
//! # Architecture
//!
//! ```text
//!            ┌──────────────────┐
//!            │  ProductService  │  ← add / get use cases
//!            └───┬──────┬────┬──┘
//!                │      │    │
//!   ┌────────────▼┐ ┌───▼────▼─────────┐ ┌─────────────────────┐
//!   │ Identity    │ │ ProductRepository │ │ messaging::Notifier │
//!   │ Resolver    │ │ (PostgreSQL)      │ │ (NATS, best effort) │
//!   └─────────────┘ └───────────────────┘ └─────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{PgProductRepository, ProductService, RequestContext};
//!
//! let service = ProductService::new(PgProductRepository::new(db), resolver, notifier);
//! let ctx = RequestContext::new("req-1").with_timeout(Duration::from_secs(5));
//! let product = service.add_product(&ctx, "validJwt", candidate).await?;
//! ```

pub mod context;
pub mod entity;
pub mod error;
pub mod identity;
pub mod models;
pub mod notifications;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use context::{DeadlineExceeded, RequestContext};
pub use error::{ProductError, ProductResult};
pub use identity::IdentityResolver;
pub use models::{Identity, NewProduct, Product};
pub use notifications::{ProductAddedEmail, PRODUCT_ADDED_SUBJECT};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;

#[cfg(any(test, feature = "mock"))]
pub use identity::MockIdentityResolver;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockProductRepository;
