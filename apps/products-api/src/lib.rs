//! Products gRPC Service
//!
//! Lets merchants register products and anyone look them up by SKU.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC with Zstd compression, `authorization: Bearer <jwt>`)
//! ProductsServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions, request id + deadline from metadata)
//! ProductService (domain layer)
//!   ├─ GrpcIdentityResolver → users.UsersService
//!   ├─ PgProductRepository  → PostgreSQL
//!   └─ NatsNotifier         → notification.SendProductAddedEmail
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment-driven configuration
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (ProductsServiceImpl)
//! - `identity`: Users-service backed identity resolution

pub mod config;
pub mod conversions;
pub mod identity;
pub mod server;
pub mod service;

// Re-export for convenience
pub use config::Config;
pub use server::run;
pub use service::ProductsServiceImpl;
