//! Protobuf contracts shared by the products service and its clients.
//!
//! Message structs mirror `proto/*.proto` field-for-field (same tags, same scalar
//! types) so they stay wire compatible with stubs generated from the `.proto` files
//! in other languages. Service stubs are generated by `build.rs`.
//!
//! ```ignore
//! use rpc::products::products_service_client::ProductsServiceClient;
//! use rpc::products::GetProductRequest;
//!
//! let mut client = ProductsServiceClient::connect("http://[::1]:2424").await?;
//! let product = client
//!     .get_product(GetProductRequest { sku: "sku.222333".into() })
//!     .await?
//!     .into_inner();
//! ```

pub mod products;
pub mod users;
