use domain_products::{IdentityResolver, ProductRepository, ProductService, RequestContext};
use grpc_client::metadata;
use messaging::Notifier;
use rpc::products::{
    products_service_server::ProductsService, AddProductRequest, GetProductRequest, Product,
};
use tonic::metadata::MetadataMap;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::conversions::{new_product_from_proto, product_to_proto};

/// gRPC implementation of `products.ProductsService`
pub struct ProductsServiceImpl<R, I, N>
where
    R: ProductRepository + 'static,
    I: IdentityResolver + 'static,
    N: Notifier + 'static,
{
    service: ProductService<R, I, N>,
}

impl<R, I, N> ProductsServiceImpl<R, I, N>
where
    R: ProductRepository + 'static,
    I: IdentityResolver + 'static,
    N: Notifier + 'static,
{
    pub fn new(service: ProductService<R, I, N>) -> Self {
        Self { service }
    }
}

/// Request id and deadline of an inbound call
///
/// A missing `x-request-id` gets a fresh UUID so every log line can be correlated.
fn request_context(metadata: &MetadataMap) -> RequestContext {
    let request_id = metadata::request_id(metadata).unwrap_or_else(|| Uuid::new_v4().to_string());
    let ctx = RequestContext::new(request_id);

    match metadata::grpc_timeout(metadata) {
        Some(timeout) => ctx.with_timeout(timeout),
        None => ctx,
    }
}

#[tonic::async_trait]
impl<R, I, N> ProductsService for ProductsServiceImpl<R, I, N>
where
    R: ProductRepository + 'static,
    I: IdentityResolver + 'static,
    N: Notifier + 'static,
{
    async fn add_product(
        &self,
        request: Request<AddProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let ctx = request_context(request.metadata());
        // No token: the domain rejects the empty credential
        let credential = metadata::bearer_token(request.metadata()).unwrap_or_default();
        let candidate = new_product_from_proto(request.into_inner());

        let product = self
            .service
            .add_product(&ctx, &credential, candidate)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(product_to_proto(product)))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let ctx = request_context(request.metadata());
        let req = request.into_inner();

        let product = self
            .service
            .get_product(&ctx, &req.sku)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(product_to_proto(product)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_products::{
        Identity, MockIdentityResolver, MockProductRepository, ProductError, PRODUCT_ADDED_SUBJECT,
    };
    use messaging::memory::InMemoryNotifier;
    use tonic::Code;

    fn resolver_accepting(token: &'static str) -> MockIdentityResolver {
        let mut resolver = MockIdentityResolver::new();
        resolver
            .expect_resolve_from_credential()
            .returning(move |_, credential| {
                if credential == token {
                    Ok(Identity {
                        id: "valid.user".into(),
                        display_name: "Valid User".into(),
                        contact_email: "valid.user@example.com".into(),
                    })
                } else {
                    Err(ProductError::Identity("Unauthenticated: invalid token".into()))
                }
            });
        resolver
    }

    fn echo_repository() -> MockProductRepository {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().returning(|_, product| Ok(product));
        repo
    }

    fn pink_slippers_request(authorization: Option<&str>) -> Request<AddProductRequest> {
        let mut request = Request::new(AddProductRequest {
            name: "Pink Slippers".into(),
            description: "Soft pink slippers".into(),
            category: "slippers".into(),
            brand: "Nike".into(),
            price: 100000.0,
            image_url: String::new(),
        });
        if let Some(value) = authorization {
            request
                .metadata_mut()
                .insert(metadata::AUTHORIZATION, value.parse().unwrap());
        }
        request
    }

    #[tokio::test]
    async fn test_add_product_strips_bearer_prefix() {
        let notifier = InMemoryNotifier::new();
        let api = ProductsServiceImpl::new(ProductService::new(
            echo_repository(),
            resolver_accepting("validJwt"),
            notifier.clone(),
        ));

        let product = api
            .add_product(pink_slippers_request(Some("Bearer validJwt")))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(product.name, "Pink Slippers");
        assert_eq!(product.merchant_id, "valid.user");
        assert_eq!(product.price, 100000.0);
        assert_eq!(product.image_url, "");
        assert!(!product.sku.is_empty());

        let published = notifier.published().await;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].subject, PRODUCT_ADDED_SUBJECT);
    }

    #[tokio::test]
    async fn test_add_product_without_authorization() {
        let mut resolver = MockIdentityResolver::new();
        resolver.expect_resolve_from_credential().never();
        let mut repo = MockProductRepository::new();
        repo.expect_insert().never();

        let api = ProductsServiceImpl::new(ProductService::new(
            repo,
            resolver,
            InMemoryNotifier::new(),
        ));

        let status = api.add_product(pink_slippers_request(None)).await.unwrap_err();

        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "you are not authenticated");
    }

    #[tokio::test]
    async fn test_add_product_with_invalid_token() {
        let api = ProductsServiceImpl::new(ProductService::new(
            MockProductRepository::new(),
            resolver_accepting("validJwt"),
            InMemoryNotifier::new(),
        ));

        let status = api
            .add_product(pink_slippers_request(Some("Bearer invalidJwt")))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_add_product_store_failure() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert()
            .returning(|_, _| Err(ProductError::Database("connection refused".into())));

        let api = ProductsServiceImpl::new(ProductService::new(
            repo,
            resolver_accepting("validJwt"),
            InMemoryNotifier::new(),
        ));

        let status = api
            .add_product(pink_slippers_request(Some("Bearer validJwt")))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(
            status.message(),
            "an error occurred while adding product, please try again later"
        );
    }

    #[tokio::test]
    async fn test_inbound_request_id_and_deadline_reach_the_domain() {
        let mut resolver = MockIdentityResolver::new();
        resolver
            .expect_resolve_from_credential()
            .withf(|ctx, _| ctx.request_id() == "req-7" && ctx.deadline().is_some())
            .times(1)
            .returning(|_, _| {
                Ok(Identity {
                    id: "valid.user".into(),
                    display_name: "Valid User".into(),
                    contact_email: "valid.user@example.com".into(),
                })
            });

        let api = ProductsServiceImpl::new(ProductService::new(
            echo_repository(),
            resolver,
            InMemoryNotifier::new(),
        ));

        let mut request = pink_slippers_request(Some("Bearer validJwt"));
        request
            .metadata_mut()
            .insert(metadata::REQUEST_ID, "req-7".parse().unwrap());
        request
            .metadata_mut()
            .insert(metadata::GRPC_TIMEOUT, "5S".parse().unwrap());

        api.add_product(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_sku()
            .withf(|_, sku| sku == "sku.222333")
            .returning(|_, _| {
                Ok(Some(domain_products::Product {
                    sku: "sku.222333".into(),
                    name: "Apple Watch".into(),
                    description: "Series 9".into(),
                    category: "watches".into(),
                    brand: "Apple".into(),
                    price: 1999288.0,
                    image_url: Some("https://img.example.com/watch.png".into()),
                    merchant_id: "valid.user".into(),
                    created_at: Utc::now(),
                }))
            });

        let api = ProductsServiceImpl::new(ProductService::new(
            repo,
            MockIdentityResolver::new(),
            InMemoryNotifier::new(),
        ));

        let product = api
            .get_product(Request::new(GetProductRequest {
                sku: "sku.222333".into(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(product.name, "Apple Watch");
        assert_eq!(product.price, 1999288.0);
        assert_eq!(product.image_url, "https://img.example.com/watch.png");
    }

    #[tokio::test]
    async fn test_get_product_store_error_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_sku()
            .returning(|_, _| Err(ProductError::Database("timeout".into())));

        let api = ProductsServiceImpl::new(ProductService::new(
            repo,
            MockIdentityResolver::new(),
            InMemoryNotifier::new(),
        ));

        let status = api
            .get_product(Request::new(GetProductRequest {
                sku: "sku.111222".into(),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "product does not exist");
    }

    #[tokio::test]
    async fn test_get_product_requires_sku() {
        let api = ProductsServiceImpl::new(ProductService::new(
            MockProductRepository::new(),
            MockIdentityResolver::new(),
            InMemoryNotifier::new(),
        ));

        let status = api
            .get_product(Request::new(GetProductRequest::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "sku must be provided");
    }

    #[test]
    fn test_request_context_generates_request_id() {
        let ctx = request_context(&MetadataMap::new());
        assert!(Uuid::parse_str(ctx.request_id()).is_ok());
        assert!(ctx.deadline().is_none());
    }
}
