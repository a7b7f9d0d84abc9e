//! Identity resolution through the users service.

use async_trait::async_trait;
use domain_products::{Identity, IdentityResolver, ProductError, ProductResult, RequestContext};
use grpc_client::metadata::REQUEST_ID;
use grpc_client::TracingInterceptor;
use rpc::users::users_service_client::UsersServiceClient;
use rpc::users::GetUserFromJwtRequest;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::{debug, instrument};

type UsersClient = UsersServiceClient<InterceptedService<Channel, TracingInterceptor>>;

/// [`IdentityResolver`] calling `users.UsersService/GetUserFromJwt`
///
/// The request id and remaining deadline of the inbound request are forwarded.
#[derive(Clone)]
pub struct GrpcIdentityResolver {
    client: UsersClient,
}

impl GrpcIdentityResolver {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: UsersServiceClient::with_interceptor(channel, TracingInterceptor::new()),
        }
    }
}

#[async_trait]
impl IdentityResolver for GrpcIdentityResolver {
    #[instrument(skip_all, fields(request_id = %ctx.request_id()))]
    async fn resolve_from_credential(
        &self,
        ctx: &RequestContext,
        credential: &str,
    ) -> ProductResult<Identity> {
        let mut request = tonic::Request::new(GetUserFromJwtRequest {
            jwt_token: credential.to_string(),
        });
        if let Ok(value) = ctx.request_id().parse::<MetadataValue<Ascii>>() {
            request.metadata_mut().insert(REQUEST_ID, value);
        }
        if let Some(remaining) = ctx.remaining() {
            request.set_timeout(remaining);
        }

        let mut client = self.client.clone();
        let response = client
            .get_user_from_jwt(request)
            .await
            .map_err(|status| {
                ProductError::Identity(format!("{:?}: {}", status.code(), status.message()))
            })?;

        let user = response
            .into_inner()
            .user
            .ok_or_else(|| ProductError::Identity("response carried no user".to_string()))?;

        debug!(user_id = %user.id, "Resolved identity");
        Ok(Identity {
            id: user.id,
            display_name: user.full_name,
            contact_email: user.email,
        })
    }
}
