use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::ProductResult;
use crate::models::Identity;

/// Turns a caller credential into the identity it belongs to
///
/// Any error means the credential is not accepted; the service does not
/// distinguish a bad token from an unreachable identity provider.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve_from_credential(
        &self,
        ctx: &RequestContext,
        credential: &str,
    ) -> ProductResult<Identity>;
}
