use thiserror::Error;
use tonic::Status;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("you are not authenticated")]
    Unauthenticated,

    #[error("{0} must be provided")]
    Validation(&'static str),

    #[error("an error occurred while adding product, please try again later")]
    AddFailed,

    #[error("product does not exist")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Identity service error: {0}")]
    Identity(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// gRPC status code this error surfaces as
    pub fn code(&self) -> tonic::Code {
        match self {
            ProductError::Unauthenticated => tonic::Code::Unauthenticated,
            ProductError::Validation(_) => tonic::Code::InvalidArgument,
            ProductError::AddFailed => tonic::Code::Internal,
            ProductError::NotFound => tonic::Code::NotFound,
            ProductError::Database(_) | ProductError::Identity(_) => tonic::Code::Internal,
        }
    }
}

/// Convert ProductError to a gRPC status
///
/// Collaborator failures never leak their detail to callers.
impl From<ProductError> for Status {
    fn from(err: ProductError) -> Self {
        let code = err.code();
        match err {
            ProductError::Database(_) | ProductError::Identity(_) => {
                Status::new(code, "internal error")
            }
            other => Status::new(code, other.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_facing_messages() {
        let status = Status::from(ProductError::Unauthenticated);
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
        assert_eq!(status.message(), "you are not authenticated");

        let status = Status::from(ProductError::Validation("sku"));
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "sku must be provided");

        let status = Status::from(ProductError::NotFound);
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "product does not exist");

        let status = Status::from(ProductError::AddFailed);
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(
            status.message(),
            "an error occurred while adding product, please try again later"
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let status = Status::from(ProductError::Database("connection reset by peer".into()));
        assert_eq!(status.code(), tonic::Code::Internal);
        assert!(!status.message().contains("connection reset"));
    }

    #[test]
    fn test_db_err_maps_to_database() {
        let err = ProductError::from(sea_orm::DbErr::Custom("boom".into()));
        assert!(matches!(err, ProductError::Database(msg) if msg.contains("boom")));
    }
}
