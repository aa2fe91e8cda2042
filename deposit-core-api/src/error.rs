use thiserror::Error;

/// Message returned to clients for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur";

/// Message returned to clients when the request body or query is malformed.
pub const INVALID_DATA_MESSAGE: &str = "Données invalides";

#[derive(Error, Debug)]
pub enum ApiError {
    /// A caller-supplied value is unacceptable (unknown reference, bad amount, bad date).
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the entity's current state.
    #[error("{0}")]
    InvalidOperation(String),

    /// The request could not be decoded or failed field validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// HTTP status code the error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidArgument(_)
            | ApiError::InvalidOperation(_)
            | ApiError::ValidationError(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::DatabaseError(_) => 500,
        }
    }

    /// Message safe to show to clients. Server-side details are replaced by a generic text.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::InvalidArgument(msg)
            | ApiError::InvalidOperation(msg)
            | ApiError::NotFound(msg) => msg.clone(),
            ApiError::ValidationError(_) => INVALID_DATA_MESSAGE.to_string(),
            ApiError::DatabaseError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
