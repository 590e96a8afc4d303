//! Error types / 错误类型

/// Result alias using [`DictError`].
pub type Result<T> = std::result::Result<T, DictError>;

/// Errors surfaced by the dictionary service / 字典服务错误
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// Search term does not fit the criterion (e.g. non-numeric stroke count)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Detail lookup matched no record
    #[error("Character not found: {0}")]
    NotFound(i64),

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DictError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DictError::InvalidArgument(msg.into())
    }
}
