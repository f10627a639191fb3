use thiserror::Error;

/// Why a request was rejected before touching the table
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid user data")]
    MalformedPayload,

    #[error("invalid email")]
    InvalidEmail,

    #[error("missing email query parameter")]
    MissingEmail,
}

/// Failures returned by the user operations.
/// Each variant carries a fixed message; the underlying cause is logged where it happens.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("user already exists")]
    AlreadyExists,

    #[error("user does not exist")]
    DoesNotExist,

    #[error("could not marshal user record")]
    Serialization,

    #[error("failed to unmarshal record")]
    Deserialization,

    #[error("failed to get user")]
    StorageRead,

    #[error("could not put user")]
    StorageWrite,

    #[error("could not delete user")]
    StorageDelete,
}

/// Failures from a `RecordStore` backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("table request failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("item has no string `email` key")]
    MissingKey,

    #[error("in-memory table lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown USER_STORE backend: {0} (expected `dynamodb` or `memory`)")]
    UnknownBackend(String),
}
