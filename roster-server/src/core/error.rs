use thiserror::Error;

/// Startup and serve failures
///
/// Request-level failures are [`crate::AppError`]; this type only covers
/// what can stop the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database unavailable: {0}")]
    Database(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::AppError> for ServerError {
    fn from(err: crate::AppError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// Result alias for startup code
pub type Result<T> = std::result::Result<T, ServerError>;
