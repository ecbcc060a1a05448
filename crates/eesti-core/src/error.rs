//! Error types for the Eesti app core
//!
//! Shared error taxonomy for document, profile, and flow operations.

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Eesti app core errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Incorrect access code submitted at the gate
    #[error("Incorrect access code")]
    InvalidAccessCode,

    /// Document not found
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Service not found
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation attempted in the wrong flow state
    #[error("Invalid flow state: {0}")]
    FlowState(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a user-facing error (vs internal error)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAccessCode | Error::Validation(_)
        )
    }

    /// Get user-friendly error message
    ///
    /// The access-code message is the only error string the original
    /// application ever surfaces, verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidAccessCode => "Vale kood. Proovi uuesti.".to_string(),
            _ => self.to_string(),
        }
    }
}
