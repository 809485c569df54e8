//! Bridge Errors
//!
//! One error type for everything that can go wrong between the document,
//! the settings and the LifeUp service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Host or port cannot be used to build a service URL
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Connection refused, DNS failure, timeout...
    #[cfg(feature = "native")]
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("request failed, status {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The service answered but reported a failure in its envelope
    #[error("{message}")]
    Service { code: i32, message: String },

    /// The trigger line changed while its task list was being fetched
    #[error("line {line} no longer holds the trigger")]
    TriggerMoved { line: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// True when the service itself rejected the request (envelope code != 200)
    pub fn is_service_error(&self) -> bool {
        matches!(self, BridgeError::Service { .. })
    }
}

/// Coarse error category, enough for the UI to pick its wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidSettings,
    Network,
    Service,
    Document,
    Internal,
}

/// Serializable form of [`BridgeError`] handed across the command boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorReport {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<BridgeError> for ErrorReport {
    fn from(err: BridgeError) -> Self {
        let kind = match &err {
            BridgeError::InvalidSettings(_) => ErrorKind::InvalidSettings,
            #[cfg(feature = "native")]
            BridgeError::Http(_) => ErrorKind::Network,
            BridgeError::Status(_) | BridgeError::Decode(_) => ErrorKind::Network,
            BridgeError::Service { .. } => ErrorKind::Service,
            BridgeError::TriggerMoved { .. } => ErrorKind::Document,
            BridgeError::Io(_) | BridgeError::Serialization(_) => ErrorKind::Internal,
        };
        Self::new(kind, err.to_string())
    }
}
