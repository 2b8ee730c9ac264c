//! Error types for schema operations

use thiserror::Error;

/// Main error type for Activity schema operations
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The activity carries no `channelData` payload
    #[error("activity has no channel data")]
    MissingChannelData,

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;
