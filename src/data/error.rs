//! Data loading error types

use thiserror::Error;

/// Errors that can occur while loading the dashboard resources
#[derive(Error, Debug)]
pub enum LoadError {
    /// Resource could not be retrieved (network, HTTP status, missing file)
    #[error("Failed to fetch {resource}: {message}")]
    Fetch { resource: String, message: String },

    /// Resource was retrieved but is not the expected JSON document
    #[error("Failed to parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two assets in the prices resource share a symbol
    #[error("Duplicate asset symbol {symbol} in {resource}")]
    DuplicateSymbol { resource: String, symbol: String },
}

impl LoadError {
    pub fn fetch(resource: impl Into<String>, message: impl ToString) -> Self {
        LoadError::Fetch {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    /// Path of the resource that failed
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Fetch { resource, .. }
            | LoadError::Parse { resource, .. }
            | LoadError::DuplicateSymbol { resource, .. } => resource,
        }
    }
}

/// Result type alias for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
