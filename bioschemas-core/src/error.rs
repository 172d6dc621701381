use std::result;

use thiserror::Error;

/// Error types for record mapping operations
#[derive(Error, Debug)]
pub enum MappingError {
    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    Xml(String),

    /// JSON parsing or serialization failed
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// An expected substructure of the record is absent
    #[error("Expected structure not found: {path}")]
    MissingStructure { path: String },
}

impl MappingError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingStructure { path: path.into() }
    }
}

pub type Result<T> = result::Result<T, MappingError>;
