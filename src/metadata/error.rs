//! Error types for loading metadata.

use thiserror::Error;

/// Errors that abort loading of a `structure.xml` document.
///
/// All of these are fatal: nothing downstream runs without a tree.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error while reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required element or attribute.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Structurally invalid document.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl MetadataError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Create an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "document",
            message: message.into(),
        }
    }
}
