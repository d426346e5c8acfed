//! Error types for render-tree construction
//!
//! All errors here are fatal for the document being processed: they mark
//! either malformed input or a broken contract with a collaborator.
//! Nothing is retried and no partial document is ever stored.

use thiserror::Error;

/// Result type for render-tree operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while transforming or templatifying a document
#[derive(Debug, Error)]
pub enum RenderError {
    /// A document with this identifier is already stored
    #[error("duplicate document id: {0}")]
    DuplicateDocument(String),

    /// A transformer returned a node incompatible with its position
    #[error("transformer produced {actual} where {expected} was expected")]
    InvalidTransformation {
        expected: &'static str,
        actual: &'static str,
    },

    /// An embedding block arrived without an info record
    #[error("embedding block has no info record")]
    MissingEmbeddingInfo,

    /// An embedding block's info record has no embedding type
    #[error("embedding block has no embedding type")]
    MissingEmbeddingType,

    /// Doc text declared a markup language this system cannot render
    #[error("unsupported markup language: {0}")]
    UnsupportedMarkup(String),

    /// A crossref was used where required reference fields are missing
    #[error("crossref is missing {0}")]
    IncompleteCrossref(&'static str),

    /// A metaclass or base position held a non-concrete type expression
    #[error("metaclass or base is not a concrete type")]
    NonConcreteType,

    /// Parse failure from the injected abstractifier, surfaced unchanged
    #[error("parse error")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}
