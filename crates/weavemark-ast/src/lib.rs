//! weavemark-ast - Abstract Syntax Tree definitions
//!
//! This crate provides the node models used by weavemark: the markup AST
//! produced by an external parser, and the documentation-summary tree
//! produced by an external extractor. Both are plain serde-serializable
//! value types; all rendering logic lives in `weavemark-html`.

pub mod block;
pub mod document;
pub mod info;
pub mod inline;
pub mod node;
pub mod summary;

pub use block::{
    Annotation, BlockChild, EmbeddingBlock, List, ListItem, Paragraph, ParagraphChild,
    RichtextBlock,
};
pub use document::Document;
pub use info::{
    BlockFormatting, BlockInfo, DataValue, FallbackKind, InlineFormatting, InlineInfo, ListKind,
    Metadata,
};
pub use inline::{InlineSegment, RichtextInline};
pub use node::{Node, NodeKind, NodeRef};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
