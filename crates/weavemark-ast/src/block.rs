//! Block-level elements for document structure
//!
//! Block nodes form the document skeleton: titled richtext sections,
//! embedding blocks with an opaque payload, paragraphs, lists, and
//! annotations. Child positions are typed enums so that the structural
//! contract between a node and its children is visible in the type
//! system.

use serde::{Deserialize, Serialize};

use crate::info::{BlockInfo, ListKind};
use crate::inline::RichtextInline;

/// A titled richtext section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichtextBlock {
    /// Optional title
    pub title: Option<RichtextInline>,
    /// Optional info record
    pub info: Option<BlockInfo>,
    /// Zero-indexed nesting depth (drives heading levels)
    pub depth: i32,
    /// Ordered body items
    pub content: Vec<BlockChild>,
}

/// Children a richtext block may contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockChild {
    /// A paragraph of inline content
    Paragraph(Paragraph),
    /// An embedding block
    Embedding(EmbeddingBlock),
    /// A nested richtext section
    Richtext(RichtextBlock),
}

/// A block embedding externally-typed content.
///
/// Invariant: a well-formed embedding block always carries an info record
/// with a non-null embedding type. The templatifier treats a violation as
/// fatal rather than recoverable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbeddingBlock {
    /// Optional title
    pub title: Option<RichtextInline>,
    /// Info record; must be present with `embed` set
    pub info: Option<BlockInfo>,
    /// Zero-indexed nesting depth
    pub depth: i32,
    /// Raw embedding payload, if any
    pub content: Option<String>,
}

/// A paragraph: inline content interleaved with lists and annotations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordered paragraph content
    pub content: Vec<ParagraphChild>,
}

/// Children a paragraph may contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParagraphChild {
    /// A run of inline content
    Inline(RichtextInline),
    /// A nested list
    List(List),
    /// An annotation
    Annotation(Annotation),
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// List kind
    pub kind: ListKind,
    /// List items
    pub items: Vec<ListItem>,
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    /// Explicit 1-based index, for lists that restart or skip numbering
    pub index: Option<u32>,
    /// Item body
    pub content: Vec<Paragraph>,
}

/// An annotation: authorial commentary that survives into the output as a
/// markup comment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Literal annotation text
    pub content: String,
}

impl Paragraph {
    /// A paragraph holding a single inline text run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ParagraphChild::Inline(RichtextInline::from_text(text))],
        }
    }
}
