//! Inline elements for document content
//!
//! Inline nodes carry the running text of a document. Their content is a
//! mix of literal text segments and nested inline nodes, so arbitrary
//! decoration (links, emphasis, semantic roles) can nest.

use serde::{Deserialize, Serialize};

use crate::info::InlineInfo;

/// A richtext inline node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichtextInline {
    /// Optional info record (target, formatting, metadata, ...)
    pub info: Option<InlineInfo>,
    /// Ordered content segments
    pub content: Vec<InlineSegment>,
}

/// One segment of inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineSegment {
    /// Literal text
    Text(String),
    /// A nested inline node
    Inline(RichtextInline),
}

impl RichtextInline {
    /// An inline node holding a single literal text segment.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            info: None,
            content: vec![InlineSegment::Text(text.into())],
        }
    }

    /// Concatenated literal text of this node and all its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.content {
            match segment {
                InlineSegment::Text(text) => out.push_str(text),
                InlineSegment::Inline(nested) => out.push_str(&nested.plain_text()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let inline = RichtextInline::from_text("Hello");
        assert_eq!(
            inline.content,
            vec![InlineSegment::Text("Hello".to_string())]
        );
        assert!(inline.info.is_none());
    }

    #[test]
    fn test_plain_text_flattens_nesting() {
        let inline = RichtextInline {
            info: None,
            content: vec![
                InlineSegment::Text("a ".to_string()),
                InlineSegment::Inline(RichtextInline::from_text("nested")),
                InlineSegment::Text(" z".to_string()),
            ],
        };
        assert_eq!(inline.plain_text(), "a nested z");
    }
}
