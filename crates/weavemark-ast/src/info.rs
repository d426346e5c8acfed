//! Node info records and typed metadata values
//!
//! Every block and inline node may carry an info record: a bundle of
//! declared key/value metadata plus the "spec" fields (link target,
//! formatting, semantic role, fallback, embedding type) that drive
//! rendering decisions downstream.

use serde::{Deserialize, Serialize};

/// A typed metadata value as declared on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    /// A literal string
    Str(String),
    /// An integer
    Int(i64),
    /// A decimal number
    Decimal(f64),
    /// A boolean
    Bool(bool),
    /// An explicit null
    Null,
    /// A mention link (`@name`)
    Mention(String),
    /// A tag link (`#name`)
    Tag(String),
    /// A variable link (`%name`)
    Variable(String),
    /// A cross-document reference link (`&path`)
    Reference(String),
}

impl DataValue {
    /// Short type tag carried by rendered metadata entries.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Str(_) => "str",
            DataValue::Int(_) => "int",
            DataValue::Decimal(_) => "dec",
            DataValue::Bool(_) => "bool",
            DataValue::Null => "null",
            DataValue::Mention(_) => "@",
            DataValue::Tag(_) => "#",
            DataValue::Variable(_) => "%",
            DataValue::Reference(_) => "&",
        }
    }

    /// Whether this value names a link target that must go through the
    /// injected target resolver.
    pub fn is_link(&self) -> bool {
        matches!(
            self,
            DataValue::Mention(_)
                | DataValue::Tag(_)
                | DataValue::Variable(_)
                | DataValue::Reference(_)
        )
    }

    /// The raw textual form of the value. Null renders as an empty string.
    pub fn value_text(&self) -> String {
        match self {
            DataValue::Str(value)
            | DataValue::Mention(value)
            | DataValue::Tag(value)
            | DataValue::Variable(value)
            | DataValue::Reference(value) => value.clone(),
            DataValue::Int(value) => value.to_string(),
            DataValue::Decimal(value) => value.to_string(),
            DataValue::Bool(value) => value.to_string(),
            DataValue::Null => String::new(),
        }
    }
}

/// Declared key/value metadata, in declaration order.
///
/// Declaration order is a rendering contract: metadata entries are emitted
/// in the order they were written, not sorted.
pub type Metadata = Vec<(String, DataValue)>;

/// Block-level formatting kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockFormatting {
    /// Render the block as a quotation
    Quote,
}

impl BlockFormatting {
    /// Lower-cased name, used as the attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockFormatting::Quote => "quote",
        }
    }
}

/// Inline formatting kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineFormatting {
    /// Preformatted/code text
    Pre,
    /// Underlined text
    Underline,
    /// Strong emphasis
    Strong,
    /// Regular emphasis
    Emphasis,
    /// Struck-through text
    Strike,
    /// Inline quotation
    Quote,
}

impl InlineFormatting {
    /// Lower-cased name, used as the attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            InlineFormatting::Pre => "pre",
            InlineFormatting::Underline => "underline",
            InlineFormatting::Strong => "strong",
            InlineFormatting::Emphasis => "emphasis",
            InlineFormatting::Strike => "strike",
            InlineFormatting::Quote => "quote",
        }
    }
}

/// Fallback behavior for content the output target cannot handle natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackKind {
    /// Render the raw content as plain text
    Plaintext,
    /// Drop the content entirely
    Omit,
}

impl FallbackKind {
    /// Lower-cased name, used as the attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackKind::Plaintext => "plaintext",
            FallbackKind::Omit => "omit",
        }
    }
}

/// List kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Numbered list
    Ordered,
    /// Bullet list
    Unordered,
}

/// Info record carried by block-level nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Declared key/value metadata, in declaration order
    pub metadata: Metadata,
    /// Marks the record as document-level metadata; consumed during
    /// abstractification, never rendered as an attribute
    pub is_doc_metadata: bool,
    /// Link target for the whole node
    pub target: Option<DataValue>,
    /// Block formatting kind
    pub formatting: Option<BlockFormatting>,
    /// Fallback behavior for unrenderable content
    pub fallback: Option<FallbackKind>,
    /// Embedding type; mandatory on embedding blocks, absent elsewhere
    pub embed: Option<String>,
    /// Extra style classes
    pub style_modifiers: Option<DataValue>,
    /// Semantic role; becomes a wrapper tag around the node body
    pub semantic_modifier: Option<String>,
}

/// Info record carried by inline nodes.
///
/// Differs from [`BlockInfo`] in two ways: inline records have no
/// `fallback` field, and they carry a `sugared` flag instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineInfo {
    /// Declared key/value metadata, in declaration order
    pub metadata: Metadata,
    /// Link target for the node
    pub target: Option<DataValue>,
    /// Inline formatting kind
    pub formatting: Option<InlineFormatting>,
    /// Set when the node came from sugared formatting syntax; bookkeeping
    /// only, never rendered
    pub sugared: bool,
    /// Extra style classes
    pub style_modifiers: Option<DataValue>,
    /// Semantic role; becomes a wrapper tag around the node body
    pub semantic_modifier: Option<String>,
}

impl BlockInfo {
    /// Info record for an embedding block of the given type.
    pub fn for_embedding(embed: impl Into<String>) -> Self {
        Self {
            embed: Some(embed.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(DataValue::Str("x".to_string()).type_name(), "str");
        assert_eq!(DataValue::Int(3).type_name(), "int");
        assert_eq!(DataValue::Decimal(1.5).type_name(), "dec");
        assert_eq!(DataValue::Bool(true).type_name(), "bool");
        assert_eq!(DataValue::Null.type_name(), "null");
        assert_eq!(DataValue::Mention("a".to_string()).type_name(), "@");
        assert_eq!(DataValue::Tag("b".to_string()).type_name(), "#");
        assert_eq!(DataValue::Variable("c".to_string()).type_name(), "%");
        assert_eq!(DataValue::Reference("d".to_string()).type_name(), "&");
    }

    #[test]
    fn test_link_detection() {
        assert!(DataValue::Mention("a".to_string()).is_link());
        assert!(DataValue::Reference("d".to_string()).is_link());
        assert!(!DataValue::Str("x".to_string()).is_link());
        assert!(!DataValue::Null.is_link());
    }

    #[test]
    fn test_null_value_text_is_empty() {
        assert_eq!(DataValue::Null.value_text(), "");
    }

    #[test]
    fn test_scalar_value_text() {
        assert_eq!(DataValue::Int(-7).value_text(), "-7");
        assert_eq!(DataValue::Bool(false).value_text(), "false");
    }

    #[test]
    fn test_embedding_info() {
        let info = BlockInfo::for_embedding("code");
        assert_eq!(info.embed.as_deref(), Some("code"));
        assert!(!info.is_doc_metadata);
    }

    #[test]
    fn test_formatting_names() {
        assert_eq!(BlockFormatting::Quote.as_str(), "quote");
        assert_eq!(InlineFormatting::Pre.as_str(), "pre");
        assert_eq!(InlineFormatting::Emphasis.as_str(), "emphasis");
    }
}
