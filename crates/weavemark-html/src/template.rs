//! Render-tree node model
//!
//! The render-tree is the intermediate representation handed to the
//! external rendering engine. Its nodes are immutable values built by the
//! templatifiers; no node is ever shared by reference with the AST it was
//! derived from.
//!
//! Alongside the typed nodes mirroring the AST, this module provides the
//! generic building blocks (elements, attributes, text, metadata entries)
//! and the tag-wrapper type with its start/end emission helpers.

use serde::{Deserialize, Serialize};
use weavemark_ast::summary::{CallableColor, MethodKind, ParamStyle};

/// Class applied to preformatted inline code.
pub const PRE_CLASSNAME: &str = "wm-fmt-pre";

/// Custom element used for underline formatting, since HTML has no
/// dedicated underline tag worth using.
pub const UNDERLINE_TAG: &str = "wm-u";

/// A rendered attribute: key plus an already-coerced value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlAttr {
    pub key: String,
    pub value: String,
}

impl HtmlAttr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A generic element: tag name, attributes, body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericElement {
    pub tag: String,
    pub attrs: Vec<HtmlAttr>,
    pub body: Vec<TemplateNode>,
}

impl GenericElement {
    pub fn new(tag: impl Into<String>, body: Vec<TemplateNode>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            body,
        }
    }

    pub fn with_attrs(
        tag: impl Into<String>,
        attrs: Vec<HtmlAttr>,
        body: Vec<TemplateNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            body,
        }
    }
}

/// One declared-metadata entry, carrying its value type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Short type tag (`str`, `int`, `dec`, `bool`, `null`, `@`, `#`,
    /// `%`, `&`)
    pub type_name: String,
    pub key: String,
    /// Coerced value; empty string for null
    pub value: String,
    /// Extra attributes, e.g. the resolved href of a link-valued entry
    pub extra_attrs: Vec<HtmlAttr>,
}

/// One nesting level of decoration around a node's rendered content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagWrapper {
    pub tag: String,
    pub attrs: Vec<HtmlAttr>,
}

impl TagWrapper {
    pub fn new(tag: impl Into<String>, attrs: Vec<HtmlAttr>) -> Self {
        Self {
            tag: tag.into(),
            attrs,
        }
    }

    /// A wrapper with no attributes.
    pub fn bare(tag: impl Into<String>) -> Self {
        Self::new(tag, Vec::new())
    }
}

/// Emit the start tags for a wrapper stack, outermost first.
///
/// Attribute values are emitted as-is: escaping (or resolver trust)
/// happened when the wrapper was derived.
pub fn open_tags(wrappers: &[TagWrapper]) -> String {
    let mut out = String::new();
    for wrapper in wrappers {
        out.push('<');
        out.push_str(&wrapper.tag);
        for attr in &wrapper.attrs {
            out.push(' ');
            out.push_str(&attr.key);
            out.push_str("=\"");
            out.push_str(&attr.value);
            out.push('"');
        }
        out.push('>');
    }
    out
}

/// Emit the end tags for a wrapper stack, innermost first.
///
/// Wrappers form a properly nested bracket structure, so closing walks
/// the list in reverse.
pub fn close_tags(wrappers: &[TagWrapper]) -> String {
    let mut out = String::new();
    for wrapper in wrappers.iter().rev() {
        out.push_str("</");
        out.push_str(&wrapper.tag);
        out.push('>');
    }
    out
}

/// Escape text for placement inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Build a heading element from a zero-indexed depth.
///
/// Converts the zero-indexed depth to a 1-indexed heading level and
/// clamps it to the allowable HTML range [1, 6].
pub fn heading_factory(depth: i32, body: Vec<TemplateNode>) -> GenericElement {
    let level = (depth + 1).clamp(1, 6);
    GenericElement::new(format!("h{level}"), body)
}

/// Build an anchor element around the given body.
pub fn link_factory(href: impl Into<String>, body: Vec<TemplateNode>) -> GenericElement {
    GenericElement::with_attrs("a", vec![HtmlAttr::new("href", href)], body)
}

/// A node of the render-tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateNode {
    /// Generic element building block
    Element(GenericElement),
    /// Plain text leaf; escaping is the rendering engine's concern
    Text(String),
    /// One declared-metadata entry
    Metadata(MetadataEntry),
    /// A richtext block
    Block(Box<BlockTemplate>),
    /// An embedding block
    Embedding(Box<EmbeddingTemplate>),
    /// A paragraph
    Paragraph(ParagraphTemplate),
    /// A list
    List(ListTemplate),
    /// A list item
    ListItem(ListItemTemplate),
    /// An inline run
    Inline(Box<InlineTemplate>),
    /// A markup comment, from an annotation
    Comment(CommentTemplate),
    /// A module summary
    Module(Box<ModuleTemplate>),
    /// A class summary
    Class(Box<ClassTemplate>),
    /// A callable summary
    Callable(Box<CallableTemplate>),
    /// A variable summary
    Variable(Box<VariableTemplate>),
    /// A callable signature
    Signature(Box<SignatureTemplate>),
    /// A signature parameter
    Param(Box<ParamTemplate>),
    /// A signature return value
    Retval(Box<RetvalTemplate>),
    /// A typespec with its qualifier tags
    Typespec(Box<TypespecTemplate>),
    /// A crossref to a symbol defined elsewhere
    Crossref(Box<CrossrefTemplate>),
}

impl TemplateNode {
    /// Plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        TemplateNode::Text(text.into())
    }
}

/// Render-tree node for a richtext block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTemplate {
    /// Decoration around header + body, outermost first
    pub tag_wrappers: Vec<TagWrapper>,
    /// Heading element built from the node title, if one exists
    pub title: Option<GenericElement>,
    /// Declared-metadata entries, in declaration order
    pub metadata: Vec<MetadataEntry>,
    /// Templatified body items (paragraphs, embeddings, nested blocks)
    pub body: Vec<TemplateNode>,
    /// Normalized spec-field attributes, sorted by key
    pub spec_attrs: Vec<HtmlAttr>,
    /// Attributes injected by node plugins
    pub plugin_attrs: Vec<HtmlAttr>,
    /// Widgets injected by node plugins
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for an embedding block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingTemplate {
    pub tag_wrappers: Vec<TagWrapper>,
    pub title: Option<GenericElement>,
    pub metadata: Vec<MetadataEntry>,
    /// Resolved embedding content
    pub content: EmbeddingContent,
    pub spec_attrs: Vec<HtmlAttr>,
    pub plugin_attrs: Vec<HtmlAttr>,
    /// Widgets injected by node plugins; independent of the embedding
    /// plugin system, which fills `content` instead
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Content of an embedding block after plugin resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmbeddingContent {
    /// Injected by the winning embedding plugin; the renderer wraps the
    /// widgets in a container carrying the plugin's name
    Plugin {
        plugin_name: String,
        widgets: Vec<TemplateNode>,
    },
    /// No plugin claimed the embedding: the raw text payload, if any,
    /// rendered in a plaintext fallback container
    Fallback { text: Option<String> },
}

/// Render-tree node for a paragraph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParagraphTemplate {
    /// Inline runs, lists, and comments, in source order
    pub body: Vec<TemplateNode>,
}

/// Render-tree node for a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTemplate {
    /// `ol` for ordered lists, `ul` otherwise
    pub tag: String,
    pub items: Vec<ListItemTemplate>,
}

/// Render-tree node for a list item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItemTemplate {
    /// Explicit 1-based index, rendered as a `value` attribute when set
    pub index: Option<u32>,
    pub body: Vec<ParagraphTemplate>,
}

/// Render-tree node for an inline run.
///
/// All running text lives inside one of these, including title text, so
/// the renderer must not use a `p` tag for it (paragraph tags are invalid
/// inside headings).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineTemplate {
    pub tag_wrappers: Vec<TagWrapper>,
    pub metadata: Vec<MetadataEntry>,
    /// Text leaves and nested inline runs
    pub body: Vec<TemplateNode>,
    pub spec_attrs: Vec<HtmlAttr>,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for an annotation, emitted as a markup comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentTemplate {
    pub text: String,
}

/// Render-tree node for a module summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleTemplate {
    pub name: String,
    pub docstring: Vec<TemplateNode>,
    /// Sorted export list, one `li` element per name
    pub exports: Vec<GenericElement>,
    /// Included members, sorted by name
    pub members: Vec<TemplateNode>,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for a class summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub name: String,
    pub metaclass: Option<GenericElement>,
    pub bases: Vec<GenericElement>,
    pub docstring: Vec<TemplateNode>,
    pub members: Vec<TemplateNode>,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for a callable summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallableTemplate {
    pub name: String,
    pub docstring: Vec<TemplateNode>,
    pub color: CallableColor,
    pub method_kind: Option<MethodKind>,
    pub is_generator: bool,
    /// Included signatures, in ordering-index order
    pub signatures: Vec<SignatureTemplate>,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for one callable signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureTemplate {
    pub docstring: Vec<TemplateNode>,
    /// Included params, in index order
    pub params: Vec<ParamTemplate>,
    pub retval: RetvalTemplate,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for a signature parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamTemplate {
    pub style: ParamStyle,
    pub name: String,
    pub typespec: Option<TypespecTemplate>,
    /// Rendered default value, if any
    pub default: Option<String>,
    pub notes: Vec<TemplateNode>,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for a signature return value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetvalTemplate {
    pub typespec: Option<TypespecTemplate>,
    pub notes: Vec<TemplateNode>,
}

/// Render-tree node for a variable summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableTemplate {
    pub name: String,
    pub typespec: Option<TypespecTemplate>,
    pub notes: Vec<TemplateNode>,
    pub plugin_attrs: Vec<HtmlAttr>,
    pub plugin_widgets: Vec<TemplateNode>,
}

/// Render-tree node for a typespec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypespecTemplate {
    /// The rendered type expression
    pub normtype: Box<TemplateNode>,
    /// Qualifier tags, e.g. `classvar="true"`
    pub tags: Vec<HtmlAttr>,
}

/// Render-tree node for a crossref.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossrefTemplate {
    /// Fully qualified name, shown as the hover title
    pub qualname: String,
    /// Flattened traversal suffix, if the crossref has traversals
    pub traversals: Option<String>,
    pub target: CrossrefTarget,
}

/// The rendered target of a crossref.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrossrefTarget {
    /// A resolvable link
    Link {
        href: String,
        shortname: String,
        has_traversals: bool,
    },
    /// Plain text, for symbols with no known location
    Text {
        shortname: String,
        has_traversals: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_clamps_low() {
        assert_eq!(heading_factory(-1, vec![]).tag, "h1");
        assert_eq!(heading_factory(0, vec![]).tag, "h1");
    }

    #[test]
    fn test_heading_clamps_high() {
        assert_eq!(heading_factory(5, vec![]).tag, "h6");
        assert_eq!(heading_factory(99, vec![]).tag, "h6");
    }

    #[test]
    fn test_heading_midrange() {
        assert_eq!(heading_factory(2, vec![]).tag, "h3");
    }

    #[test]
    fn test_wrapper_emission_order() {
        let wrappers = vec![
            TagWrapper::new("a", vec![HtmlAttr::new("href", "http://e.example")]),
            TagWrapper::bare("strong"),
        ];
        assert_eq!(
            open_tags(&wrappers),
            "<a href=\"http://e.example\"><strong>"
        );
        assert_eq!(close_tags(&wrappers), "</strong></a>");
    }

    #[test]
    fn test_empty_wrapper_stack() {
        assert_eq!(open_tags(&[]), "");
        assert_eq!(close_tags(&[]), "");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
        assert_eq!(escape_attr("plain"), "plain");
    }

    #[test]
    fn test_link_factory() {
        let link = link_factory("#anchor", vec![TemplateNode::text("here")]);
        assert_eq!(link.tag, "a");
        assert_eq!(link.attrs, vec![HtmlAttr::new("href", "#anchor")]);
    }
}
