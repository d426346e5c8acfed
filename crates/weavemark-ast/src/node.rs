//! Unified node type for generic tree traversal
//!
//! The transform pipeline rewrites nodes generically and revalidates the
//! results against the typed child positions on the way back. [`Node`]
//! is the closed union it dispatches over; the `TryFrom` impls are the
//! structural compatibility checks.

use serde::{Deserialize, Serialize};

use crate::block::{
    Annotation, BlockChild, EmbeddingBlock, List, ListItem, Paragraph, ParagraphChild,
    RichtextBlock,
};
use crate::document::Document;
use crate::inline::RichtextInline;

/// Any node of the markup AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Document(Document),
    RichtextBlock(RichtextBlock),
    EmbeddingBlock(EmbeddingBlock),
    Paragraph(Paragraph),
    List(List),
    ListItem(ListItem),
    RichtextInline(RichtextInline),
    Annotation(Annotation),
}

/// Static type tag for a node variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Document,
    RichtextBlock,
    EmbeddingBlock,
    Paragraph,
    List,
    ListItem,
    RichtextInline,
    Annotation,
}

impl NodeKind {
    /// Variant name, for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::RichtextBlock => "RichtextBlock",
            NodeKind::EmbeddingBlock => "EmbeddingBlock",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::RichtextInline => "RichtextInline",
            NodeKind::Annotation => "Annotation",
        }
    }
}

impl Node {
    /// The variant tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::RichtextBlock(_) => NodeKind::RichtextBlock,
            Node::EmbeddingBlock(_) => NodeKind::EmbeddingBlock,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::List(_) => NodeKind::List,
            Node::ListItem(_) => NodeKind::ListItem,
            Node::RichtextInline(_) => NodeKind::RichtextInline,
            Node::Annotation(_) => NodeKind::Annotation,
        }
    }
}

/// Borrowed view of any node variant, used for plugin dispatch.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Document(&'a Document),
    RichtextBlock(&'a RichtextBlock),
    EmbeddingBlock(&'a EmbeddingBlock),
    Paragraph(&'a Paragraph),
    List(&'a List),
    ListItem(&'a ListItem),
    RichtextInline(&'a RichtextInline),
    Annotation(&'a Annotation),
}

impl NodeRef<'_> {
    /// The variant tag of the referenced node.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Document(_) => NodeKind::Document,
            NodeRef::RichtextBlock(_) => NodeKind::RichtextBlock,
            NodeRef::EmbeddingBlock(_) => NodeKind::EmbeddingBlock,
            NodeRef::Paragraph(_) => NodeKind::Paragraph,
            NodeRef::List(_) => NodeKind::List,
            NodeRef::ListItem(_) => NodeKind::ListItem,
            NodeRef::RichtextInline(_) => NodeKind::RichtextInline,
            NodeRef::Annotation(_) => NodeKind::Annotation,
        }
    }
}

impl From<BlockChild> for Node {
    fn from(child: BlockChild) -> Self {
        match child {
            BlockChild::Paragraph(p) => Node::Paragraph(p),
            BlockChild::Embedding(e) => Node::EmbeddingBlock(e),
            BlockChild::Richtext(b) => Node::RichtextBlock(b),
        }
    }
}

impl TryFrom<Node> for BlockChild {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::Paragraph(p) => Ok(BlockChild::Paragraph(p)),
            Node::EmbeddingBlock(e) => Ok(BlockChild::Embedding(e)),
            Node::RichtextBlock(b) => Ok(BlockChild::Richtext(b)),
            other => Err(other),
        }
    }
}

impl From<ParagraphChild> for Node {
    fn from(child: ParagraphChild) -> Self {
        match child {
            ParagraphChild::Inline(i) => Node::RichtextInline(i),
            ParagraphChild::List(l) => Node::List(l),
            ParagraphChild::Annotation(a) => Node::Annotation(a),
        }
    }
}

impl TryFrom<Node> for ParagraphChild {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::RichtextInline(i) => Ok(ParagraphChild::Inline(i)),
            Node::List(l) => Ok(ParagraphChild::List(l)),
            Node::Annotation(a) => Ok(ParagraphChild::Annotation(a)),
            other => Err(other),
        }
    }
}
