//! Tree transformation pipeline
//!
//! Rewrites a parsed document by dispatching on node variant: children
//! are transformed first (post-order), the node is rebuilt from the
//! transformed children with all other fields preserved, and then each
//! registered transformer is applied in order. Post-order means a
//! transformer always sees already-normalized descendants.
//!
//! Every child result is revalidated against the slot it came from; a
//! transformer returning an incompatible variant aborts the whole
//! pipeline rather than propagating a malformed tree.

use tracing::debug;
use weavemark_ast::summary::SummaryMetadata;
use weavemark_ast::{
    BlockChild, Document, EmbeddingBlock, InlineSegment, List, ListItem, Node, Paragraph,
    ParagraphChild, RichtextBlock, RichtextInline,
};

use crate::error::{RenderError, Result};

/// Context threaded to every transformer invocation.
#[derive(Debug, Clone, Copy, Default)]
pub enum TransformContext<'a> {
    /// No additional context (plain markup documents)
    #[default]
    None,
    /// Metadata of the summary whose doc text is being preprocessed
    Summary(&'a SummaryMetadata),
}

/// A single document transformer.
///
/// Transformers are applied at every node, in the exact order they were
/// registered. Order matters: transformers are not commutative in
/// general, and callers depend on specific chains (a reference-resolution
/// transformer must run before a styling transformer that inspects the
/// resolved targets).
pub trait TreeTransformer: Send + Sync {
    fn transform(&self, node: Node, ctx: &TransformContext<'_>) -> Node;
}

/// Recursively apply the transformer chain to every node of the document.
///
/// An empty chain returns the input untouched, so callers pay nothing
/// beyond the parse when no transformers are registered.
pub fn apply_transformers(
    document: Document,
    transformers: &[Box<dyn TreeTransformer>],
    ctx: &TransformContext<'_>,
) -> Result<Document> {
    if transformers.is_empty() {
        return Ok(document);
    }

    debug!(count = transformers.len(), "applying transformer chain");
    match transform_node(Node::Document(document), transformers, ctx)? {
        Node::Document(doc) => Ok(doc),
        other => Err(incompatible("Document", &other)),
    }
}

fn incompatible(expected: &'static str, actual: &Node) -> RenderError {
    RenderError::InvalidTransformation {
        expected,
        actual: actual.kind().as_str(),
    }
}

fn transform_node(
    node: Node,
    transformers: &[Box<dyn TreeTransformer>],
    ctx: &TransformContext<'_>,
) -> Result<Node> {
    let rebuilt = match node {
        Node::Document(doc) => {
            let title = transform_title(doc.title, transformers, ctx)?;
            let root = match transform_node(Node::RichtextBlock(doc.root), transformers, ctx)? {
                Node::RichtextBlock(root) => root,
                other => return Err(incompatible("RichtextBlock", &other)),
            };
            Node::Document(Document {
                title,
                info: doc.info,
                root,
            })
        }

        Node::RichtextBlock(block) => {
            let title = transform_title(block.title, transformers, ctx)?;
            let mut content = Vec::with_capacity(block.content.len());
            for child in block.content {
                let transformed = transform_node(Node::from(child), transformers, ctx)?;
                content.push(
                    BlockChild::try_from(transformed)
                        .map_err(|bad| incompatible("block child", &bad))?,
                );
            }
            Node::RichtextBlock(RichtextBlock {
                title,
                info: block.info,
                depth: block.depth,
                content,
            })
        }

        Node::EmbeddingBlock(block) => {
            // Only the title recurses; the embedding payload is opaque.
            let EmbeddingBlock {
                title,
                info,
                depth,
                content,
            } = block;
            let title = transform_title(title, transformers, ctx)?;
            Node::EmbeddingBlock(EmbeddingBlock {
                title,
                info,
                depth,
                content,
            })
        }

        Node::Paragraph(paragraph) => {
            let mut content = Vec::with_capacity(paragraph.content.len());
            for child in paragraph.content {
                let transformed = transform_node(Node::from(child), transformers, ctx)?;
                content.push(
                    ParagraphChild::try_from(transformed)
                        .map_err(|bad| incompatible("paragraph child", &bad))?,
                );
            }
            Node::Paragraph(Paragraph { content })
        }

        Node::List(list) => {
            let mut items = Vec::with_capacity(list.items.len());
            for item in list.items {
                match transform_node(Node::ListItem(item), transformers, ctx)? {
                    Node::ListItem(item) => items.push(item),
                    other => return Err(incompatible("ListItem", &other)),
                }
            }
            Node::List(List {
                kind: list.kind,
                items,
            })
        }

        Node::ListItem(item) => {
            let mut content = Vec::with_capacity(item.content.len());
            for paragraph in item.content {
                match transform_node(Node::Paragraph(paragraph), transformers, ctx)? {
                    Node::Paragraph(paragraph) => content.push(paragraph),
                    other => return Err(incompatible("Paragraph", &other)),
                }
            }
            Node::ListItem(ListItem {
                index: item.index,
                content,
            })
        }

        Node::RichtextInline(inline) => {
            let mut content = Vec::with_capacity(inline.content.len());
            for segment in inline.content {
                match segment {
                    // Literal text passes through untouched; transformers
                    // operate on nodes, not raw segments.
                    InlineSegment::Text(text) => content.push(InlineSegment::Text(text)),
                    InlineSegment::Inline(nested) => {
                        match transform_node(Node::RichtextInline(nested), transformers, ctx)? {
                            Node::RichtextInline(nested) => {
                                content.push(InlineSegment::Inline(nested));
                            }
                            other => return Err(incompatible("RichtextInline", &other)),
                        }
                    }
                }
            }
            Node::RichtextInline(RichtextInline {
                info: inline.info,
                content,
            })
        }

        Node::Annotation(annotation) => Node::Annotation(annotation),
    };

    Ok(run_chain(rebuilt, transformers, ctx))
}

fn transform_title(
    title: Option<RichtextInline>,
    transformers: &[Box<dyn TreeTransformer>],
    ctx: &TransformContext<'_>,
) -> Result<Option<RichtextInline>> {
    match title {
        None => Ok(None),
        Some(title) => match transform_node(Node::RichtextInline(title), transformers, ctx)? {
            Node::RichtextInline(title) => Ok(Some(title)),
            other => Err(incompatible("RichtextInline", &other)),
        },
    }
}

fn run_chain(
    mut node: Node,
    transformers: &[Box<dyn TreeTransformer>],
    ctx: &TransformContext<'_>,
) -> Node {
    for transformer in transformers {
        node = transformer.transform(node, ctx);
    }
    node
}
