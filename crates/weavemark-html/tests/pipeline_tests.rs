//! End-to-end pipeline tests: transform, templatify, store.

use weavemark_ast::summary::{
    CallableColor, CallableSummary, DocText, MemberSummary, ModuleSummary, ParamStyle,
    ParamSummary, RetvalSummary, SignatureSummary, SummaryKind, SummaryMetadata, SummaryRef,
    VariableSummary,
};
use weavemark_ast::{
    BlockChild, BlockInfo, DataValue, Document, EmbeddingBlock, InlineFormatting, InlineInfo,
    InlineSegment, Node, NodeKind, NodeRef, Paragraph, ParagraphChild, RichtextBlock,
    RichtextInline,
};
use weavemark_html::{
    close_tags, open_tags, DocumentCollection, DocumentSource, EmbeddingContent, EmbeddingPlugin,
    HtmlAttr, NodePlugin, PluginInjection, SimplePluginManager, SummaryPlugin, TemplateNode,
    TransformContext, TreeTransformer,
};

fn resolver() -> weavemark_html::TargetResolver {
    Box::new(|value: &DataValue| format!("/links/{}", value.value_text()))
}

fn document_with_everything() -> Document {
    Document::new(RichtextBlock {
        title: Some(RichtextInline::from_text("Guide")),
        info: Some(BlockInfo {
            metadata: vec![
                ("author".to_string(), DataValue::Mention("ada".to_string())),
                ("draft".to_string(), DataValue::Null),
            ],
            ..Default::default()
        }),
        depth: 0,
        content: vec![
            BlockChild::Paragraph(Paragraph {
                content: vec![ParagraphChild::Inline(RichtextInline {
                    info: Some(InlineInfo {
                        target: Some(DataValue::Str("http://e.example".to_string())),
                        formatting: Some(InlineFormatting::Strong),
                        ..Default::default()
                    }),
                    content: vec![InlineSegment::Text("emphatic link".to_string())],
                })],
            }),
            BlockChild::Embedding(EmbeddingBlock {
                title: None,
                info: Some(BlockInfo::for_embedding("code")),
                depth: 1,
                content: Some("fn main() {}".to_string()),
            }),
        ],
    })
}

struct SkippingPlugin;

impl EmbeddingPlugin for SkippingPlugin {
    fn name(&self) -> &str {
        "skipper"
    }

    fn apply_to_embedding(
        &self,
        _node: &EmbeddingBlock,
        _embedding_type: &str,
    ) -> Option<PluginInjection> {
        None
    }
}

struct HighlightPlugin;

impl EmbeddingPlugin for HighlightPlugin {
    fn name(&self) -> &str {
        "highlight"
    }

    fn apply_to_embedding(
        &self,
        node: &EmbeddingBlock,
        _embedding_type: &str,
    ) -> Option<PluginInjection> {
        let text = node.content.clone().unwrap_or_default();
        Some(PluginInjection {
            widgets: vec![TemplateNode::Text(text)],
            attrs: vec![HtmlAttr::new("data-highlighted", "yes")],
        })
    }
}

struct BlockBadge;

impl NodePlugin for BlockBadge {
    fn apply_to_node(&self, node: NodeRef<'_>) -> Option<PluginInjection> {
        match node {
            NodeRef::RichtextBlock(_) => Some(PluginInjection::attrs(vec![HtmlAttr::new(
                "data-badge",
                "block",
            )])),
            _ => None,
        }
    }
}

#[test]
fn test_markup_document_end_to_end() {
    let mut plugins = SimplePluginManager::new();
    plugins.register_embedding_plugin("code", Box::new(SkippingPlugin));
    plugins.register_embedding_plugin("code", Box::new(HighlightPlugin));
    plugins.register_node_plugin(NodeKind::RichtextBlock, Box::new(BlockBadge));

    let mut coll = DocumentCollection::new(resolver()).with_plugin_manager(Box::new(plugins));
    coll.add(
        "guide".to_string(),
        DocumentSource::Markup(document_with_everything()),
    )
    .unwrap();

    let stored = coll.get(&"guide".to_string()).unwrap();
    let block = match &stored.intermediate {
        TemplateNode::Block(block) => block,
        other => panic!("expected block template, got {other:?}"),
    };

    // Node plugin attrs landed on the root block.
    assert_eq!(
        block.plugin_attrs,
        vec![HtmlAttr::new("data-badge", "block")]
    );

    // Declared metadata kept declaration order, resolved the mention,
    // and rendered the null as an empty value.
    assert_eq!(block.metadata.len(), 2);
    assert_eq!(block.metadata[0].key, "author");
    assert_eq!(
        block.metadata[0].extra_attrs,
        vec![HtmlAttr::new("href", "/links/ada")]
    );
    assert_eq!(block.metadata[1].value, "");

    // Title became an h1.
    assert_eq!(block.title.as_ref().unwrap().tag, "h1");

    // The inline run carries a link wrapper outside a strong wrapper,
    // closed in reverse order.
    let inline = match &block.body[0] {
        TemplateNode::Paragraph(paragraph) => match &paragraph.body[0] {
            TemplateNode::Inline(inline) => inline,
            other => panic!("expected inline, got {other:?}"),
        },
        other => panic!("expected paragraph, got {other:?}"),
    };
    assert_eq!(
        open_tags(&inline.tag_wrappers),
        "<a href=\"http://e.example\"><strong>"
    );
    assert_eq!(close_tags(&inline.tag_wrappers), "</strong></a>");

    // The second embedding plugin won the short-circuit; its attrs
    // stacked onto the node and no fallback container appeared.
    let embedding = match &block.body[1] {
        TemplateNode::Embedding(embedding) => embedding,
        other => panic!("expected embedding, got {other:?}"),
    };
    match &embedding.content {
        EmbeddingContent::Plugin {
            plugin_name,
            widgets,
        } => {
            assert_eq!(plugin_name, "highlight");
            assert_eq!(widgets, &vec![TemplateNode::text("fn main() {}")]);
        }
        other => panic!("expected plugin content, got {other:?}"),
    }
    assert!(embedding
        .plugin_attrs
        .contains(&HtmlAttr::new("data-highlighted", "yes")));
}

/// Rewrites mention metadata values during preprocessing.
struct MentionRewriter;

impl TreeTransformer for MentionRewriter {
    fn transform(&self, node: Node, _ctx: &TransformContext<'_>) -> Node {
        match node {
            Node::RichtextInline(mut inline) => {
                for segment in &mut inline.content {
                    if let InlineSegment::Text(text) = segment {
                        *text = text.replace("@here", "@maintainers");
                    }
                }
                Node::RichtextInline(inline)
            }
            other => other,
        }
    }
}

#[test]
fn test_summary_docstring_routes_through_preprocess() {
    // The docstring is a serialized AST document: the collection's
    // JSON abstractifier parses it, the transformer rewrites it, and
    // the markup templatifier renders it.
    let inner = Document::new(RichtextBlock {
        content: vec![BlockChild::Paragraph(Paragraph::from_text(
            "ping @here for access",
        ))],
        ..Default::default()
    });
    let docstring = DocText {
        markup: Some("weavemark".to_string()),
        value: serde_json::to_string(&inner).unwrap(),
    };

    let module = ModuleSummary {
        name: "acme.access".to_string(),
        docstring: Some(docstring),
        exports: Some(vec!["grant".to_string(), "deny".to_string()]),
        members: vec![MemberSummary::Variable(VariableSummary {
            name: "registry".to_string(),
            typespec: None,
            notes: vec![DocText::plain("internal map")],
            metadata: SummaryMetadata::default(),
        })],
        metadata: SummaryMetadata::default(),
    };

    let mut coll =
        DocumentCollection::new(resolver()).with_transformer(Box::new(MentionRewriter));
    coll.add("api".to_string(), DocumentSource::Summary(module))
        .unwrap();

    let stored = coll.get(&"api".to_string()).unwrap();
    let module = match &stored.intermediate {
        TemplateNode::Module(module) => module,
        other => panic!("expected module template, got {other:?}"),
    };

    assert_eq!(module.name, "acme.access");
    // Exports sorted.
    assert_eq!(module.exports.len(), 2);
    assert_eq!(module.exports[0].body, vec![TemplateNode::text("deny")]);

    // Docstring went through the transformer chain.
    let docstring_block = match &module.docstring[0] {
        TemplateNode::Block(block) => block,
        other => panic!("expected block, got {other:?}"),
    };
    let text = match &docstring_block.body[0] {
        TemplateNode::Paragraph(paragraph) => match &paragraph.body[0] {
            TemplateNode::Inline(inline) => match &inline.body[0] {
                TemplateNode::Text(text) => text.clone(),
                other => panic!("expected text, got {other:?}"),
            },
            other => panic!("expected inline, got {other:?}"),
        },
        other => panic!("expected paragraph, got {other:?}"),
    };
    assert_eq!(text, "ping @maintainers for access");
}

#[test]
fn test_deeply_nested_document_survives_pipeline() {
    // Recursion depth is bounded only by input nesting; make sure a
    // plausibly deep document neither breaks transformation nor
    // templatification.
    let mut block = RichtextBlock {
        content: vec![BlockChild::Paragraph(Paragraph::from_text("leaf"))],
        depth: 200,
        ..Default::default()
    };
    for depth in (0..200).rev() {
        block = RichtextBlock {
            depth,
            content: vec![BlockChild::Richtext(block)],
            ..Default::default()
        };
    }

    let mut coll = DocumentCollection::new(resolver())
        .with_transformer(Box::new(MentionRewriter));
    coll.add(
        "deep".to_string(),
        DocumentSource::Markup(Document::new(block)),
    )
    .unwrap();

    let mut current = match &coll.get(&"deep".to_string()).unwrap().intermediate {
        TemplateNode::Block(block) => block,
        other => panic!("expected block, got {other:?}"),
    };
    let mut levels = 0;
    while let Some(TemplateNode::Block(nested)) = current.body.first() {
        current = nested;
        levels += 1;
    }
    assert_eq!(levels, 200);
}

struct CallableCounter;

impl SummaryPlugin for CallableCounter {
    fn apply_to_summary(&self, summary: SummaryRef<'_>) -> Option<PluginInjection> {
        match summary {
            SummaryRef::Callable(callable) => Some(PluginInjection::attrs(vec![HtmlAttr::new(
                "data-signatures",
                callable.signatures.len().to_string(),
            )])),
            _ => None,
        }
    }
}

#[test]
fn test_summary_plugins_are_additive() {
    let callable = CallableSummary {
        name: "connect".to_string(),
        docstring: None,
        color: CallableColor::Async,
        method_kind: None,
        is_generator: false,
        signatures: vec![SignatureSummary {
            ordering_index: Some(0),
            docstring: None,
            params: vec![ParamSummary {
                index: 0,
                name: "timeout".to_string(),
                style: ParamStyle::KeywordOnly,
                typespec: None,
                default: Some("30".to_string()),
                notes: vec![],
                metadata: SummaryMetadata::default(),
            }],
            retval: RetvalSummary::default(),
            metadata: SummaryMetadata::default(),
        }],
        metadata: SummaryMetadata::default(),
    };
    let module = ModuleSummary {
        name: "net".to_string(),
        docstring: None,
        exports: None,
        members: vec![MemberSummary::Callable(callable)],
        metadata: SummaryMetadata::default(),
    };

    let mut plugins = SimplePluginManager::new();
    plugins.register_summary_plugin(SummaryKind::Callable, Box::new(CallableCounter));

    let mut coll = DocumentCollection::new(resolver()).with_plugin_manager(Box::new(plugins));
    coll.add(1u32, DocumentSource::Summary(module)).unwrap();

    let stored = coll.get(&1u32).unwrap();
    let module = match &stored.intermediate {
        TemplateNode::Module(module) => module,
        other => panic!("expected module, got {other:?}"),
    };
    let callable = match &module.members[0] {
        TemplateNode::Callable(callable) => callable,
        other => panic!("expected callable, got {other:?}"),
    };

    assert_eq!(callable.color, CallableColor::Async);
    assert_eq!(
        callable.plugin_attrs,
        vec![HtmlAttr::new("data-signatures", "1")]
    );
    assert_eq!(callable.signatures[0].params[0].default.as_deref(), Some("30"));
}
