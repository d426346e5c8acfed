//! Markup templatifier
//!
//! Converts a (possibly transformed) markup AST into the render-tree.
//! At every node this invokes the metadata normalizer, the tag-wrapper
//! composer, and the plugin resolver; embedding blocks additionally go
//! through the short-circuiting embedding plugin chain.

use weavemark_ast::{
    Annotation, BlockChild, BlockFormatting, BlockInfo, DataValue, Document, EmbeddingBlock,
    InlineFormatting, InlineInfo, InlineSegment, List, ListItem, ListKind, NodeRef, Paragraph,
    ParagraphChild, RichtextBlock, RichtextInline,
};

use crate::documents::TemplateHost;
use crate::error::{RenderError, Result};
use crate::plugins::collect_node_injections;
use crate::template::{
    escape_attr, heading_factory, BlockTemplate, CommentTemplate, EmbeddingContent,
    EmbeddingTemplate, GenericElement, HtmlAttr, InlineTemplate, ListItemTemplate, ListTemplate,
    MetadataEntry, ParagraphTemplate, TagWrapper, TemplateNode, PRE_CLASSNAME, UNDERLINE_TAG,
};

/// Coerce a spec-field value to attribute text: link values go through
/// the resolver (whose output is caller-controlled and never escaped),
/// everything else is escaped.
fn coerce_field_value(value: &DataValue, host: &dyn TemplateHost) -> String {
    if value.is_link() {
        host.resolve_target(value)
    } else {
        escape_attr(&value.value_text())
    }
}

/// Normalize a block info record's spec fields into attributes, sorted by
/// attribute key.
///
/// `is_doc_metadata` is bookkeeping and `semantic_modifier` belongs to
/// the tag-wrapper composer; neither is emitted here.
pub fn block_spec_attrs(info: &BlockInfo, host: &dyn TemplateHost) -> Vec<HtmlAttr> {
    let mut attrs = Vec::new();

    if let Some(target) = &info.target {
        attrs.push(HtmlAttr::new("target", coerce_field_value(target, host)));
    }
    if let Some(formatting) = info.formatting {
        attrs.push(HtmlAttr::new("formatting", formatting.as_str()));
    }
    if let Some(fallback) = info.fallback {
        attrs.push(HtmlAttr::new("fallback", fallback.as_str()));
    }
    if let Some(embed) = &info.embed {
        // Field name `embed` maps to the `embedding` attribute.
        attrs.push(HtmlAttr::new("embedding", escape_attr(embed)));
    }
    if let Some(style) = &info.style_modifiers {
        // `style_modifiers` maps to the `class` attribute.
        attrs.push(HtmlAttr::new("class", coerce_field_value(style, host)));
    }

    attrs.sort_by(|a, b| a.key.cmp(&b.key));
    attrs
}

/// Normalize an inline info record's spec fields into attributes, sorted
/// by attribute key.
///
/// `formatting` is consumed by the tag-wrapper composer and `sugared` is
/// bookkeeping; neither is emitted here.
pub fn inline_spec_attrs(info: &InlineInfo, host: &dyn TemplateHost) -> Vec<HtmlAttr> {
    let mut attrs = Vec::new();

    if let Some(target) = &info.target {
        attrs.push(HtmlAttr::new("target", coerce_field_value(target, host)));
    }
    if let Some(style) = &info.style_modifiers {
        attrs.push(HtmlAttr::new("class", coerce_field_value(style, host)));
    }

    attrs.sort_by(|a, b| a.key.cmp(&b.key));
    attrs
}

/// Emit one metadata entry per declared key/value pair, in declaration
/// order.
///
/// Null values render as an empty string rather than any null marker;
/// link values carry both the escaped raw token and a resolved `href`.
pub fn metadata_entries(
    metadata: &[(String, DataValue)],
    host: &dyn TemplateHost,
) -> Vec<MetadataEntry> {
    let mut entries = Vec::with_capacity(metadata.len());
    for (key, value) in metadata {
        let entry = match value {
            DataValue::Null => MetadataEntry {
                type_name: value.type_name().to_string(),
                key: key.clone(),
                value: String::new(),
                extra_attrs: Vec::new(),
            },
            linked if linked.is_link() => MetadataEntry {
                type_name: value.type_name().to_string(),
                key: key.clone(),
                value: escape_attr(&value.value_text()),
                extra_attrs: vec![HtmlAttr::new("href", host.resolve_target(value))],
            },
            _ => MetadataEntry {
                type_name: value.type_name().to_string(),
                key: key.clone(),
                value: escape_attr(&value.value_text()),
                extra_attrs: Vec::new(),
            },
        };
        entries.push(entry);
    }
    entries
}

/// Wrapper for a block formatting kind.
pub fn block_formatting_wrapper(formatting: BlockFormatting) -> TagWrapper {
    match formatting {
        BlockFormatting::Quote => TagWrapper::bare("blockquote"),
    }
}

/// Wrapper for an inline formatting kind.
pub fn inline_formatting_wrapper(formatting: InlineFormatting) -> TagWrapper {
    match formatting {
        InlineFormatting::Pre => {
            TagWrapper::new("code", vec![HtmlAttr::new("class", PRE_CLASSNAME)])
        }
        InlineFormatting::Underline => TagWrapper::bare(UNDERLINE_TAG),
        InlineFormatting::Strong => TagWrapper::bare("strong"),
        InlineFormatting::Emphasis => TagWrapper::bare("em"),
        InlineFormatting::Strike => TagWrapper::bare("s"),
        InlineFormatting::Quote => TagWrapper::bare("q"),
    }
}

/// Href for a link target: literal strings are escaped and used directly,
/// anything else goes through the resolver.
fn target_href(target: &DataValue, host: &dyn TemplateHost) -> String {
    match target {
        DataValue::Str(literal) => escape_attr(literal),
        other => host.resolve_target(other),
    }
}

/// Derive the wrapper stack for a block node: semantic role, then link,
/// then formatting, outermost first.
pub fn block_tag_wrappers(info: &BlockInfo, host: &dyn TemplateHost) -> Vec<TagWrapper> {
    let mut wrappers = Vec::new();

    if let Some(semantic) = &info.semantic_modifier {
        wrappers.push(TagWrapper::bare(semantic.clone()));
    }
    if let Some(target) = &info.target {
        wrappers.push(TagWrapper::new(
            "a",
            vec![HtmlAttr::new("href", target_href(target, host))],
        ));
    }
    if let Some(formatting) = info.formatting {
        wrappers.push(block_formatting_wrapper(formatting));
    }

    wrappers
}

/// Derive the wrapper stack for an inline node; same precedence as the
/// block derivation.
pub fn inline_tag_wrappers(info: &InlineInfo, host: &dyn TemplateHost) -> Vec<TagWrapper> {
    let mut wrappers = Vec::new();

    if let Some(semantic) = &info.semantic_modifier {
        wrappers.push(TagWrapper::bare(semantic.clone()));
    }
    if let Some(target) = &info.target {
        wrappers.push(TagWrapper::new(
            "a",
            vec![HtmlAttr::new("href", target_href(target, host))],
        ));
    }
    if let Some(formatting) = info.formatting {
        wrappers.push(inline_formatting_wrapper(formatting));
    }

    wrappers
}

fn heading_for(
    title: &Option<RichtextInline>,
    depth: i32,
    host: &dyn TemplateHost,
) -> Option<GenericElement> {
    title.as_ref().map(|title| {
        let inline = InlineTemplate::from_inline(title, host);
        heading_factory(depth, vec![TemplateNode::Inline(Box::new(inline))])
    })
}

impl BlockTemplate {
    /// Templatify a document.
    ///
    /// Compatibility shim for sources that wrap the root node in an outer
    /// document object: the root block is templatified as usual, and then
    /// the document's own metadata, if any, replaces the root's metadata
    /// entries outright.
    pub fn from_document(document: &Document, host: &dyn TemplateHost) -> Result<Self> {
        let mut template = Self::from_block(&document.root, host)?;
        if let Some(info) = &document.info {
            template.metadata = metadata_entries(&info.metadata, host);
        }
        Ok(template)
    }

    /// Templatify a richtext block.
    pub fn from_block(node: &RichtextBlock, host: &dyn TemplateHost) -> Result<Self> {
        let title = heading_for(&node.title, node.depth, host);

        let mut body = Vec::with_capacity(node.content.len());
        for child in &node.content {
            body.push(match child {
                BlockChild::Paragraph(paragraph) => {
                    TemplateNode::Paragraph(ParagraphTemplate::from_paragraph(paragraph, host))
                }
                BlockChild::Embedding(embedding) => TemplateNode::Embedding(Box::new(
                    EmbeddingTemplate::from_block(embedding, host)?,
                )),
                BlockChild::Richtext(nested) => {
                    TemplateNode::Block(Box::new(Self::from_block(nested, host)?))
                }
            });
        }

        let (plugin_attrs, plugin_widgets) =
            collect_node_injections(host.plugin_manager(), NodeRef::RichtextBlock(node));

        let (tag_wrappers, spec_attrs, metadata) = match &node.info {
            Some(info) => (
                block_tag_wrappers(info, host),
                block_spec_attrs(info, host),
                metadata_entries(&info.metadata, host),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        Ok(Self {
            tag_wrappers,
            title,
            metadata,
            body,
            spec_attrs,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl EmbeddingTemplate {
    /// Templatify an embedding block.
    ///
    /// The embedding plugin chain is short-circuiting: the first plugin
    /// returning an injection supplies the whole embedding content and
    /// the rest are skipped. With no winner, the raw text payload lands
    /// in the plaintext fallback container.
    pub fn from_block(node: &EmbeddingBlock, host: &dyn TemplateHost) -> Result<Self> {
        let info = node.info.as_ref().ok_or(RenderError::MissingEmbeddingInfo)?;
        let embedding_type = info
            .embed
            .as_deref()
            .ok_or(RenderError::MissingEmbeddingType)?;

        let title = heading_for(&node.title, node.depth, host);

        let (mut plugin_attrs, plugin_widgets) =
            collect_node_injections(host.plugin_manager(), NodeRef::EmbeddingBlock(node));

        let mut content = None;
        for plugin in host.plugin_manager().embedding_plugins(embedding_type) {
            if let Some(injection) = plugin.apply_to_embedding(node, embedding_type) {
                plugin_attrs.extend(injection.attrs);
                content = Some(EmbeddingContent::Plugin {
                    plugin_name: plugin.name().to_string(),
                    widgets: injection.widgets,
                });
                break;
            }
        }
        let content = content.unwrap_or_else(|| EmbeddingContent::Fallback {
            text: node.content.clone(),
        });

        Ok(Self {
            tag_wrappers: block_tag_wrappers(info, host),
            title,
            metadata: metadata_entries(&info.metadata, host),
            content,
            spec_attrs: block_spec_attrs(info, host),
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl ParagraphTemplate {
    /// Templatify a paragraph.
    pub fn from_paragraph(node: &Paragraph, host: &dyn TemplateHost) -> Self {
        let body = node
            .content
            .iter()
            .map(|child| match child {
                ParagraphChild::Inline(inline) => {
                    TemplateNode::Inline(Box::new(InlineTemplate::from_inline(inline, host)))
                }
                ParagraphChild::List(list) => {
                    TemplateNode::List(ListTemplate::from_list(list, host))
                }
                ParagraphChild::Annotation(annotation) => {
                    TemplateNode::Comment(CommentTemplate::from_annotation(annotation))
                }
            })
            .collect();
        Self { body }
    }
}

impl ListTemplate {
    /// Templatify a list.
    pub fn from_list(node: &List, host: &dyn TemplateHost) -> Self {
        let tag = match node.kind {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        };
        Self {
            tag: tag.to_string(),
            items: node
                .items
                .iter()
                .map(|item| ListItemTemplate::from_item(item, host))
                .collect(),
        }
    }
}

impl ListItemTemplate {
    /// Templatify a list item. The explicit index, when present, becomes
    /// a `value` attribute at render time.
    pub fn from_item(node: &ListItem, host: &dyn TemplateHost) -> Self {
        Self {
            index: node.index,
            body: node
                .content
                .iter()
                .map(|paragraph| ParagraphTemplate::from_paragraph(paragraph, host))
                .collect(),
        }
    }
}

impl InlineTemplate {
    /// Templatify an inline run.
    pub fn from_inline(node: &RichtextInline, host: &dyn TemplateHost) -> Self {
        let body = node
            .content
            .iter()
            .map(|segment| match segment {
                InlineSegment::Text(text) => TemplateNode::Text(text.clone()),
                InlineSegment::Inline(nested) => {
                    TemplateNode::Inline(Box::new(Self::from_inline(nested, host)))
                }
            })
            .collect();

        let (plugin_attrs, plugin_widgets) =
            collect_node_injections(host.plugin_manager(), NodeRef::RichtextInline(node));

        match &node.info {
            Some(info) => Self {
                tag_wrappers: inline_tag_wrappers(info, host),
                metadata: metadata_entries(&info.metadata, host),
                body,
                spec_attrs: inline_spec_attrs(info, host),
                plugin_attrs,
                plugin_widgets,
            },
            None => Self {
                tag_wrappers: Vec::new(),
                metadata: Vec::new(),
                body,
                spec_attrs: Vec::new(),
                plugin_attrs,
                plugin_widgets,
            },
        }
    }
}

impl CommentTemplate {
    /// Annotations become markup comments carrying their literal text.
    pub fn from_annotation(node: &Annotation) -> Self {
        Self {
            text: node.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::DocumentCollection;
    use crate::plugins::{EmbeddingPlugin, PluginInjection, SimplePluginManager};
    use weavemark_ast::FallbackKind;

    fn collection() -> DocumentCollection<String> {
        DocumentCollection::new(Box::new(|value: &DataValue| {
            format!("resolved:{}", value.value_text())
        }))
    }

    #[test]
    fn test_spec_attrs_sorted_by_key() {
        let info = BlockInfo {
            target: Some(DataValue::Str("x".to_string())),
            style_modifiers: Some(DataValue::Str("y".to_string())),
            ..Default::default()
        };
        let coll = collection();
        let attrs = block_spec_attrs(&info, &coll);
        assert_eq!(
            attrs,
            vec![HtmlAttr::new("class", "y"), HtmlAttr::new("target", "x")]
        );
    }

    #[test]
    fn test_spec_attr_field_renames() {
        let info = BlockInfo {
            embed: Some("diagram".to_string()),
            fallback: Some(FallbackKind::Plaintext),
            formatting: Some(BlockFormatting::Quote),
            ..Default::default()
        };
        let coll = collection();
        let attrs = block_spec_attrs(&info, &coll);
        assert_eq!(
            attrs,
            vec![
                HtmlAttr::new("embedding", "diagram"),
                HtmlAttr::new("fallback", "plaintext"),
                HtmlAttr::new("formatting", "quote"),
            ]
        );
    }

    #[test]
    fn test_link_valued_spec_attr_uses_resolver_unescaped() {
        let info = BlockInfo {
            target: Some(DataValue::Mention("someone".to_string())),
            ..Default::default()
        };
        let coll = DocumentCollection::<String>::new(Box::new(|_: &DataValue| {
            "\"raw & trusted\"".to_string()
        }));
        let attrs = block_spec_attrs(&info, &coll);
        assert_eq!(attrs, vec![HtmlAttr::new("target", "\"raw & trusted\"")]);
    }

    #[test]
    fn test_scalar_spec_attr_is_escaped() {
        let info = BlockInfo {
            target: Some(DataValue::Str("a \"b\" <c>".to_string())),
            ..Default::default()
        };
        let coll = collection();
        let attrs = block_spec_attrs(&info, &coll);
        assert_eq!(
            attrs,
            vec![HtmlAttr::new("target", "a &quot;b&quot; &lt;c&gt;")]
        );
    }

    #[test]
    fn test_inline_spec_attrs_skip_formatting() {
        let info = InlineInfo {
            formatting: Some(InlineFormatting::Strong),
            sugared: true,
            style_modifiers: Some(DataValue::Str("hot".to_string())),
            ..Default::default()
        };
        let coll = collection();
        let attrs = inline_spec_attrs(&info, &coll);
        assert_eq!(attrs, vec![HtmlAttr::new("class", "hot")]);
    }

    #[test]
    fn test_metadata_entries_keep_declaration_order() {
        let metadata = vec![
            ("zeta".to_string(), DataValue::Int(1)),
            ("alpha".to_string(), DataValue::Bool(true)),
        ];
        let coll = collection();
        let entries = metadata_entries(&metadata, &coll);
        assert_eq!(entries[0].key, "zeta");
        assert_eq!(entries[0].type_name, "int");
        assert_eq!(entries[1].key, "alpha");
        assert_eq!(entries[1].value, "true");
    }

    #[test]
    fn test_null_metadata_renders_empty_value() {
        let metadata = vec![("missing".to_string(), DataValue::Null)];
        let coll = collection();
        let entries = metadata_entries(&metadata, &coll);
        assert_eq!(entries[0].type_name, "null");
        assert_eq!(entries[0].value, "");
        assert!(entries[0].extra_attrs.is_empty());
    }

    #[test]
    fn test_link_metadata_carries_resolved_href() {
        let metadata = vec![("owner".to_string(), DataValue::Mention("ada".to_string()))];
        let coll = collection();
        let entries = metadata_entries(&metadata, &coll);
        assert_eq!(entries[0].type_name, "@");
        assert_eq!(entries[0].value, "ada");
        assert_eq!(
            entries[0].extra_attrs,
            vec![HtmlAttr::new("href", "resolved:ada")]
        );
    }

    #[test]
    fn test_wrapper_precedence_semantic_link_formatting() {
        let info = InlineInfo {
            semantic_modifier: Some("cite".to_string()),
            target: Some(DataValue::Str("http://e.example".to_string())),
            formatting: Some(InlineFormatting::Strong),
            ..Default::default()
        };
        let coll = collection();
        let wrappers = inline_tag_wrappers(&info, &coll);
        assert_eq!(wrappers.len(), 3);
        assert_eq!(wrappers[0].tag, "cite");
        assert_eq!(wrappers[1].tag, "a");
        assert_eq!(
            wrappers[1].attrs,
            vec![HtmlAttr::new("href", "http://e.example")]
        );
        assert_eq!(wrappers[2].tag, "strong");
    }

    #[test]
    fn test_link_target_resolution_for_nonliteral_targets() {
        let info = BlockInfo {
            target: Some(DataValue::Reference("other-doc".to_string())),
            ..Default::default()
        };
        let coll = collection();
        let wrappers = block_tag_wrappers(&info, &coll);
        assert_eq!(
            wrappers[0].attrs,
            vec![HtmlAttr::new("href", "resolved:other-doc")]
        );
    }

    #[test]
    fn test_inline_formatting_wrappers() {
        let pre = inline_formatting_wrapper(InlineFormatting::Pre);
        assert_eq!(pre.tag, "code");
        assert_eq!(pre.attrs, vec![HtmlAttr::new("class", PRE_CLASSNAME)]);

        assert_eq!(
            inline_formatting_wrapper(InlineFormatting::Underline).tag,
            UNDERLINE_TAG
        );
        assert_eq!(inline_formatting_wrapper(InlineFormatting::Strike).tag, "s");
        assert_eq!(inline_formatting_wrapper(InlineFormatting::Quote).tag, "q");
        assert_eq!(
            block_formatting_wrapper(BlockFormatting::Quote).tag,
            "blockquote"
        );
    }

    #[test]
    fn test_block_title_becomes_clamped_heading() {
        let node = RichtextBlock {
            title: Some(RichtextInline::from_text("Deep")),
            info: None,
            depth: 11,
            content: vec![],
        };
        let coll = collection();
        let template = BlockTemplate::from_block(&node, &coll).unwrap();
        assert_eq!(template.title.unwrap().tag, "h6");
    }

    #[test]
    fn test_untitled_block_has_no_heading() {
        let coll = collection();
        let template = BlockTemplate::from_block(&RichtextBlock::default(), &coll).unwrap();
        assert!(template.title.is_none());
    }

    #[test]
    fn test_document_metadata_replaces_root_metadata() {
        let root_info = BlockInfo {
            metadata: vec![("from".to_string(), DataValue::Str("root".to_string()))],
            ..Default::default()
        };
        let doc_info = BlockInfo {
            metadata: vec![("from".to_string(), DataValue::Str("doc".to_string()))],
            ..Default::default()
        };
        let document = Document {
            title: None,
            info: Some(doc_info),
            root: RichtextBlock {
                info: Some(root_info),
                ..Default::default()
            },
        };

        let coll = collection();
        let template = BlockTemplate::from_document(&document, &coll).unwrap();
        assert_eq!(template.metadata.len(), 1);
        assert_eq!(template.metadata[0].value, "doc");
    }

    #[test]
    fn test_document_without_info_keeps_root_metadata() {
        let root_info = BlockInfo {
            metadata: vec![("from".to_string(), DataValue::Str("root".to_string()))],
            ..Default::default()
        };
        let document = Document::new(RichtextBlock {
            info: Some(root_info),
            ..Default::default()
        });

        let coll = collection();
        let template = BlockTemplate::from_document(&document, &coll).unwrap();
        assert_eq!(template.metadata[0].value, "root");
    }

    #[test]
    fn test_list_tags() {
        let coll = collection();
        let ordered = ListTemplate::from_list(
            &List {
                kind: ListKind::Ordered,
                items: vec![],
            },
            &coll,
        );
        assert_eq!(ordered.tag, "ol");

        let unordered = ListTemplate::from_list(
            &List {
                kind: ListKind::Unordered,
                items: vec![],
            },
            &coll,
        );
        assert_eq!(unordered.tag, "ul");
    }

    #[test]
    fn test_list_item_index_carried() {
        let coll = collection();
        let item = ListItemTemplate::from_item(
            &ListItem {
                index: Some(4),
                content: vec![Paragraph::from_text("x")],
            },
            &coll,
        );
        assert_eq!(item.index, Some(4));
        assert_eq!(item.body.len(), 1);
    }

    #[test]
    fn test_annotation_becomes_comment() {
        let comment = CommentTemplate::from_annotation(&Annotation {
            content: "editorial aside".to_string(),
        });
        assert_eq!(comment.text, "editorial aside");
    }

    struct CodePlugin {
        name: &'static str,
        inject: bool,
    }

    impl EmbeddingPlugin for CodePlugin {
        fn name(&self) -> &str {
            self.name
        }

        fn apply_to_embedding(
            &self,
            _node: &EmbeddingBlock,
            _embedding_type: &str,
        ) -> Option<PluginInjection> {
            self.inject
                .then(|| PluginInjection::widgets(vec![TemplateNode::text("X")]))
        }
    }

    fn embedding_node() -> EmbeddingBlock {
        EmbeddingBlock {
            title: None,
            info: Some(BlockInfo::for_embedding("code")),
            depth: 0,
            content: Some("let x = 1;".to_string()),
        }
    }

    #[test]
    fn test_embedding_short_circuit_picks_first_nonempty() {
        let mut plugins = SimplePluginManager::new();
        plugins.register_embedding_plugin(
            "code",
            Box::new(CodePlugin {
                name: "first",
                inject: false,
            }),
        );
        plugins.register_embedding_plugin(
            "code",
            Box::new(CodePlugin {
                name: "second",
                inject: true,
            }),
        );
        plugins.register_embedding_plugin(
            "code",
            Box::new(CodePlugin {
                name: "third",
                inject: true,
            }),
        );

        let coll = collection().with_plugin_manager(Box::new(plugins));
        let template = EmbeddingTemplate::from_block(&embedding_node(), &coll).unwrap();

        match template.content {
            EmbeddingContent::Plugin {
                plugin_name,
                widgets,
            } => {
                assert_eq!(plugin_name, "second");
                assert_eq!(widgets, vec![TemplateNode::text("X")]);
            }
            other => panic!("expected plugin content, got {other:?}"),
        }
    }

    #[test]
    fn test_embedding_fallback_without_plugins() {
        let coll = collection();
        let template = EmbeddingTemplate::from_block(&embedding_node(), &coll).unwrap();
        match template.content {
            EmbeddingContent::Fallback { text } => {
                assert_eq!(text.as_deref(), Some("let x = 1;"));
            }
            other => panic!("expected fallback content, got {other:?}"),
        }
    }

    #[test]
    fn test_embedding_without_info_is_fatal() {
        let coll = collection();
        let node = EmbeddingBlock::default();
        let err = EmbeddingTemplate::from_block(&node, &coll).unwrap_err();
        assert!(matches!(err, RenderError::MissingEmbeddingInfo));
    }

    #[test]
    fn test_embedding_without_type_is_fatal() {
        let coll = collection();
        let node = EmbeddingBlock {
            info: Some(BlockInfo::default()),
            ..Default::default()
        };
        let err = EmbeddingTemplate::from_block(&node, &coll).unwrap_err();
        assert!(matches!(err, RenderError::MissingEmbeddingType));
    }

    #[test]
    fn test_inline_without_info_has_no_decoration() {
        let coll = collection();
        let template = InlineTemplate::from_inline(&RichtextInline::from_text("plain"), &coll);
        assert!(template.tag_wrappers.is_empty());
        assert!(template.spec_attrs.is_empty());
        assert_eq!(template.body, vec![TemplateNode::text("plain")]);
    }
}
