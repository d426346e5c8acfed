//! Plugin interfaces and the prebaked registry
//!
//! Plugins inject extra widgets and attributes into the render-tree.
//! Registries are ordered sequences keyed by a static type tag, never by
//! runtime downcasting. Two composition policies exist:
//!
//! - node and summary plugins are **additive**: every registered plugin
//!   for the type is invoked in registration order, and all injections
//!   accumulate;
//! - embedding plugins are **short-circuiting**: plugins are tried in
//!   order and the first one returning an injection wins outright.

use std::collections::HashMap;

use weavemark_ast::summary::{SummaryKind, SummaryRef};
use weavemark_ast::{EmbeddingBlock, NodeKind, NodeRef};

use crate::template::{HtmlAttr, TemplateNode};

/// Widgets and attributes contributed by one plugin invocation.
///
/// Returning `None` from a plugin is equivalent to returning an empty
/// injection, except for embedding plugins, where only `Some` claims the
/// embedding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginInjection {
    /// Extra render-tree nodes, appended to the node's widget slot
    pub widgets: Vec<TemplateNode>,
    /// Extra attributes, appended to the node's attribute list
    pub attrs: Vec<HtmlAttr>,
}

impl PluginInjection {
    /// An injection carrying only widgets.
    pub fn widgets(widgets: Vec<TemplateNode>) -> Self {
        Self {
            widgets,
            attrs: Vec::new(),
        }
    }

    /// An injection carrying only attributes.
    pub fn attrs(attrs: Vec<HtmlAttr>) -> Self {
        Self {
            widgets: Vec::new(),
            attrs,
        }
    }
}

/// A plugin applied to markup nodes.
pub trait NodePlugin: Send + Sync {
    fn apply_to_node(&self, node: NodeRef<'_>) -> Option<PluginInjection>;
}

/// A plugin applied to embedding blocks, keyed by embedding type.
///
/// Unlike node and summary plugins, embedding plugins replace the
/// fallback content outright: the first plugin to return an injection
/// supplies the whole embedding body.
pub trait EmbeddingPlugin: Send + Sync {
    /// Stable name, used to tag the injected embedding content.
    fn name(&self) -> &str;

    fn apply_to_embedding(
        &self,
        node: &EmbeddingBlock,
        embedding_type: &str,
    ) -> Option<PluginInjection>;
}

/// A plugin applied to documentation-summary nodes.
pub trait SummaryPlugin: Send + Sync {
    fn apply_to_summary(&self, summary: SummaryRef<'_>) -> Option<PluginInjection>;
}

/// Registry surface consumed by the templatifiers.
pub trait PluginManager: Send + Sync {
    /// Ordered embedding plugins for the given embedding type.
    fn embedding_plugins(&self, embedding_type: &str) -> &[Box<dyn EmbeddingPlugin>];

    /// Ordered node plugins for the given node kind.
    fn node_plugins(&self, kind: NodeKind) -> &[Box<dyn NodePlugin>];

    /// Ordered summary plugins for the given summary kind.
    fn summary_plugins(&self, kind: SummaryKind) -> &[Box<dyn SummaryPlugin>];
}

/// In-memory plugin registry dispatching in registration order.
#[derive(Default)]
pub struct SimplePluginManager {
    embedding: HashMap<String, Vec<Box<dyn EmbeddingPlugin>>>,
    node: HashMap<NodeKind, Vec<Box<dyn NodePlugin>>>,
    summary: HashMap<SummaryKind, Vec<Box<dyn SummaryPlugin>>>,
}

impl SimplePluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an embedding plugin for the given embedding type.
    pub fn register_embedding_plugin(
        &mut self,
        embedding_type: impl Into<String>,
        plugin: Box<dyn EmbeddingPlugin>,
    ) {
        self.embedding
            .entry(embedding_type.into())
            .or_default()
            .push(plugin);
    }

    /// Register a node plugin for the given node kind.
    pub fn register_node_plugin(&mut self, kind: NodeKind, plugin: Box<dyn NodePlugin>) {
        self.node.entry(kind).or_default().push(plugin);
    }

    /// Register a summary plugin for the given summary kind.
    pub fn register_summary_plugin(&mut self, kind: SummaryKind, plugin: Box<dyn SummaryPlugin>) {
        self.summary.entry(kind).or_default().push(plugin);
    }
}

impl PluginManager for SimplePluginManager {
    fn embedding_plugins(&self, embedding_type: &str) -> &[Box<dyn EmbeddingPlugin>] {
        self.embedding
            .get(embedding_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn node_plugins(&self, kind: NodeKind) -> &[Box<dyn NodePlugin>] {
        self.node.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    fn summary_plugins(&self, kind: SummaryKind) -> &[Box<dyn SummaryPlugin>] {
        self.summary.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Apply every node plugin for the node's kind, accumulating injections
/// in registration order.
pub(crate) fn collect_node_injections(
    manager: &dyn PluginManager,
    node: NodeRef<'_>,
) -> (Vec<HtmlAttr>, Vec<TemplateNode>) {
    let mut attrs = Vec::new();
    let mut widgets = Vec::new();
    for plugin in manager.node_plugins(node.kind()) {
        if let Some(injection) = plugin.apply_to_node(node) {
            attrs.extend(injection.attrs);
            widgets.extend(injection.widgets);
        }
    }
    (attrs, widgets)
}

/// Apply every summary plugin for the summary's kind, accumulating
/// injections in registration order.
pub(crate) fn collect_summary_injections(
    manager: &dyn PluginManager,
    summary: SummaryRef<'_>,
) -> (Vec<HtmlAttr>, Vec<TemplateNode>) {
    let mut attrs = Vec::new();
    let mut widgets = Vec::new();
    for plugin in manager.summary_plugins(summary.kind()) {
        if let Some(injection) = plugin.apply_to_summary(summary) {
            attrs.extend(injection.attrs);
            widgets.extend(injection.widgets);
        }
    }
    (attrs, widgets)
}
