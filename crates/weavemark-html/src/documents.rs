//! Document collection and preprocessing entry points
//!
//! The collection owns the finished documents plus everything rendering
//! needs: the transformer chain, the plugin registry, the link-target
//! resolver, and the abstractifier (the parser seam). Stored documents
//! are write-once: insertion is all-or-nothing, re-adding an identifier
//! fails, and nothing is ever mutated after insertion — so concurrent
//! readers need no locking.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;
use weavemark_ast::summary::ModuleSummary;
use weavemark_ast::{DataValue, Document};

use crate::error::{RenderError, Result};
use crate::plugins::{PluginManager, SimplePluginManager};
use crate::template::{BlockTemplate, ModuleTemplate, TemplateNode};
use crate::transform::{apply_transformers, TransformContext, TreeTransformer};

/// Resolves a link-valued metadata field to an href string.
///
/// The resolver's output is caller-controlled and used verbatim; it is
/// never escaped downstream.
pub type TargetResolver = Box<dyn Fn(&DataValue) -> String + Send + Sync>;

/// Identifier for stored documents.
pub trait DocumentId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> DocumentId for T {}

/// The parser seam: turns raw markup text into an AST document.
///
/// Parse failures are surfaced unchanged through
/// [`RenderError::Parse`]; the pipeline attempts no recovery.
pub trait Abstractify: Send + Sync {
    fn abstractify(
        &self,
        text: &str,
    ) -> std::result::Result<Document, Box<dyn std::error::Error + Send + Sync>>;
}

/// Prebaked abstractifier for AST documents serialized as JSON.
///
/// External markup parsers plug in through [`Abstractify`]; this default
/// accepts the crate's own serialized form, which is what tooling and
/// the CLI exchange.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAbstractifier;

impl Abstractify for JsonAbstractifier {
    fn abstractify(
        &self,
        text: &str,
    ) -> std::result::Result<Document, Box<dyn std::error::Error + Send + Sync>> {
        let document = serde_json::from_str(text)?;
        Ok(document)
    }
}

/// The source a document was built from: exactly one of a markup AST or
/// a documentation-summary tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentSource {
    Markup(Document),
    Summary(ModuleSummary),
}

/// A finished document: its source plus the derived render-tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlDocument<I> {
    pub id: I,
    pub source: DocumentSource,
    /// The render-tree ("intermediate representation") handed to the
    /// external rendering engine
    pub intermediate: TemplateNode,
}

/// The collection surface the templatifiers rely on.
pub trait TemplateHost {
    /// Resolve a link-valued field to an href. Output is trusted and
    /// never escaped.
    fn resolve_target(&self, value: &DataValue) -> String;

    /// The plugin registry.
    fn plugin_manager(&self) -> &dyn PluginManager;

    /// Parse and transform nested markup text (summary doc text routes
    /// through here so transformers see it too).
    fn preprocess(&self, text: &str, ctx: &TransformContext<'_>) -> Result<Document>;
}

/// Registry of finished documents keyed by identifier.
pub struct DocumentCollection<I: DocumentId> {
    target_resolver: TargetResolver,
    plugin_manager: Box<dyn PluginManager>,
    /// Transformers rewrite document content during preprocessing, in
    /// registration order. Order is a contract, not an implementation
    /// detail.
    transformers: Vec<Box<dyn TreeTransformer>>,
    abstractifier: Box<dyn Abstractify>,
    documents: HashMap<I, HtmlDocument<I>>,
    insertion_order: Vec<I>,
}

impl<I: DocumentId> DocumentCollection<I> {
    /// Create a collection with the given link-target resolver, no
    /// plugins, no transformers, and the JSON abstractifier.
    pub fn new(target_resolver: TargetResolver) -> Self {
        Self {
            target_resolver,
            plugin_manager: Box::new(SimplePluginManager::new()),
            transformers: Vec::new(),
            abstractifier: Box::new(JsonAbstractifier),
            documents: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Replace the plugin registry.
    pub fn with_plugin_manager(mut self, plugin_manager: Box<dyn PluginManager>) -> Self {
        self.plugin_manager = plugin_manager;
        self
    }

    /// Replace the abstractifier.
    pub fn with_abstractifier(mut self, abstractifier: Box<dyn Abstractify>) -> Self {
        self.abstractifier = abstractifier;
        self
    }

    /// Append a transformer to the chain.
    pub fn with_transformer(mut self, transformer: Box<dyn TreeTransformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Parse markup text and apply the transformer chain, returning the
    /// resulting AST document.
    pub fn preprocess(&self, text: &str, ctx: &TransformContext<'_>) -> Result<Document> {
        let document = self
            .abstractifier
            .abstractify(text)
            .map_err(RenderError::Parse)?;
        apply_transformers(document, &self.transformers, ctx)
    }

    /// Templatify the source and store the finished document.
    ///
    /// Fails without storing anything if the identifier is already taken
    /// or templatification fails; there is no partial-write state.
    pub fn add(&mut self, id: I, source: DocumentSource) -> Result<()> {
        if self.documents.contains_key(&id) {
            return Err(RenderError::DuplicateDocument(id.to_string()));
        }

        let intermediate = match &source {
            DocumentSource::Markup(document) => {
                TemplateNode::Block(Box::new(BlockTemplate::from_document(document, &*self)?))
            }
            DocumentSource::Summary(module) => {
                TemplateNode::Module(Box::new(ModuleTemplate::from_summary(module, &*self)?))
            }
        };

        debug!(id = %id, "document added to collection");
        self.insertion_order.push(id.clone());
        self.documents.insert(
            id.clone(),
            HtmlDocument {
                id,
                source,
                intermediate,
            },
        );
        Ok(())
    }

    /// Look up a stored document.
    pub fn get(&self, id: &I) -> Option<&HtmlDocument<I>> {
        self.documents.get(id)
    }

    /// Whether a document with this identifier is stored.
    pub fn contains(&self, id: &I) -> bool {
        self.documents.contains_key(id)
    }

    /// Stored identifiers, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.insertion_order.iter()
    }

    /// Stored documents, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HtmlDocument<I>> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.documents.get(id))
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<I: DocumentId> TemplateHost for DocumentCollection<I> {
    fn resolve_target(&self, value: &DataValue) -> String {
        (self.target_resolver)(value)
    }

    fn plugin_manager(&self) -> &dyn PluginManager {
        self.plugin_manager.as_ref()
    }

    fn preprocess(&self, text: &str, ctx: &TransformContext<'_>) -> Result<Document> {
        DocumentCollection::preprocess(self, text, ctx)
    }
}

/// Templatify a parsed document with a throwaway collection.
///
/// Intended for debugging and quick experiments: link targets all
/// resolve to `#`, and no plugins or transformers run.
pub fn quicktemplate(document: &Document) -> Result<TemplateNode> {
    let collection: DocumentCollection<String> =
        DocumentCollection::new(Box::new(|_: &DataValue| "#".to_string()));
    Ok(TemplateNode::Block(Box::new(BlockTemplate::from_document(
        document,
        &collection,
    )?)))
}
