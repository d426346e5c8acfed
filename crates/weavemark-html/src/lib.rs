//! weavemark-html - render-tree construction for weavemark documents
//!
//! This crate turns parsed markup documents and extracted documentation
//! summaries into a render-tree of typed template nodes. The external
//! rendering engine consumes the render-tree; the external parser and
//! extractor produce the inputs. What lives here is the middle of the
//! pipeline: the transformer chain, the templatifiers, the metadata
//! normalizer, the tag-wrapper composer, and the plugin resolver.
//!
//! # Example
//!
//! ```
//! use weavemark_ast::{BlockChild, Document, Paragraph, RichtextBlock};
//! use weavemark_html::{quicktemplate, TemplateNode};
//!
//! let document = Document::new(RichtextBlock {
//!     content: vec![BlockChild::Paragraph(Paragraph::from_text("Hello."))],
//!     ..Default::default()
//! });
//!
//! let template = quicktemplate(&document).unwrap();
//! assert!(matches!(template, TemplateNode::Block(_)));
//! ```

pub mod documents;
pub mod error;
pub mod markup;
pub mod plugins;
pub mod summary;
pub mod template;
pub mod transform;

pub use documents::{
    quicktemplate, Abstractify, DocumentCollection, DocumentId, DocumentSource, HtmlDocument,
    JsonAbstractifier, TargetResolver, TemplateHost,
};
pub use error::{RenderError, Result};
pub use plugins::{
    EmbeddingPlugin, NodePlugin, PluginInjection, PluginManager, SimplePluginManager,
    SummaryPlugin,
};
pub use summary::{should_include, templatify_doctext};
pub use template::{
    close_tags, escape_attr, heading_factory, link_factory, open_tags, BlockTemplate,
    CallableTemplate, ClassTemplate, CommentTemplate, CrossrefTarget, CrossrefTemplate,
    EmbeddingContent, EmbeddingTemplate, GenericElement, HtmlAttr, InlineTemplate,
    ListItemTemplate, ListTemplate, MetadataEntry, ModuleTemplate, ParagraphTemplate,
    ParamTemplate, RetvalTemplate, SignatureTemplate, TagWrapper, TemplateNode,
    TypespecTemplate, VariableTemplate, PRE_CLASSNAME, UNDERLINE_TAG,
};
pub use transform::{apply_transformers, TransformContext, TreeTransformer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
