//! Document root definitions
//!
//! A document wraps a single root richtext block plus the document-level
//! title and info record. The wrapper exists for compatibility with
//! sources that declare metadata at the document level rather than on the
//! root node itself.

use serde::{Deserialize, Serialize};

use crate::block::RichtextBlock;
use crate::info::BlockInfo;
use crate::inline::RichtextInline;

/// A complete markup document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document-level title
    pub title: Option<RichtextInline>,
    /// Document-level info record; when present, its metadata supersedes
    /// the root node's metadata during templatification
    pub info: Option<BlockInfo>,
    /// The root content block
    pub root: RichtextBlock,
}

impl Document {
    /// Create a document from its root block.
    pub fn new(root: RichtextBlock) -> Self {
        Self {
            title: None,
            info: None,
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockChild, Paragraph};

    #[test]
    fn test_new_document() {
        let doc = Document::new(RichtextBlock {
            content: vec![BlockChild::Paragraph(Paragraph::from_text("body"))],
            ..Default::default()
        });
        assert!(doc.title.is_none());
        assert!(doc.info.is_none());
        assert_eq!(doc.root.content.len(), 1);
    }
}
