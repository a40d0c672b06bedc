//! Rich document model produced from markdown and consumed by the DOCX writer.
//!
//! A [`RichDocument`] is an ordered list of [`Block`]s, each made of styled
//! [`Run`]s. It is built once per export call by
//! [`markdown::parse`](crate::markdown::parse) and is read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use career_export::document::{Block, HeadingLevel};
//! use career_export::markdown;
//!
//! let doc = markdown::parse("# Jane Doe\n- **Rust**, *Go*");
//! assert_eq!(doc.len(), 2);
//! assert!(matches!(doc.blocks()[0], Block::Heading { level: HeadingLevel::H1, .. }));
//! assert_eq!(doc.blocks()[1].text(), "Rust, Go");
//! ```

mod types;

pub use types::{Block, HeadingLevel, Run};

/// An ordered, immutable sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichDocument {
    blocks: Vec<Block>,
}

impl RichDocument {
    /// Wrap an already-ordered list of blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Blocks in document order.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl FromIterator<Block> for RichDocument {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RichDocument {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
