//! Runs, blocks and heading levels.

/// A contiguous span of text sharing one set of style flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Run {
    /// Visible text, with all markdown markers already removed
    pub text: String,
    /// Bold formatting
    pub bold: bool,
    /// Italic formatting
    pub italic: bool,
}

impl Run {
    /// An unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// An italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Whether the run carries any character formatting.
    #[inline]
    pub fn is_styled(&self) -> bool {
        self.bold || self.italic
    }
}

/// Heading depth. Only three levels exist in the exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    /// Convert a `#` count to a level; `None` outside `1..=3`.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// Numeric level, `1..=3`.
    #[inline]
    pub fn depth(self) -> u8 {
        self as u8
    }
}

/// A structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A section heading
    Heading { level: HeadingLevel, runs: Vec<Run> },
    /// A plain paragraph
    Paragraph { runs: Vec<Run> },
    /// One item of a bulleted list
    BulletItem { runs: Vec<Run> },
}

impl Block {
    /// The styled runs of this block, in order.
    pub fn runs(&self) -> &[Run] {
        match self {
            Block::Heading { runs, .. } | Block::Paragraph { runs } | Block::BulletItem { runs } => {
                runs
            },
        }
    }

    /// Concatenated run text without styling.
    pub fn text(&self) -> String {
        self.runs().iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_bounds() {
        assert_eq!(HeadingLevel::from_depth(0), None);
        assert_eq!(HeadingLevel::from_depth(2), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::from_depth(4), None);
        assert_eq!(HeadingLevel::H3.depth(), 3);
    }

    #[test]
    fn test_block_text_joins_runs() {
        let block = Block::BulletItem {
            runs: vec![Run::bold("Rust"), Run::plain(" and "), Run::italic("Go")],
        };
        assert_eq!(block.text(), "Rust and Go");
        assert!(block.runs()[0].is_styled());
        assert!(!block.runs()[1].is_styled());
    }
}
