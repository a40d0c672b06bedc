//! Markdown reader for the small subset used by generated resumes and letters.
//!
//! Supported: `#`/`##`/`###` headings, `-`/`*` bullet items, paragraphs,
//! and `**bold**` / `*italic*` inline styling. Inline code and links are
//! reduced to their visible text. Everything else passes through as
//! literal paragraph text; parsing never fails.
//!
//! ```rust
//! use career_export::document::Block;
//! use career_export::markdown;
//!
//! let doc = markdown::parse("## Experience\n- Shipped **v2** on time");
//! assert!(matches!(doc.blocks()[1], Block::BulletItem { .. }));
//! assert_eq!(doc.blocks()[1].runs().len(), 3);
//! ```

mod inline;
mod parser;

pub use inline::{strip_markup, tokenize};
pub use parser::{parse, parse_line};
