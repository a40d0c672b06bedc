//! career-export - Markdown to Word and print-ready HTML
//!
//! This library turns the small markdown dialect produced for tailored
//! resumes and cover letters into two self-contained outputs, without any
//! external document or compression library:
//!
//! - **DOCX**: a WordprocessingML package in a stored-entry ZIP container
//! - **HTML**: a standalone page with a print stylesheet, for saving as PDF
//!   through the browser's print dialog
//!
//! # Features
//!
//! - `docx` (default): the `.docx` path and the `career-zip` container writer
//! - `html` (default): the HTML path
//! - `yaml` (default): loading and saving [`ExportOptions`] as YAML
//!
//! # Example - Exporting a resume
//!
//! ```rust
//! use career_export::{DocumentExporter, ExportOptions, generate_filename};
//!
//! # fn main() -> Result<(), career_export::Error> {
//! let markdown = "# Jane Doe\n\n## Experience\n- **Acme Corp** - *Staff Engineer*";
//!
//! let exporter = DocumentExporter::with_options(ExportOptions::new().with_print_toolbar(false));
//! let base = generate_filename("Resume", "Staff Engineer", "Acme Corp");
//!
//! let docx = exporter.export_docx(markdown, &base, "Jane Doe")?;
//! assert!(docx.suggested_filename.ends_with(".docx"));
//!
//! let html = exporter.export_html(markdown, &base, "Jane Doe");
//! assert!(html.suggested_filename.ends_with(".html"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Working with the document model
//!
//! ```rust
//! use career_export::document::Block;
//! use career_export::markdown;
//!
//! let doc = markdown::parse("## Skills\n- **Rust** and *Go*");
//! for block in doc.blocks() {
//!     if let Block::BulletItem { runs } = block {
//!         assert_eq!(runs.len(), 3);
//!     }
//! }
//! ```

/// Common utilities shared across the crate
///
/// Error types and XML/HTML escaping.
pub mod common;

/// Rich document model: blocks of styled runs
pub mod document;

/// Markdown subset reader producing the rich document model
pub mod markdown;

/// OOXML (Office Open XML) package generation
///
/// This module renders the rich document model into the parts of a `.docx`
/// package and writes them through the OPC layer.
#[cfg(feature = "docx")]
pub mod ooxml;

/// Markdown to printable HTML conversion
#[cfg(feature = "html")]
pub mod html;

/// Export entry points, options and filename generation
pub mod export;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use document::{Block, HeadingLevel, RichDocument, Run};
pub use export::{
    DocumentExporter, ExportOptions, ExportResult, export_to_docx, generate_filename,
    generate_filename_on,
};

#[cfg(feature = "html")]
pub use export::export_to_html;
