//! The export boundary: markdown in, bytes plus a suggested filename out.
//!
//! [`DocumentExporter`] carries [`ExportOptions`] and is cheap to share
//! between threads; the free functions [`export_to_docx`] and
//! [`export_to_html`] use the default options.
//!
//! # Example
//!
//! ```rust
//! use career_export::export::{export_to_docx, export_to_html};
//!
//! let markdown = "# Jane Doe\n## Experience\n- **Acme** - built *things*";
//! let docx = export_to_docx(markdown, "Resume_Dev_Acme_2024-01-15", "Jane Doe")?;
//! assert_eq!(docx.suggested_filename, "Resume_Dev_Acme_2024-01-15.docx");
//!
//! let html = export_to_html(markdown, "Resume_Dev_Acme_2024-01-15", "");
//! assert!(String::from_utf8(html.bytes)?.contains("<title>Resume_Dev_Acme_2024-01-15</title>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod filename;

use chrono::NaiveDate;
#[cfg(any(feature = "docx", feature = "html"))]
use tracing::debug;

pub use config::{DEFAULT_FILENAME_SEGMENT_LIMIT, ExportOptions};
pub use filename::{
    EMPTY_SEGMENT, generate_filename, generate_filename_on, generate_filename_with_limit,
    sanitize_segment,
};

use crate::common::Result;

/// MIME type of `.docx` output.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of HTML output.
pub const HTML_MEDIA_TYPE: &str = "text/html; charset=utf-8";

/// The product of one export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Complete file content
    pub bytes: Vec<u8>,
    /// `filename_base` plus the format's extension
    pub suggested_filename: String,
    /// MIME type of `bytes`
    pub media_type: &'static str,
}

/// Exporter holding the options for both output formats.
#[derive(Debug, Clone, Default)]
pub struct DocumentExporter {
    options: ExportOptions,
}

impl DocumentExporter {
    /// Create an exporter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with the given options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export markdown as a `.docx` package.
    ///
    /// `title` becomes the document title in the core properties when it is
    /// non-empty and core properties are enabled.
    ///
    /// # Errors
    /// Fails only on internal packaging faults; no partial output is returned.
    #[cfg(feature = "docx")]
    pub fn export_docx(
        &self,
        markdown: &str,
        filename_base: &str,
        title: &str,
    ) -> Result<ExportResult> {
        use crate::ooxml::docx::{CoreProperties, Package};

        let doc = crate::markdown::parse(markdown);

        let core = (self.options.core_properties && !title.trim().is_empty()).then(|| {
            let mut core = CoreProperties::new().title(title.trim());
            if let Some(at) = self.options.creation_time {
                core = core.timestamp(at);
            }
            core
        });

        let bytes = Package::from_document(&doc, core.as_ref())?.to_bytes()?;
        debug!(
            input_len = markdown.len(),
            blocks = doc.len(),
            output_len = bytes.len(),
            "exported docx"
        );

        Ok(ExportResult {
            bytes,
            suggested_filename: format!("{filename_base}.docx"),
            media_type: DOCX_MEDIA_TYPE,
        })
    }

    /// Export markdown as a `.docx` package.
    #[cfg(not(feature = "docx"))]
    pub fn export_docx(
        &self,
        _markdown: &str,
        _filename_base: &str,
        _title: &str,
    ) -> Result<ExportResult> {
        Err(crate::common::Error::FeatureDisabled("docx".to_string()))
    }

    /// Export markdown as a printable HTML page.
    ///
    /// The page title is `title`, or `filename_base` when `title` is empty.
    #[cfg(feature = "html")]
    pub fn export_html(&self, markdown: &str, filename_base: &str, title: &str) -> ExportResult {
        let body = crate::html::markdown_to_html(markdown);
        let page_title = if title.trim().is_empty() { filename_base } else { title };
        let page = crate::html::render_page(&body, page_title, self.options.print_toolbar);
        debug!(
            input_len = markdown.len(),
            output_len = page.len(),
            "exported html"
        );

        ExportResult {
            bytes: page.into_bytes(),
            suggested_filename: format!("{filename_base}.html"),
            media_type: HTML_MEDIA_TYPE,
        }
    }

    /// Filename base stamped with the current UTC day, using the configured segment limit.
    pub fn filename(&self, doc_type: &str, job_title: &str, company: &str) -> String {
        self.filename_on(chrono::Utc::now().date_naive(), doc_type, job_title, company)
    }

    /// Filename base for an explicit date, using the configured segment limit.
    pub fn filename_on(
        &self,
        date: NaiveDate,
        doc_type: &str,
        job_title: &str,
        company: &str,
    ) -> String {
        generate_filename_with_limit(
            date,
            doc_type,
            job_title,
            company,
            self.options.filename_segment_limit,
        )
    }
}

/// Export markdown as a `.docx` package with default options.
pub fn export_to_docx(markdown: &str, filename_base: &str, title: &str) -> Result<ExportResult> {
    DocumentExporter::new().export_docx(markdown, filename_base, title)
}

/// Export markdown as a printable HTML page with default options.
#[cfg(feature = "html")]
pub fn export_to_html(markdown: &str, filename_base: &str, title: &str) -> ExportResult {
    DocumentExporter::new().export_html(markdown, filename_base, title)
}
