//! Print-ready HTML export.
//!
//! [`markdown_to_html`] converts the markdown source directly, without going
//! through the rich document model, and [`render_page`] wraps the result in
//! a standalone page whose toolbar triggers the browser's print dialog.
//!
//! ```rust
//! use career_export::html::{markdown_to_html, render_page};
//!
//! let page = render_page(&markdown_to_html("## Skills\n- Rust"), "Resume", true);
//! assert!(page.contains("<h2>Skills</h2>"));
//! ```

mod page;
mod pipeline;

pub use page::{EMPTY_BODY, render_page};
pub use pipeline::{STAGES, Stage, markdown_to_html, run_stages};
