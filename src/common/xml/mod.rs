//! Markup escaping shared by the OOXML and HTML writers.

mod escape;

pub use escape::{escape_html, escape_xml};
