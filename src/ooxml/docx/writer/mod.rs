//! WordprocessingML part writers.
//!
//! Each function renders one part of the package as an XML string. Only the
//! main document depends on the input; styles and numbering are fixed.

pub mod doc;
pub mod numbering;
pub mod paragraph;
pub mod run;
pub mod style;

pub use doc::generate_document_xml;
pub use numbering::generate_numbering_xml;
pub use style::{ParagraphStyle, generate_styles_xml};
