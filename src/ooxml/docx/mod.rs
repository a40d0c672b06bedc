/// Word (.docx) package generation.
///
/// [`Package::from_document`] renders a [`RichDocument`](crate::document::RichDocument)
/// into the parts of a WordprocessingML package:
///
/// - `word/document.xml`: one paragraph per block
/// - `word/styles.xml`: `Normal` and `Heading1`..`Heading3`
/// - `word/numbering.xml`: the bullet list definition
/// - `docProps/core.xml`: optional core properties
///
/// plus the content types and relationship parts derived from them.
pub mod package;
pub mod properties;
pub mod writer;

pub use package::Package;
pub use properties::CoreProperties;
