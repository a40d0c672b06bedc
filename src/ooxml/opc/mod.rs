/// Open Packaging Conventions (OPC), write side.
///
/// Parts are added to an [`OpcPackage`] together with the relationships that
/// point at them, and [`PackageWriter`] serializes the package into a ZIP
/// byte stream. `[Content_Types].xml` and every `.rels` part are derived
/// from what the package actually contains, so they can never list a part
/// that is missing or miss one that is present.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{Part, XmlPart};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
