/// Assembly of a complete `.docx` package from a rich document.
use tracing::debug;

use super::properties::CoreProperties;
use super::writer::{generate_document_xml, generate_numbering_xml, generate_styles_xml};
use crate::document::RichDocument;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::part::{Part, XmlPart};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter};

/// Partname of the main document.
pub const DOCUMENT_URI: &str = "/word/document.xml";
/// Partname of the style sheet.
pub const STYLES_URI: &str = "/word/styles.xml";
/// Partname of the numbering definitions.
pub const NUMBERING_URI: &str = "/word/numbering.xml";
/// Partname of the core properties.
pub const CORE_PROPERTIES_URI: &str = "/docProps/core.xml";

/// A Word (.docx) package ready to be serialized.
///
/// # Examples
///
/// ```rust
/// use career_export::markdown;
/// use career_export::ooxml::docx::Package;
///
/// let doc = markdown::parse("# Jane Doe\n- Rust");
/// let bytes = Package::from_document(&doc, None)?.to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), career_export::ooxml::OoxmlError>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Build the package parts for a document.
    ///
    /// Parts are added in archive order: main document, styles, numbering,
    /// then core properties when given.
    pub fn from_document(doc: &RichDocument, core: Option<&CoreProperties>) -> Result<Self> {
        let mut opc = OpcPackage::new();

        let document_uri = partname(DOCUMENT_URI)?;
        let styles_uri = partname(STYLES_URI)?;
        let numbering_uri = partname(NUMBERING_URI)?;

        let mut document = XmlPart::new(
            document_uri.clone(),
            ct::WML_DOCUMENT_MAIN,
            generate_document_xml(doc)?,
        );
        document.relate_to(&styles_uri, rt::STYLES);
        document.relate_to(&numbering_uri, rt::NUMBERING);

        opc.relate_to(&document_uri, rt::OFFICE_DOCUMENT);
        opc.add_part(Box::new(document))?;
        opc.add_part(Box::new(XmlPart::new(
            styles_uri,
            ct::WML_STYLES,
            generate_styles_xml()?,
        )))?;
        opc.add_part(Box::new(XmlPart::new(
            numbering_uri,
            ct::WML_NUMBERING,
            generate_numbering_xml(),
        )))?;

        if let Some(core) = core {
            let core_uri = partname(CORE_PROPERTIES_URI)?;
            opc.relate_to(&core_uri, rt::CORE_PROPERTIES);
            opc.add_part(Box::new(XmlPart::new(
                core_uri,
                ct::OPC_CORE_PROPERTIES,
                core.to_xml(),
            )))?;
        }

        debug!(
            blocks = doc.len(),
            parts = opc.part_count(),
            "assembled docx package"
        );
        Ok(Self { opc })
    }

    /// Get the underlying OPC package.
    pub fn opc(&self) -> &OpcPackage {
        &self.opc
    }

    /// Serialize the package into `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.opc)?)
    }
}

fn partname(uri: &str) -> Result<PackURI> {
    Ok(PackURI::new(uri).map_err(OpcError::InvalidPackUri)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_without_core_properties() {
        let pkg = Package::from_document(&RichDocument::default(), None).unwrap();
        let names: Vec<&str> = pkg.opc().iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, [DOCUMENT_URI, STYLES_URI, NUMBERING_URI]);
        assert_eq!(pkg.opc().rels().len(), 1);
    }

    #[test]
    fn test_core_properties_added_and_related() {
        let core = CoreProperties::new().title("Resume");
        let pkg = Package::from_document(&RichDocument::default(), Some(&core)).unwrap();
        assert_eq!(pkg.opc().part_count(), 4);
        assert!(
            pkg.opc()
                .rels()
                .iter()
                .any(|r| r.reltype() == rt::CORE_PROPERTIES && r.target_ref() == "docProps/core.xml")
        );
    }

    #[test]
    fn test_document_relationships() {
        let pkg = Package::from_document(&RichDocument::default(), None).unwrap();
        let doc = pkg.opc().get_part(&partname(DOCUMENT_URI).unwrap()).unwrap();
        let rels = doc.rels().to_xml();
        assert!(rels.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml""#));
        assert!(rels.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml""#));
    }
}
