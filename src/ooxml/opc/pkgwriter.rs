//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into ZIP bytes: `[Content_Types].xml` first,
//! then the package relationships, then each part preceded by its own
//! relationships part when it has one.

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use career_zip::ZipArchiveWriter;
use tracing::trace;

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};

/// Package writer that serializes an OPC package to ZIP bytes.
///
/// # Example
///
/// ```rust
/// use career_export::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
/// use career_export::ooxml::opc::part::XmlPart;
/// use career_export::ooxml::opc::{OpcPackage, PackURI, PackageWriter};
///
/// let mut pkg = OpcPackage::new();
/// let doc = PackURI::new("/word/document.xml").unwrap();
/// pkg.relate_to(&doc, rt::OFFICE_DOCUMENT);
/// pkg.add_part(Box::new(XmlPart::new(doc, ct::WML_DOCUMENT_MAIN, "<w:document/>")))?;
///
/// let bytes = PackageWriter::to_bytes(&pkg)?;
/// assert_eq!(&bytes[..4], b"PK\x03\x04");
/// # Ok::<(), career_export::ooxml::opc::error::OpcError>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Serialize an OPC package to bytes.
    ///
    /// Fails without producing output if a relationship points outside the
    /// package or the archive cannot be built.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        package.validate()?;

        let mut zip = ZipArchiveWriter::new();

        Self::write_content_types(&mut zip, package)?;
        Self::write_pkg_rels(&mut zip, package)?;
        Self::write_parts(&mut zip, package)?;

        Ok(zip.generate()?)
    }

    /// Write the [Content_Types].xml part.
    fn write_content_types(zip: &mut ZipArchiveWriter, package: &OpcPackage) -> Result<()> {
        let cti = ContentTypesItem::from_package(package);
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        Self::write_member(zip, &uri, cti.to_xml().into_bytes())
    }

    /// Write package-level relationships.
    fn write_pkg_rels(zip: &mut ZipArchiveWriter, package: &OpcPackage) -> Result<()> {
        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let rels_uri = package_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        Self::write_member(zip, &rels_uri, package.rels().to_xml().into_bytes())
    }

    /// Write all parts, each preceded by its relationships part.
    fn write_parts(zip: &mut ZipArchiveWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            if !part.rels().is_empty() {
                let rels_uri = part
                    .partname()
                    .rels_uri()
                    .map_err(OpcError::InvalidPackUri)?;
                Self::write_member(zip, &rels_uri, part.rels().to_xml().into_bytes())?;
            }
            Self::write_member(zip, part.partname(), part.blob().to_vec())?;
        }
        Ok(())
    }

    fn write_member(zip: &mut ZipArchiveWriter, uri: &PackURI, data: Vec<u8>) -> Result<()> {
        trace!(member = uri.membername(), size = data.len(), "writing package member");
        zip.add_entry(uri.membername(), data)?;
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping. Sorted
/// maps keep the output deterministic.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    /// Create a new ContentTypesItem with the standard defaults.
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Build ContentTypesItem from an OPC package.
    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Add a content type for a part.
    ///
    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if Self::is_default_content_type(ext, content_type) {
            self.defaults.insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    /// Check if an extension/content-type pair is a standard default.
    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)
        )
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        // Writing into a String cannot fail
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES);

        for (ext, content_type) in &self.defaults {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            );
        }

        for (partname, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            );
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::part::{Part, XmlPart};

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(
            &PackURI::new("/word/document.xml").unwrap(),
            ct::WML_DOCUMENT_MAIN,
        );
        cti.add_content_type(&PackURI::new("/customXml/item1.xml").unwrap(), ct::XML);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        // Plain XML parts are covered by the default
        assert!(!xml.contains("customXml"));
    }

    #[test]
    fn test_member_order() {
        let mut pkg = OpcPackage::new();
        let doc = PackURI::new("/word/document.xml").unwrap();
        let styles = PackURI::new("/word/styles.xml").unwrap();

        let mut doc_part = XmlPart::new(doc.clone(), ct::WML_DOCUMENT_MAIN, "<d/>");
        doc_part.relate_to(&styles, rt::STYLES);
        pkg.relate_to(&doc, rt::OFFICE_DOCUMENT);
        pkg.add_part(Box::new(doc_part)).unwrap();
        pkg.add_part(Box::new(XmlPart::new(styles, ct::WML_STYLES, "<s/>")))
            .unwrap();

        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_dangling_relationship_produces_no_bytes() {
        let mut pkg = OpcPackage::new();
        pkg.relate_to(&PackURI::new("/word/document.xml").unwrap(), rt::OFFICE_DOCUMENT);
        assert!(matches!(
            PackageWriter::to_bytes(&pkg),
            Err(OpcError::DanglingRelationship(_))
        ));
    }
}
