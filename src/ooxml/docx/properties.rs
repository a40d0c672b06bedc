//! Core document properties (`docProps/core.xml`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// Document core properties (metadata).
///
/// Only the fields the exporter can fill are modeled. Timestamps are
/// optional so that output stays byte-for-byte reproducible unless a
/// creation time is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreProperties {
    /// Document title
    pub title: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl CoreProperties {
    /// Create new empty core properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set both creation and modification time.
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate the core properties part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp=""#);
        xml.push_str(namespace::OPC_CORE_PROPERTIES);
        xml.push_str(r#"" xmlns:dc=""#);
        xml.push_str(namespace::DC);
        xml.push_str(r#"" xmlns:dcterms=""#);
        xml.push_str(namespace::DCTERMS);
        xml.push_str(r#"" xmlns:xsi=""#);
        xml.push_str(namespace::XSI);
        xml.push_str(r#"">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_xml(title));
            xml.push_str("</dc:title>");
        }

        if let Some(ref creator) = self.creator {
            xml.push_str("<dc:creator>");
            xml.push_str(&escape_xml(creator));
            xml.push_str("</dc:creator>");
        }

        if let Some(ref created) = self.created {
            xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
            xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:created>");
        }

        if let Some(ref modified) = self.modified {
            xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
            xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_properties_builder() {
        let props = CoreProperties::new().title("Cover Letter").creator("Jane Doe");
        assert_eq!(props.title, Some("Cover Letter".to_string()));
        assert_eq!(props.creator, Some("Jane Doe".to_string()));
        assert!(props.created.is_none());

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Cover Letter</dc:title>"));
        assert!(xml.contains("<dc:creator>Jane Doe</dc:creator>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let xml = CoreProperties::new().title("Resume <Acme & Co>").to_xml();
        assert!(xml.contains("<dc:title>Resume &lt;Acme &amp; Co&gt;</dc:title>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_timestamps_use_w3cdtf() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let xml = CoreProperties::new().timestamp(at).to_xml();
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-01-15T09:30:00Z</dcterms:created>"#
        ));
        assert!(xml.contains("<dcterms:modified"));
    }
}
