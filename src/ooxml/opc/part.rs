/// Parts: the named units of content inside an OPC package.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// Trait representing a part in an OPC package.
///
/// Each part has a unique partname, a content type and may have
/// relationships to other parts.
pub trait Part: Send + Sync {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the serialized content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part and return its rId.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels_mut().get_or_add(reltype, target).r_id().to_string()
    }
}

/// A part holding generated XML.
#[derive(Debug, Clone)]
pub struct XmlPart {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl XmlPart {
    /// Create a part from already serialized XML.
    pub fn new(partname: PackURI, content_type: &'static str, xml: impl Into<String>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            blob: xml.into().into_bytes(),
            rels,
        }
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}
