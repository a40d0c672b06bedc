/// Relationships between the parts of an OPC package.
///
/// Only internal relationships exist in the packages written here: every
/// target is another part of the same package, referenced relative to the
/// source part's directory.
use std::fmt::Write as FmtWrite;

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference relative to the source's base URI
    target_ref: String,

    /// Absolute partname of the target
    target_partname: PackURI,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference as written into the `.rels` part.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Get the absolute partname of the target.
    #[inline]
    pub fn target_partname(&self) -> &PackURI {
        &self.target_partname
    }
}

/// Ordered collection of relationships from a single source.
///
/// Relationship IDs are assigned sequentially (`rId1`, `rId2`, ...) in the
/// order relationships are added, and serialization keeps that order.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for computing relative references
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Directory of the source part ("/" for the package)
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Get or add a relationship to a target part.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns that relationship. Otherwise, creates a new one with the
    /// next rId.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> &Relationship {
        let existing = self
            .rels
            .iter()
            .position(|rel| rel.reltype == reltype && rel.target_partname == *target);

        let idx = match existing {
            Some(idx) => idx,
            None => {
                self.rels.push(Relationship {
                    r_id: format!("rId{}", self.rels.len() + 1),
                    reltype: reltype.to_string(),
                    target_ref: target.relative_ref(&self.base_uri),
                    target_partname: target.clone(),
                });
                self.rels.len() - 1
            },
        };
        &self.rels[idx]
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get an iterator over all relationships, in rId order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get the number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        // Writing into a String cannot fail
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/")
    }
}
