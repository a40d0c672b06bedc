/// An in-memory OPC package under construction.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// Parts in insertion order plus the package-level relationships.
///
/// Insertion order is the order parts are written into the archive.
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// # Errors
    /// [`OpcError::DuplicatePart`] if a part with the same partname exists.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains_part(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Check whether a part with the given partname exists.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Get a part by partname.
    pub fn get_part(&self, partname: &PackURI) -> Option<&dyn Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .map(|p| &**p)
    }

    /// Iterate over parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|p| &**p)
    }

    /// Number of parts, not counting `[Content_Types].xml` and `.rels` parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a package-level relationship and return its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target).r_id().to_string()
    }

    /// Check that every relationship targets a part of this package.
    ///
    /// # Errors
    /// [`OpcError::DanglingRelationship`] naming the first missing target.
    pub fn validate(&self) -> Result<()> {
        let all_rels = std::iter::once(&self.rels).chain(self.parts.iter().map(|p| p.rels()));
        for rels in all_rels {
            for rel in rels.iter() {
                if !self.contains_part(rel.target_partname()) {
                    return Err(OpcError::DanglingRelationship(
                        rel.target_partname().to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
