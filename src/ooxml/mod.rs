//! Office Open XML (OOXML) package generation.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): parts, relationships, content types and the
//!    ZIP container
//! 2. **WordprocessingML** (`docx`): the parts of a Word document
//!
//! # Example
//!
//! ```rust
//! use career_export::markdown;
//! use career_export::ooxml::docx::{CoreProperties, Package};
//!
//! let doc = markdown::parse("## Summary\nBuilt **fast** things.");
//! let core = CoreProperties::new().title("Jane Doe - Resume");
//! let bytes = Package::from_document(&doc, Some(&core))?.to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), career_export::ooxml::OoxmlError>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
