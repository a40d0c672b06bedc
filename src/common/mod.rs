//! Common types and utilities shared by the DOCX and HTML exporters.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
