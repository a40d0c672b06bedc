//! Unified error types for the exporter.
//!
//! This module provides a single error type that wraps the failures of the
//! archive, package and configuration layers, presenting a consistent API
//! to callers.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
