//! Minimal ZIP archive writer for Office Open XML packages.
//!
//! This crate writes PKZIP archives whose entries are *stored*
//! (uncompressed), which is all a `.docx` package needs to be opened by word
//! processors. It has no reader and no compression: the point is a small,
//! auditable encoder whose central directory offsets are verified before
//! any bytes are handed back.
//!
//! # Quick Start
//!
//! ```rust
//! use career_zip::ZipArchiveWriter;
//!
//! let mut writer = ZipArchiveWriter::new();
//! writer.add_entry("[Content_Types].xml", b"<Types/>".to_vec())?;
//! writer.add_entry("word/document.xml", b"<w:document/>".to_vec())?;
//! let archive = writer.finish()?;
//!
//! assert_eq!(archive.entries().len(), 2);
//! assert_eq!(archive.entries()[1].local_header_offset(), 30 + 19 + 8);
//! # Ok::<(), career_zip::Error>(())
//! ```
#![forbid(unsafe_code)]

mod crc;
mod errors;
pub mod headers;
mod writer;

pub use crc::{crc32, crc32_chunk, POLYNOMIAL};
pub use errors::{Error, ErrorKind, Result};
pub use writer::{Archive, ZipArchiveWriter, ZipEntry};
