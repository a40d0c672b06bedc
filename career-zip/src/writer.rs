//! Stored-entry archive writer.

use crate::crc::crc32;
use crate::errors::{ErrorKind, Result};
use crate::headers::{
    CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader, CENTRAL_DIRECTORY_HEADER_LEN,
    END_OF_CENTRAL_DIRECTORY_LEN, LOCAL_FILE_HEADER_LEN,
};
use std::collections::HashSet;
use zerocopy::IntoBytes;

/// An entry registered with the writer but not yet serialized.
#[derive(Debug)]
struct PendingEntry {
    path: String,
    data: Vec<u8>,
}

/// A serialized archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    path: String,
    data: Vec<u8>,
    crc32: u32,
    local_header_offset: u32,
}

impl ZipEntry {
    /// Forward-slash separated path inside the archive.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw (uncompressed) entry contents.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// CRC-32 of [`data`](Self::data).
    #[inline]
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Byte offset of this entry's local file header.
    #[inline]
    pub fn local_header_offset(&self) -> u32 {
        self.local_header_offset
    }

    /// Bytes this entry occupies before the central directory.
    #[inline]
    fn local_record_len(&self) -> usize {
        LOCAL_FILE_HEADER_LEN + self.path.len() + self.data.len()
    }

    /// Bytes this entry occupies inside the central directory.
    #[inline]
    fn central_record_len(&self) -> usize {
        CENTRAL_DIRECTORY_HEADER_LEN + self.path.len()
    }
}

/// A finished archive together with the layout it was written with.
#[derive(Debug, Clone)]
pub struct Archive {
    bytes: Vec<u8>,
    entries: Vec<ZipEntry>,
    central_directory_offset: u32,
    central_directory_size: u32,
}

impl Archive {
    /// The complete archive.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the archive, returning its bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Entries in registration order.
    #[inline]
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Offset of the first central directory record.
    #[inline]
    pub fn central_directory_offset(&self) -> u32 {
        self.central_directory_offset
    }

    /// Total size of all central directory records.
    #[inline]
    pub fn central_directory_size(&self) -> u32 {
        self.central_directory_size
    }
}

/// Builds a ZIP archive of stored (uncompressed) entries in memory.
///
/// Entries are written in the order they were added. [`generate`](Self::generate)
/// consumes the writer, so an archive is serialized exactly once.
///
/// # Example
///
/// ```rust
/// use career_zip::ZipArchiveWriter;
///
/// let mut writer = ZipArchiveWriter::new();
/// writer.add_entry("mimetype", b"text/plain".to_vec())?;
/// writer.add_entry("docs/readme.txt", b"hello".to_vec())?;
/// let bytes = writer.generate()?;
/// assert_eq!(&bytes[..4], b"PK\x03\x04");
/// # Ok::<(), career_zip::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ZipArchiveWriter {
    pending: Vec<PendingEntry>,
    paths: HashSet<String>,
}

impl ZipArchiveWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no entries have been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Register one stored entry.
    ///
    /// Paths must be relative, non-empty, use `/` separators and be unique
    /// within the archive.
    pub fn add_entry(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<()> {
        let path = path.into();
        validate_path(&path)?;
        if self.paths.contains(&path) {
            return Err(ErrorKind::DuplicateEntry(path).into());
        }
        if self.pending.len() >= usize::from(u16::MAX) {
            return Err(ErrorKind::TooManyEntries(self.pending.len() + 1).into());
        }

        self.paths.insert(path.clone());
        self.pending.push(PendingEntry {
            path,
            data: data.into(),
        });
        Ok(())
    }

    /// Serialize all entries and return the archive bytes.
    pub fn generate(self) -> Result<Vec<u8>> {
        self.finish().map(Archive::into_bytes)
    }

    /// Serialize all entries, keeping the computed layout alongside the bytes.
    pub fn finish(self) -> Result<Archive> {
        let capacity = self
            .pending
            .iter()
            .map(|e| LOCAL_FILE_HEADER_LEN + CENTRAL_DIRECTORY_HEADER_LEN + 2 * e.path.len() + e.data.len())
            .sum::<usize>()
            + END_OF_CENTRAL_DIRECTORY_LEN;
        let mut out = Vec::with_capacity(capacity);
        let mut entries = Vec::with_capacity(self.pending.len());

        // Local headers and data
        for PendingEntry { path, data } in self.pending {
            let local_header_offset = to_u32(out.len(), "local header offset")?;
            let size = to_u32(data.len(), "entry size")?;
            let crc32 = crc32(&data);

            out.extend_from_slice(LocalFileHeader::stored(crc32, size, name_len(&path)?).as_bytes());
            out.extend_from_slice(path.as_bytes());
            out.extend_from_slice(&data);

            entries.push(ZipEntry {
                path,
                data,
                crc32,
                local_header_offset,
            });
        }

        // Central directory
        let central_directory_offset = to_u32(out.len(), "central directory offset")?;
        for entry in &entries {
            let header = CentralDirectoryHeader::stored(
                entry.crc32,
                to_u32(entry.data.len(), "entry size")?,
                name_len(&entry.path)?,
                entry.local_header_offset,
            );
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(entry.path.as_bytes());
        }
        let central_directory_size =
            to_u32(out.len() - central_directory_offset as usize, "central directory size")?;

        verify_layout(&entries, central_directory_offset, central_directory_size)?;

        let entry_count =
            u16::try_from(entries.len()).map_err(|_| ErrorKind::TooManyEntries(entries.len()))?;
        out.extend_from_slice(
            EndOfCentralDirectory::new(entry_count, central_directory_size, central_directory_offset)
                .as_bytes(),
        );
        // The result must also fit a u32 to remain addressable by readers.
        to_u32(out.len(), "archive size")?;

        Ok(Archive {
            bytes: out,
            entries,
            central_directory_offset,
            central_directory_size,
        })
    }
}

/// Cross-check the emitted directory position against the structural sums.
fn verify_layout(
    entries: &[ZipEntry],
    central_directory_offset: u32,
    central_directory_size: u32,
) -> Result<()> {
    let mut expected_offset = 0usize;
    for entry in entries {
        if entry.local_header_offset as usize != expected_offset {
            return Err(ErrorKind::OffsetMismatch {
                field: "local header offset",
                expected: expected_offset as u64,
                actual: u64::from(entry.local_header_offset),
            }
            .into());
        }
        expected_offset += entry.local_record_len();
    }
    if central_directory_offset as usize != expected_offset {
        return Err(ErrorKind::OffsetMismatch {
            field: "central directory offset",
            expected: expected_offset as u64,
            actual: u64::from(central_directory_offset),
        }
        .into());
    }

    let expected_size: usize = entries.iter().map(ZipEntry::central_record_len).sum();
    if central_directory_size as usize != expected_size {
        return Err(ErrorKind::OffsetMismatch {
            field: "central directory size",
            expected: expected_size as u64,
            actual: u64::from(central_directory_size),
        }
        .into());
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') || path.ends_with('/') {
        return Err(ErrorKind::InvalidPath(path.to_string()).into());
    }
    name_len(path).map(|_| ())
}

#[inline]
fn name_len(path: &str) -> Result<u16> {
    u16::try_from(path.len()).map_err(|_| ErrorKind::PathTooLong { len: path.len() }.into())
}

#[inline]
fn to_u32(value: usize, what: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        ErrorKind::ArchiveTooLarge {
            what,
            size: value as u64,
        }
        .into()
    })
}
