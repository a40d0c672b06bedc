use thiserror::Error;

/// Error returned by archive construction.
///
/// Every variant describes a fault in how the archive was assembled, not a
/// property of user text: the writer either returns a complete archive or
/// one of these, never partial output.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] ErrorKind);

impl Error {
    /// The specific failure.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

/// The kinds of archive construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The same path was registered twice.
    #[error("duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// The path is empty, absolute, or uses backslash separators.
    #[error("invalid entry path: {0:?}")]
    InvalidPath(String),

    /// The UTF-8 encoded path does not fit the 16-bit filename length field.
    #[error("entry path is {len} bytes, longer than the 65535 byte limit")]
    PathTooLong { len: usize },

    /// The entry count does not fit the 16-bit EOCD fields.
    #[error("{0} entries exceed the 65535 entry limit of non-ZIP64 archives")]
    TooManyEntries(usize),

    /// A size or offset does not fit its 32-bit header field.
    #[error("{what} of {size} bytes exceeds the 4 GiB limit of non-ZIP64 archives")]
    ArchiveTooLarge { what: &'static str, size: u64 },

    /// The serialized central directory does not sit where the headers say.
    #[error("{field}: expected {expected}, found {actual}")]
    OffsetMismatch {
        field: &'static str,
        expected: u64,
        actual: u64,
    },
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, Error>;
