//! Fixed-layout PKZIP records.
//!
//! All multi-byte fields are little-endian. The byteorder-aware integer
//! types have an alignment of one, so the `repr(C)` structs below carry no
//! padding and serialize to exactly the record sizes the format mandates.

use zerocopy::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4B50;
pub const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4B50;
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4B50;

/// "Version needed to extract" for stored entries (2.0).
pub const VERSION_NEEDED: u16 = 20;
/// "Version made by": MS-DOS attribute compatibility, APPNOTE version 2.0.
pub const VERSION_MADE_BY: u16 = 20;
/// Compression method 0, stored.
pub const METHOD_STORED: u16 = 0;

pub const LOCAL_FILE_HEADER_LEN: usize = 30;
pub const CENTRAL_DIRECTORY_HEADER_LEN: usize = 46;
pub const END_OF_CENTRAL_DIRECTORY_LEN: usize = 22;

/// Local file header, written immediately before each entry's name and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct LocalFileHeader {
    pub signature: U32,
    pub version_needed: U16,
    pub flags: U16,
    pub compression_method: U16,
    pub last_mod_time: U16,
    pub last_mod_date: U16,
    pub crc32: U32,
    pub compressed_size: U32,
    pub uncompressed_size: U32,
    pub file_name_length: U16,
    pub extra_field_length: U16,
}

impl LocalFileHeader {
    /// Header for an uncompressed entry with a zero timestamp.
    pub fn stored(crc32: u32, size: u32, file_name_length: u16) -> Self {
        Self {
            signature: U32::new(LOCAL_FILE_HEADER_SIGNATURE),
            version_needed: U16::new(VERSION_NEEDED),
            flags: U16::ZERO,
            compression_method: U16::new(METHOD_STORED),
            last_mod_time: U16::ZERO,
            last_mod_date: U16::ZERO,
            crc32: U32::new(crc32),
            compressed_size: U32::new(size),
            uncompressed_size: U32::new(size),
            file_name_length: U16::new(file_name_length),
            extra_field_length: U16::ZERO,
        }
    }
}

/// Central directory file header, one per entry after all entry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct CentralDirectoryHeader {
    pub signature: U32,
    pub version_made_by: U16,
    pub version_needed: U16,
    pub flags: U16,
    pub compression_method: U16,
    pub last_mod_time: U16,
    pub last_mod_date: U16,
    pub crc32: U32,
    pub compressed_size: U32,
    pub uncompressed_size: U32,
    pub file_name_length: U16,
    pub extra_field_length: U16,
    pub file_comment_length: U16,
    pub disk_number_start: U16,
    pub internal_attributes: U16,
    pub external_attributes: U32,
    pub local_header_offset: U32,
}

impl CentralDirectoryHeader {
    /// Directory record mirroring [`LocalFileHeader::stored`].
    pub fn stored(crc32: u32, size: u32, file_name_length: u16, local_header_offset: u32) -> Self {
        Self {
            signature: U32::new(CENTRAL_DIRECTORY_SIGNATURE),
            version_made_by: U16::new(VERSION_MADE_BY),
            version_needed: U16::new(VERSION_NEEDED),
            flags: U16::ZERO,
            compression_method: U16::new(METHOD_STORED),
            last_mod_time: U16::ZERO,
            last_mod_date: U16::ZERO,
            crc32: U32::new(crc32),
            compressed_size: U32::new(size),
            uncompressed_size: U32::new(size),
            file_name_length: U16::new(file_name_length),
            extra_field_length: U16::ZERO,
            file_comment_length: U16::ZERO,
            disk_number_start: U16::ZERO,
            internal_attributes: U16::ZERO,
            external_attributes: U32::ZERO,
            local_header_offset: U32::new(local_header_offset),
        }
    }
}

/// End of central directory record, the last 22 bytes of the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct EndOfCentralDirectory {
    pub signature: U32,
    pub disk_number: U16,
    pub central_directory_disk: U16,
    pub entries_on_disk: U16,
    pub total_entries: U16,
    pub central_directory_size: U32,
    pub central_directory_offset: U32,
    pub comment_length: U16,
}

impl EndOfCentralDirectory {
    /// Single-disk EOCD record without an archive comment.
    pub fn new(entries: u16, central_directory_size: u32, central_directory_offset: u32) -> Self {
        Self {
            signature: U32::new(END_OF_CENTRAL_DIRECTORY_SIGNATURE),
            disk_number: U16::ZERO,
            central_directory_disk: U16::ZERO,
            entries_on_disk: U16::new(entries),
            total_entries: U16::new(entries),
            central_directory_size: U32::new(central_directory_size),
            central_directory_offset: U32::new(central_directory_offset),
            comment_length: U16::ZERO,
        }
    }
}

const _: () = assert!(core::mem::size_of::<LocalFileHeader>() == LOCAL_FILE_HEADER_LEN);
const _: () = assert!(core::mem::size_of::<CentralDirectoryHeader>() == CENTRAL_DIRECTORY_HEADER_LEN);
const _: () = assert!(core::mem::size_of::<EndOfCentralDirectory>() == END_OF_CENTRAL_DIRECTORY_LEN);
