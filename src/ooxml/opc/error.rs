/// Error types for OPC package assembly
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    #[error("Duplicate part: {0}")]
    DuplicatePart(String),

    #[error("Relationship target not in package: {0}")]
    DanglingRelationship(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] career_zip::Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
