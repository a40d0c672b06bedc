//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

#[cfg(feature = "docx")]
use super::types::Error;

#[cfg(feature = "docx")]
impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        use crate::ooxml::opc::error::OpcError;
        match err {
            OpcError::Zip(e) => Error::ZipError(e.to_string()),
            other => Error::Package(other.to_string()),
        }
    }
}

#[cfg(feature = "docx")]
impl From<crate::ooxml::OoxmlError> for Error {
    fn from(err: crate::ooxml::OoxmlError) -> Self {
        use crate::ooxml::OoxmlError;
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
        }
    }
}

#[cfg(feature = "docx")]
impl From<career_zip::Error> for Error {
    fn from(err: career_zip::Error) -> Self {
        Error::ZipError(err.to_string())
    }
}

#[cfg(all(test, feature = "docx"))]
mod tests {
    use super::*;
    use crate::ooxml::opc::error::OpcError;

    #[test]
    fn test_zip_errors_keep_their_category() {
        let zip_err = career_zip::Error::from(career_zip::ErrorKind::DuplicateEntry(
            "word/document.xml".to_string(),
        ));
        let err = Error::from(OpcError::Zip(zip_err));
        assert!(matches!(err, Error::ZipError(ref s) if s.contains("word/document.xml")));
    }

    #[test]
    fn test_package_errors_map_to_package() {
        let err = Error::from(OpcError::DuplicatePart("/word/styles.xml".to_string()));
        assert!(matches!(err, Error::Package(_)));
    }
}
