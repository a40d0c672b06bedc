//! Configuration for document export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default maximum length of the job title and company filename segments.
pub const DEFAULT_FILENAME_SEGMENT_LIMIT: usize = 30;

/// Options controlling both export paths.
///
/// Every field has a default, so a partial YAML file only needs to name the
/// fields it changes.
///
/// # Examples
///
/// ```rust
/// use career_export::export::ExportOptions;
///
/// let options = ExportOptions::new()
///     .with_core_properties(false)
///     .with_print_toolbar(false)
///     .with_filename_segment_limit(20);
/// assert!(!options.core_properties);
/// assert_eq!(options.filename_segment_limit, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Write `docProps/core.xml` with the document title when one is given
    pub core_properties: bool,

    /// Creation/modification time recorded in the core properties.
    ///
    /// `None` leaves the timestamps out, which keeps repeated exports of the
    /// same input byte-identical.
    pub creation_time: Option<DateTime<Utc>>,

    /// Include the "Print / Save PDF" toolbar and its script in HTML output
    pub print_toolbar: bool,

    /// Maximum characters of the sanitized job title and company segments
    pub filename_segment_limit: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            core_properties: true,
            creation_time: None,
            print_toolbar: true,
            filename_segment_limit: DEFAULT_FILENAME_SEGMENT_LIMIT,
        }
    }
}

impl ExportOptions {
    /// Create new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether core properties are written.
    pub fn with_core_properties(mut self, core_properties: bool) -> Self {
        self.core_properties = core_properties;
        self
    }

    /// Set the creation time recorded in core properties.
    pub fn with_creation_time(mut self, creation_time: Option<DateTime<Utc>>) -> Self {
        self.creation_time = creation_time;
        self
    }

    /// Set whether the HTML page carries the print toolbar.
    pub fn with_print_toolbar(mut self, print_toolbar: bool) -> Self {
        self.print_toolbar = print_toolbar;
        self
    }

    /// Set the maximum length of the job title and company segments. Zero is treated as one.
    pub fn with_filename_segment_limit(mut self, limit: usize) -> Self {
        self.filename_segment_limit = limit.max(1);
        self
    }
}

#[cfg(feature = "yaml")]
impl ExportOptions {
    /// Load options from a YAML document.
    ///
    /// ```rust
    /// use career_export::export::ExportOptions;
    ///
    /// let options = ExportOptions::from_yaml_str("print_toolbar: false\n")?;
    /// assert!(!options.print_toolbar);
    /// assert!(options.core_properties);
    /// # Ok::<(), career_export::Error>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> crate::common::Result<Self> {
        let options: Self = serde_saphyr::from_str(yaml).map_err(|e| {
            crate::common::Error::Config(format!("Failed to parse export options: {}", e))
        })?;
        let limit = options.filename_segment_limit;
        Ok(options.with_filename_segment_limit(limit))
    }

    /// Serialize options to YAML.
    pub fn to_yaml_string(&self) -> crate::common::Result<String> {
        serde_saphyr::to_string(self).map_err(|e| {
            crate::common::Error::Config(format!("Failed to serialize export options: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert!(options.core_properties);
        assert!(options.print_toolbar);
        assert!(options.creation_time.is_none());
        assert_eq!(options.filename_segment_limit, 30);
    }

    #[test]
    fn test_segment_limit_floor() {
        assert_eq!(ExportOptions::new().with_filename_segment_limit(0).filename_segment_limit, 1);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_round_trip() {
        use chrono::TimeZone;

        let options = ExportOptions::new()
            .with_creation_time(Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()))
            .with_filename_segment_limit(12);
        let yaml = options.to_yaml_string().unwrap();
        let back = ExportOptions::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, options);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_errors_are_config_errors() {
        let err = ExportOptions::from_yaml_str("print_toolbar: [not, a, bool]").unwrap_err();
        assert!(matches!(err, crate::common::Error::Config(_)));
    }
}
