//! Deterministic, filesystem-safe export filenames.
//!
//! A filename base is `{type}_{job}_{company}_{YYYY-MM-DD}`. Every segment
//! keeps only ASCII letters, digits, spaces and hyphens and turns each run
//! of whitespace into a single `_`. The job title and company are then cut
//! to the segment limit; the document type is kept whole. The result never
//! contains path separators.

use chrono::{NaiveDate, Utc};

use super::config::DEFAULT_FILENAME_SEGMENT_LIMIT;

/// Placeholder for a segment that is empty after sanitizing.
pub const EMPTY_SEGMENT: &str = "document";

/// Build a filename base stamped with the current UTC day.
///
/// Pass an empty string for an absent job title or company.
pub fn generate_filename(doc_type: &str, job_title: &str, company: &str) -> String {
    generate_filename_on(Utc::now().date_naive(), doc_type, job_title, company)
}

/// Build a filename base for an explicit date.
///
/// ```rust
/// use career_export::export::generate_filename_on;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(
///     generate_filename_on(date, "Resume", "Senior SWE!!", "PAYBACK GmbH"),
///     "Resume_Senior_SWE_PAYBACK_GmbH_2024-01-15"
/// );
/// ```
pub fn generate_filename_on(
    date: NaiveDate,
    doc_type: &str,
    job_title: &str,
    company: &str,
) -> String {
    generate_filename_with_limit(date, doc_type, job_title, company, DEFAULT_FILENAME_SEGMENT_LIMIT)
}

/// Build a filename base with a custom limit for the job and company segments.
pub fn generate_filename_with_limit(
    date: NaiveDate,
    doc_type: &str,
    job_title: &str,
    company: &str,
    segment_limit: usize,
) -> String {
    format!(
        "{}_{}_{}_{}",
        sanitize_segment(doc_type, usize::MAX),
        sanitize_segment(job_title, segment_limit),
        sanitize_segment(company, segment_limit),
        date.format("%Y-%m-%d")
    )
}

/// Sanitize one free-text segment.
///
/// ```rust
/// use career_export::export::sanitize_segment;
///
/// assert_eq!(sanitize_segment("  Staff  Engineer / Platform ", 30), "Staff_Engineer_Platform");
/// assert_eq!(sanitize_segment("!!!", 30), "document");
/// ```
pub fn sanitize_segment(raw: &str, limit: usize) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || *c == '-')
        .collect();

    let mut segment = kept.split_ascii_whitespace().collect::<Vec<_>>().join("_");
    // Only ASCII is left, so byte and char positions agree
    segment.truncate(limit.max(1));
    let trimmed_len = segment.trim_end_matches('_').len();
    segment.truncate(trimmed_len);

    if segment.is_empty() {
        EMPTY_SEGMENT.to_string()
    } else {
        segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_reference_example() {
        assert_eq!(
            generate_filename_on(jan15(), "Resume", "Senior SWE!!", "PAYBACK GmbH"),
            "Resume_Senior_SWE_PAYBACK_GmbH_2024-01-15"
        );
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(
            generate_filename_on(jan15(), "Resume", "", ""),
            "Resume_document_document_2024-01-15"
        );
    }

    #[test]
    fn test_doc_type_is_sanitized() {
        assert_eq!(
            generate_filename_on(jan15(), "Cover Letter/..", "Dev", "Acme"),
            "Cover_Letter_Dev_Acme_2024-01-15"
        );
    }

    #[test]
    fn test_doc_type_not_truncated() {
        assert_eq!(
            generate_filename_with_limit(jan15(), "Cover Letter", "Backend Dev", "Globex", 6),
            "Cover_Letter_Backen_Globex_2024-01-15"
        );
    }

    #[test]
    fn test_truncation_trims_trailing_underscore() {
        // 29 characters then a space: the cut lands right after the `_`
        let raw = "abcdefghijklmnopqrstuvwxyzabc def";
        assert_eq!(sanitize_segment(raw, 30), "abcdefghijklmnopqrstuvwxyzabc");
        assert_eq!(sanitize_segment("a b c d", 2), "a");
    }

    #[test]
    fn test_non_ascii_removed() {
        assert_eq!(sanitize_segment("Zürich Büro", 30), "Zrich_Bro");
        assert_eq!(sanitize_segment("日本", 30), "document");
    }

    #[test]
    fn test_hyphens_kept() {
        assert_eq!(sanitize_segment("Full-Stack  Dev", 30), "Full-Stack_Dev");
    }

    #[test]
    fn test_today_suffix() {
        let name = generate_filename("Resume", "x", "y");
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        // Midnight rollover between the two calls is the only way this differs
        assert!(name.starts_with("Resume_x_y_"));
        assert_eq!(name.len(), "Resume_x_y_".len() + today.len());
    }
}
