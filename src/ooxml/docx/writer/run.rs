/// Run (`w:r`) serialization.
use crate::common::xml::escape_xml;
use crate::document::Run;
use crate::ooxml::error::Result;

/// Serialize one run.
///
/// Text always goes into `<w:t xml:space="preserve">` so leading and
/// trailing spaces survive, and is always escaped. Empty runs are still
/// written; Word accepts an empty `w:t`.
pub(crate) fn write_run(run: &Run, xml: &mut String) -> Result<()> {
    xml.push_str("<w:r>");

    if run.is_styled() {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/>");
        }
        if run.italic {
            xml.push_str("<w:i/>");
        }
        xml.push_str("</w:rPr>");
    }

    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape_xml(&strip_invalid_xml_chars(&run.text)));
    xml.push_str("</w:t>");

    xml.push_str("</w:r>");
    Ok(())
}

/// Drop characters that XML 1.0 does not allow anywhere in a document.
fn strip_invalid_xml_chars(text: &str) -> std::borrow::Cow<'_, str> {
    let is_valid = |c: char| {
        matches!(
            c,
            '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
        )
    };
    if text.chars().all(is_valid) {
        std::borrow::Cow::Borrowed(text)
    } else {
        std::borrow::Cow::Owned(text.chars().filter(|&c| is_valid(c)).collect())
    }
}
