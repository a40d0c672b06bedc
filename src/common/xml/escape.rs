use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automata are built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

static HTML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\""])
        .expect("Failed to build HTML escaper")
});

/// Escape the five XML special characters.
///
/// Safe for both text content and attribute values. Every `&` is escaped,
/// including one that already starts an entity, so the output always
/// unescapes to exactly the input.
///
/// # Examples
///
/// ```
/// use career_export::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"it's\"</tag>"), "&lt;tag&gt;&quot;it&apos;s&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("&amp;"), "&amp;amp;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Escape text for HTML element content and double-quoted attributes.
///
/// Markdown markers (`*`, `#`, `-`, `` ` ``, `[`) pass through untouched, so
/// escaping can run before markdown conversion.
///
/// # Examples
///
/// ```
/// use career_export::common::xml::escape_html;
/// assert_eq!(escape_html("**R&D** <team>"), "**R&amp;D** &lt;team&gt;");
/// assert_eq!(escape_html("it's"), "it's");
/// ```
#[inline]
pub fn escape_html(s: &str) -> String {
    HTML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml_all_specials() {
        let escaped = escape_xml(r#"<foo & "bar" 'baz'>"#);
        assert_eq!(
            escaped,
            "&lt;foo &amp; &quot;bar&quot; &apos;baz&apos;&gt;"
        );
    }

    #[test]
    fn test_escape_xml_passthrough() {
        assert_eq!(escape_xml(""), "");
        assert_eq!(escape_xml("Senior Engineer"), "Senior Engineer");
        assert_eq!(escape_xml("Zürich · 日本"), "Zürich · 日本");
    }

    #[test]
    fn test_escape_html_keeps_markdown_markers() {
        assert_eq!(escape_html("# *a* - `b` [c](d)"), "# *a* - `b` [c](d)");
        assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
    }
}
