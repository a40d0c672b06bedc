//! Inline scanning: one line of markdown into styled runs.
//!
//! Only `**bold**` and `*italic*` survive as styling. Inline code and link
//! syntax are reduced to their visible text by [`strip_markup`] before the
//! scan, and anything the scanner cannot pair up is kept as literal text.

use std::borrow::Cow;
use std::sync::LazyLock;

use memchr::{memchr, memchr_iter, memmem};
use regex::Regex;

use crate::document::Run;

/// `` `code` `` spans; the content is kept.
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// `[text](url)` links; only the text is kept.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());

/// Reduce inline code and links to their visible text and drop stray backticks.
///
/// Returns the input unchanged (borrowed) when there is nothing to strip.
///
/// ```rust
/// use career_export::markdown::strip_markup;
///
/// assert_eq!(strip_markup("see [docs](https://x.io) and `cargo`"), "see docs and cargo");
/// assert_eq!(strip_markup("```"), "");
/// ```
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if memchr(b'`', text.as_bytes()).is_none() && memchr(b'[', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let text = match INLINE_CODE_RE.replace_all(text, "$1") {
        Cow::Borrowed(s) => LINK_RE.replace_all(s, "$1"),
        Cow::Owned(s) => Cow::Owned(LINK_RE.replace_all(&s, "$1").into_owned()),
    };

    if text.contains('`') {
        Cow::Owned(text.replace('`', ""))
    } else {
        text
    }
}

/// Split already-stripped text into runs.
///
/// Bold is tried before italic at every `*`, so `**x**` never turns into an
/// italic run with leftover asterisks, and `***x***` is one bold italic run.
/// An italic opener must be followed by a non-whitespace character and
/// closes at the next single `*`. The inside of a span is scanned again, so
/// emphasis nests. Markers that are unterminated or enclose nothing stay in
/// the surrounding plain text. Adjacent literal text is never split across
/// runs.
///
/// ```rust
/// use career_export::document::Run;
/// use career_export::markdown::tokenize;
///
/// let runs = tokenize("**bold** and *italic*");
/// assert_eq!(runs, vec![Run::bold("bold"), Run::plain(" and "), Run::italic("italic")]);
/// ```
pub fn tokenize(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    scan(text, Emphasis::default(), &mut runs);
    runs
}

/// Styling inherited from the enclosing spans.
#[derive(Debug, Clone, Copy, Default)]
struct Emphasis {
    bold: bool,
    italic: bool,
}

impl Emphasis {
    fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    fn with_italic(self) -> Self {
        Self { italic: true, ..self }
    }
}

fn scan(text: &str, style: Emphasis, runs: &mut Vec<Run>) {
    let bytes = text.as_bytes();
    // Start of the pending literal text
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'*', &bytes[pos..]) {
        let star = pos + offset;

        if bytes[star..].starts_with(b"***") {
            let content_start = star + 3;
            if let Some(len) = memmem::find(&bytes[content_start..], b"***")
                && len > 0
            {
                push_literal(runs, &text[literal_start..star], style);
                let inner = &text[content_start..content_start + len];
                scan(inner, style.with_bold().with_italic(), runs);
                pos = content_start + len + 3;
                literal_start = pos;
                continue;
            }
        }

        if bytes.get(star + 1) == Some(&b'*') {
            let content_start = star + 2;
            match memmem::find(&bytes[content_start..], b"**") {
                Some(len) if len > 0 => {
                    let end = bold_content_end(bytes, content_start, content_start + len);
                    push_literal(runs, &text[literal_start..star], style);
                    scan(&text[content_start..end], style.with_bold(), runs);
                    pos = end + 2;
                    literal_start = pos;
                },
                _ => pos = content_start,
            }
            continue;
        }

        let content_start = star + 1;
        let opens = text[content_start..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace());
        if opens && let Some(close) = find_single_star(bytes, content_start) {
            push_literal(runs, &text[literal_start..star], style);
            scan(&text[content_start..close], style.with_italic(), runs);
            pos = close + 1;
            literal_start = pos;
        } else {
            pos = content_start;
        }
    }

    push_literal(runs, &text[literal_start..], style);
}

/// End of a bold span's content given the first `**` after it.
///
/// In `**a *b***` the first `**` belongs to the italic closer, so when the
/// content holds an unpaired `*` and the closer is a run of three, the span
/// ends one byte later.
fn bold_content_end(bytes: &[u8], content_start: usize, closer: usize) -> usize {
    let open_single = memchr_iter(b'*', &bytes[content_start..closer]).count() % 2 == 1;
    if open_single && bytes.get(closer + 2) == Some(&b'*') {
        closer + 1
    } else {
        closer
    }
}

/// Position of the first `*` at or after `from` that is not part of a `**` pair.
fn find_single_star(bytes: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(offset) = memchr(b'*', &bytes[pos..]) {
        let star = pos + offset;
        if bytes.get(star + 1) == Some(&b'*') {
            // Skip the whole asterisk run
            pos = star + 1;
            while bytes.get(pos) == Some(&b'*') {
                pos += 1;
            }
            continue;
        }
        return Some(star);
    }
    None
}

#[inline]
fn push_literal(runs: &mut Vec<Run>, text: &str, style: Emphasis) {
    if !text.is_empty() {
        runs.push(Run {
            text: text.to_string(),
            bold: style.bold,
            italic: style.italic,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_run() {
        let line = "Led a team of  five engineers, shipped v2.";
        assert_eq!(tokenize(line), vec![Run::plain(line)]);
    }

    #[test]
    fn test_bold_then_italic() {
        let runs = tokenize("**bold** and *italic*");
        assert_eq!(runs.len(), 3);
        assert!(runs[0].bold && !runs[0].italic);
        assert!(!runs[1].is_styled());
        assert!(runs[2].italic && !runs[2].bold);
    }

    #[test]
    fn test_unterminated_markers_stay_literal() {
        assert_eq!(tokenize("**not closed"), vec![Run::plain("**not closed")]);
        assert_eq!(tokenize("*not closed"), vec![Run::plain("*not closed")]);
        assert_eq!(tokenize("a ** b"), vec![Run::plain("a ** b")]);
    }

    #[test]
    fn test_empty_markers_stay_literal() {
        assert_eq!(tokenize("****"), vec![Run::plain("****")]);
        assert_eq!(tokenize("x ** y"), vec![Run::plain("x ** y")]);
    }

    #[test]
    fn test_italic_requires_non_space_opener() {
        assert_eq!(tokenize("5 * 3 * 2"), vec![Run::plain("5 * 3 * 2")]);
    }

    fn bold_italic(text: &str) -> Run {
        Run {
            text: text.to_string(),
            bold: true,
            italic: true,
        }
    }

    #[test]
    fn test_bold_inside_italic() {
        let runs = tokenize("*a **b** c*");
        assert_eq!(runs, vec![Run::italic("a "), bold_italic("b"), Run::italic(" c")]);
    }

    #[test]
    fn test_italic_inside_bold() {
        let runs = tokenize("**a *b* c**");
        assert_eq!(runs, vec![Run::bold("a "), bold_italic("b"), Run::bold(" c")]);
    }

    #[test]
    fn test_triple_asterisks_are_bold_italic() {
        assert_eq!(tokenize("***x***"), vec![bold_italic("x")]);
        assert_eq!(
            tokenize("see ***this*** now"),
            vec![Run::plain("see "), bold_italic("this"), Run::plain(" now")]
        );
    }

    #[test]
    fn test_italic_closing_at_end_of_bold() {
        let runs = tokenize("**a *b***");
        assert_eq!(runs, vec![Run::bold("a "), bold_italic("b")]);
    }

    #[test]
    fn test_nested_runs_carry_no_markers() {
        for line in ["**a *b* c**", "*a **b** c*", "***x***", "**a *b***"] {
            assert!(tokenize(line).iter().all(|r| !r.text.contains('*')), "{line}");
        }
    }

    #[test]
    fn test_mixed_with_surrounding_text() {
        let runs = tokenize("Skills: **Rust**, *Go*, SQL");
        assert_eq!(
            runs,
            vec![
                Run::plain("Skills: "),
                Run::bold("Rust"),
                Run::plain(", "),
                Run::italic("Go"),
                Run::plain(", SQL"),
            ]
        );
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let runs = tokenize("Café **Zürich** – *naïve*");
        assert_eq!(
            runs,
            vec![
                Run::plain("Café "),
                Run::bold("Zürich"),
                Run::plain(" – "),
                Run::italic("naïve"),
            ]
        );
    }

    #[test]
    fn test_strip_markup_borrows_when_clean() {
        assert!(matches!(strip_markup("plain words"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_markup_code_and_links() {
        assert_eq!(strip_markup("use `serde` daily"), "use serde daily");
        assert_eq!(strip_markup("[GitHub](https://github.com/x)"), "GitHub");
        assert_eq!(strip_markup("stray ` tick"), "stray  tick");
        assert_eq!(strip_markup("[not a link]"), "[not a link]");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
