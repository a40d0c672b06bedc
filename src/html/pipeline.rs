//! Markdown to HTML body conversion as an ordered list of pure stages.
//!
//! The source is HTML-escaped before any stage runs, so every `<` in the
//! text seen by later stages was produced by an earlier stage.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::common::xml::escape_html;

/// A named, pure text transformation.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub apply: fn(&str) -> Cow<'_, str>,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// The stages, in the order they run.
pub const STAGES: &[Stage] = &[
    Stage { name: "normalize_lines", apply: normalize_lines },
    Stage { name: "strip_code_fences", apply: strip_code_fences },
    Stage { name: "strip_inline_code", apply: strip_inline_code },
    Stage { name: "strip_links", apply: strip_links },
    Stage { name: "drop_horizontal_rules", apply: drop_horizontal_rules },
    Stage { name: "headings", apply: headings },
    Stage { name: "bold_italic", apply: bold_italic },
    Stage { name: "bold", apply: bold },
    Stage { name: "italic", apply: italic },
    Stage { name: "lists", apply: lists },
    Stage { name: "paragraphs", apply: paragraphs },
    Stage { name: "cleanup", apply: cleanup },
];

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\([^)\n]*\)").unwrap());
static HORIZONTAL_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-*_]{3,}$").unwrap());
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").unwrap());
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*][^*\n]*?)\*").unwrap());
static EMPTY_PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());

/// Convert markdown source to an HTML body fragment.
///
/// Returns an empty string when the source has no visible content.
///
/// ```rust
/// use career_export::html::markdown_to_html;
///
/// assert_eq!(markdown_to_html("Hello <world>"), "<p>Hello &lt;world&gt;</p>");
/// assert_eq!(
///     markdown_to_html("# Jane\n- **Rust**\n- *Go*"),
///     "<h1>Jane</h1>\n<ul><li><strong>Rust</strong></li><li><em>Go</em></li></ul>"
/// );
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    run_stages(escape_html(markdown), STAGES)
}

/// Run `stages` over already-escaped text.
pub fn run_stages(mut text: String, stages: &[Stage]) -> String {
    for stage in stages {
        let next = match (stage.apply)(&text) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        text = next;
    }
    text
}

/// Trim every line and unify line endings.
fn normalize_lines(text: &str) -> Cow<'_, str> {
    let normalized: Vec<&str> = text.lines().map(str::trim).collect();
    let joined = normalized.join("\n");
    if joined == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(joined)
    }
}

fn strip_code_fences(text: &str) -> Cow<'_, str> {
    CODE_FENCE_RE.replace_all(text, "")
}

/// Keep inline code content, drop every backtick.
fn strip_inline_code(text: &str) -> Cow<'_, str> {
    let stripped = INLINE_CODE_RE.replace_all(text, "$1");
    if stripped.contains('`') {
        Cow::Owned(stripped.replace('`', ""))
    } else {
        stripped
    }
}

fn strip_links(text: &str) -> Cow<'_, str> {
    LINK_RE.replace_all(text, "$1")
}

fn drop_horizontal_rules(text: &str) -> Cow<'_, str> {
    HORIZONTAL_RULE_RE.replace_all(text, "")
}

fn headings(text: &str) -> Cow<'_, str> {
    HEADING_RE.replace_all(text, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{level}>{}</h{level}>", caps[2].trim())
    })
}

fn bold_italic(text: &str) -> Cow<'_, str> {
    BOLD_ITALIC_RE.replace_all(text, "<strong><em>$1</em></strong>")
}

fn bold(text: &str) -> Cow<'_, str> {
    BOLD_RE.replace_all(text, "<strong>$1</strong>")
}

/// The opening `*` must be followed by a non-space, so `* item` bullets survive.
fn italic(text: &str) -> Cow<'_, str> {
    ITALIC_RE.replace_all(text, "<em>$1</em>")
}

/// Turn `- ` / `* ` lines into `<li>` and group consecutive items in one `<ul>`.
///
/// A bare marker is an empty item and is dropped.
fn lists(text: &str) -> Cow<'_, str> {
    let is_item = |line: &str| line.starts_with("- ") || line.starts_with("* ");
    let is_bare = |line: &str| line == "-" || line == "*";
    if !text.lines().any(|line| is_item(line) || is_bare(line)) {
        return Cow::Borrowed(text);
    }

    let mut out: Vec<String> = Vec::new();
    let mut items = String::new();
    for line in text.lines() {
        if is_bare(line) {
            continue;
        }
        if is_item(line) {
            items.push_str("<li>");
            items.push_str(line[2..].trim_start());
            items.push_str("</li>");
            continue;
        }
        if !items.is_empty() {
            out.push(format!("<ul>{}</ul>", std::mem::take(&mut items)));
        }
        out.push(line.to_string());
    }
    if !items.is_empty() {
        out.push(format!("<ul>{items}</ul>"));
    }
    Cow::Owned(out.join("\n"))
}

/// Wrap every non-blank line that is not already a block element in `<p>`.
fn paragraphs(text: &str) -> Cow<'_, str> {
    const BLOCK_TAGS: [&str; 4] = ["<h1>", "<h2>", "<h3>", "<ul>"];
    let wrapped: Vec<String> = text
        .lines()
        .map(|line| {
            if line.is_empty() || BLOCK_TAGS.iter().any(|tag| line.starts_with(tag)) {
                line.to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect();
    Cow::Owned(wrapped.join("\n"))
}

/// Remove empty paragraphs and blank lines.
fn cleanup(text: &str) -> Cow<'_, str> {
    let text = EMPTY_PARAGRAPH_RE.replace_all(text, "");
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    Cow::Owned(lines.join("\n"))
}
