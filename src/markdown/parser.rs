//! Line-oriented block parser building a [`RichDocument`].

use std::sync::LazyLock;

use regex::Regex;

use super::inline::{strip_markup, tokenize};
use crate::document::{Block, HeadingLevel, RichDocument};

/// `---`, `***`, `___` and longer runs of the same character.
static HORIZONTAL_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap());

/// How a source line is classified before its text is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Heading(HeadingLevel),
    Bullet,
    Paragraph,
}

/// Parse markdown source into a document.
///
/// Never fails: lines that cannot be classified become paragraphs and
/// unpaired markers stay literal. Blank lines, horizontal rules and lines
/// with no visible text left after stripping produce no block.
pub fn parse(markdown: &str) -> RichDocument {
    markdown.lines().filter_map(parse_line).collect()
}

/// Parse a single source line; `None` when the line yields no block.
pub fn parse_line(line: &str) -> Option<Block> {
    let line = line.trim();
    if line.is_empty() || HORIZONTAL_RULE_RE.is_match(line) {
        return None;
    }

    let (kind, content) = classify(line);
    let content = strip_markup(content.trim_start());
    if content.trim().is_empty() {
        return None;
    }

    // Markers can enclose nothing but whitespace, as in `** **`
    let runs = tokenize(&content);
    if runs.iter().all(|run| run.text.trim().is_empty()) {
        return None;
    }

    Some(match kind {
        LineKind::Heading(level) => Block::Heading { level, runs },
        LineKind::Bullet => Block::BulletItem { runs },
        LineKind::Paragraph => Block::Paragraph { runs },
    })
}

/// Split the block prefix from a trimmed line.
fn classify(line: &str) -> (LineKind, &str) {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let rest = &line[hashes..];
    if let Some(level) = HeadingLevel::from_depth(hashes)
        && (rest.is_empty() || rest.starts_with(' '))
    {
        return (LineKind::Heading(level), rest);
    }

    // A bare marker is an empty bullet once the line has been trimmed
    if line == "-" || line == "*" {
        return (LineKind::Bullet, "");
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return (LineKind::Bullet, rest);
    }

    (LineKind::Paragraph, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Run;

    #[test]
    fn test_plain_line_round_trips() {
        let doc = parse("   Built distributed systems at scale.  ");
        assert_eq!(
            doc.blocks(),
            &[Block::Paragraph {
                runs: vec![Run::plain("Built distributed systems at scale.")]
            }]
        );
    }

    #[test]
    fn test_heading_levels() {
        let doc = parse("# One\n## Two\n### Three\n#### Four");
        let levels: Vec<_> = doc
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => Some(level.depth()),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![Some(1), Some(2), Some(3), None]);
        assert_eq!(doc.blocks()[3].text(), "#### Four");
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let doc = parse("#hashtag");
        assert!(matches!(doc.blocks()[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_bullets_with_either_marker() {
        let doc = parse("- **Rust** expert\n* *Go* familiar");
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.blocks()[0],
            Block::BulletItem {
                runs: vec![Run::bold("Rust"), Run::plain(" expert")]
            }
        );
        assert_eq!(
            doc.blocks()[1],
            Block::BulletItem {
                runs: vec![Run::italic("Go"), Run::plain(" familiar")]
            }
        );
    }

    #[test]
    fn test_blank_lines_and_rules_dropped() {
        let doc = parse("\n\nFirst\n\n---\n***\n___\n\nSecond\n   \n");
        let texts: Vec<_> = doc.iter().map(Block::text).collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }

    #[test]
    fn test_code_fence_line_dropped() {
        let doc = parse("```\nlet x = 1;\n```");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks()[0].text(), "let x = 1;");
    }

    #[test]
    fn test_heading_with_link_and_code() {
        let doc = parse("## [Portfolio](https://jane.dev) and `crates`");
        assert_eq!(doc.blocks()[0].text(), "Portfolio and crates");
    }

    #[test]
    fn test_empty_bullet_dropped() {
        assert!(parse("- \n-    ").is_empty());
        assert!(parse_line("# ").is_none());
    }

    #[test]
    fn test_whitespace_only_emphasis_dropped() {
        assert!(parse_line("** **").is_none());
        assert!(parse_line("- **   **").is_none());
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").is_empty());
    }
}
