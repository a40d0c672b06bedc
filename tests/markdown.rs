//! Properties of the markdown reader over arbitrary input.

use career_export::document::{Block, HeadingLevel, Run};
use career_export::markdown::{parse, tokenize};
use proptest::prelude::*;

#[test]
fn test_bold_precedence_three_runs() {
    let doc = parse("**bold** and *italic*");
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph {
            runs: vec![Run::bold("bold"), Run::plain(" and "), Run::italic("italic")],
        }]
    );
}

#[test]
fn test_nested_emphasis_in_bullet() {
    let doc = parse("- ***Lead*** at **Acme *Labs***");
    let runs = doc.blocks()[0].runs();
    let styles: Vec<(&str, bool, bool)> =
        runs.iter().map(|r| (r.text.as_str(), r.bold, r.italic)).collect();
    assert_eq!(
        styles,
        [
            ("Lead", true, true),
            (" at ", false, false),
            ("Acme ", true, false),
            ("Labs", true, true),
        ]
    );
}

#[test]
fn test_resume_outline() {
    let doc = parse(
        "# Jane Doe\n\
         jane@example.com | [GitHub](https://github.com/jane)\n\
         \n\
         ## Experience\n\
         ### Acme Corp\n\
         - Led **platform** team\n\
         * Cut *p99* latency by 40%\n",
    );
    let summary: Vec<(&str, String)> = doc
        .iter()
        .map(|b| {
            let kind = match b {
                Block::Heading { level: HeadingLevel::H1, .. } => "h1",
                Block::Heading { level: HeadingLevel::H2, .. } => "h2",
                Block::Heading { level: HeadingLevel::H3, .. } => "h3",
                Block::Paragraph { .. } => "p",
                Block::BulletItem { .. } => "li",
            };
            (kind, b.text())
        })
        .collect();

    assert_eq!(
        summary,
        [
            ("h1", "Jane Doe".to_string()),
            ("p", "jane@example.com | GitHub".to_string()),
            ("h2", "Experience".to_string()),
            ("h3", "Acme Corp".to_string()),
            ("li", "Led platform team".to_string()),
            ("li", "Cut p99 latency by 40%".to_string()),
        ]
    );
}

proptest! {
    #[test]
    fn prop_parse_never_emits_empty_blocks(source in ".*(\n.*){0,8}") {
        let doc = parse(&source);
        for block in doc.iter() {
            prop_assert!(!block.text().trim().is_empty());
            prop_assert!(!block.text().contains('`'));
        }
    }

    #[test]
    fn prop_plain_line_is_single_run(line in "[A-Za-z0-9][A-Za-z0-9 ,.;:!?()'&<>]{0,60}[A-Za-z0-9.]") {
        let doc = parse(&line);
        prop_assert_eq!(doc.len(), 1);
        prop_assert_eq!(
            &doc.blocks()[0],
            &Block::Paragraph { runs: vec![Run::plain(line.trim())] }
        );
    }

    #[test]
    fn prop_tokenize_preserves_unmarked_text(text in "[^*]{0,80}") {
        let runs = tokenize(&text);
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        prop_assert_eq!(joined, text);
        prop_assert!(runs.iter().all(|r| !r.is_styled()));
    }
}
