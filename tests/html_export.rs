//! HTML export through the public entry points.
#![cfg(feature = "html")]

use career_export::export::{HTML_MEDIA_TYPE, DocumentExporter, ExportOptions};
use career_export::export_to_html;
use career_export::html::{EMPTY_BODY, markdown_to_html};

fn page(markdown: &str, title: &str) -> String {
    String::from_utf8(export_to_html(markdown, "Cover_Letter_Dev_Acme_2024-01-15", title).bytes)
        .unwrap()
}

fn content(page: &str) -> &str {
    let start = page.find("<div class=\"content\">\n").unwrap() + "<div class=\"content\">\n".len();
    let end = page[start..].find("\n</div>").unwrap() + start;
    &page[start..end]
}

#[test]
fn test_result_metadata() {
    let result = export_to_html("Hi", "Cover_Letter_Dev_Acme_2024-01-15", "Letter");
    assert_eq!(result.suggested_filename, "Cover_Letter_Dev_Acme_2024-01-15.html");
    assert_eq!(result.media_type, HTML_MEDIA_TYPE);
}

#[test]
fn test_full_document() {
    let html = page(
        "# Jane Doe\n\n## Experience\n- **Acme** - *Lead*\n- Shipped `v2`\n\nThanks for reading.",
        "Jane Doe",
    );
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Jane Doe</title>"));
    assert_eq!(
        content(&html),
        "<h1>Jane Doe</h1>\n<h2>Experience</h2>\n\
         <ul><li><strong>Acme</strong> - <em>Lead</em></li><li>Shipped v2</li></ul>\n\
         <p>Thanks for reading.</p>"
    );
}

#[test]
fn test_source_markup_is_inert() {
    let html = page("<img src=x onerror=alert(1)>", "t");
    assert!(!html.contains("<img"));
    assert!(content(&html).contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn test_empty_source_placeholder() {
    let html = page("   \n\n", "t");
    assert_eq!(content(&html), EMPTY_BODY);
}

#[test]
fn test_plain_text_yields_one_paragraph() {
    let body = markdown_to_html("I am excited to apply.");
    assert_eq!(body.matches("<p>").count(), 1);
    assert!(!body.contains("<p></p>"));
}

#[test]
fn test_toolbar_toggle() {
    let with = page("x", "t");
    assert!(with.contains("Print / Save PDF"));
    assert!(with.contains("window.print()"));

    let exporter = DocumentExporter::with_options(ExportOptions::new().with_print_toolbar(false));
    let without = String::from_utf8(exporter.export_html("x", "f", "t").bytes).unwrap();
    assert!(!without.contains("Print / Save PDF"));
    assert!(without.contains("<p>x</p>"));
}

#[test]
fn test_nested_emphasis_is_well_formed() {
    assert_eq!(markdown_to_html("***x***"), "<p><strong><em>x</em></strong></p>");
    assert_eq!(
        markdown_to_html("**a *b* c**"),
        "<p><strong>a <em>b</em> c</strong></p>"
    );
}

#[test]
fn test_bare_bullet_markers_dropped() {
    assert_eq!(markdown_to_html("- a\n- \n-\n*\n- b"), "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(markdown_to_html("-"), "");
}
