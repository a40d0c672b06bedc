//! The self-contained printable page around an HTML body.

use crate::common::xml::escape_html;

/// Shown in place of an empty body.
pub const EMPTY_BODY: &str = "<p>No content available</p>";

const STYLESHEET: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        font-size: 11pt;
        line-height: 1.6;
        color: #1a1a1a;
        padding: 40px;
        max-width: 800px;
        margin: 0 auto;
        background: white;
    }
    h1 { font-size: 20pt; font-weight: 700; margin-bottom: 12pt; color: #111; border-bottom: 2px solid #333; padding-bottom: 6pt; }
    h2 { font-size: 14pt; font-weight: 600; margin-top: 16pt; margin-bottom: 8pt; color: #222; border-bottom: 1px solid #ddd; padding-bottom: 4pt; }
    h3 { font-size: 12pt; font-weight: 600; margin-top: 12pt; margin-bottom: 6pt; color: #333; }
    p { margin-bottom: 10pt; }
    ul { margin-left: 20pt; margin-bottom: 10pt; }
    li { margin-bottom: 4pt; }
    strong { font-weight: 600; }
    em { font-style: italic; }
    .toolbar {
        position: fixed;
        top: 0; left: 0; right: 0;
        background: linear-gradient(135deg, #6366f1, #8b5cf6);
        color: white;
        padding: 15px 25px;
        display: flex;
        justify-content: space-between;
        align-items: center;
        z-index: 1000;
    }
    .toolbar-btn {
        background: white;
        color: #6366f1;
        border: none;
        padding: 10px 20px;
        border-radius: 8px;
        font-weight: 600;
        cursor: pointer;
    }
    .with-toolbar .content { margin-top: 70px; }
    @media print {
        .toolbar { display: none !important; }
        .with-toolbar .content { margin-top: 0; }
        body { padding: 0; }
    }
"#;

const TOOLBAR: &str = r#"<div class="toolbar">
<span class="toolbar-text">Use Ctrl+P (Cmd+P on Mac) or the button to save as PDF</span>
<button class="toolbar-btn" id="printBtn" type="button">Print / Save PDF</button>
</div>
"#;

const PRINT_SCRIPT: &str = r#"<script>
document.getElementById('printBtn').addEventListener('click', function () { window.print(); });
</script>
"#;

/// Wrap `body` in a complete HTML document.
///
/// `title` is escaped. An empty or whitespace-only body is replaced by
/// [`EMPTY_BODY`].
pub fn render_page(body: &str, title: &str, print_toolbar: bool) -> String {
    let body = if body.trim().is_empty() { EMPTY_BODY } else { body };

    let mut html = String::with_capacity(STYLESHEET.len() + body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(&escape_html(title));
    html.push_str("</title>\n<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n");

    if print_toolbar {
        html.push_str("<body class=\"with-toolbar\">\n");
        html.push_str(TOOLBAR);
    } else {
        html.push_str("<body>\n");
    }

    html.push_str("<div class=\"content\">\n");
    html.push_str(body);
    html.push_str("\n</div>\n");

    if print_toolbar {
        html.push_str(PRINT_SCRIPT);
    }
    html.push_str("</body>\n</html>\n");
    html
}
