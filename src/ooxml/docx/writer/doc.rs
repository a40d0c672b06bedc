/// Main document part (`word/document.xml`) serialization.
use std::fmt::Write as FmtWrite;

use super::paragraph::write_paragraph;
use crate::document::RichDocument;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;

/// US Letter page width and height, in twentieths of a point.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;

/// One-inch page margins.
const PAGE_MARGIN: u32 = 1440;

/// Generate the main document part for a rich document.
///
/// One `w:p` per block in document order; an empty document gets a single
/// empty paragraph so Word opens it. The body always ends with the section
/// properties.
pub fn generate_document_xml(doc: &RichDocument) -> Result<String> {
    let mut xml = String::with_capacity(512 + doc.len() * 160);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
        namespace::WML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;
    xml.push_str("<w:body>");

    if doc.is_empty() {
        xml.push_str("<w:p/>");
    }
    for block in doc {
        write_paragraph(block, &mut xml)?;
    }

    write_section_properties(&mut xml)?;

    xml.push_str("</w:body>");
    xml.push_str("</w:document>");
    Ok(xml)
}

/// The sectPr must be the last element in the body.
fn write_section_properties(xml: &mut String) -> Result<()> {
    xml.push_str("<w:sectPr>");
    write!(xml, r#"<w:pgSz w:w="{PAGE_WIDTH}" w:h="{PAGE_HEIGHT}"/>"#)?;
    write!(
        xml,
        r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="720" w:footer="720" w:gutter="0"/>"#,
        m = PAGE_MARGIN
    )?;
    xml.push_str("</w:sectPr>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Run};

    #[test]
    fn test_empty_document() {
        let xml = generate_document_xml(&RichDocument::default()).unwrap();
        assert!(xml.contains("<w:body><w:p/><w:sectPr>"));
        assert_eq!(xml.matches("<w:p/>").count(), 1);
        assert!(!xml.contains("<w:p>"));
    }

    #[test]
    fn test_blocks_in_order() {
        let doc = RichDocument::new(vec![
            Block::Paragraph {
                runs: vec![Run::plain("first")],
            },
            Block::Paragraph {
                runs: vec![Run::plain("second")],
            },
        ]);
        let xml = generate_document_xml(&doc).unwrap();
        let first = xml.find("first").unwrap();
        let second = xml.find("second").unwrap();
        assert!(first < second);
        assert!(!xml.contains("<w:p/>"));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }
}
