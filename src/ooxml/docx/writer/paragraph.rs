/// Paragraph (`w:p`) serialization.
use std::fmt::Write as FmtWrite;

use super::numbering::BULLET_NUM_ID;
use super::run::write_run;
use super::style::ParagraphStyle;
use crate::document::Block;
use crate::ooxml::error::Result;

/// Serialize one block as a paragraph.
///
/// Headings get a `w:pStyle`, bullet items a `w:numPr` at level 0 of the
/// bullet list, plain paragraphs no properties at all.
pub(crate) fn write_paragraph(block: &Block, xml: &mut String) -> Result<()> {
    xml.push_str("<w:p>");

    match block {
        Block::Heading { level, .. } => {
            let style = ParagraphStyle::heading(*level);
            write!(xml, r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style.style_id)?;
        },
        Block::BulletItem { .. } => {
            xml.push_str("<w:pPr><w:numPr>");
            xml.push_str(r#"<w:ilvl w:val="0"/>"#);
            write!(xml, r#"<w:numId w:val="{}"/>"#, BULLET_NUM_ID)?;
            xml.push_str("</w:numPr></w:pPr>");
        },
        Block::Paragraph { .. } => {},
    }

    for run in block.runs() {
        write_run(run, xml)?;
    }

    xml.push_str("</w:p>");
    Ok(())
}
