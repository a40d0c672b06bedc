/// Style definitions (`word/styles.xml`).
///
/// The style sheet is fixed: a `Normal` default paragraph style and the
/// three heading styles referenced by heading paragraphs.
use std::fmt::Write as FmtWrite;

use crate::document::HeadingLevel;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;

/// A paragraph style entry of the style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub style_id: &'static str,
    pub name: &'static str,
    /// Spacing before and after, in twentieths of a point
    pub space_before: u32,
    pub space_after: u32,
    /// Font size in half-points; `None` inherits the document default
    pub font_size: Option<u32>,
    pub bold: bool,
}

/// `Normal`, the default paragraph style.
pub const NORMAL: ParagraphStyle = ParagraphStyle {
    style_id: "Normal",
    name: "Normal",
    space_before: 0,
    space_after: 120,
    font_size: None,
    bold: false,
};

/// Heading styles, indexed by level minus one.
pub const HEADINGS: [ParagraphStyle; 3] = [
    ParagraphStyle {
        style_id: "Heading1",
        name: "heading 1",
        space_before: 240,
        space_after: 120,
        font_size: Some(32),
        bold: true,
    },
    ParagraphStyle {
        style_id: "Heading2",
        name: "heading 2",
        space_before: 200,
        space_after: 100,
        font_size: Some(28),
        bold: true,
    },
    ParagraphStyle {
        style_id: "Heading3",
        name: "heading 3",
        space_before: 160,
        space_after: 80,
        font_size: Some(24),
        bold: true,
    },
];

/// Document default font size in half-points (11pt).
const DEFAULT_FONT_SIZE: u32 = 22;

impl ParagraphStyle {
    /// The heading style for a level.
    pub fn heading(level: HeadingLevel) -> &'static ParagraphStyle {
        &HEADINGS[usize::from(level.depth()) - 1]
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        let is_default = self.style_id == NORMAL.style_id;
        write!(
            xml,
            r#"<w:style w:type="paragraph"{} w:styleId="{}"><w:name w:val="{}"/>"#,
            if is_default { r#" w:default="1""# } else { "" },
            self.style_id,
            self.name
        )?;
        if !is_default {
            xml.push_str(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#);
        }
        write!(
            xml,
            r#"<w:pPr><w:spacing w:before="{}" w:after="{}"/></w:pPr>"#,
            self.space_before, self.space_after
        )?;
        if self.bold || self.font_size.is_some() {
            xml.push_str("<w:rPr>");
            if self.bold {
                xml.push_str("<w:b/>");
            }
            if let Some(size) = self.font_size {
                write!(xml, r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#)?;
            }
            xml.push_str("</w:rPr>");
        }
        xml.push_str("</w:style>");
        Ok(())
    }
}

/// Generate the styles part.
pub fn generate_styles_xml() -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:styles xmlns:w="{}">"#, namespace::WML_MAIN)?;

    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
    write!(
        xml,
        r#"<w:sz w:val="{DEFAULT_FONT_SIZE}"/><w:szCs w:val="{DEFAULT_FONT_SIZE}"/>"#
    )?;
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    NORMAL.to_xml(&mut xml)?;
    for style in &HEADINGS {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}
