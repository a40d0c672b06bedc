/// Numbering definitions (`word/numbering.xml`).
///
/// A single bullet list definition is all the exported documents need:
/// abstract numbering 0 draws a `•` at level 0, and concrete numbering 1
/// points at it. Bullet paragraphs reference [`BULLET_NUM_ID`].
use crate::ooxml::opc::constants::namespace;

/// `w:numId` referenced by bullet paragraphs.
pub const BULLET_NUM_ID: u32 = 1;

/// `w:abstractNumId` of the bullet definition.
pub const BULLET_ABSTRACT_NUM_ID: u32 = 0;

/// Left indent of bullet items, in twentieths of a point.
pub const BULLET_INDENT_LEFT: u32 = 720;

/// Hanging indent of the bullet glyph, in twentieths of a point.
pub const BULLET_INDENT_HANGING: u32 = 360;

/// Generate the numbering part.
pub fn generate_numbering_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:numbering xmlns:w="{ns}">"#,
            r#"<w:abstractNum w:abstractNumId="{abs}">"#,
            r#"<w:multiLevelType w:val="singleLevel"/>"#,
            r#"<w:lvl w:ilvl="0">"#,
            r#"<w:start w:val="1"/>"#,
            r#"<w:numFmt w:val="bullet"/>"#,
            r#"<w:lvlText w:val="•"/>"#,
            r#"<w:lvlJc w:val="left"/>"#,
            r#"<w:pPr><w:ind w:left="{left}" w:hanging="{hanging}"/></w:pPr>"#,
            r#"</w:lvl>"#,
            r#"</w:abstractNum>"#,
            r#"<w:num w:numId="{num}"><w:abstractNumId w:val="{abs}"/></w:num>"#,
            r#"</w:numbering>"#,
        ),
        ns = namespace::WML_MAIN,
        abs = BULLET_ABSTRACT_NUM_ID,
        num = BULLET_NUM_ID,
        left = BULLET_INDENT_LEFT,
        hanging = BULLET_INDENT_HANGING,
    )
}
