use super::*;

/// Styling knobs for a conversion.
///
/// The defaults reproduce the rendering the Docs service is known to accept:
/// Consolas for code, a 36 PT indent step for quotes, bold header rows.
#[derive(Clone, Debug)]
pub struct Config {
    /// Font applied to inline code and fenced code blocks.
    pub code_font_family: String,
    /// Bold the first table row when the source declares a header.
    pub bold_header_rows: bool,
    /// Indent per blockquote nesting level, in points.
    pub blockquote_indent_pt: f64,
    /// Refuse to pad a ragged table row by more than this many empty cells.
    pub table_padding_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            code_font_family: "Consolas".into(),
            bold_header_rows: true,
            blockquote_indent_pt: 36.0,
            table_padding_cap: 10,
        }
    }
}

// #f5f5f5, the background shared by inline code and fenced blocks.
pub(crate) const CODE_BACKGROUND: RgbColor = RgbColor {
    red: 0.96,
    green: 0.96,
    blue: 0.96,
};

// Light gray used for both the blockquote bar and the horizontal rule.
pub(crate) const BORDER_GRAY: RgbColor = RgbColor {
    red: 0.7,
    green: 0.7,
    blue: 0.7,
};

// #1155cc, the tint Docs itself gives link text.
pub(crate) const LINK_BLUE: RgbColor = RgbColor {
    red: 0.0667,
    green: 0.3333,
    blue: 0.8,
};

pub(crate) const CODE_FONT_WEIGHT: u32 = 400;
pub(crate) const BLOCKQUOTE_BORDER_WIDTH_PT: f64 = 3.0;
pub(crate) const BLOCKQUOTE_BORDER_PADDING_PT: f64 = 12.0;
pub(crate) const HR_BORDER_WIDTH_PT: f64 = 1.0;
pub(crate) const HR_PADDING_PT: f64 = 6.0;

// U+2611 / U+2610, how task-list checkboxes survive as plain text.
pub(crate) const CHECKBOX_CHECKED: &str = "☑ ";
pub(crate) const CHECKBOX_UNCHECKED: &str = "☐ ";
