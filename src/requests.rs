//! Serde model of the Google Docs `batchUpdate` request schema.
//!
//! Serialization *is* the wire format: a [`Request`] serializes to the
//! single-key object the Docs service expects (`{"insertText": {...}}`), with
//! camelCase member names throughout, so a serialized request list can be
//! dropped into a `batchUpdate` body unchanged.

use super::*;

/// One entry of a `batchUpdate` request array.
///
/// Indices are 1-based and absolute, valid at the moment the service applies
/// the request given the order the planner chose.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    InsertText {
        location: Location,
        text: String,
    },
    InsertInlineImage {
        location: Location,
        uri: String,
    },
    InsertTable {
        location: Location,
        rows: usize,
        columns: usize,
    },
    UpdateTextStyle {
        range: DocRange,
        text_style: TextStyle,
        fields: String,
    },
    UpdateParagraphStyle {
        range: DocRange,
        paragraph_style: ParagraphStyle,
        fields: String,
    },
    CreateParagraphBullets {
        range: DocRange,
        bullet_preset: BulletPreset,
    },
    DeleteParagraphBullets {
        range: DocRange,
    },
}

/// A `batchUpdate` request body, `{"requests": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchUpdateBody {
    pub requests: Vec<Request>,
}

/// Wrap a request list as the body `documents.batchUpdate` accepts.
pub fn batch_update_body(requests: Vec<Request>) -> BatchUpdateBody {
    BatchUpdateBody { requests }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub index: usize,
}

/// Half-open index range; `end_index` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRange {
    pub start_index: usize,
    pub end_index: usize,
}

/// Character-level style fragment.
///
/// Only the keys named by the accompanying fields mask are touched by the
/// service; everything here is therefore optional and skipped when unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    pub(crate) fn bold() -> Self {
        TextStyle {
            bold: Some(true),
            ..Default::default()
        }
    }

    pub(crate) fn italic() -> Self {
        TextStyle {
            italic: Some(true),
            ..Default::default()
        }
    }

    pub(crate) fn strikethrough() -> Self {
        TextStyle {
            strikethrough: Some(true),
            ..Default::default()
        }
    }

    /// Link text is underlined and tinted the Docs link blue on top of
    /// carrying the destination itself.
    pub(crate) fn link_to(url: &str) -> Self {
        TextStyle {
            underline: Some(true),
            foreground_color: Some(OptionalColor::rgb(LINK_BLUE)),
            link: Some(Link {
                url: url.to_owned(),
            }),
            ..Default::default()
        }
    }

    /// Inline code: monospace plus the light background.
    pub(crate) fn inline_code(font_family: &str) -> Self {
        TextStyle {
            background_color: Some(OptionalColor::rgb(CODE_BACKGROUND)),
            ..Self::code_font(font_family)
        }
    }

    /// Fenced code text: monospace only, the background comes from paragraph
    /// shading.
    pub(crate) fn code_font(font_family: &str) -> Self {
        TextStyle {
            weighted_font_family: Some(WeightedFontFamily {
                font_family: font_family.to_owned(),
                weight: CODE_FONT_WEIGHT,
            }),
            ..Default::default()
        }
    }

    /// Overlay `other` on top of `self`; keys set in `other` win.
    pub(crate) fn merge(&mut self, other: &TextStyle) {
        let TextStyle {
            bold,
            italic,
            underline,
            strikethrough,
            weighted_font_family,
            background_color,
            foreground_color,
            link,
        } = other;
        if bold.is_some() {
            self.bold = *bold;
        }
        if italic.is_some() {
            self.italic = *italic;
        }
        if underline.is_some() {
            self.underline = *underline;
        }
        if strikethrough.is_some() {
            self.strikethrough = *strikethrough;
        }
        if weighted_font_family.is_some() {
            self.weighted_font_family = weighted_font_family.clone();
        }
        if background_color.is_some() {
            self.background_color = *background_color;
        }
        if foreground_color.is_some() {
            self.foreground_color = *foreground_color;
        }
        if link.is_some() {
            self.link = link.clone();
        }
    }

    /// Fields mask naming the keys this fragment sets, in declaration order.
    pub fn fields_mask(&self) -> String {
        let mut fields = Vec::new();
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.italic.is_some() {
            fields.push("italic");
        }
        if self.underline.is_some() {
            fields.push("underline");
        }
        if self.strikethrough.is_some() {
            fields.push("strikethrough");
        }
        if self.weighted_font_family.is_some() {
            fields.push("weightedFontFamily");
        }
        if self.background_color.is_some() {
            fields.push("backgroundColor");
        }
        if self.foreground_color.is_some() {
            fields.push("foregroundColor");
        }
        if self.link.is_some() {
            fields.push("link");
        }
        fields.join(",")
    }
}

/// Paragraph-level style fragment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_first_line: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_end: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<ParagraphBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<ParagraphBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading: Option<Shading>,
}

impl ParagraphStyle {
    pub(crate) fn named(style: NamedStyleType) -> Self {
        ParagraphStyle {
            named_style_type: Some(style),
            ..Default::default()
        }
    }

    /// Indent plus a gray vertical bar; the closest Docs gets to a semantic
    /// blockquote.
    pub(crate) fn blockquote(indent_pt: f64) -> Self {
        ParagraphStyle {
            indent_start: Some(Dimension::pt(indent_pt)),
            indent_first_line: Some(Dimension::pt(indent_pt)),
            border_left: Some(ParagraphBorder {
                color: OptionalColor::rgb(BORDER_GRAY),
                width: Dimension::pt(BLOCKQUOTE_BORDER_WIDTH_PT),
                padding: Dimension::pt(BLOCKQUOTE_BORDER_PADDING_PT),
                dash_style: DashStyle::Solid,
            }),
            ..Default::default()
        }
    }

    pub(crate) fn code_shading() -> Self {
        ParagraphStyle {
            shading: Some(Shading {
                background_color: OptionalColor::rgb(CODE_BACKGROUND),
            }),
            ..Default::default()
        }
    }

    /// An empty paragraph with a bottom border; Docs has no native rule.
    pub(crate) fn horizontal_rule() -> Self {
        ParagraphStyle {
            border_bottom: Some(ParagraphBorder {
                color: OptionalColor::rgb(BORDER_GRAY),
                width: Dimension::pt(HR_BORDER_WIDTH_PT),
                padding: Dimension::pt(HR_PADDING_PT),
                dash_style: DashStyle::Solid,
            }),
            ..Default::default()
        }
    }

    /// Fields mask naming the keys this fragment sets, in declaration order.
    pub fn fields_mask(&self) -> String {
        let mut fields = Vec::new();
        if self.named_style_type.is_some() {
            fields.push("namedStyleType");
        }
        if self.indent_start.is_some() {
            fields.push("indentStart");
        }
        if self.indent_first_line.is_some() {
            fields.push("indentFirstLine");
        }
        if self.indent_end.is_some() {
            fields.push("indentEnd");
        }
        if self.border_left.is_some() {
            fields.push("borderLeft");
        }
        if self.border_bottom.is_some() {
            fields.push("borderBottom");
        }
        if self.shading.is_some() {
            fields.push("shading");
        }
        fields.join(",")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NamedStyleType {
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
}

/// Bullet family applied to a whole list range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulletPreset {
    BulletDiscCircleSquare,
    NumberedDecimalAlphaRoman,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub(crate) fn pt(magnitude: f64) -> Self {
        Dimension {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "PT")]
    Pt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DashStyle {
    #[serde(rename = "SOLID")]
    Solid,
}

/// A vertical bar (`borderLeft`) or separator line (`borderBottom`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphBorder {
    pub color: OptionalColor,
    pub width: Dimension,
    pub padding: Dimension,
    pub dash_style: DashStyle,
}

/// Paragraph background fill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shading {
    pub background_color: OptionalColor,
}

/// The service's triple-wrapped color: `{"color": {"rgbColor": {...}}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OptionalColor {
    pub color: Color,
}

impl OptionalColor {
    pub(crate) fn rgb(rgb_color: RgbColor) -> Self {
        OptionalColor {
            color: Color { rgb_color },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub rgb_color: RgbColor,
}

/// Channel values in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    pub font_family: String,
    pub weight: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
}
