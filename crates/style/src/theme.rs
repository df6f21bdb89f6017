//! The visual theme shared by every report kind.
//!
//! A theme is constant for one composition run. All sizes are in points.
use attest_types::Color;
use serde::{Deserialize, Serialize};

/// PostScript names of the standard Type1 fonts used for each role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontFamilies {
    pub regular: String,
    pub bold: String,
    pub italic: String,
}

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            regular: "Helvetica".to_string(),
            bold: "Helvetica-Bold".to_string(),
            italic: "Helvetica-Oblique".to_string(),
        }
    }
}

impl FontFamilies {
    pub fn all(&self) -> [&str; 3] {
        [&self.regular, &self.bold, &self.italic]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizes {
    pub institution: f32,
    pub subtitle: f32,
    pub title: f32,
    pub heading: f32,
    pub body: f32,
    pub small: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            institution: 16.0,
            subtitle: 10.0,
            title: 18.0,
            heading: 13.0,
            body: 10.0,
            small: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub on_primary: Color,
    pub text: Color,
    pub muted: Color,
    pub table_stripe: Color,
    pub table_border: Color,
    pub box_fill: Color,
    pub box_border: Color,
    pub page_border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x1a, 0x3c, 0x6e),
            accent: Color::rgb(0xc8, 0x10, 0x2e),
            on_primary: Color::WHITE,
            text: Color::rgb(0x22, 0x22, 0x22),
            muted: Color::rgb(0x66, 0x66, 0x66),
            table_stripe: Color::rgb(0xf2, 0xf5, 0xfa),
            table_border: Color::rgb(0xc9, 0xd3, 0xe3),
            box_fill: Color::rgb(0xfa, 0xfa, 0xfa),
            box_border: Color::rgb(0xb0, 0xb7, 0xc3),
            page_border: Color::rgb(0x1a, 0x3c, 0x6e),
        }
    }
}

/// Fixed block dimensions. Renderers reserve exactly these heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockMetrics {
    pub header_height: f32,
    pub title_height: f32,
    pub heading_height: f32,
    pub row_height: f32,
    /// Share of the table width given to the label column.
    pub label_column_ratio: f32,
    pub section_title_height: f32,
    pub content_padding: f32,
    pub section_spacing: f32,
    pub signature_height: f32,
    pub signature_gap: f32,
    pub checkbox_size: f32,
    pub page_border_inset: f32,
    pub continuation_height: f32,
}

impl Default for BlockMetrics {
    fn default() -> Self {
        Self {
            header_height: 70.0,
            title_height: 42.0,
            heading_height: 28.0,
            row_height: 25.0,
            label_column_ratio: 0.35,
            section_title_height: 20.0,
            content_padding: 10.0,
            section_spacing: 14.0,
            signature_height: 72.0,
            signature_gap: 30.0,
            checkbox_size: 8.0,
            page_border_inset: 20.0,
            continuation_height: 24.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleTheme {
    pub fonts: FontFamilies,
    pub sizes: FontSizes,
    pub palette: Palette,
    pub metrics: BlockMetrics,
}
