//! Block renderers.
//!
//! A [`Block`] is one visual unit of a report. Flow blocks are drawn at the canvas
//! cursor and advance it. `Footer` and `PageBorder` only switch on page decorations,
//! which [`decoration::PageDecorations`] applies to every page.

mod acknowledgment;
mod content;
pub mod decoration;
mod header;
mod heading;
mod signature;
mod table;

use crate::pipeline::config::Institution;
use attest_layout::{LayoutCanvas, LayoutError};
use attest_render_core::TextRun;
use attest_style::StyleTheme;
use attest_types::Color;
use chrono::NaiveDate;
use std::fmt;

pub use decoration::PageDecorations;

/// One label/value row of an info table.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

impl InfoRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A person expected to sign the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Signatory {
    pub role: String,
    /// Printed above the signing rule when known.
    pub name: Option<String>,
}

impl Signatory {
    pub fn new(role: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            role: role.into(),
            name: name.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Header,
    Title(String),
    SectionHeading(String),
    InfoTable(Vec<InfoRow>),
    ContentSection { title: String, body: String },
    Acknowledgment(Vec<String>),
    SignatureBlock { left: Signatory, right: Signatory },
    Footer,
    PageBorder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Header,
    Title,
    SectionHeading,
    InfoTable,
    ContentSection,
    Acknowledgment,
    SignatureBlock,
    Footer,
    PageBorder,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Header => "header",
            BlockKind::Title => "title",
            BlockKind::SectionHeading => "section-heading",
            BlockKind::InfoTable => "info-table",
            BlockKind::ContentSection => "content-section",
            BlockKind::Acknowledgment => "acknowledgment",
            BlockKind::SignatureBlock => "signature",
            BlockKind::Footer => "footer",
            BlockKind::PageBorder => "page-border",
        };
        f.write_str(name)
    }
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header => BlockKind::Header,
            Block::Title(_) => BlockKind::Title,
            Block::SectionHeading(_) => BlockKind::SectionHeading,
            Block::InfoTable(_) => BlockKind::InfoTable,
            Block::ContentSection { .. } => BlockKind::ContentSection,
            Block::Acknowledgment(_) => BlockKind::Acknowledgment,
            Block::SignatureBlock { .. } => BlockKind::SignatureBlock,
            Block::Footer => BlockKind::Footer,
            Block::PageBorder => BlockKind::PageBorder,
        }
    }

    /// Page decorations are drawn by the decorator, not at the cursor.
    pub fn is_decoration(&self) -> bool {
        matches!(self, Block::Footer | Block::PageBorder)
    }
}

/// Where a flow block ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    pub kind: BlockKind,
    pub label: String,
    /// Zero-based page index.
    pub page: usize,
    pub top: f32,
    pub height: f32,
}

impl PlacedBlock {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Read-only inputs shared by every block of one composition.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
    pub theme: &'a StyleTheme,
    pub institution: &'a Institution,
    pub generated_on: NaiveDate,
}

/// Draws one flow block at the cursor. Returns `None` for decoration blocks.
pub fn render_block(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    block: &Block,
    keep_with_next: f32,
) -> Result<Option<PlacedBlock>, LayoutError> {
    let placed = match block {
        Block::Header => header::render(canvas, ctx)?,
        Block::Title(text) => heading::render_title(canvas, ctx, text)?,
        Block::SectionHeading(text) => {
            heading::render_section_heading(canvas, ctx, text, keep_with_next)?
        }
        Block::InfoTable(rows) => table::render(canvas, ctx, rows)?,
        Block::ContentSection { title, body } => content::render(canvas, ctx, title, body)?,
        Block::Acknowledgment(items) => acknowledgment::render(canvas, ctx, items)?,
        Block::SignatureBlock { left, right } => signature::render(canvas, ctx, left, right)?,
        Block::Footer | Block::PageBorder => return Ok(None),
    };
    log::debug!(
        "placed {} '{}' on page {} at y={:.1} (h={:.1})",
        placed.kind,
        placed.label,
        placed.page + 1,
        placed.top,
        placed.height
    );
    Ok(Some(placed))
}

/// Height a block needs on its page, if it is known before rendering.
///
/// Used to keep a section heading on the same page as the table under it.
pub fn fixed_height(block: &Block, theme: &StyleTheme) -> f32 {
    match block {
        Block::InfoTable(rows) => table::height(rows.len(), theme),
        _ => 0.0,
    }
}

pub(crate) fn text_run(
    x: f32,
    y: f32,
    content: impl Into<String>,
    font: &str,
    font_size: f32,
    color: Color,
) -> TextRun {
    TextRun {
        x,
        y,
        content: content.into(),
        font: font.to_string(),
        font_size,
        color,
    }
}

/// Moves the cursor down by `gap`, never past the bottom of the content area.
pub(crate) fn skip(canvas: &mut LayoutCanvas<'_>, gap: f32) {
    let room = canvas.remaining().max(0.0);
    canvas.advance(gap.min(room));
}

pub(crate) fn placed(
    canvas: &LayoutCanvas<'_>,
    kind: BlockKind,
    label: impl Into<String>,
    top: f32,
    height: f32,
) -> PlacedBlock {
    PlacedBlock {
        kind,
        label: label.into(),
        page: canvas.page_index(),
        top,
        height,
    }
}

/// Human date used in tables, footers and signature stamps.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use attest_layout::{LayoutConfig, NoDecorations, PageFrame};
    use attest_render_core::RecordingSurface;
    use attest_style::PageSettings;

    pub fn context<'a>(theme: &'a StyleTheme, institution: &'a Institution) -> BlockContext<'a> {
        BlockContext {
            theme,
            institution,
            generated_on: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        }
    }

    /// Runs `f` against a fresh A4 canvas with no page decorations.
    pub fn with_canvas<T>(
        surface: &mut RecordingSurface,
        f: impl FnOnce(&mut LayoutCanvas<'_>) -> T,
    ) -> T {
        let frame = PageFrame::from_settings(&PageSettings::default(), 0.0).unwrap();
        let mut canvas = LayoutCanvas::new(surface, &NoDecorations, frame, LayoutConfig::default());
        canvas.begin().unwrap();
        let out = f(&mut canvas);
        canvas.finish().unwrap();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorations_are_not_flow_blocks() {
        assert!(Block::Footer.is_decoration());
        assert!(Block::PageBorder.is_decoration());
        assert!(!Block::Header.is_decoration());
        assert_eq!(Block::Title("x".into()).kind(), BlockKind::Title);
    }

    #[test]
    fn dates_use_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "09 Mar 2024");
    }
}
