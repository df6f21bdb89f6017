//! Document composers and the composition engine.
//!
//! A composer turns a [`ReportDocument`] into a [`DocumentPlan`]: an ordered list
//! of blocks. [`compose`] runs any plan against one canvas, so every report kind
//! shares the same pagination and drawing code.

mod final_report;
mod joining;
mod misconduct;
mod results;
mod weekly;

use crate::blocks::{self, Block, BlockContext, BlockKind, InfoRow, PageDecorations, PlacedBlock};
use crate::error::ReportError;
use crate::pipeline::config::EngineConfig;
use attest_layout::{LayoutCanvas, PageFrame, TextEstimator};
use attest_render_core::DrawSurface;
use attest_types::report::non_blank;
use attest_types::{ReportDocument, ReportKind, Subject};
use chrono::NaiveDate;
use log::debug;

/// Placeholder for values the report does not provide.
pub const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    pub kind: ReportKind,
    /// Used by the title block's caller, the footer and the continuation strip.
    pub title: String,
    pub blocks: Vec<Block>,
}

impl DocumentPlan {
    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind() == kind).count()
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.count(kind) > 0
    }
}

/// Result of running a plan: how many pages it took and where each block landed.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub page_count: usize,
    pub placed: Vec<PlacedBlock>,
    /// Blocks that did not fit even on an otherwise empty page.
    pub overflowed_blocks: usize,
}

impl Composition {
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &PlacedBlock> {
        self.placed.iter().filter(move |b| b.kind == kind)
    }

    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks_of(kind).count()
    }
}

/// Builds the block plan for any report kind. Never fails: gaps become `N/A`.
pub fn plan_for(document: &ReportDocument) -> DocumentPlan {
    match document {
        ReportDocument::Joining(report) => joining::plan(report),
        ReportDocument::Weekly(report) => weekly::plan(report),
        ReportDocument::Final(report) => final_report::plan(report),
        ReportDocument::Misconduct(report) => misconduct::plan(report),
        ReportDocument::Results(report) => results::plan(report),
    }
}

/// Lays out `plan` on `surface`, one page after another.
pub fn compose(
    plan: &DocumentPlan,
    surface: &mut dyn DrawSurface,
    config: &EngineConfig,
    generated_on: NaiveDate,
) -> Result<Composition, ReportError> {
    config.validate()?;
    let theme = &config.theme;
    let mut decorations = PageDecorations::new(theme, TextEstimator::from_config(&config.layout));
    if plan.contains(BlockKind::Footer) {
        let left = format!("{} | {}", config.institution.name, plan.title);
        decorations = decorations.with_footer(left, generated_on);
    }
    if plan.contains(BlockKind::PageBorder) {
        decorations = decorations.with_border();
    }
    if config.continuation_header {
        decorations = decorations.with_continuation(plan.title.clone());
    }

    let frame = PageFrame::from_settings(&config.page, decorations.decoration_height())?;
    let ctx = BlockContext {
        theme,
        institution: &config.institution,
        generated_on,
    };

    let mut canvas = LayoutCanvas::new(surface, &decorations, frame, config.layout);
    canvas.begin()?;

    let mut placed = Vec::with_capacity(plan.blocks.len());
    for (i, block) in plan.blocks.iter().enumerate() {
        let keep_with_next = match (block, plan.blocks.get(i + 1)) {
            (Block::SectionHeading(_), Some(next)) => blocks::fixed_height(next, theme),
            _ => 0.0,
        };
        if let Some(p) = blocks::render_block(&mut canvas, &ctx, block, keep_with_next)? {
            placed.push(p);
        }
    }

    let summary = canvas.finish()?;
    debug!(
        "composed {:?} in {} page(s), {} block(s), {} overflow(s)",
        plan.kind,
        summary.page_count,
        placed.len(),
        summary.overflowed_blocks
    );
    Ok(Composition {
        page_count: summary.page_count,
        placed,
        overflowed_blocks: summary.overflowed_blocks,
    })
}

pub(crate) fn text_or_missing(value: Option<&str>) -> String {
    non_blank(value).unwrap_or(MISSING).to_string()
}

pub(crate) fn date_or_missing(value: Option<NaiveDate>) -> String {
    value.map(blocks::format_date).unwrap_or_else(|| MISSING.to_string())
}

/// `start to end`, or `N/A` when neither end is known.
pub(crate) fn period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    if start.is_none() && end.is_none() {
        return MISSING.to_string();
    }
    format!("{} to {}", date_or_missing(start), date_or_missing(end))
}

pub(crate) fn row(label: &str, value: Option<&str>) -> InfoRow {
    InfoRow::new(label, text_or_missing(value))
}

pub(crate) fn student_rows(subject: &Subject) -> Vec<InfoRow> {
    vec![
        row("Student Name", subject.student_name.as_deref()),
        row("Roll Number", subject.roll_number.as_deref()),
        row("Department", subject.department.as_deref()),
    ]
}

/// Adds a content section unless its text is missing or blank.
pub(crate) fn push_section(blocks: &mut Vec<Block>, title: &str, body: Option<&str>) {
    if let Some(body) = non_blank(body) {
        blocks.push(Block::ContentSection {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

/// Blocks every plan starts with.
pub(crate) fn opening(title: &str) -> Vec<Block> {
    vec![Block::Header, Block::Title(title.to_string())]
}

/// Blocks every plan ends with.
pub(crate) fn closing(blocks: &mut Vec<Block>) {
    blocks.push(Block::Footer);
    blocks.push(Block::PageBorder);
}
