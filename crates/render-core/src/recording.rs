use crate::error::RenderError;
use crate::traits::DrawSurface;
use crate::types::{DrawOp, Stroke, TextRun};
use attest_types::{Color, Point, Rect, Size};

/// A surface that keeps every draw call in memory, grouped by page.
///
/// Used to inspect layout decisions without producing a PDF.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pages: Vec<RecordedPage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn ops(&self, page_index: usize) -> &[DrawOp] {
        self.pages
            .get(page_index)
            .map(|p| p.ops.as_slice())
            .unwrap_or(&[])
    }

    /// All text runs on a page, in draw order.
    pub fn texts(&self, page_index: usize) -> Vec<&TextRun> {
        self.ops(page_index)
            .iter()
            .filter_map(DrawOp::as_text)
            .collect()
    }

    /// Index of the first page carrying a text run equal to `content`.
    pub fn find_text(&self, content: &str) -> Option<(usize, &TextRun)> {
        self.pages.iter().enumerate().find_map(|(i, page)| {
            page.ops
                .iter()
                .filter_map(DrawOp::as_text)
                .find(|run| run.content == content)
                .map(|run| (i, run))
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|page| {
            page.ops
                .iter()
                .filter_map(DrawOp::as_text)
                .any(|run| run.content.contains(needle))
        })
    }

    fn push(&mut self, op: DrawOp) -> Result<(), RenderError> {
        let page = self
            .pages
            .last_mut()
            .ok_or_else(|| RenderError::SurfaceState("draw call before begin_page".into()))?;
        page.ops.push(op);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError> {
        self.pages.push(RecordedPage {
            size: Size::new(width, height),
            ops: Vec::new(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.push(DrawOp::FillRect { rect, color })
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), RenderError> {
        self.push(DrawOp::StrokeRect { rect, stroke })
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), RenderError> {
        self.push(DrawOp::Line { from, to, stroke })
    }

    fn text(&mut self, run: TextRun) -> Result<(), RenderError> {
        self.push(DrawOp::Text(run))
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
