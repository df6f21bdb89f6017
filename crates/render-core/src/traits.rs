use crate::error::RenderError;
use crate::types::{Stroke, TextRun};
use attest_types::{Color, Point, Rect};

/// The drawing primitive composers depend on.
///
/// Coordinates are in points with the origin at the top-left corner of the page and
/// `y` growing downwards. Implementations flip them as their output format requires.
/// Calls are strictly sequential: every draw call applies to the page most recently
/// opened with `begin_page`.
pub trait DrawSurface {
    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), RenderError>;

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), RenderError>;

    fn text(&mut self, run: TextRun) -> Result<(), RenderError>;

    /// Number of pages begun so far.
    fn page_count(&self) -> usize;
}
