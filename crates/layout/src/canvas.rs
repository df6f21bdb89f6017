//! The layout canvas: page geometry, the write cursor and the page-break controller.
//!
//! One canvas exists per composition run. Block renderers borrow it mutably, read
//! the cursor, reserve space with [`LayoutCanvas::ensure_space`] and advance the
//! cursor past what they drew.

use crate::algorithms::pagination::{PageBreakDecision, check_block_fit};
use crate::text::TextEstimator;
use crate::{LayoutConfig, LayoutError};
use attest_render_core::{DrawSurface, RenderError};
use attest_style::PageSettings;
use log::{debug, warn};

/// Fixed page geometry for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Band above the bottom margin kept free for the footer.
    pub footer_reserve: f32,
    /// Height of the decoration drawn at the top of continuation pages.
    pub decoration_height: f32,
}

impl PageFrame {
    pub fn from_settings(
        settings: &PageSettings,
        decoration_height: f32,
    ) -> Result<Self, LayoutError> {
        settings.validate()?;
        let (width, height) = settings.size.dimensions_pt();
        let frame = Self {
            width,
            height,
            margin: settings.margin,
            footer_reserve: settings.footer_reserve,
            decoration_height,
        };
        if frame.usable_height(1) <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "decoration height {:.1}pt leaves no room for content",
                decoration_height
            )));
        }
        Ok(frame)
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margin
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest y any block may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin - self.footer_reserve
    }

    /// Where the cursor starts on a page. Continuation pages start below their decoration.
    pub fn page_top(&self, page_index: usize) -> f32 {
        if page_index == 0 {
            self.margin
        } else {
            self.margin + self.decoration_height
        }
    }

    pub fn usable_height(&self, page_index: usize) -> f32 {
        self.content_bottom() - self.page_top(page_index)
    }
}

/// Page-level decoration drawn independently of the cursor.
pub trait PageDecorator {
    /// Called right after a page begins (border, continuation header).
    fn open_page(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
        page_index: usize,
    ) -> Result<(), RenderError>;

    /// Called once a page holds all its content (footer).
    fn close_page(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
        page_index: usize,
    ) -> Result<(), RenderError>;
}

/// A decorator that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecorations;

impl PageDecorator for NoDecorations {
    fn open_page(
        &self,
        _: &mut dyn DrawSurface,
        _: &PageFrame,
        _: usize,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn close_page(
        &self,
        _: &mut dyn DrawSurface,
        _: &PageFrame,
        _: usize,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Wrapped lines of a text body together with the height reserved for them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextReservation {
    pub lines: Vec<String>,
    pub line_height: f32,
    /// `max(estimate x safety factor, wrapped lines x line height)`.
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSummary {
    pub page_count: usize,
    pub overflowed_blocks: usize,
}

pub struct LayoutCanvas<'a> {
    surface: &'a mut dyn DrawSurface,
    decorator: &'a dyn PageDecorator,
    frame: PageFrame,
    config: LayoutConfig,
    estimator: TextEstimator,
    current_y: f32,
    page_index: usize,
    page_open: bool,
    overflowed_blocks: usize,
}

impl<'a> LayoutCanvas<'a> {
    pub fn new(
        surface: &'a mut dyn DrawSurface,
        decorator: &'a dyn PageDecorator,
        frame: PageFrame,
        config: LayoutConfig,
    ) -> Self {
        Self {
            surface,
            decorator,
            frame,
            estimator: TextEstimator::from_config(&config),
            config,
            current_y: frame.page_top(0),
            page_index: 0,
            page_open: false,
            overflowed_blocks: 0,
        }
    }

    /// Opens the first page. Must be called once before any block renders.
    pub fn begin(&mut self) -> Result<(), LayoutError> {
        if self.page_open || self.page_index > 0 {
            return Err(RenderError::SurfaceState("canvas already started".into()).into());
        }
        self.open_page(0)
    }

    fn open_page(&mut self, page_index: usize) -> Result<(), LayoutError> {
        self.surface.begin_page(self.frame.width, self.frame.height)?;
        self.decorator
            .open_page(&mut *self.surface, &self.frame, page_index)?;
        self.page_index = page_index;
        self.current_y = self.frame.page_top(page_index);
        self.page_open = true;
        Ok(())
    }

    fn close_page(&mut self) -> Result<(), LayoutError> {
        if self.page_open {
            self.decorator
                .close_page(&mut *self.surface, &self.frame, self.page_index)?;
            self.page_open = false;
        }
        Ok(())
    }

    /// Finalizes the current page and continues on a fresh one.
    pub fn break_page(&mut self) -> Result<(), LayoutError> {
        self.close_page()?;
        let next = self.page_index + 1;
        self.open_page(next)?;
        debug!("page break: now on page {} at y={:.1}", next + 1, self.current_y);
        Ok(())
    }

    pub fn check(&self, required_height: f32) -> PageBreakDecision {
        check_block_fit(self.current_y, required_height, self.frame.content_bottom())
    }

    /// True while the cursor has not moved past the near-empty threshold of this page.
    pub fn is_near_empty(&self) -> bool {
        self.current_y <= self.page_top() + self.config.near_empty_threshold
    }

    /// Makes sure `required_height` fits below the cursor, breaking the page if it does not.
    ///
    /// A near-empty page is only kept when the block would not fit a fresh page
    /// either, or when nothing has been placed on it yet: the block overflows in
    /// place rather than leaving a blank page behind. Every overflow is counted
    /// and logged.
    pub fn ensure_space(&mut self, required_height: f32) -> Result<PageBreakDecision, LayoutError> {
        let decision = self.check(required_height);
        if decision.fits {
            return Ok(decision);
        }

        if self.is_near_empty() && !self.fits_fresh_page(required_height) {
            self.record_overflow(required_height);
            return Ok(decision);
        }

        debug!(
            "{:.1}pt needed, {:.1}pt left on page {}",
            required_height,
            decision.remaining_space,
            self.page_index + 1
        );
        self.break_page()?;
        let decision = self.check(required_height);
        if !decision.fits {
            self.record_overflow(required_height);
        }
        Ok(decision)
    }

    /// Whether moving to the next page would give the block room it does not have here.
    fn fits_fresh_page(&self, required_height: f32) -> bool {
        self.current_y > self.page_top()
            && required_height <= self.frame.usable_height(self.page_index + 1)
    }

    fn record_overflow(&mut self, required_height: f32) {
        self.overflowed_blocks += 1;
        let usable = self.frame.usable_height(self.page_index.max(1));
        if required_height > usable {
            warn!(
                "block of {:.1}pt exceeds the {:.1}pt usable page height; rendering with overflow on page {}",
                required_height,
                usable,
                self.page_index + 1
            );
        } else {
            warn!(
                "block of {:.1}pt overflows near-empty page {} ({:.1}pt left)",
                required_height,
                self.page_index + 1,
                self.remaining()
            );
        }
    }

    /// Space left between the cursor and the bottom of the content area.
    pub fn remaining(&self) -> f32 {
        self.check(0.0).remaining_space
    }

    /// Wraps `text` and computes how much height to reserve for it.
    pub fn reserve_text(&self, text: &str, font_size: f32, width: f32) -> TextReservation {
        let estimate = self.estimator.estimate(text, font_size, width);
        let lines = self.estimator.wrap(text, font_size, width);
        let line_height = self.estimator.line_height(font_size);
        let height = (estimate.height * self.config.safety_factor)
            .max(lines.len() as f32 * line_height);
        TextReservation {
            lines,
            line_height,
            height,
        }
    }

    pub fn advance(&mut self, dy: f32) {
        self.current_y += dy;
    }

    pub fn set_cursor(&mut self, y: f32) {
        self.current_y = y;
    }

    pub fn cursor(&self) -> f32 {
        self.current_y
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_top(&self) -> f32 {
        self.frame.page_top(self.page_index)
    }

    pub fn frame(&self) -> &PageFrame {
        &self.frame
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn estimator(&self) -> &TextEstimator {
        &self.estimator
    }

    pub fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut *self.surface
    }

    pub fn overflowed_blocks(&self) -> usize {
        self.overflowed_blocks
    }

    /// Closes the last page and reports what was produced.
    pub fn finish(mut self) -> Result<CanvasSummary, LayoutError> {
        self.close_page()?;
        Ok(CanvasSummary {
            page_count: self.page_index + 1,
            overflowed_blocks: self.overflowed_blocks,
        })
    }
}
