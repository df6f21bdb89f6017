//! Page-level decoration: border, footer and the continuation strip.
//!
//! Everything here is drawn at fixed page coordinates and never touches the cursor.

use super::{format_date, text_run};
use attest_layout::{PageDecorator, PageFrame, Point, Rect, TextEstimator};
use attest_render_core::{DrawSurface, RenderError, Stroke};
use attest_style::StyleTheme;
use chrono::NaiveDate;

/// Gap between the bottom of the content area and the footer rule.
const FOOTER_RULE_GAP: f32 = 10.0;
const FOOTER_TEXT_GAP: f32 = 6.0;

/// Height the footer takes below the content area. `footerReserve` must cover it.
pub fn footer_height(theme: &StyleTheme) -> f32 {
    FOOTER_RULE_GAP + FOOTER_TEXT_GAP + theme.sizes.small
}

#[derive(Debug, Clone)]
struct FooterText {
    left: String,
    generated_on: String,
}

#[derive(Debug, Clone)]
pub struct PageDecorations {
    theme: StyleTheme,
    estimator: TextEstimator,
    footer: Option<FooterText>,
    border: bool,
    continuation: Option<String>,
}

impl PageDecorations {
    /// Starts with every decoration switched off.
    pub fn new(theme: &StyleTheme, estimator: TextEstimator) -> Self {
        Self {
            theme: theme.clone(),
            estimator,
            footer: None,
            border: false,
            continuation: None,
        }
    }

    /// Footer reading `<left> ... Generated on <date> | Page N`.
    pub fn with_footer(mut self, left: impl Into<String>, generated_on: NaiveDate) -> Self {
        self.footer = Some(FooterText {
            left: left.into(),
            generated_on: format_date(generated_on),
        });
        self
    }

    pub fn with_border(mut self) -> Self {
        self.border = true;
        self
    }

    /// Strip reading `<title> (continued)` on every page after the first.
    pub fn with_continuation(mut self, title: impl Into<String>) -> Self {
        self.continuation = Some(title.into());
        self
    }

    /// Height the continuation strip takes from the top of later pages.
    pub fn decoration_height(&self) -> f32 {
        if self.continuation.is_some() {
            self.theme.metrics.continuation_height
        } else {
            0.0
        }
    }

    fn draw_border(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
    ) -> Result<(), RenderError> {
        let inset = self.theme.metrics.page_border_inset;
        let rect = Rect::new(inset, inset, frame.width - 2.0 * inset, frame.height - 2.0 * inset);
        surface.stroke_rect(rect, Stroke::new(1.0, self.theme.palette.page_border))
    }

    fn draw_continuation(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
        title: &str,
    ) -> Result<(), RenderError> {
        let theme = &self.theme;
        let size = theme.sizes.small;
        let text = self
            .estimator
            .truncate(&format!("{} (continued)", title), size, frame.content_width());
        let rule_y = frame.margin + theme.metrics.continuation_height - 6.0;
        surface.text(text_run(
            frame.content_left(),
            frame.margin + 2.0,
            text,
            &theme.fonts.italic,
            size,
            theme.palette.muted,
        ))?;
        surface.line(
            Point::new(frame.content_left(), rule_y),
            Point::new(frame.content_right(), rule_y),
            Stroke::new(0.5, theme.palette.table_border),
        )
    }

    fn draw_footer(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
        footer: &FooterText,
        page_index: usize,
    ) -> Result<(), RenderError> {
        let theme = &self.theme;
        let size = theme.sizes.small;
        let rule_y = frame.content_bottom() + FOOTER_RULE_GAP;
        let text_y = rule_y + FOOTER_TEXT_GAP;

        let right = format!("Generated on {} | Page {}", footer.generated_on, page_index + 1);
        let right_width = self.estimator.text_width(&right, size);
        let left_room = (frame.content_width() - right_width - 20.0).max(0.0);
        let left = self.estimator.truncate(&footer.left, size, left_room);

        surface.line(
            Point::new(frame.content_left(), rule_y),
            Point::new(frame.content_right(), rule_y),
            Stroke::new(0.5, theme.palette.table_border),
        )?;
        if !left.is_empty() {
            surface.text(text_run(
                frame.content_left(),
                text_y,
                left,
                &theme.fonts.regular,
                size,
                theme.palette.muted,
            ))?;
        }
        surface.text(text_run(
            frame.content_right() - right_width,
            text_y,
            right,
            &theme.fonts.regular,
            size,
            theme.palette.muted,
        ))
    }
}

impl PageDecorator for PageDecorations {
    fn open_page(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
        page_index: usize,
    ) -> Result<(), RenderError> {
        if self.border {
            self.draw_border(surface, frame)?;
        }
        match &self.continuation {
            Some(title) if page_index > 0 => self.draw_continuation(surface, frame, title),
            _ => Ok(()),
        }
    }

    fn close_page(
        &self,
        surface: &mut dyn DrawSurface,
        frame: &PageFrame,
        page_index: usize,
    ) -> Result<(), RenderError> {
        match &self.footer {
            Some(footer) => self.draw_footer(surface, frame, footer, page_index),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_layout::LayoutConfig;
    use attest_render_core::{DrawOp, RecordingSurface};
    use attest_style::PageSettings;

    fn decorations() -> PageDecorations {
        let theme = StyleTheme::default();
        PageDecorations::new(&theme, TextEstimator::from_config(&LayoutConfig::default()))
            .with_footer("Institute | Weekly Report", NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
            .with_border()
            .with_continuation("Weekly Report")
    }

    #[test]
    fn first_page_has_border_but_no_continuation() {
        let deco = decorations();
        let frame =
            PageFrame::from_settings(&PageSettings::default(), deco.decoration_height()).unwrap();
        let mut surface = RecordingSurface::new();
        surface.begin_page(frame.width, frame.height).unwrap();
        deco.open_page(&mut surface, &frame, 0).unwrap();
        deco.close_page(&mut surface, &frame, 0).unwrap();

        assert!(matches!(surface.ops(0)[0], DrawOp::StrokeRect { .. }));
        assert!(!surface.contains_text("(continued)"));
        assert!(surface.contains_text("Generated on 17 May 2024 | Page 1"));
        assert!(surface.contains_text("Institute | Weekly Report"));
    }

    #[test]
    fn later_pages_carry_continuation_and_their_number() {
        let deco = decorations();
        let frame =
            PageFrame::from_settings(&PageSettings::default(), deco.decoration_height()).unwrap();
        let mut surface = RecordingSurface::new();
        surface.begin_page(frame.width, frame.height).unwrap();
        deco.open_page(&mut surface, &frame, 2).unwrap();
        deco.close_page(&mut surface, &frame, 2).unwrap();

        assert!(surface.find_text("Weekly Report (continued)").is_some());
        assert!(surface.contains_text("| Page 3"));
        let footer = surface
            .texts(0)
            .into_iter()
            .find(|run| run.content.starts_with("Generated on"))
            .unwrap();
        assert!(footer.y > frame.content_bottom());
    }

    #[test]
    fn no_continuation_means_no_reserved_height() {
        let theme = StyleTheme::default();
        let deco = PageDecorations::new(&theme, TextEstimator::default());
        assert_eq!(deco.decoration_height(), 0.0);
        let deco = deco.with_continuation("Final Internship Report");
        assert_eq!(deco.decoration_height(), theme.metrics.continuation_height);
    }

    #[test]
    fn footer_stays_inside_its_reserve() {
        let deco = decorations();
        let theme = StyleTheme::default();
        let settings = PageSettings {
            footer_reserve: footer_height(&theme),
            ..PageSettings::default()
        };
        let frame = PageFrame::from_settings(&settings, deco.decoration_height()).unwrap();
        let mut surface = RecordingSurface::new();
        surface.begin_page(frame.width, frame.height).unwrap();
        deco.close_page(&mut surface, &frame, 0).unwrap();

        let bottom_margin_top = frame.height - frame.margin;
        for run in surface.texts(0) {
            assert!(run.y > frame.content_bottom());
            assert!(run.y + run.font_size <= bottom_margin_top + 0.01, "{:?}", run);
        }
    }
}
