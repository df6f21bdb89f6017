use super::{BlockContext, BlockKind, PlacedBlock, placed, text_run};
use attest_layout::{LayoutCanvas, LayoutError, Point};
use attest_render_core::Stroke;

/// Large centered title with a short accent rule under it.
pub(super) fn render_title(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    text: &str,
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let height = theme.metrics.title_height;
    canvas.ensure_space(height)?;

    let frame = *canvas.frame();
    let estimator = *canvas.estimator();
    let size = theme.sizes.title;
    let top = canvas.cursor();
    let title = estimator.truncate(text, size, frame.content_width());
    let width = estimator.text_width(&title, size);
    let x = frame.content_left() + (frame.content_width() - width).max(0.0) / 2.0;
    let text_y = top + 4.0;

    let rule_width = (width + 40.0).min(frame.content_width() * 0.6);
    let rule_x = frame.content_left() + (frame.content_width() - rule_width) / 2.0;
    let rule_y = text_y + size + 6.0;

    let surface = canvas.surface();
    surface.text(text_run(
        x,
        text_y,
        title.clone(),
        &theme.fonts.bold,
        size,
        theme.palette.primary,
    ))?;
    surface.line(
        Point::new(rule_x, rule_y),
        Point::new(rule_x + rule_width, rule_y),
        Stroke::new(1.5, theme.palette.accent),
    )?;

    canvas.advance(height);
    Ok(placed(canvas, BlockKind::Title, title, top, height))
}

/// Bold left-aligned heading over a full-width rule.
///
/// `keep_with_next` is the height of the block that must follow on the same page.
pub(super) fn render_section_heading(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    text: &str,
    keep_with_next: f32,
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let height = theme.metrics.heading_height;
    canvas.ensure_space(height + keep_with_next)?;

    let frame = *canvas.frame();
    let size = theme.sizes.heading;
    let top = canvas.cursor();
    let heading = canvas.estimator().truncate(text, size, frame.content_width());
    let rule_y = top + 4.0 + size + 5.0;

    let surface = canvas.surface();
    surface.text(text_run(
        frame.content_left(),
        top + 4.0,
        heading.clone(),
        &theme.fonts.bold,
        size,
        theme.palette.primary,
    ))?;
    surface.line(
        Point::new(frame.content_left(), rule_y),
        Point::new(frame.content_right(), rule_y),
        Stroke::new(0.75, theme.palette.primary),
    )?;

    canvas.advance(height);
    Ok(placed(canvas, BlockKind::SectionHeading, heading, top, height))
}
