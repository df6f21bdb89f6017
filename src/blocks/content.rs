use super::{BlockContext, BlockKind, PlacedBlock, placed, text_run};
use attest_layout::{LayoutCanvas, LayoutError, Rect};
use attest_render_core::Stroke;

/// Titled narrative box.
///
/// Title, box and trailing spacing are reserved together before anything is
/// drawn, so a title never ends up on a different page from its box.
pub(super) fn render(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    title: &str,
    body: &str,
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let metrics = &theme.metrics;
    let frame = *canvas.frame();
    let padding = metrics.content_padding;
    let size = theme.sizes.body;

    let reservation = canvas.reserve_text(body, size, frame.content_width() - 2.0 * padding);
    let box_height = reservation.height + 2.0 * padding;
    let title_height = metrics.section_title_height;
    canvas.ensure_space(title_height + box_height + metrics.section_spacing)?;

    let top = canvas.cursor();
    let title_size = theme.sizes.heading - 1.0;
    let heading = canvas
        .estimator()
        .truncate(title, title_size, frame.content_width());
    let body_box = Rect::new(
        frame.content_left(),
        top + title_height,
        frame.content_width(),
        box_height,
    );

    let surface = canvas.surface();
    surface.text(text_run(
        frame.content_left(),
        top + 2.0,
        heading.clone(),
        &theme.fonts.bold,
        title_size,
        theme.palette.primary,
    ))?;
    surface.fill_rect(body_box, theme.palette.box_fill)?;
    surface.stroke_rect(body_box, Stroke::new(0.75, theme.palette.box_border))?;
    for (i, line) in reservation.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        surface.text(text_run(
            body_box.x + padding,
            body_box.y + padding + i as f32 * reservation.line_height,
            line.as_str(),
            &theme.fonts.regular,
            size,
            theme.palette.text,
        ))?;
    }

    let height = title_height + box_height;
    canvas.advance(height + metrics.section_spacing);
    Ok(placed(canvas, BlockKind::ContentSection, heading, top, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::{context, with_canvas};
    use crate::pipeline::config::Institution;
    use attest_render_core::{DrawOp, RecordingSurface};
    use attest_style::StyleTheme;

    #[test]
    fn box_reserves_at_least_the_estimated_height() {
        let theme = StyleTheme::default();
        let institution = Institution::default();
        let ctx = context(&theme, &institution);
        let mut surface = RecordingSurface::new();
        let body = "The team migrated the billing service to the new queue. ".repeat(12);

        let block = with_canvas(&mut surface, |canvas| {
            let placed = render(canvas, &ctx, "Work Summary", &body).unwrap();
            assert!(canvas.remaining() >= 0.0);
            placed
        });

        let inner_width = 595.28 - 100.0 - 2.0 * theme.metrics.content_padding;
        let chars_per_line = (inner_width / (theme.sizes.body * 0.5)).floor() as usize;
        let lines = body.chars().count().div_ceil(chars_per_line);
        let minimum = lines as f32 * (theme.sizes.body + 4.0);
        let box_height = block.height - theme.metrics.section_title_height;
        assert!(box_height - 2.0 * theme.metrics.content_padding >= minimum);
    }

    #[test]
    fn every_wrapped_line_is_inside_the_box() {
        let theme = StyleTheme::default();
        let institution = Institution::default();
        let ctx = context(&theme, &institution);
        let mut surface = RecordingSurface::new();
        let body = "First paragraph of reflections.\n\nSecond paragraph after a blank line.";

        with_canvas(&mut surface, |canvas| render(canvas, &ctx, "Reflections", body).unwrap());

        let body_box = surface
            .ops(0)
            .iter()
            .find_map(|op| match op {
                DrawOp::StrokeRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        let lines: Vec<_> = surface
            .texts(0)
            .into_iter()
            .filter(|run| run.content.contains("paragraph"))
            .collect();
        assert_eq!(lines.len(), 2);
        for run in lines {
            assert!(run.y >= body_box.y);
            assert!(run.y + run.font_size <= body_box.bottom());
        }
        let (_, title) = surface.find_text("Reflections").unwrap();
        assert!(title.y < body_box.y);
    }
}
