use super::{BlockContext, BlockKind, PlacedBlock, placed, skip, text_run};
use attest_layout::{LayoutCanvas, LayoutError, Point, Rect};
use attest_render_core::Stroke;

const ITEM_GAP: f32 = 4.0;
const CHECK_GAP: f32 = 8.0;

/// Bordered checklist with a ticked box in front of every item.
pub(super) fn render(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    items: &[String],
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let metrics = &theme.metrics;
    let frame = *canvas.frame();
    let estimator = *canvas.estimator();
    let padding = metrics.content_padding;
    let size = theme.sizes.body;
    let line_height = estimator.line_height(size);
    let checkbox = metrics.checkbox_size;
    let text_x = frame.content_left() + padding + checkbox + CHECK_GAP;
    let text_width = frame.content_right() - padding - text_x;

    // Every item takes at least one line, even when blank.
    let wrapped: Vec<Vec<String>> = items
        .iter()
        .map(|item| estimator.wrap(item, size, text_width))
        .collect();
    let line_count: usize = wrapped.iter().map(|lines| lines.len().max(1)).sum();
    let gaps = items.len().saturating_sub(1) as f32 * ITEM_GAP;
    let height = 2.0 * padding + line_count as f32 * line_height + gaps;
    canvas.ensure_space(height)?;

    let top = canvas.cursor();
    let outline = Rect::new(frame.content_left(), top, frame.content_width(), height);
    let tick = Stroke::new(1.0, theme.palette.primary);

    let surface = canvas.surface();
    surface.stroke_rect(outline, Stroke::new(0.75, theme.palette.box_border))?;
    let mut y = top + padding;
    for lines in &wrapped {
        let box_rect = Rect::new(
            frame.content_left() + padding,
            y + (line_height - checkbox) / 2.0,
            checkbox,
            checkbox,
        );
        surface.stroke_rect(box_rect, Stroke::new(0.75, theme.palette.text))?;
        surface.line(
            Point::new(box_rect.x + 1.5, box_rect.y + checkbox * 0.55),
            Point::new(box_rect.x + checkbox * 0.4, box_rect.bottom() - 1.5),
            tick,
        )?;
        surface.line(
            Point::new(box_rect.x + checkbox * 0.4, box_rect.bottom() - 1.5),
            Point::new(box_rect.right() - 1.0, box_rect.y + 1.0),
            tick,
        )?;
        for (i, line) in lines.iter().enumerate() {
            surface.text(text_run(
                text_x,
                y + i as f32 * line_height,
                line.as_str(),
                &theme.fonts.regular,
                size,
                theme.palette.text,
            ))?;
        }
        y += lines.len().max(1) as f32 * line_height + ITEM_GAP;
    }

    canvas.advance(height);
    let label = format!("{} items", items.len());
    let block = placed(canvas, BlockKind::Acknowledgment, label, top, height);
    skip(canvas, metrics.section_spacing);
    Ok(block)
}
