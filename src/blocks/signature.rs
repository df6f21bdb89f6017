use super::{BlockContext, BlockKind, PlacedBlock, Signatory, format_date, placed, text_run};
use attest_layout::{LayoutCanvas, LayoutError, Point, Rect};
use attest_render_core::{DrawSurface, RenderError, Stroke};
use attest_style::StyleTheme;
use log::warn;

/// Two signature boxes side by side.
///
/// When the page has no room left the block is pulled up to end at the bottom of
/// the content area instead of starting a new page, so the signatures stay with
/// the content they sign off.
pub(super) fn render(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    left: &Signatory,
    right: &Signatory,
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let metrics = &theme.metrics;
    let frame = *canvas.frame();
    let height = metrics.signature_height;
    let gap = metrics.signature_gap;

    let top = if canvas.check(gap + height).fits {
        canvas.cursor() + gap
    } else {
        let anchored = (frame.content_bottom() - height).max(canvas.page_top());
        warn!(
            "signature block anchored at y={:.1} on page {} ({:.1}pt short)",
            anchored,
            canvas.page_index() + 1,
            gap + height - canvas.remaining()
        );
        anchored
    };

    let spacing = 40.0;
    let box_width = (frame.content_width() - spacing) / 2.0;
    let date = format!("Date: {}", format_date(ctx.generated_on));
    let estimator = *canvas.estimator();
    let surface = canvas.surface();
    for (i, signatory) in [left, right].into_iter().enumerate() {
        let x = frame.content_left() + i as f32 * (box_width + spacing);
        let cell = Rect::new(x, top, box_width, height);
        let name = signatory
            .name
            .as_deref()
            .map(|n| estimator.truncate(n, theme.sizes.body, box_width - 16.0));
        draw_signature_box(surface, theme, cell, &signatory.role, name.as_deref(), &date)?;
    }

    canvas.set_cursor(top + height);
    let label = format!("{} / {}", left.role, right.role);
    Ok(placed(canvas, BlockKind::SignatureBlock, label, top, height))
}

fn draw_signature_box(
    surface: &mut dyn DrawSurface,
    theme: &StyleTheme,
    cell: Rect,
    role: &str,
    name: Option<&str>,
    date: &str,
) -> Result<(), RenderError> {
    let small = theme.sizes.small;
    let rule_y = cell.y + cell.height - 2.0 * small - 12.0;
    surface.stroke_rect(cell, Stroke::new(0.5, theme.palette.box_border))?;
    if let Some(name) = name {
        surface.text(text_run(
            cell.x + 8.0,
            rule_y - theme.sizes.body - 4.0,
            name,
            &theme.fonts.regular,
            theme.sizes.body,
            theme.palette.text,
        ))?;
    }
    surface.line(
        Point::new(cell.x + 8.0, rule_y),
        Point::new(cell.right() - 8.0, rule_y),
        Stroke::new(0.75, theme.palette.text),
    )?;
    surface.text(text_run(
        cell.x + 8.0,
        rule_y + 3.0,
        role,
        &theme.fonts.bold,
        small,
        theme.palette.text,
    ))?;
    surface.text(text_run(
        cell.x + 8.0,
        rule_y + small + 6.0,
        date,
        &theme.fonts.italic,
        small,
        theme.palette.muted,
    ))?;
    Ok(())
}
