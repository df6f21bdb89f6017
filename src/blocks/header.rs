use super::{BlockContext, BlockKind, PlacedBlock, placed, skip, text_run};
use attest_layout::{LayoutCanvas, LayoutError, Rect};

const HEADER_GAP: f32 = 12.0;

/// Institution banner: a filled band with the name and subtitle centered in it.
pub(super) fn render(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let height = theme.metrics.header_height;
    canvas.ensure_space(height)?;

    let frame = *canvas.frame();
    let top = canvas.cursor();
    let estimator = *canvas.estimator();
    let band = Rect::new(frame.content_left(), top, frame.content_width(), height);

    let name_size = theme.sizes.institution;
    let subtitle_size = theme.sizes.subtitle;
    let name = estimator.truncate(&ctx.institution.name, name_size, band.width - 20.0);
    let subtitle = estimator.truncate(&ctx.institution.subtitle, subtitle_size, band.width - 20.0);

    // Name and subtitle are centered vertically as one group.
    let group = name_size + 6.0 + subtitle_size;
    let name_y = top + (height - group) / 2.0;
    let subtitle_y = name_y + name_size + 6.0;
    let center = |text: &str, size: f32| {
        band.x + (band.width - estimator.text_width(text, size)).max(0.0) / 2.0
    };

    let surface = canvas.surface();
    surface.fill_rect(band, theme.palette.primary)?;
    surface.fill_rect(
        Rect::new(band.x, band.bottom() - 3.0, band.width, 3.0),
        theme.palette.accent,
    )?;
    surface.text(text_run(
        center(&name, name_size),
        name_y,
        name.clone(),
        &theme.fonts.bold,
        name_size,
        theme.palette.on_primary,
    ))?;
    if !subtitle.is_empty() {
        surface.text(text_run(
            center(&subtitle, subtitle_size),
            subtitle_y,
            subtitle,
            &theme.fonts.regular,
            subtitle_size,
            theme.palette.on_primary,
        ))?;
    }

    canvas.advance(height);
    let block = placed(canvas, BlockKind::Header, name, top, height);
    skip(canvas, HEADER_GAP);
    Ok(block)
}
