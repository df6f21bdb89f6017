use super::{BlockContext, BlockKind, InfoRow, PlacedBlock, placed, skip, text_run};
use attest_layout::{LayoutCanvas, LayoutError, Point, Rect};
use attest_render_core::Stroke;
use attest_style::StyleTheme;

const CELL_PADDING: f32 = 6.0;

/// Total height of a table with `rows` rows. Rows never grow.
pub(super) fn height(rows: usize, theme: &StyleTheme) -> f32 {
    rows as f32 * theme.metrics.row_height
}

/// Two-column label/value table with striped rows.
///
/// The whole table is reserved up front so it moves to the next page as one piece.
/// Values wider than their column are cut with `...` to keep the row height fixed.
pub(super) fn render(
    canvas: &mut LayoutCanvas<'_>,
    ctx: &BlockContext<'_>,
    rows: &[InfoRow],
) -> Result<PlacedBlock, LayoutError> {
    let theme = ctx.theme;
    let row_height = theme.metrics.row_height;
    let total = height(rows.len(), theme);
    canvas.ensure_space(total)?;

    let frame = *canvas.frame();
    let estimator = *canvas.estimator();
    let top = canvas.cursor();
    let x = frame.content_left();
    let width = frame.content_width();
    let label_width = width * theme.metrics.label_column_ratio;
    let value_x = x + label_width;
    let value_width = width - label_width;
    let size = theme.sizes.body;
    let border = Stroke::new(0.5, theme.palette.table_border);

    let surface = canvas.surface();
    for (i, row) in rows.iter().enumerate() {
        let row_y = top + i as f32 * row_height;
        let text_y = row_y + (row_height - size) / 2.0;
        if i % 2 == 0 {
            surface.fill_rect(Rect::new(x, row_y, width, row_height), theme.palette.table_stripe)?;
        }
        if i > 0 {
            surface.line(Point::new(x, row_y), Point::new(x + width, row_y), border)?;
        }
        let label = estimator.truncate(&row.label, size, label_width - 2.0 * CELL_PADDING);
        let value = estimator.truncate(&row.value, size, value_width - 2.0 * CELL_PADDING);
        surface.text(text_run(
            x + CELL_PADDING,
            text_y,
            label,
            &theme.fonts.bold,
            size,
            theme.palette.text,
        ))?;
        surface.text(text_run(
            value_x + CELL_PADDING,
            text_y,
            value,
            &theme.fonts.regular,
            size,
            theme.palette.text,
        ))?;
    }
    if !rows.is_empty() {
        surface.line(Point::new(value_x, top), Point::new(value_x, top + total), border)?;
        surface.stroke_rect(Rect::new(x, top, width, total), border)?;
    }

    canvas.advance(total);
    let label = match rows.first() {
        Some(first) => format!("{} (+{} rows)", first.label, rows.len() - 1),
        None => "empty table".to_string(),
    };
    let block = placed(canvas, BlockKind::InfoTable, label, top, total);
    skip(canvas, theme.metrics.section_spacing);
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::{context, with_canvas};
    use crate::pipeline::config::Institution;
    use attest_render_core::RecordingSurface;

    fn rows(n: usize) -> Vec<InfoRow> {
        (0..n)
            .map(|i| InfoRow::new(format!("Label {}", i), format!("Value {}", i)))
            .collect()
    }

    #[test]
    fn height_is_rows_times_row_height() {
        let theme = StyleTheme::default();
        let institution = Institution::default();
        let ctx = context(&theme, &institution);
        let mut surface = RecordingSurface::new();

        let block = with_canvas(&mut surface, |canvas| render(canvas, &ctx, &rows(5)).unwrap());

        assert_eq!(block.height, 5.0 * theme.metrics.row_height);
        let labels: Vec<_> = surface
            .texts(0)
            .into_iter()
            .filter(|run| run.content.starts_with("Label"))
            .map(|run| run.content.clone())
            .collect();
        assert_eq!(labels, vec!["Label 0", "Label 1", "Label 2", "Label 3", "Label 4"]);
    }

    #[test]
    fn table_that_does_not_fit_moves_whole() {
        let theme = StyleTheme::default();
        let institution = Institution::default();
        let ctx = context(&theme, &institution);
        let mut surface = RecordingSurface::new();

        let block = with_canvas(&mut surface, |canvas| {
            // 60pt left above the footer band; 8 rows need 200pt.
            let bottom = canvas.frame().content_bottom();
            canvas.set_cursor(bottom - 60.0);
            render(canvas, &ctx, &rows(8)).unwrap()
        });

        assert_eq!(block.page, 1);
        assert_eq!(block.top, 50.0);
        assert_eq!(block.height, 200.0);
        assert!(surface.texts(0).is_empty());
        assert_eq!(surface.texts(1).len(), 16);
    }

    #[test]
    fn long_values_are_truncated_to_the_column() {
        let theme = StyleTheme::default();
        let institution = Institution::default();
        let ctx = context(&theme, &institution);
        let mut surface = RecordingSurface::new();
        let long = "x".repeat(400);

        with_canvas(&mut surface, |canvas| {
            render(canvas, &ctx, &[InfoRow::new("Address", long.clone())]).unwrap()
        });

        let value = surface
            .texts(0)
            .into_iter()
            .find(|run| run.content.starts_with('x'))
            .unwrap();
        assert!(value.content.ends_with("..."));
        assert!(value.content.len() < 100);
    }
}
