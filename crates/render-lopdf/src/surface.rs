use crate::helpers;
use crate::writer::StreamingPdfWriter;
use attest_render_core::utils::flip_y;
use attest_render_core::{DrawSurface, RenderError, Stroke, TextRun};
use attest_types::{Color, Point, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, dictionary};
use std::collections::HashMap;
use std::io::Write;

/// Graphics state already emitted on the current page, so redundant operators are skipped.
#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

struct OpenPage {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    state: PageRenderState,
}

/// A `DrawSurface` that writes a PDF through [`StreamingPdfWriter`].
///
/// Each page is encoded and written when the next page begins or when the
/// surface is finished.
pub struct LopdfSurface<W: Write> {
    writer: Option<StreamingPdfWriter<W>>,
    font_map: HashMap<String, String>,
    default_font: String,
    page: Option<OpenPage>,
}

impl<W: Write> LopdfSurface<W> {
    /// Starts a document on `writer` with the given standard Type1 fonts.
    /// The first font is the fallback for unknown font names.
    pub fn new(writer: W, fonts: &[&str]) -> Result<Self, RenderError> {
        let (font_dict, font_map) = helpers::font_resources(fonts);
        let default_font = fonts
            .first()
            .and_then(|name| font_map.get(*name))
            .cloned()
            .ok_or_else(|| RenderError::Other("at least one font is required".into()))?;
        let writer = StreamingPdfWriter::new(writer, "1.7", font_dict)?;
        Ok(Self {
            writer: Some(writer),
            font_map,
            default_font,
            page: None,
        })
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::SurfaceState("document already finished".into()))
    }

    fn page_mut(&mut self) -> Result<&mut OpenPage, RenderError> {
        self.page
            .as_mut()
            .ok_or_else(|| RenderError::SurfaceState("draw call before begin_page".into()))
    }

    /// Encodes the open page, writes its content stream and page object.
    fn flush_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let writer = self.writer_mut()?;
        let content_id = writer.write_content_stream(Content {
            operations: page.operations,
        })?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), Object::from(page.width), Object::from(page.height)],
            "Contents" => vec![Object::Reference(content_id)],
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into())?;
        writer.push_page_id(page_id);
        log::trace!("flushed page {} ({} bytes written)", writer.page_count(), writer.position());
        Ok(())
    }

    fn set_fill_color(page: &mut OpenPage, color: Color) {
        if page.state.fill_color != Some(color) {
            page.operations.push(helpers::fill_color_op(color));
            page.state.fill_color = Some(color);
        }
    }

    fn set_stroke(page: &mut OpenPage, stroke: Stroke) {
        if page.state.stroke_color != Some(stroke.color) {
            page.operations.push(helpers::stroke_color_op(stroke.color));
            page.state.stroke_color = Some(stroke.color);
        }
        if page.state.line_width != Some(stroke.width) {
            page.operations.push(Operation::new("w", vec![Object::from(stroke.width)]));
            page.state.line_width = Some(stroke.width);
        }
    }

    /// Flushes the last page and writes the document trailer, returning the writer.
    pub fn finish(mut self) -> Result<W, RenderError> {
        self.flush_page()?;
        let writer = self
            .writer
            .take()
            .ok_or_else(|| RenderError::SurfaceState("document already finished".into()))?;
        Ok(writer.finish()?)
    }
}

impl<W: Write> DrawSurface for LopdfSurface<W> {
    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError> {
        self.flush_page()?;
        self.writer_mut()?;
        self.page = Some(OpenPage {
            width,
            height,
            operations: Vec::new(),
            state: PageRenderState::default(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        Self::set_fill_color(page, color);
        let op = helpers::rect_op(rect, page.height);
        page.operations.push(op);
        page.operations.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        Self::set_stroke(page, stroke);
        let op = helpers::rect_op(rect, page.height);
        page.operations.push(op);
        page.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        Self::set_stroke(page, stroke);
        let height = page.height;
        page.operations.push(Operation::new(
            "m",
            vec![Object::from(from.x), Object::from(flip_y(from.y, height))],
        ));
        page.operations.push(Operation::new(
            "l",
            vec![Object::from(to.x), Object::from(flip_y(to.y, height))],
        ));
        page.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn text(&mut self, run: TextRun) -> Result<(), RenderError> {
        if run.content.trim().is_empty() {
            return Ok(());
        }
        let internal_font_name = self
            .font_map
            .get(&run.font)
            .unwrap_or(&self.default_font)
            .clone();
        let page = self.page_mut()?;
        page.operations.push(Operation::new("BT", vec![]));
        if page.state.font_name != internal_font_name || page.state.font_size != run.font_size {
            page.operations.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(internal_font_name.as_bytes().to_vec()),
                    Object::from(run.font_size),
                ],
            ));
            page.state.font_name = internal_font_name;
            page.state.font_size = run.font_size;
        }
        Self::set_fill_color(page, run.color);
        let baseline_y = run.y + run.font_size * 0.8;
        let pdf_y = flip_y(baseline_y, page.height);
        page.operations
            .push(Operation::new("Td", vec![Object::from(run.x), Object::from(pdf_y)]));
        page.operations
            .push(Operation::new("Tj", vec![helpers::literal(&run.content)]));
        page.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn page_count(&self) -> usize {
        let flushed = self.writer.as_ref().map_or(0, |w| w.page_count());
        flushed + usize::from(self.page.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str) -> TextRun {
        TextRun {
            x: 50.0,
            y: 60.0,
            content: content.to_string(),
            font: "Helvetica-Bold".to_string(),
            font_size: 12.0,
            color: Color::BLACK,
        }
    }

    #[test]
    fn writes_one_page_object_per_page() {
        let mut surface = LopdfSurface::new(Vec::new(), &["Helvetica", "Helvetica-Bold"]).unwrap();
        surface.begin_page(595.0, 842.0).unwrap();
        surface.text(run("first page")).unwrap();
        surface.begin_page(595.0, 842.0).unwrap();
        surface
            .fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE)
            .unwrap();
        assert_eq!(surface.page_count(), 2);

        let bytes = surface.finish().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(text.matches("/Type /Page ").count(), 2);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(first page)"));
        assert!(text.contains("/F2"));
    }

    #[test]
    fn draw_without_page_fails() {
        let mut surface = LopdfSurface::new(Vec::new(), &["Helvetica"]).unwrap();
        let err = surface.text(run("orphan")).unwrap_err();
        assert!(matches!(err, RenderError::SurfaceState(_)));
    }

    #[test]
    fn requires_a_font() {
        assert!(LopdfSurface::new(Vec::new(), &[]).is_err());
    }
}
