//! PDF drawing surface using lopdf.
//!
//! Page content is encoded with lopdf and streamed to the underlying writer as
//! soon as a page is closed, so only the page being drawn is held in memory.

mod helpers;
mod surface;
mod writer;

pub use surface::LopdfSurface;
pub use writer::StreamingPdfWriter;
