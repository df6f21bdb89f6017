use attest_render_core::RenderError;
use attest_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Drawing failed: {0}")]
    Render(#[from] RenderError),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

impl From<StyleError> for LayoutError {
    fn from(err: StyleError) -> Self {
        LayoutError::InvalidGeometry(err.to_string())
    }
}

pub mod algorithms;
pub mod canvas;
pub mod config;
pub mod text;

pub use self::algorithms::pagination::{PageBreakDecision, check_block_fit};
pub use self::canvas::{
    CanvasSummary, LayoutCanvas, NoDecorations, PageDecorator, PageFrame, TextReservation,
};
pub use self::config::LayoutConfig;
pub use self::text::{TextEstimate, TextEstimator};

// Re-export geometry types used by renderers to prevent type mismatches
pub use attest_types::geometry::{Point, Rect, Size};
