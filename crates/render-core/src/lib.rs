//! Core rendering abstractions for report generation.
//!
//! This crate provides the seam between layout and output:
//! - `DrawSurface` trait for the page-level drawing primitives
//! - `RecordingSurface`, an in-memory surface that records every draw call
//! - Error types for rendering operations
//! - Shared utility functions for coordinate and text encoding

mod error;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{RecordedPage, RecordingSurface};
pub use traits::DrawSurface;
pub use types::{DrawOp, Stroke, TextRun};
