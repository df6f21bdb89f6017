// src/error.rs
use attest_layout::LayoutError;
use attest_render_core::RenderError;
use attest_style::StyleError;
use thiserror::Error;

/// Everything that can stop a report from being produced.
///
/// Missing report values are never errors; they render as `N/A`.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration could not be parsed: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Report input could not be parsed: {0}")]
    Input(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unexpected report input: {0}")]
    InvalidInput(String),
}

impl From<StyleError> for ReportError {
    fn from(e: StyleError) -> Self {
        ReportError::InvalidConfig(e.to_string())
    }
}

impl ReportError {
    /// The message shown to end users. Details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        "report generation failed"
    }
}
