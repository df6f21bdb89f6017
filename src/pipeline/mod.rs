//! Public entry points: configuration, single-report rendering and bulk runs.
//!
//! # Example
//!
//! ```ignore
//! use attest::{EngineConfig, ReportGenerator};
//!
//! let generator = ReportGenerator::new(EngineConfig::from_file("attest.json")?)?;
//! let report = generator.render_to_vec(&document)?;
//! std::fs::write(&report.filename, &report.bytes)?;
//! ```

pub mod api;
pub mod bulk;
pub mod config;

pub use api::{ReportGenerator, parse_report, parse_reports, read_reports, read_single_report};
pub use bulk::{render_all, render_all_to_dir};
pub use config::{EngineConfig, Institution};
