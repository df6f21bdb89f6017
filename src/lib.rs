//! attest: a paginated PDF engine for internship reports.
//!
//! A [`ReportDocument`] is turned into an ordered block plan by its composer and
//! laid out on a single canvas that inserts page breaks before blocks that would
//! not fit. The result is either an in-memory [`RenderedReport`] or a PDF streamed
//! into any `std::io::Write`.

pub mod blocks;
pub mod composer;
pub mod error;
pub mod output;
pub mod pipeline;

pub use blocks::{Block, BlockKind, InfoRow, PlacedBlock, Signatory};
pub use composer::{Composition, DocumentPlan, compose, plan_for};
pub use error::ReportError;
pub use output::{RenderedReport, StreamSummary, report_filename};
pub use pipeline::{
    EngineConfig, Institution, ReportGenerator, parse_report, parse_reports, read_reports,
    read_single_report, render_all, render_all_to_dir,
};

pub use attest_executor::{Executor, ExecutorImpl, SyncExecutor};
pub use attest_layout::LayoutConfig;
pub use attest_render_core::{DrawSurface, RecordingSurface};
pub use attest_style::{PageSettings, PageSize, StyleTheme};
pub use attest_types::{
    Attachment, EvaluationBreakdown, EvaluationCriterion, FinalReport, FinalSections, JoiningReport,
    MisconductReport, ReportDocument, ReportKind, ResultsCertificate, Subject, WeeklyReport,
};
