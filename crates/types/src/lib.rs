pub mod color;
pub mod geometry;
pub mod report;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use report::{
    Attachment, EvaluationBreakdown, EvaluationCriterion, FinalReport, FinalSections, JoiningReport,
    MisconductReport, ReportDocument, ReportKind, ResultsCertificate, Subject, WeeklyReport,
};
