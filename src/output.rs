//! What callers get back: a finished buffer or a summary of a finished stream.
use attest_types::report::non_blank;
use attest_types::{ReportDocument, WeeklyReport};
use slug::slugify;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A complete report held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub page_count: usize,
    pub overflowed_blocks: usize,
}

impl RenderedReport {
    pub fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }

    /// Length of the finished buffer, suitable for a `Content-Length` header.
    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Outcome of streaming a report into a writer.
///
/// Streams carry no length: the size is only known once the writer is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    pub filename: String,
    pub page_count: usize,
    pub overflowed_blocks: usize,
}

impl StreamSummary {
    pub fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// `<kind>_<student>[_week-N].pdf`, safe for headers and file systems.
pub fn report_filename(document: &ReportDocument) -> String {
    let student = non_blank(document.subject().student_name.as_deref())
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown-student".to_string());
    let mut name = format!("{}_{}", document.kind().slug(), student);
    if let ReportDocument::Weekly(WeeklyReport {
        week_number: Some(week),
        ..
    }) = document
    {
        name.push_str(&format!("_week-{}", week));
    }
    name.push_str(".pdf");
    name
}
