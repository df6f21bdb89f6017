pub mod fixtures;
pub mod pdf_assertions;

use attest::{ReportDocument, ReportError, ReportGenerator};
use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The date every test generator prints, so outputs are reproducible.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
}

pub fn generator() -> ReportGenerator {
    init_logger();
    ReportGenerator::default().with_date(fixed_date())
}

/// Render a report to PDF bytes and load them back with lopdf
pub fn generate_pdf(document: &ReportDocument) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let report = generator().render_to_vec(document)?;
    GeneratedPdf::from_bytes(report.bytes)
}

#[allow(dead_code)]
pub fn render_error(document: &ReportDocument) -> Option<ReportError> {
    generator().render_to_vec(document).err()
}
