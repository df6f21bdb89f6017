// src/pipeline/api.rs
use super::config::EngineConfig;
use crate::composer::{self, Composition, DocumentPlan};
use crate::error::ReportError;
use crate::output::{RenderedReport, StreamSummary, report_filename};
use attest_render_core::RecordingSurface;
use attest_render_lopdf::LopdfSurface;
use attest_types::ReportDocument;
use chrono::NaiveDate;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Turns report documents into PDFs.
///
/// A generator holds only read-only configuration, so it is cheap to clone and
/// safe to share between threads. Every call builds its own canvas.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: Arc<EngineConfig>,
    generated_on: Option<NaiveDate>,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            config: Arc::new(EngineConfig::default()),
            generated_on: None,
        }
    }
}

impl ReportGenerator {
    pub fn new(config: EngineConfig) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            generated_on: None,
        })
    }

    /// Fixes the date printed in footers and signature stamps. Defaults to today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn plan(&self, document: &ReportDocument) -> DocumentPlan {
        composer::plan_for(document)
    }

    /// Lays the document out without producing PDF bytes.
    pub fn compose_recorded(
        &self,
        document: &ReportDocument,
    ) -> Result<(Composition, RecordingSurface), ReportError> {
        let mut surface = RecordingSurface::new();
        let plan = self.plan(document);
        let composition =
            composer::compose(&plan, &mut surface, &self.config, self.generated_on())?;
        Ok((composition, surface))
    }

    /// Renders into memory.
    pub fn render_to_vec(&self, document: &ReportDocument) -> Result<RenderedReport, ReportError> {
        let mut bytes = Vec::new();
        let summary = self.render_to_writer(document, &mut bytes)?;
        Ok(RenderedReport {
            bytes,
            filename: summary.filename,
            page_count: summary.page_count,
            overflowed_blocks: summary.overflowed_blocks,
        })
    }

    /// Streams the PDF into `writer`. Each page is written as soon as the next one starts.
    pub fn render_to_writer<W: Write>(
        &self,
        document: &ReportDocument,
        writer: W,
    ) -> Result<StreamSummary, ReportError> {
        let fonts = self.config.theme.fonts.all();
        let mut surface = LopdfSurface::new(writer, &fonts)?;
        let plan = self.plan(document);
        let composition =
            composer::compose(&plan, &mut surface, &self.config, self.generated_on())?;
        let mut writer = surface.finish()?;
        writer.flush()?;

        Ok(StreamSummary {
            filename: report_filename(document),
            page_count: composition.page_count,
            overflowed_blocks: composition.overflowed_blocks,
        })
    }

    /// Writes the PDF to `path`, creating parent directories as needed.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        document: &ReportDocument,
        path: P,
    ) -> Result<StreamSummary, ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path).map_err(|e| {
            ReportError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create '{}': {}", path.display(), e),
            ))
        })?;
        let summary = self.render_to_writer(document, BufWriter::new(file))?;
        info!(
            "wrote {} ({} page(s)) to {}",
            summary.filename,
            summary.page_count,
            path.display()
        );
        Ok(summary)
    }
}

/// Parses one report from camelCase JSON.
pub fn parse_report(json: &str) -> Result<ReportDocument, ReportError> {
    serde_json::from_str(json).map_err(ReportError::Input)
}

/// Parses either a single report object or an array of reports.
pub fn parse_reports(json: &str) -> Result<Vec<ReportDocument>, ReportError> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<ReportDocument>),
        One(Box<ReportDocument>),
    }

    match serde_json::from_str(json).map_err(ReportError::Input)? {
        OneOrMany::Many(docs) => Ok(docs),
        OneOrMany::One(doc) => Ok(vec![*doc]),
    }
}

pub fn read_reports<P: AsRef<Path>>(path: P) -> Result<Vec<ReportDocument>, ReportError> {
    let path_ref = path.as_ref();
    let json = fs::read_to_string(path_ref).map_err(|e| {
        ReportError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read reports from '{}': {}", path_ref.display(), e),
        ))
    })?;
    parse_reports(&json)
}

/// Reads a file that must hold exactly one report.
pub fn read_single_report<P: AsRef<Path>>(path: P) -> Result<ReportDocument, ReportError> {
    let path = path.as_ref();
    let mut documents = read_reports(path)?;
    match documents.len() {
        1 => Ok(documents.remove(0)),
        n => Err(ReportError::InvalidInput(format!(
            "'{}' holds {} reports, expected exactly one",
            path.display(),
            n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;

    fn weekly_json() -> &'static str {
        r#"{
            "reportKind": "weekly",
            "subject": { "studentName": "Ravi Kumar", "companyName": "Acme Labs" },
            "weekNumber": 2,
            "periodStart": "2024-06-03",
            "workSummary": "Set up the CI pipeline."
        }"#
    }

    #[test]
    fn parses_single_and_many() {
        assert!(matches!(parse_report(weekly_json()), Ok(ReportDocument::Weekly(_))));
        assert_eq!(parse_reports(weekly_json()).unwrap().len(), 1);
        let many = format!("[{}, {}]", weekly_json(), weekly_json());
        assert_eq!(parse_reports(&many).unwrap().len(), 2);
        assert!(matches!(parse_report("{}"), Err(ReportError::Input(_))));
    }

    #[test]
    fn recorded_composition_places_one_section() {
        let generator =
            ReportGenerator::default().with_date(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
        let doc = parse_report(weekly_json()).unwrap();
        let (composition, surface) = generator.compose_recorded(&doc).unwrap();
        assert_eq!(composition.page_count, 1);
        assert_eq!(composition.count(BlockKind::ContentSection), 1);
        assert!(surface.contains_text("Generated on 09 Jun 2024 | Page 1"));
    }

    #[test]
    fn single_report_file_must_hold_one_report() {
        let dir = tempfile::tempdir().unwrap();
        let one = dir.path().join("one.json");
        let two = dir.path().join("two.json");
        std::fs::write(&one, weekly_json()).unwrap();
        std::fs::write(&two, format!("[{}, {}]", weekly_json(), weekly_json())).unwrap();

        assert!(matches!(read_single_report(&one), Ok(ReportDocument::Weekly(_))));
        let err = read_single_report(&two).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(ref msg) if msg.contains("2 reports")));
        assert!(matches!(
            read_single_report(dir.path().join("missing.json")),
            Err(ReportError::Io(_))
        ));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let mut config = EngineConfig::default();
        config.layout.safety_factor = 0.5;
        assert!(matches!(ReportGenerator::new(config), Err(ReportError::InvalidConfig(_))));
    }
}
