mod common;

use attest::{ExecutorImpl, ReportDocument, SyncExecutor, render_all, render_all_to_dir};
use common::fixtures::*;
use common::{GeneratedPdf, TestResult, generator};
use std::io::{self, Write};

/// Writer that accepts `limit` bytes and then fails.
struct FailingWriter {
    written: usize,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(io::Error::other("device unplugged"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_buffer_is_a_complete_pdf() -> TestResult {
    let report = generator().render_to_vec(&full_final_report(450))?;

    assert!(report.bytes.starts_with(b"%PDF-1.7"));
    assert!(report.bytes.ends_with(b"%%EOF"));
    assert_eq!(report.content_length(), report.bytes.len());
    assert_eq!(report.content_type(), "application/pdf");
    assert_eq!(report.filename, "final_report_ananya-rao.pdf");
    assert_eq!(
        report.content_disposition(),
        "attachment; filename=\"final_report_ananya-rao.pdf\""
    );

    let page_count = report.page_count;
    let pdf = GeneratedPdf::from_bytes(report.bytes)?;
    assert_eq!(pdf.page_count(), page_count);
    Ok(())
}

#[test]
fn test_streamed_bytes_match_buffered_bytes() -> TestResult {
    let generator = generator();
    let doc = weekly_with_summary(&prose(200));

    let buffered = generator.render_to_vec(&doc)?;
    let mut streamed = Vec::new();
    let summary = generator.render_to_writer(&doc, &mut streamed)?;

    assert_eq!(streamed, buffered.bytes);
    assert_eq!(summary.page_count, buffered.page_count);
    assert_eq!(summary.filename, "weekly_report_ravi-kumar_week-3.pdf");
    assert_eq!(summary.content_type(), "application/pdf");
    Ok(())
}

#[test]
fn test_render_to_file_creates_directories() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("out").join("joining.pdf");

    let summary = generator().render_to_file(&joining(), &path)?;

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"%PDF-"));
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_eq!(pdf.page_count(), summary.page_count);
    assert_pdf_contains_text!(pdf, "Internship Joining Report");
    Ok(())
}

#[test]
fn test_failing_writer_reports_an_error() {
    for limit in [0, 64, 2048] {
        let writer = FailingWriter { written: 0, limit };
        let err = generator()
            .render_to_writer(&full_final_report(300), writer)
            .expect_err("a broken writer must fail the render");
        assert_eq!(err.user_message(), "report generation failed");
    }
}

#[test]
fn test_bulk_keeps_input_order() -> TestResult {
    let docs: Vec<ReportDocument> =
        vec![joining(), full_final_report(300), misconduct(), results()];
    let expected: Vec<String> = docs.iter().map(attest::report_filename).collect();

    for executor in [ExecutorImpl::default(), ExecutorImpl::select(true)] {
        let results = render_all(&generator(), docs.clone(), &executor);
        assert_eq!(results.len(), docs.len());
        for (result, name) in results.into_iter().zip(&expected) {
            let report = result?;
            assert_eq!(&report.filename, name);
            assert!(report.bytes.ends_with(b"%%EOF"));
        }
    }
    Ok(())
}

#[test]
fn test_bulk_matches_single_renders() -> TestResult {
    let generator = generator();
    let docs = vec![weekly_with_summary(&prose(50)), results()];
    let results = render_all(&generator, docs.clone(), &SyncExecutor::new());

    for (doc, result) in docs.iter().zip(results) {
        assert_eq!(result?.bytes, generator.render_to_vec(doc)?.bytes);
    }
    Ok(())
}

#[test]
fn test_bulk_to_dir_writes_unique_files() -> TestResult {
    let dir = tempfile::tempdir()?;
    let docs = vec![results(), results(), misconduct()];

    let results = render_all_to_dir(&generator(), docs, dir.path(), &ExecutorImpl::default());

    let mut paths = Vec::new();
    for result in results {
        let (path, summary) = result?;
        assert!(path.exists(), "{} missing", path.display());
        assert!(summary.page_count >= 1);
        paths.push(path);
    }
    let names: Vec<_> = paths
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
        .collect();
    assert_eq!(
        names,
        vec![
            "results_certificate_sara-thomas.pdf",
            "results_certificate_sara-thomas_2.pdf",
            "misconduct_report_dev-patel.pdf",
        ]
    );
    Ok(())
}
