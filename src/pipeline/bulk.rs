//! Many reports at once.
//!
//! Each document gets its own canvas and surface, so documents are independent
//! and a failure in one never affects the others.

use super::api::ReportGenerator;
use crate::error::ReportError;
use crate::output::{RenderedReport, StreamSummary, report_filename};
use attest_executor::Executor;
use attest_types::ReportDocument;
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Renders every document in memory. Results are in input order.
pub fn render_all<E: Executor>(
    generator: &ReportGenerator,
    documents: Vec<ReportDocument>,
    executor: &E,
) -> Vec<Result<RenderedReport, ReportError>> {
    info!(
        "rendering {} report(s) with the {} executor ({} worker(s))",
        documents.len(),
        executor.name(),
        executor.parallelism()
    );
    let generator = generator.clone();
    executor.execute_all_fallible(documents, move |doc| generator.render_to_vec(&doc))
}

/// Writes every document into `dir`. Results are in input order.
///
/// Two documents that would share a filename get `_2`, `_3`... suffixes.
pub fn render_all_to_dir<E: Executor>(
    generator: &ReportGenerator,
    documents: Vec<ReportDocument>,
    dir: &Path,
    executor: &E,
) -> Vec<Result<(PathBuf, StreamSummary), ReportError>> {
    let names = unique_filenames(&documents);
    let jobs: Vec<(ReportDocument, PathBuf)> = documents
        .into_iter()
        .zip(names)
        .map(|(doc, name)| (doc, dir.join(name)))
        .collect();

    let generator = generator.clone();
    let results = executor.execute_all_fallible(jobs, move |(doc, path)| {
        generator
            .render_to_file(&doc, &path)
            .map(|summary| (path, summary))
    });
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!("{} of {} report(s) failed", failed, results.len());
    }
    results
}

pub(crate) fn unique_filenames(documents: &[ReportDocument]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    documents
        .iter()
        .map(|doc| {
            let name = report_filename(doc);
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            match (*count, name.strip_suffix(".pdf")) {
                (1, _) | (_, None) => name,
                (n, Some(stem)) => format!("{}_{}.pdf", stem, n),
            }
        })
        .collect()
}
