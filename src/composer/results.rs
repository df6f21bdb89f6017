use super::{DocumentPlan, MISSING, closing, opening, period, push_section, row, student_rows};
use crate::blocks::{Block, InfoRow, Signatory};
use attest_types::report::non_blank;
use attest_types::{EvaluationBreakdown, ReportKind, ResultsCertificate};

const TITLE: &str = "Internship Results Certificate";

pub(super) fn plan(report: &ResultsCertificate) -> DocumentPlan {
    let subject = &report.subject;
    let mut blocks = opening(TITLE);

    let mut candidate = student_rows(subject);
    candidate.push(row("Company", subject.company_name.as_deref()));
    candidate.push(row("Supervisor", subject.supervisor_name.as_deref()));
    candidate.push(InfoRow::new(
        "Internship Period",
        period(report.internship_start, report.internship_end),
    ));
    blocks.push(Block::SectionHeading("Candidate Details".into()));
    blocks.push(Block::InfoTable(candidate));

    if let Some(evaluation) = &report.evaluation {
        let rows = evaluation_rows(evaluation);
        if !rows.is_empty() {
            blocks.push(Block::SectionHeading("Evaluation Breakdown".into()));
            blocks.push(Block::InfoTable(rows));
        }
    }

    push_section(&mut blocks, "Remarks", report.remarks.as_deref());

    blocks.push(Block::SignatureBlock {
        left: Signatory::new("Supervisor", non_blank(subject.supervisor_name.as_deref())),
        right: Signatory::new("Internship Coordinator", None),
    });
    closing(&mut blocks);

    DocumentPlan {
        kind: ReportKind::Results,
        title: TITLE.to_string(),
        blocks,
    }
}

/// Criterion rows followed by total and grade. Empty when there is nothing to show.
fn evaluation_rows(evaluation: &EvaluationBreakdown) -> Vec<InfoRow> {
    let mut rows: Vec<InfoRow> = evaluation
        .criteria
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let label = non_blank(c.name.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Criterion {}", i + 1));
            InfoRow::new(label, score_of(c.score, c.max_score))
        })
        .collect();
    if rows.is_empty() && non_blank(evaluation.grade.as_deref()).is_none() {
        return rows;
    }

    let total = match evaluation.totals() {
        Some((score, max)) => score_of(Some(score), Some(max)),
        None => MISSING.to_string(),
    };
    rows.push(InfoRow::new("Total", total));
    rows.push(row("Grade", evaluation.grade.as_deref()));
    rows
}

fn score_of(score: Option<f32>, max: Option<f32>) -> String {
    match (score, max) {
        (Some(score), Some(max)) if max > 0.0 => format!("{} / {}", number(score), number(max)),
        (Some(score), _) => number(score),
        (None, _) => MISSING.to_string(),
    }
}

fn number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
