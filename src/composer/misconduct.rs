use super::{DocumentPlan, closing, date_or_missing, opening, push_section, row};
use crate::blocks::{Block, InfoRow, Signatory};
use attest_types::report::non_blank;
use attest_types::{MisconductReport, ReportKind};

const TITLE: &str = "Misconduct Report";

pub(super) fn plan(report: &MisconductReport) -> DocumentPlan {
    let subject = &report.subject;
    let mut blocks = opening(TITLE);

    blocks.push(Block::SectionHeading("Incident Details".into()));
    blocks.push(Block::InfoTable(vec![
        row("Student Name", subject.student_name.as_deref()),
        row("Roll Number", subject.roll_number.as_deref()),
        row("Company", subject.company_name.as_deref()),
        InfoRow::new("Incident Date", date_or_missing(report.incident_date)),
        row("Reported By", report.reported_by.as_deref()),
        row("Severity", report.severity.as_deref()),
    ]));

    push_section(&mut blocks, "Incident Description", report.incident_description.as_deref());
    push_section(&mut blocks, "Evidence", report.evidence.as_deref());
    push_section(&mut blocks, "Action Taken", report.action_taken.as_deref());
    push_section(&mut blocks, "Supervisor Remarks", report.supervisor_remarks.as_deref());

    blocks.push(Block::SignatureBlock {
        left: Signatory::new("Reported By", non_blank(report.reported_by.as_deref())),
        right: Signatory::new("Internship Coordinator", None),
    });
    closing(&mut blocks);

    DocumentPlan {
        kind: ReportKind::Misconduct,
        title: TITLE.to_string(),
        blocks,
    }
}
