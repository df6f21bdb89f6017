use super::{DocumentPlan, closing, date_or_missing, opening, push_section, row, student_rows};
use crate::blocks::{Block, InfoRow, Signatory};
use attest_types::report::non_blank;
use attest_types::{JoiningReport, ReportKind};

const TITLE: &str = "Internship Joining Report";

/// Declarations printed when the report does not bring its own.
const DEFAULT_DECLARATIONS: [&str; 3] = [
    "I confirm that the information given in this report is correct and complete.",
    "I will follow the rules, working hours and confidentiality policies of the host organisation.",
    "I will inform the internship coordinator of any change in my placement without delay.",
];

pub(super) fn plan(report: &JoiningReport) -> DocumentPlan {
    let subject = &report.subject;
    let mut blocks = opening(TITLE);

    blocks.push(Block::SectionHeading("Student Details".into()));
    blocks.push(Block::InfoTable(student_rows(subject)));

    blocks.push(Block::SectionHeading("Placement Details".into()));
    blocks.push(Block::InfoTable(vec![
        row("Company Name", subject.company_name.as_deref()),
        row("Company Address", subject.company_address.as_deref()),
        row("Supervisor", subject.supervisor_name.as_deref()),
        row("Supervisor Email", subject.supervisor_email.as_deref()),
        row("Position", report.position.as_deref()),
        InfoRow::new("Joining Date", date_or_missing(report.joining_date)),
        row("Working Hours", report.working_hours.as_deref()),
        row("Stipend", report.stipend.as_deref()),
    ]));

    push_section(&mut blocks, "Job Description", report.job_description.as_deref());

    let declarations: Vec<String> = report
        .acknowledgments
        .iter()
        .filter_map(|item| non_blank(Some(item.as_str())))
        .map(str::to_string)
        .collect();
    let declarations = if declarations.is_empty() {
        DEFAULT_DECLARATIONS.iter().map(|d| d.to_string()).collect()
    } else {
        declarations
    };
    blocks.push(Block::Acknowledgment(declarations));

    blocks.push(Block::SignatureBlock {
        left: Signatory::new("Student", non_blank(subject.student_name.as_deref())),
        right: Signatory::new(
            "Company Supervisor",
            non_blank(subject.supervisor_name.as_deref()),
        ),
    });
    closing(&mut blocks);

    DocumentPlan {
        kind: ReportKind::Joining,
        title: TITLE.to_string(),
        blocks,
    }
}
