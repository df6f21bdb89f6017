use super::{DocumentPlan, closing, date_or_missing, opening, period, push_section, row};
use crate::blocks::{Block, InfoRow, Signatory};
use attest_types::report::non_blank;
use attest_types::{Attachment, FinalReport, ReportKind};

const TITLE: &str = "Final Internship Report";

pub(super) fn plan(report: &FinalReport) -> DocumentPlan {
    let subject = &report.subject;
    let mut blocks = opening(TITLE);

    blocks.push(Block::SectionHeading("Internship Details".into()));
    blocks.push(Block::InfoTable(vec![
        row("Student Name", subject.student_name.as_deref()),
        row("Roll Number", subject.roll_number.as_deref()),
        row("Department", subject.department.as_deref()),
        row("Company", subject.company_name.as_deref()),
        row("Supervisor", subject.supervisor_name.as_deref()),
        InfoRow::new(
            "Internship Period",
            period(report.internship_start, report.internship_end),
        ),
        InfoRow::new("Submitted On", date_or_missing(report.submitted_on)),
    ]));

    for (title, body) in report.sections.entries() {
        push_section(&mut blocks, title, body);
    }

    let attachments = attachment_rows(&report.attachments);
    if !attachments.is_empty() {
        blocks.push(Block::SectionHeading("Attachments".into()));
        blocks.push(Block::InfoTable(attachments));
    }

    blocks.push(Block::SignatureBlock {
        left: Signatory::new("Student", non_blank(subject.student_name.as_deref())),
        right: Signatory::new("Supervisor", non_blank(subject.supervisor_name.as_deref())),
    });
    closing(&mut blocks);

    DocumentPlan {
        kind: ReportKind::Final,
        title: TITLE.to_string(),
        blocks,
    }
}

/// One row per attachment that carries a name or a link.
fn attachment_rows(attachments: &[Attachment]) -> Vec<InfoRow> {
    attachments
        .iter()
        .filter(|a| non_blank(a.name.as_deref()).is_some() || non_blank(a.url.as_deref()).is_some())
        .enumerate()
        .map(|(i, a)| {
            let label = non_blank(a.name.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Attachment {}", i + 1));
            row(&label, a.url.as_deref())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use attest_types::FinalSections;

    #[test]
    fn sections_follow_the_fixed_order() {
        let report = FinalReport {
            sections: FinalSections {
                conclusion: Some("Done.".into()),
                executive_summary: Some("Summary.".into()),
                key_learnings: Some("Learned.".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let titles: Vec<_> = plan(&report)
            .blocks
            .into_iter()
            .filter_map(|b| match b {
                Block::ContentSection { title, .. } => Some(title),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Executive Summary", "Key Learnings", "Conclusion"]);
    }

    #[test]
    fn attachments_table_only_when_something_to_list() {
        let mut report = FinalReport {
            attachments: vec![Attachment::default()],
            ..Default::default()
        };
        assert_eq!(plan(&report).count(BlockKind::InfoTable), 1);

        report.attachments = vec![
            Attachment {
                name: None,
                url: Some("https://example.org/slides.pdf".into()),
            },
            Attachment {
                name: Some("Certificate".into()),
                url: None,
            },
        ];
        let plan = plan(&report);
        assert_eq!(plan.count(BlockKind::InfoTable), 2);
        let Some(Block::InfoTable(rows)) = plan
            .blocks
            .iter()
            .filter(|b| b.kind() == BlockKind::InfoTable)
            .nth(1)
        else {
            panic!("missing attachments table");
        };
        assert_eq!(rows[0], InfoRow::new("Attachment 1", "https://example.org/slides.pdf"));
        assert_eq!(rows[1], InfoRow::new("Certificate", "N/A"));
    }
}
