use super::{DocumentPlan, closing, opening, period, push_section, row};
use crate::blocks::{Block, InfoRow, Signatory};
use attest_types::report::non_blank;
use attest_types::{ReportKind, WeeklyReport};

/// `Weekly Report - Week N`, or plain `Weekly Report` when the week is unknown.
pub fn title(report: &WeeklyReport) -> String {
    match report.week_number {
        Some(week) => format!("Weekly Report - Week {}", week),
        None => "Weekly Report".to_string(),
    }
}

pub(super) fn plan(report: &WeeklyReport) -> DocumentPlan {
    let subject = &report.subject;
    let title = title(report);
    let mut blocks = opening(&title);

    blocks.push(Block::SectionHeading("Details".into()));
    blocks.push(Block::InfoTable(vec![
        row("Student Name", subject.student_name.as_deref()),
        row("Roll Number", subject.roll_number.as_deref()),
        row("Company", subject.company_name.as_deref()),
        row("Supervisor", subject.supervisor_name.as_deref()),
        InfoRow::new(
            "Week",
            report
                .week_number
                .map(|w| w.to_string())
                .unwrap_or_else(|| super::MISSING.to_string()),
        ),
        InfoRow::new("Period", period(report.period_start, report.period_end)),
    ]));

    push_section(&mut blocks, "Work Summary", report.work_summary.as_deref());
    push_section(&mut blocks, "Reflections", report.reflections.as_deref());
    push_section(&mut blocks, "Comments", report.comments.as_deref());

    blocks.push(Block::SignatureBlock {
        left: Signatory::new("Student", non_blank(subject.student_name.as_deref())),
        right: Signatory::new("Supervisor", non_blank(subject.supervisor_name.as_deref())),
    });
    closing(&mut blocks);

    DocumentPlan {
        kind: ReportKind::Weekly,
        title,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;

    #[test]
    fn sections_keep_their_order_and_skip_blanks() {
        let report = WeeklyReport {
            week_number: Some(4),
            work_summary: Some("Wrote the ingestion job.".into()),
            reflections: Some(" ".into()),
            comments: Some("Good progress.".into()),
            ..Default::default()
        };
        let plan = plan(&report);
        assert_eq!(plan.title, "Weekly Report - Week 4");
        let titles: Vec<_> = plan
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::ContentSection { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Work Summary", "Comments"]);
        assert!(matches!(plan.blocks[1], Block::Title(ref t) if t == "Weekly Report - Week 4"));
        assert_eq!(plan.count(BlockKind::SignatureBlock), 1);
    }

    #[test]
    fn unknown_week_has_a_plain_title() {
        assert_eq!(title(&WeeklyReport::default()), "Weekly Report");
    }
}
