#![allow(dead_code)]

use attest::{
    Attachment, EvaluationBreakdown, EvaluationCriterion, FinalReport, FinalSections, JoiningReport,
    MisconductReport, ReportDocument, ResultsCertificate, Subject, WeeklyReport,
};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn subject(name: &str) -> Subject {
    Subject {
        student_name: Some(name.to_string()),
        roll_number: Some("CS21B042".to_string()),
        department: Some("Computer Science".to_string()),
        company_name: Some("Northwind Analytics".to_string()),
        company_address: Some("14 Harbour Road, Kochi".to_string()),
        supervisor_name: Some("Meera Nair".to_string()),
        supervisor_email: Some("meera.nair@northwind.example".to_string()),
    }
}

/// Roughly `words` words of plausible prose.
pub fn prose(words: usize) -> String {
    const VOCAB: [&str; 12] = [
        "the", "team", "reviewed", "deployment", "pipeline", "and", "improved", "latency",
        "across", "several", "services", "during",
    ];
    (0..words)
        .map(|i| VOCAB[i % VOCAB.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn weekly_with_summary(summary: &str) -> ReportDocument {
    ReportDocument::Weekly(WeeklyReport {
        subject: subject("Ravi Kumar"),
        week_number: Some(3),
        period_start: Some(date(2024, 6, 10)),
        period_end: Some(date(2024, 6, 14)),
        work_summary: Some(summary.to_string()),
        reflections: Some(String::new()),
        comments: None,
    })
}

pub fn full_final_report(words_per_section: usize) -> ReportDocument {
    let text = || Some(prose(words_per_section));
    ReportDocument::Final(FinalReport {
        subject: subject("Ananya Rao"),
        internship_start: Some(date(2024, 1, 8)),
        internship_end: Some(date(2024, 6, 28)),
        submitted_on: Some(date(2024, 7, 5)),
        sections: FinalSections {
            executive_summary: text(),
            company_overview: text(),
            roles_and_responsibilities: text(),
            projects_undertaken: text(),
            skills_acquired: text(),
            challenges_faced: text(),
            key_learnings: text(),
            achievements: text(),
            conclusion: text(),
        },
        attachments: vec![Attachment {
            name: Some("Project slides".to_string()),
            url: Some("https://files.example.org/slides.pdf".to_string()),
        }],
    })
}

pub fn joining() -> ReportDocument {
    ReportDocument::Joining(JoiningReport {
        subject: subject("Kiran Shah"),
        joining_date: Some(date(2024, 1, 8)),
        position: Some("Data Engineering Intern".to_string()),
        working_hours: Some("09:30 - 18:00".to_string()),
        stipend: Some("15000 / month".to_string()),
        job_description: Some(prose(60)),
        acknowledgments: Vec::new(),
    })
}

pub fn misconduct() -> ReportDocument {
    ReportDocument::Misconduct(MisconductReport {
        subject: subject("Dev Patel"),
        incident_date: Some(date(2024, 4, 2)),
        reported_by: Some("Meera Nair".to_string()),
        severity: Some("Moderate".to_string()),
        incident_description: Some(prose(80)),
        evidence: Some("Badge access logs for 2 April.".to_string()),
        action_taken: None,
        supervisor_remarks: Some("   ".to_string()),
    })
}

pub fn results() -> ReportDocument {
    ReportDocument::Results(ResultsCertificate {
        subject: subject("Sara Thomas"),
        internship_start: Some(date(2024, 1, 8)),
        internship_end: Some(date(2024, 6, 28)),
        evaluation: Some(EvaluationBreakdown {
            criteria: vec![
                EvaluationCriterion {
                    name: Some("Technical Skill".to_string()),
                    score: Some(36.0),
                    max_score: Some(40.0),
                },
                EvaluationCriterion {
                    name: Some("Professional Conduct".to_string()),
                    score: Some(27.0),
                    max_score: Some(30.0),
                },
            ],
            grade: Some("A".to_string()),
        }),
        remarks: Some("Consistently dependable.".to_string()),
    })
}

pub fn empty_documents() -> Vec<ReportDocument> {
    vec![
        ReportDocument::Joining(JoiningReport::default()),
        ReportDocument::Weekly(WeeklyReport::default()),
        ReportDocument::Final(FinalReport::default()),
        ReportDocument::Misconduct(MisconductReport::default()),
        ReportDocument::Results(ResultsCertificate::default()),
    ]
}
