//! Report value objects handed to the engine by the surrounding application.
//!
//! Every scalar is optional: the engine renders missing values as `N/A` and skips
//! missing narrative sections, so a partially filled report still produces a document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Returns the trimmed value, or `None` when it is absent or only whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    Joining,
    Weekly,
    Final,
    Misconduct,
    Results,
}

impl ReportKind {
    /// Stable machine name, used in filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Joining => "joining_report",
            ReportKind::Weekly => "weekly_report",
            ReportKind::Final => "final_report",
            ReportKind::Misconduct => "misconduct_report",
            ReportKind::Results => "results_certificate",
        }
    }
}

/// Identity of the people and organisation a report is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subject {
    pub student_name: Option<String>,
    pub roll_number: Option<String>,
    pub department: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub supervisor_name: Option<String>,
    pub supervisor_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reportKind", rename_all = "camelCase")]
pub enum ReportDocument {
    Joining(JoiningReport),
    Weekly(WeeklyReport),
    Final(FinalReport),
    Misconduct(MisconductReport),
    Results(ResultsCertificate),
}

impl ReportDocument {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportDocument::Joining(_) => ReportKind::Joining,
            ReportDocument::Weekly(_) => ReportKind::Weekly,
            ReportDocument::Final(_) => ReportKind::Final,
            ReportDocument::Misconduct(_) => ReportKind::Misconduct,
            ReportDocument::Results(_) => ReportKind::Results,
        }
    }

    pub fn subject(&self) -> &Subject {
        match self {
            ReportDocument::Joining(r) => &r.subject,
            ReportDocument::Weekly(r) => &r.subject,
            ReportDocument::Final(r) => &r.subject,
            ReportDocument::Misconduct(r) => &r.subject,
            ReportDocument::Results(r) => &r.subject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JoiningReport {
    pub subject: Subject,
    pub joining_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub working_hours: Option<String>,
    pub stipend: Option<String>,
    pub job_description: Option<String>,
    /// Declarations the student confirms. An empty list falls back to the standard set.
    pub acknowledgments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeeklyReport {
    pub subject: Subject,
    pub week_number: Option<u32>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub work_summary: Option<String>,
    pub reflections: Option<String>,
    pub comments: Option<String>,
}

/// The nine narrative sections of a final internship report, in print order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinalSections {
    pub executive_summary: Option<String>,
    pub company_overview: Option<String>,
    pub roles_and_responsibilities: Option<String>,
    pub projects_undertaken: Option<String>,
    pub skills_acquired: Option<String>,
    pub challenges_faced: Option<String>,
    pub key_learnings: Option<String>,
    pub achievements: Option<String>,
    pub conclusion: Option<String>,
}

impl FinalSections {
    /// `(title, body)` pairs in the order they are printed.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("Executive Summary", self.executive_summary.as_deref()),
            ("Company Overview", self.company_overview.as_deref()),
            ("Roles and Responsibilities", self.roles_and_responsibilities.as_deref()),
            ("Projects Undertaken", self.projects_undertaken.as_deref()),
            ("Skills Acquired", self.skills_acquired.as_deref()),
            ("Challenges Faced", self.challenges_faced.as_deref()),
            ("Key Learnings", self.key_learnings.as_deref()),
            ("Achievements", self.achievements.as_deref()),
            ("Conclusion", self.conclusion.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinalReport {
    pub subject: Subject,
    pub internship_start: Option<NaiveDate>,
    pub internship_end: Option<NaiveDate>,
    pub submitted_on: Option<NaiveDate>,
    pub sections: FinalSections,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MisconductReport {
    pub subject: Subject,
    pub incident_date: Option<NaiveDate>,
    pub reported_by: Option<String>,
    pub severity: Option<String>,
    pub incident_description: Option<String>,
    pub evidence: Option<String>,
    pub action_taken: Option<String>,
    pub supervisor_remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationCriterion {
    pub name: Option<String>,
    pub score: Option<f32>,
    pub max_score: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationBreakdown {
    pub criteria: Vec<EvaluationCriterion>,
    pub grade: Option<String>,
}

impl EvaluationBreakdown {
    /// Sum of scored criteria and of their maxima. Unscored criteria count towards neither.
    pub fn totals(&self) -> Option<(f32, f32)> {
        let scored: Vec<_> = self
            .criteria
            .iter()
            .filter_map(|c| c.score.map(|s| (s, c.max_score.unwrap_or(0.0))))
            .collect();
        if scored.is_empty() {
            return None;
        }
        Some(
            scored
                .iter()
                .fold((0.0, 0.0), |(s, m), (score, max)| (s + score, m + max)),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultsCertificate {
    pub subject: Subject,
    pub internship_start: Option<NaiveDate>,
    pub internship_end: Option<NaiveDate>,
    pub evaluation: Option<EvaluationBreakdown>,
    pub remarks: Option<String>,
}
