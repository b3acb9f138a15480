use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::interviewer::Interviewer;
use crate::messaging::EmailRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CandidateSource {
    LinkedIn,
    Indeed,
    Referral,
    #[serde(rename = "Company Website")]
    CompanyWebsite,
    #[serde(rename = "Recruiter Contact")]
    RecruiterContact,
    #[serde(rename = "Job Board")]
    JobBoard,
}

impl CandidateSource {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "linkedin" => Some(Self::LinkedIn),
            "indeed" => Some(Self::Indeed),
            "referral" => Some(Self::Referral),
            "company website" | "website" => Some(Self::CompanyWebsite),
            "recruiter contact" | "recruiter" => Some(Self::RecruiterContact),
            "job board" | "job-board" => Some(Self::JobBoard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Indeed => "Indeed",
            Self::Referral => "Referral",
            Self::CompanyWebsite => "Company Website",
            Self::RecruiterContact => "Recruiter Contact",
            Self::JobBoard => "Job Board",
        }
    }
}

/// The nine pipeline stages. No transition rules: any stage may be set from
/// any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CandidateStatus {
    New,
    Screening,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Interview Completed")]
    InterviewCompleted,
    #[serde(rename = "Next Round")]
    NextRound,
    #[serde(rename = "Final Round")]
    FinalRound,
    Selected,
    Rejected,
    #[serde(rename = "Dropped Out")]
    DroppedOut,
}

impl CandidateStatus {
    /// Pipeline order, used for stage breakdowns.
    pub const ALL: [CandidateStatus; 9] = [
        Self::New,
        Self::Screening,
        Self::InterviewScheduled,
        Self::InterviewCompleted,
        Self::NextRound,
        Self::FinalRound,
        Self::Selected,
        Self::Rejected,
        Self::DroppedOut,
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "new" => Some(Self::New),
            "screening" => Some(Self::Screening),
            "interview scheduled" | "scheduled" => Some(Self::InterviewScheduled),
            "interview completed" => Some(Self::InterviewCompleted),
            "next round" => Some(Self::NextRound),
            "final round" => Some(Self::FinalRound),
            "selected" => Some(Self::Selected),
            "rejected" => Some(Self::Rejected),
            "dropped out" | "dropped" => Some(Self::DroppedOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Screening => "Screening",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::InterviewCompleted => "Interview Completed",
            Self::NextRound => "Next Round",
            Self::FinalRound => "Final Round",
            Self::Selected => "Selected",
            Self::Rejected => "Rejected",
            Self::DroppedOut => "Dropped Out",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InterviewKind {
    #[serde(rename = "Phone Screening")]
    PhoneScreening,
    Technical,
    Behavioral,
    Final,
    #[serde(rename = "HR Round")]
    HrRound,
    #[serde(rename = "Panel Interview")]
    PanelInterview,
}

impl InterviewKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "phone screening" | "phone" => Some(Self::PhoneScreening),
            "technical" => Some(Self::Technical),
            "behavioral" => Some(Self::Behavioral),
            "final" => Some(Self::Final),
            "hr round" | "hr" => Some(Self::HrRound),
            "panel interview" | "panel" => Some(Self::PanelInterview),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PhoneScreening => "Phone Screening",
            Self::Technical => "Technical",
            Self::Behavioral => "Behavioral",
            Self::Final => "Final",
            Self::HrRound => "HR Round",
            Self::PanelInterview => "Panel Interview",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
    #[serde(rename = "No Show")]
    NoShow,
}

impl InterviewStatus {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            "rescheduled" => Some(Self::Rescheduled),
            "no show" | "no-show" => Some(Self::NoShow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Rescheduled => "Rescheduled",
            Self::NoShow => "No Show",
        }
    }
}

/// One round of a candidate's interview sequence. The interviewer records are
/// copied by value at scheduling time, so later roster edits never rewrite
/// what already happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,

    pub candidate_id: String,

    pub round: u32,

    pub kind: InterviewKind,

    pub date: NaiveDate,

    pub time: NaiveTime,

    pub duration_minutes: u32,

    #[serde(default)]
    pub interviewers: Vec<Interviewer>,

    pub status: InterviewStatus,

    #[serde(default)]
    pub rating: Option<u8>,

    #[serde(default)]
    pub feedback: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub meeting_link: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    pub position: String,

    pub source: CandidateSource,

    pub status: CandidateStatus,

    pub current_round: u32,

    pub total_rounds: u32,

    #[serde(default)]
    pub experience: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub resume: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    pub applied: NaiveDate,

    pub updated: NaiveDate,

    #[serde(default)]
    pub interviews: Vec<Interview>,

    #[serde(default)]
    pub email_history: Vec<EmailRecord>,
}

impl Candidate {
    pub fn new(
        id: String,
        name: String,
        email: String,
        position: String,
        source: CandidateSource,
        today: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone: None,
            position,
            source,
            status: CandidateStatus::New,
            current_round: 1,
            total_rounds: 3,
            experience: String::new(),
            skills: vec![],
            resume: None,
            notes: None,
            applied: today,
            updated: today,
            interviews: vec![],
            email_history: vec![],
        }
    }

    pub fn scheduled_interviews(&self) -> impl Iterator<Item = &Interview> {
        self.interviews
            .iter()
            .filter(|interview| interview.status == InterviewStatus::Scheduled)
    }
}
