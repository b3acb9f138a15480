use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Available,
    Blocked,
    Interview,
    Meeting,
}

impl SlotKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "blocked" => Some(Self::Blocked),
            "interview" => Some(Self::Interview),
            "meeting" => Some(Self::Meeting),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Blocked => "Blocked",
            Self::Interview => "Interview",
            Self::Meeting => "Meeting",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// A calendar time window. Assignment lists hold ids, not copies; a dangling
/// id resolves to an "Unknown" placeholder at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSlot {
    pub id: String,

    pub date: NaiveDate,

    pub start: NaiveTime,

    pub end: NaiveTime,

    pub kind: SlotKind,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub assigned_interviewers: Vec<String>,

    #[serde(default)]
    pub assigned_candidates: Vec<String>,

    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

impl CalendarSlot {
    pub fn new(id: String, date: NaiveDate, start: NaiveTime, end: NaiveTime, kind: SlotKind) -> Self {
        Self {
            id,
            date,
            start,
            end,
            kind,
            title: None,
            notes: None,
            assigned_interviewers: vec![],
            assigned_candidates: vec![],
            recurrence: None,
        }
    }

    /// `start < end` is expected but not enforced anywhere.
    pub fn is_backwards(&self) -> bool {
        self.end <= self.start
    }

    /// Same-day window intersection, ends exclusive.
    pub fn overlaps(&self, other: &CalendarSlot) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }

    pub fn shares_interviewer(&self, other: &CalendarSlot) -> bool {
        self.assigned_interviewers
            .iter()
            .any(|id| other.assigned_interviewers.contains(id))
    }

    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} Slot", self.kind.label()))
    }
}
