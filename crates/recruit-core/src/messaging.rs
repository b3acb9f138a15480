use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmailKind {
    Acknowledgment,
    #[serde(rename = "Interview Invite")]
    InterviewInvite,
    #[serde(rename = "Follow Up")]
    FollowUp,
    Reminder,
    Rejection,
    Selection,
    #[serde(rename = "Delay Notification")]
    DelayNotification,
}

impl EmailKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "acknowledgment" => Some(Self::Acknowledgment),
            "interview invite" | "invite" => Some(Self::InterviewInvite),
            "follow up" | "follow-up" | "followup" => Some(Self::FollowUp),
            "reminder" => Some(Self::Reminder),
            "rejection" => Some(Self::Rejection),
            "selection" => Some(Self::Selection),
            "delay notification" | "delay" => Some(Self::DelayNotification),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Acknowledgment => "Acknowledgment",
            Self::InterviewInvite => "Interview Invite",
            Self::FollowUp => "Follow Up",
            Self::Reminder => "Reminder",
            Self::Rejection => "Rejection",
            Self::Selection => "Selection",
            Self::DelayNotification => "Delay Notification",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmailStatus {
    Sent,
    Delivered,
    Opened,
    Failed,
}

impl EmailStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Delivered => "Delivered",
            Self::Opened => "Opened",
            Self::Failed => "Failed",
        }
    }
}

/// Outbound message as it appears in a candidate's history. Nothing is ever
/// delivered; the record is the whole effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: String,
    pub kind: EmailKind,
    pub recipient: String,
    pub subject: String,
    pub sent: DateTime<Utc>,
    pub status: EmailStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
    pub kind: EmailKind,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Reminder,
    Delay,
    Cancellation,
    Urgent,
    Followup,
}

impl AlertKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "reminder" => Some(Self::Reminder),
            "delay" => Some(Self::Delay),
            "cancellation" => Some(Self::Cancellation),
            "urgent" => Some(Self::Urgent),
            "followup" => Some(Self::Followup),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Delay => "delay",
            Self::Cancellation => "cancellation",
            Self::Urgent => "urgent",
            Self::Followup => "followup",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl AlertPriority {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Scheduled,
    Sent,
    Failed,
}

impl AlertStatus {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "scheduled" => Some(Self::Scheduled),
            "sent" => Some(Self::Sent),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

/// Alert recipients are split by audience; candidate and interviewer entries
/// are ids, `others` holds raw addresses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipients {
    #[serde(default)]
    pub candidates: Vec<String>,
    #[serde(default)]
    pub interviewers: Vec<String>,
    #[serde(default)]
    pub others: Vec<String>,
}

impl Recipients {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.interviewers.is_empty() && self.others.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,

    pub kind: AlertKind,

    pub title: String,

    pub message: String,

    #[serde(default)]
    pub recipients: Recipients,

    pub scheduled: DateTime<Utc>,

    pub status: AlertStatus,

    pub priority: AlertPriority,

    #[serde(default)]
    pub related_to: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Delay,
    Update,
    Alert,
    Success,
}

impl NotificationKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "reminder" => Some(Self::Reminder),
            "delay" => Some(Self::Delay),
            "update" => Some(Self::Update),
            "alert" => Some(Self::Alert),
            "success" => Some(Self::Success),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Delay => "delay",
            Self::Update => "update",
            Self::Alert => "alert",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Pending,
    Failed,
}

impl NotificationStatus {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "sent" => Some(Self::Sent),
            "pending" => Some(Self::Pending),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,

    pub kind: NotificationKind,

    pub title: String,

    pub message: String,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub recipients: Vec<String>,

    pub status: NotificationStatus,

    #[serde(default)]
    pub related_to: Option<String>,
}
