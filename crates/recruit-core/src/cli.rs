use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "recruit",
    version,
    about = "Recruitment pipeline dashboard for the terminal"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Pipeline dashboard numbers
    Stats,

    /// Candidate pipeline
    #[command(subcommand)]
    Candidates(CandidateCmd),

    /// Interviewer roster
    #[command(subcommand)]
    Interviewers(InterviewerCmd),

    /// Calendar slot management
    #[command(subcommand)]
    Slots(SlotCmd),

    /// Month view over slots and scheduled interviews
    Calendar {
        /// Month to show as YYYY-MM; defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },

    /// Email templates
    #[command(subcommand)]
    Templates(TemplateCmd),

    /// Compose an email from a template into a candidate's history
    Email(EmailArgs),

    /// Alert log
    #[command(subcommand)]
    Alerts(AlertCmd),

    /// Notification log
    Notifications(NotificationListArgs),

    /// Dump the whole workspace as JSON on stdout
    Export,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CandidateCmd {
    /// List candidates, filtered
    List(CandidateListArgs),
    /// Full detail for one candidate
    Show { id: String },
    /// Add a candidate
    Add(CandidateAddArgs),
    /// Edit candidate fields in place
    Modify(CandidateModifyArgs),
    /// Remove a candidate outright
    Delete { id: String },
    /// Schedule an interview round
    Schedule(ScheduleArgs),
    /// Record an interview outcome
    Outcome(OutcomeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CandidateListArgs {
    /// Substring match over name, email and position
    #[arg(long, default_value = "")]
    pub search: String,

    /// Pipeline stage, or "all"
    #[arg(long)]
    pub status: Option<String>,

    /// Application source, or "all"
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CandidateAddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub position: String,

    #[arg(long, default_value = "Job Board")]
    pub source: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub experience: Option<String>,

    /// Repeatable
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// Total interview rounds planned
    #[arg(long)]
    pub rounds: Option<u32>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CandidateModifyArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub round: Option<u32>,

    #[arg(long)]
    pub experience: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    /// Candidate id
    pub id: String,

    /// Round number; defaults to the candidate's current round
    #[arg(long)]
    pub round: Option<u32>,

    #[arg(long = "type", default_value = "Technical")]
    pub kind: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// HH:MM
    #[arg(long)]
    pub time: String,

    /// Minutes
    #[arg(long, default_value_t = 60)]
    pub duration: u32,

    /// Interviewer id, repeatable
    #[arg(long = "interviewer")]
    pub interviewers: Vec<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long = "link")]
    pub meeting_link: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OutcomeArgs {
    /// Candidate id
    pub id: String,

    /// Interview id
    pub interview: String,

    #[arg(long, default_value = "Completed")]
    pub status: String,

    /// 1-5
    #[arg(long)]
    pub rating: Option<u8>,

    #[arg(long)]
    pub feedback: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum InterviewerCmd {
    /// List interviewers, filtered
    List(InterviewerListArgs),
    /// Add an interviewer
    Add(InterviewerAddArgs),
    /// Edit interviewer fields in place
    Modify(InterviewerModifyArgs),
    /// Remove an interviewer
    Delete { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct InterviewerListArgs {
    /// Substring match over name, email and role
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact department, or "all"
    #[arg(long)]
    pub department: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct InterviewerAddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub role: String,

    #[arg(long)]
    pub department: String,
}

#[derive(Args, Debug, Clone)]
pub struct InterviewerModifyArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub department: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SlotCmd {
    /// List slots, filtered
    List(SlotListArgs),
    /// Add a slot
    Add(SlotAddArgs),
    /// Remove a slot
    Delete { id: String },
    /// Replace a slot's assignment lists
    Assign(SlotAssignArgs),
    /// Block the same weekday window across a run of days
    BulkBlock(BulkBlockArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SlotListArgs {
    /// Substring match over title and date
    #[arg(long, default_value = "")]
    pub search: String,

    /// available | blocked | interview | meeting, or "all"
    #[arg(long = "type")]
    pub kind: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SlotAddArgs {
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// HH:MM
    #[arg(long)]
    pub start: String,

    /// HH:MM
    #[arg(long)]
    pub end: String,

    #[arg(long = "type", default_value = "blocked")]
    pub kind: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// daily | weekly | monthly
    #[arg(long)]
    pub recurring: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SlotAssignArgs {
    pub id: String,

    /// Interviewer id, repeatable
    #[arg(long = "interviewer")]
    pub interviewers: Vec<String>,

    /// Candidate id, repeatable
    #[arg(long = "candidate")]
    pub candidates: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BulkBlockArgs {
    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub from: String,

    /// Calendar days to cover; weekends are skipped
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// HH:MM
    #[arg(long, default_value = "12:00")]
    pub start: String,

    /// HH:MM
    #[arg(long, default_value = "13:00")]
    pub end: String,

    #[arg(long, default_value = "Lunch Break")]
    pub title: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplateCmd {
    /// List templates, filtered
    List(TemplateListArgs),
    /// Print a template's subject and body
    Show { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct TemplateListArgs {
    /// Substring match over name and subject
    #[arg(long, default_value = "")]
    pub search: String,

    /// Email type, or "all"
    #[arg(long = "type")]
    pub kind: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EmailArgs {
    /// Candidate id
    #[arg(long)]
    pub candidate: String,

    /// Template id
    #[arg(long)]
    pub template: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AlertCmd {
    /// List alerts, filtered
    List(AlertListArgs),
    /// Create a scheduled alert
    Create(AlertCreateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AlertListArgs {
    /// Substring match over title and message
    #[arg(long, default_value = "")]
    pub search: String,

    /// reminder | delay | cancellation | urgent | followup, or "all"
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// low | medium | high | urgent, or "all"
    #[arg(long)]
    pub priority: Option<String>,

    /// scheduled | sent | failed, or "all"
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AlertCreateArgs {
    #[arg(long = "type", default_value = "reminder")]
    pub kind: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub message: String,

    /// Candidate recipient id, repeatable
    #[arg(long = "candidate")]
    pub candidates: Vec<String>,

    /// Interviewer recipient id, repeatable
    #[arg(long = "interviewer")]
    pub interviewers: Vec<String>,

    /// Free-form recipient address, repeatable
    #[arg(long = "to")]
    pub others: Vec<String>,

    /// YYYY-MM-DDTHH:MM; defaults to now
    #[arg(long)]
    pub at: Option<String>,

    #[arg(long, default_value = "medium")]
    pub priority: String,

    #[arg(long)]
    pub related: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct NotificationListArgs {
    /// Substring match over title and message
    #[arg(long, default_value = "")]
    pub search: String,

    /// reminder | delay | update | alert | success, or "all"
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// sent | pending | failed, or "all"
    #[arg(long)]
    pub status: Option<String>,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
