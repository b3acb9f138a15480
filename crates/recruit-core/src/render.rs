use std::io::{self, IsTerminal, Write};

use unicode_width::UnicodeWidthStr;

use crate::calendar::{DatedEvent, DayAgenda, MonthGrid, bucket_events_by_date};
use crate::candidate::{Candidate, CandidateStatus, InterviewStatus};
use crate::config::Config;
use crate::datetime::{format_clock, iso_date};
use crate::interviewer::Interviewer;
use crate::messaging::{
    Alert, AlertPriority, AlertStatus, EmailStatus, EmailTemplate, Notification,
    NotificationStatus,
};
use crate::schedule::{CalendarSlot, SlotKind};
use crate::stats::PipelineStats;
use crate::store::Workspace;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> Self {
        Self { color: cfg.color }
    }

    #[tracing::instrument(skip(self, candidates))]
    pub fn print_candidates(&mut self, candidates: &[&Candidate]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if candidates.is_empty() {
            writeln!(out, "No candidates match.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Name".to_string(),
            "Position".to_string(),
            "Status".to_string(),
            "Source".to_string(),
            "Round".to_string(),
            "Applied".to_string(),
        ];

        let mut rows = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            rows.push(vec![
                self.paint(short_id(&candidate.id), "33"),
                candidate.name.clone(),
                candidate.position.clone(),
                self.paint(
                    candidate.status.label(),
                    candidate_status_code(candidate.status),
                ),
                candidate.source.label().to_string(),
                format!("{}/{}", candidate.current_round, candidate.total_rounds),
                iso_date(candidate.applied),
            ]);
        }

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, candidate))]
    pub fn print_candidate_info(&mut self, candidate: &Candidate) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();

        writeln!(out, "id          {}", candidate.id)?;
        writeln!(out, "name        {}", candidate.name)?;
        writeln!(out, "email       {}", candidate.email)?;
        writeln!(
            out,
            "phone       {}",
            candidate.phone.clone().unwrap_or_default()
        )?;
        writeln!(out, "position    {}", candidate.position)?;
        writeln!(out, "source      {}", candidate.source.label())?;
        writeln!(
            out,
            "status      {}",
            self.paint(
                candidate.status.label(),
                candidate_status_code(candidate.status)
            )
        )?;
        writeln!(
            out,
            "round       {}/{}",
            candidate.current_round, candidate.total_rounds
        )?;
        writeln!(out, "experience  {}", candidate.experience)?;
        writeln!(out, "skills      {}", candidate.skills.join(", "))?;
        writeln!(out, "applied     {}", iso_date(candidate.applied))?;
        writeln!(out, "updated     {}", iso_date(candidate.updated))?;
        if let Some(notes) = &candidate.notes {
            writeln!(out, "notes       {notes}")?;
        }

        if !candidate.interviews.is_empty() {
            writeln!(out)?;
            writeln!(out, "Interviews")?;
            for interview in &candidate.interviews {
                let names: Vec<&str> = interview
                    .interviewers
                    .iter()
                    .map(|interviewer| interviewer.name.as_str())
                    .collect();
                writeln!(
                    out,
                    "  [{}] round {} {} on {} {} ({} min) with {} - {}{}",
                    short_id(&interview.id),
                    interview.round,
                    interview.kind.label(),
                    iso_date(interview.date),
                    format_clock(interview.time),
                    interview.duration_minutes,
                    if names.is_empty() {
                        "nobody yet".to_string()
                    } else {
                        names.join(", ")
                    },
                    self.paint(
                        interview.status.label(),
                        interview_status_code(interview.status)
                    ),
                    interview
                        .rating
                        .map(|rating| format!(", rated {rating}/5"))
                        .unwrap_or_default(),
                )?;
                if let Some(feedback) = &interview.feedback {
                    writeln!(out, "      {feedback}")?;
                }
            }
        }

        if !candidate.email_history.is_empty() {
            writeln!(out)?;
            writeln!(out, "Email history")?;
            for record in &candidate.email_history {
                writeln!(
                    out,
                    "  {} {} to {} - {}",
                    record.sent.format("%Y-%m-%d %H:%M"),
                    record.kind.label(),
                    record.recipient,
                    self.paint(record.status.label(), email_status_code(record.status)),
                )?;
            }
        }

        Ok(())
    }

    #[tracing::instrument(skip(self, interviewers))]
    pub fn print_interviewers(&mut self, interviewers: &[&Interviewer]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if interviewers.is_empty() {
            writeln!(out, "No interviewers match.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Name".to_string(),
            "Email".to_string(),
            "Role".to_string(),
            "Department".to_string(),
        ];
        let rows = interviewers
            .iter()
            .map(|interviewer| {
                vec![
                    self.paint(short_id(&interviewer.id), "33"),
                    interviewer.name.clone(),
                    interviewer.email.clone(),
                    interviewer.role.clone(),
                    interviewer.department.clone(),
                ]
            })
            .collect();

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, ws, slots))]
    pub fn print_slots(&mut self, ws: &Workspace, slots: &[&CalendarSlot]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if slots.is_empty() {
            writeln!(out, "No calendar slots match.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Date".to_string(),
            "Window".to_string(),
            "Type".to_string(),
            "Title".to_string(),
            "Interviewers".to_string(),
            "Candidates".to_string(),
        ];

        let mut rows = Vec::with_capacity(slots.len());
        for slot in slots {
            let interviewers = slot
                .assigned_interviewers
                .iter()
                .map(|id| ws.interviewer_name(id))
                .collect::<Vec<_>>()
                .join(", ");
            let candidates = slot
                .assigned_candidates
                .iter()
                .map(|id| ws.candidate_name(id))
                .collect::<Vec<_>>()
                .join(", ");
            let mut title = slot.display_title();
            if let Some(recurrence) = slot.recurrence {
                title.push_str(&format!(" (recurring {})", recurrence.label()));
            }

            rows.push(vec![
                self.paint(short_id(&slot.id), "33"),
                iso_date(slot.date),
                format!("{}-{}", format_clock(slot.start), format_clock(slot.end)),
                self.paint(slot.kind.label(), slot_kind_code(slot.kind)),
                title,
                interviewers,
                candidates,
            ]);
        }

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, templates))]
    pub fn print_templates(&mut self, templates: &[&EmailTemplate]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if templates.is_empty() {
            writeln!(out, "No email templates match.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Name".to_string(),
            "Type".to_string(),
            "Subject".to_string(),
            "Variables".to_string(),
        ];
        let rows = templates
            .iter()
            .map(|template| {
                vec![
                    self.paint(short_id(&template.id), "33"),
                    template.name.clone(),
                    template.kind.label().to_string(),
                    template.subject.clone(),
                    template.variables.join(", "),
                ]
            })
            .collect();

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, subject, body))]
    pub fn print_email(&mut self, subject: &str, body: &str) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "Subject: {subject}")?;
        writeln!(out)?;
        writeln!(out, "{body}")?;
        Ok(())
    }

    #[tracing::instrument(skip(self, ws, alerts))]
    pub fn print_alerts(&mut self, ws: &Workspace, alerts: &[&Alert]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if alerts.is_empty() {
            writeln!(out, "No alerts match.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Type".to_string(),
            "Priority".to_string(),
            "Status".to_string(),
            "Scheduled".to_string(),
            "Title".to_string(),
            "Recipients".to_string(),
        ];

        let mut rows = Vec::with_capacity(alerts.len());
        for alert in alerts {
            let mut recipients: Vec<String> = alert
                .recipients
                .candidates
                .iter()
                .map(|id| ws.candidate_name(id))
                .collect();
            recipients.extend(
                alert
                    .recipients
                    .interviewers
                    .iter()
                    .map(|id| ws.interviewer_name(id)),
            );
            recipients.extend(alert.recipients.others.iter().cloned());

            rows.push(vec![
                self.paint(short_id(&alert.id), "33"),
                alert.kind.label().to_string(),
                self.paint(alert.priority.label(), alert_priority_code(alert.priority)),
                self.paint(alert.status.label(), alert_status_code(alert.status)),
                alert.scheduled.format("%Y-%m-%d %H:%M").to_string(),
                alert.title.clone(),
                recipients.join(", "),
            ]);
        }

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, notifications))]
    pub fn print_notifications(&mut self, notifications: &[&Notification]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if notifications.is_empty() {
            writeln!(out, "No notifications match.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Type".to_string(),
            "Status".to_string(),
            "Timestamp".to_string(),
            "Title".to_string(),
            "Recipients".to_string(),
        ];
        let rows = notifications
            .iter()
            .map(|notification| {
                vec![
                    self.paint(short_id(&notification.id), "33"),
                    notification.kind.label().to_string(),
                    self.paint(
                        notification.status.label(),
                        notification_status_code(notification.status),
                    ),
                    notification.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                    notification.title.clone(),
                    notification.recipients.len().to_string(),
                ]
            })
            .collect();

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, stats, stages))]
    pub fn print_stats(
        &mut self,
        stats: &PipelineStats,
        stages: &[(CandidateStatus, usize)],
    ) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();

        writeln!(out, "total candidates      {}", stats.total_candidates)?;
        writeln!(out, "new applications      {}", stats.new_applications)?;
        writeln!(out, "interviews scheduled  {}", stats.interviews_scheduled)?;
        writeln!(out, "selected              {}", stats.selected)?;
        writeln!(out, "rejected              {}", stats.rejected)?;
        writeln!(out, "dropouts              {}", stats.dropouts)?;
        writeln!(out, "avg. days to hire     {}", stats.average_days_to_hire)?;

        writeln!(out)?;
        writeln!(out, "Pipeline")?;
        for (status, count) in stages {
            writeln!(
                out,
                "  {:<20} {:>3} {}",
                status.label(),
                count,
                self.paint(&"#".repeat(*count), candidate_status_code(*status)),
            )?;
        }
        Ok(())
    }

    /// Compact month grid (leading blanks, today highlighted, `*` on days
    /// with events) followed by the per-day agenda, capped per day with a
    /// `+N more` overflow line.
    #[tracing::instrument(skip(self, grid, events, today_iso))]
    pub fn print_month<E: DatedEvent>(
        &mut self,
        grid: &MonthGrid,
        events: &[E],
        today_iso: &str,
    ) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();

        writeln!(
            out,
            "{:^28}",
            format!("{} {}", month_name(grid.month), grid.year)
        )?;
        writeln!(out, "Sun Mon Tue Wed Thu Fri Sat")?;

        for week in grid.weeks() {
            let mut line = String::new();
            for cell in week {
                match cell {
                    None => line.push_str("    "),
                    Some(day) => {
                        let iso = grid.iso_date(*day);
                        let text = format!("{day:>3}");
                        let text = if iso == today_iso {
                            self.paint(&text, "7")
                        } else {
                            text
                        };
                        line.push_str(&text);
                        if bucket_events_by_date(events, &iso).is_empty() {
                            line.push(' ');
                        } else {
                            line.push('*');
                        }
                    }
                }
            }
            writeln!(out, "{}", line.trim_end())?;
        }

        for day in 1..=grid.days_in_month() {
            let iso = grid.iso_date(day);
            let agenda = DayAgenda::new(bucket_events_by_date(events, &iso));
            if agenda.is_empty() {
                continue;
            }

            writeln!(out)?;
            if iso == today_iso {
                writeln!(out, "{iso} (today)")?;
            } else {
                writeln!(out, "{iso}")?;
            }
            for event in agenda.visible() {
                writeln!(out, "  {}", event.summary())?;
            }
            if agenda.overflow() > 0 {
                writeln!(out, "  +{} more", agenda.overflow())?;
            }
        }

        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color || !io::stdout().is_terminal() {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

fn candidate_status_code(status: CandidateStatus) -> &'static str {
    match status {
        CandidateStatus::New => "34",
        CandidateStatus::Screening => "33",
        CandidateStatus::InterviewScheduled => "35",
        CandidateStatus::InterviewCompleted => "36",
        CandidateStatus::NextRound => "33",
        CandidateStatus::FinalRound => "31",
        CandidateStatus::Selected => "32",
        CandidateStatus::Rejected => "90",
        CandidateStatus::DroppedOut => "31",
    }
}

fn interview_status_code(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Scheduled => "34",
        InterviewStatus::Completed => "32",
        InterviewStatus::Cancelled => "31",
        InterviewStatus::Rescheduled => "33",
        InterviewStatus::NoShow => "31",
    }
}

fn slot_kind_code(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::Available => "32",
        SlotKind::Blocked => "31",
        SlotKind::Interview => "34",
        SlotKind::Meeting => "35",
    }
}

fn email_status_code(status: EmailStatus) -> &'static str {
    match status {
        EmailStatus::Sent => "33",
        EmailStatus::Delivered => "32",
        EmailStatus::Opened => "36",
        EmailStatus::Failed => "31",
    }
}

fn alert_priority_code(priority: AlertPriority) -> &'static str {
    match priority {
        AlertPriority::Low => "90",
        AlertPriority::Medium => "34",
        AlertPriority::High => "33",
        AlertPriority::Urgent => "31",
    }
}

fn alert_status_code(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Scheduled => "33",
        AlertStatus::Sent => "32",
        AlertStatus::Failed => "31",
    }
}

fn notification_status_code(status: NotificationStatus) -> &'static str {
    match status {
        NotificationStatus::Sent => "32",
        NotificationStatus::Pending => "33",
        NotificationStatus::Failed => "31",
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for idx in 0..column_count {
        write!(writer, "{:-<width$} ", "", width = widths[idx])?;
    }
    writeln!(writer)?;

    for row in rows {
        for idx in 0..column_count {
            let cell = &row[idx];
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
