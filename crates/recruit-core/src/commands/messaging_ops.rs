use std::collections::BTreeMap;

use anyhow::anyhow;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::cli::{
    AlertCmd, AlertCreateArgs, AlertListArgs, EmailArgs, NotificationListArgs, TemplateCmd,
    TemplateListArgs,
};
use crate::datetime::{format_clock, iso_date, parse_iso_datetime};
use crate::filter::{AlertQuery, NotificationQuery, TemplateQuery};
use crate::messaging::{
    Alert, AlertKind, AlertPriority, AlertStatus, EmailKind, EmailRecord, EmailStatus,
    NotificationKind, NotificationStatus, Recipients,
};
use crate::render::Renderer;
use crate::store::Workspace;
use crate::template::render_template;

use super::choice_of;

pub fn dispatch_templates(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    cmd: TemplateCmd,
) -> anyhow::Result<()> {
    match cmd {
        TemplateCmd::List(args) => cmd_template_list(ws, renderer, &args),
        TemplateCmd::Show { id } => cmd_template_show(ws, renderer, &id),
    }
}

#[instrument(skip(ws, renderer, args))]
fn cmd_template_list(
    ws: &Workspace,
    renderer: &mut Renderer,
    args: &TemplateListArgs,
) -> anyhow::Result<()> {
    info!("command templates list");

    let query = TemplateQuery {
        term: args.search.clone(),
        kind: choice_of(args.kind.as_deref(), EmailKind::parse, "email type")?,
    };

    let filtered = query.apply(&ws.templates);
    renderer.print_templates(&filtered)
}

#[instrument(skip(ws, renderer))]
fn cmd_template_show(ws: &Workspace, renderer: &mut Renderer, id: &str) -> anyhow::Result<()> {
    info!("command templates show");

    let template = ws
        .template(id)
        .ok_or_else(|| anyhow!("template not found: {id}"))?;
    renderer.print_email(&template.subject, &template.body)
}

/// Renders the template against the candidate and appends the result to the
/// candidate's email history. Nothing leaves the machine.
#[instrument(skip(ws, renderer, args), fields(candidate = %args.candidate, template = %args.template))]
pub fn cmd_email(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    args: EmailArgs,
) -> anyhow::Result<()> {
    info!("command email");

    let template = ws
        .template(&args.template)
        .cloned()
        .ok_or_else(|| anyhow!("template not found: {}", args.template))?;
    let candidate = ws
        .candidate(&args.candidate)
        .ok_or_else(|| anyhow!("candidate not found: {}", args.candidate))?;

    let mut vars = BTreeMap::new();
    vars.insert("candidateName".to_string(), candidate.name.clone());
    vars.insert("position".to_string(), candidate.position.clone());
    vars.insert("round".to_string(), candidate.current_round.to_string());
    if let Some(interview) = candidate.scheduled_interviews().last() {
        vars.insert("interviewType".to_string(), interview.kind.label().to_string());
        vars.insert("date".to_string(), iso_date(interview.date));
        vars.insert("time".to_string(), format_clock(interview.time));
        vars.insert(
            "duration".to_string(),
            interview.duration_minutes.to_string(),
        );
        vars.insert(
            "interviewers".to_string(),
            interview
                .interviewers
                .iter()
                .map(|interviewer| interviewer.name.clone())
                .collect::<Vec<_>>()
                .join(", "),
        );
        if let Some(place) = interview
            .location
            .clone()
            .or_else(|| interview.meeting_link.clone())
        {
            vars.insert("location".to_string(), place);
        }
    }
    let recipient = candidate.email.clone();

    let subject = render_template(&template.subject, &vars)?;
    let body = render_template(&template.body, &vars)?;
    renderer.print_email(&subject, &body)?;

    let record = EmailRecord {
        id: Workspace::next_id(),
        kind: template.kind,
        recipient: recipient.clone(),
        subject,
        sent: Utc::now(),
        status: EmailStatus::Sent,
    };
    ws.record_email(&args.candidate, record)?;

    println!(
        "Recorded {} email to {recipient}.",
        template.kind.label().to_lowercase()
    );
    Ok(())
}

pub fn dispatch_alerts(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    cmd: AlertCmd,
) -> anyhow::Result<()> {
    match cmd {
        AlertCmd::List(args) => cmd_alert_list(ws, renderer, &args),
        AlertCmd::Create(args) => cmd_alert_create(ws, args),
    }
}

#[instrument(skip(ws, renderer, args))]
fn cmd_alert_list(
    ws: &Workspace,
    renderer: &mut Renderer,
    args: &AlertListArgs,
) -> anyhow::Result<()> {
    info!("command alerts list");

    let query = AlertQuery {
        term: args.search.clone(),
        kind: choice_of(args.kind.as_deref(), AlertKind::parse, "alert type")?,
        priority: choice_of(args.priority.as_deref(), AlertPriority::parse, "priority")?,
        status: choice_of(args.status.as_deref(), AlertStatus::parse, "status")?,
    };

    let filtered = query.apply(&ws.alerts);
    renderer.print_alerts(ws, &filtered)
}

#[instrument(skip(ws, args))]
fn cmd_alert_create(ws: &mut Workspace, args: AlertCreateArgs) -> anyhow::Result<()> {
    info!("command alerts create");

    let kind =
        AlertKind::parse(&args.kind).ok_or_else(|| anyhow!("unknown alert type: {}", args.kind))?;
    let priority = AlertPriority::parse(&args.priority)
        .ok_or_else(|| anyhow!("unknown priority: {}", args.priority))?;
    let scheduled = match args.at.as_deref() {
        Some(raw) => parse_iso_datetime(raw)?,
        None => Utc::now(),
    };

    for id in &args.candidates {
        if ws.candidate(id).is_none() {
            warn!(candidate = %id, "alert addressed to unknown candidate id");
        }
    }
    for id in &args.interviewers {
        if ws.interviewer(id).is_none() {
            warn!(interviewer = %id, "alert addressed to unknown interviewer id");
        }
    }

    let alert = Alert {
        id: Workspace::next_id(),
        kind,
        title: args.title,
        message: args.message,
        recipients: Recipients {
            candidates: args.candidates,
            interviewers: args.interviewers,
            others: args.others,
        },
        scheduled,
        status: AlertStatus::Scheduled,
        priority,
        related_to: args.related,
    };
    if alert.recipients.is_empty() {
        warn!(alert = %alert.id, "alert has no recipients");
    }

    let id = alert.id.clone();
    ws.add_alert(alert);
    println!("Created alert {id}.");
    Ok(())
}

#[instrument(skip(ws, renderer, args))]
pub fn cmd_notifications(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    args: NotificationListArgs,
) -> anyhow::Result<()> {
    info!("command notifications");

    let query = NotificationQuery {
        term: args.search.clone(),
        kind: choice_of(args.kind.as_deref(), NotificationKind::parse, "notification type")?,
        status: choice_of(args.status.as_deref(), NotificationStatus::parse, "status")?,
    };

    let filtered = query.apply(&ws.notifications);
    renderer.print_notifications(&filtered)
}
