use anyhow::anyhow;
use tracing::{debug, instrument};

use crate::cli::Command;
use crate::filter::Choice;
use crate::render::Renderer;
use crate::store::Workspace;

mod candidate_ops;
mod messaging_ops;
mod schedule_ops;
mod views;

#[instrument(skip(ws, renderer, command))]
pub fn dispatch(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    command: Command,
) -> anyhow::Result<()> {
    debug!("dispatching command");

    match command {
        Command::Stats => views::cmd_stats(ws, renderer),
        Command::Candidates(cmd) => candidate_ops::dispatch(ws, renderer, cmd),
        Command::Interviewers(cmd) => candidate_ops::dispatch_interviewers(ws, renderer, cmd),
        Command::Slots(cmd) => schedule_ops::dispatch(ws, renderer, cmd),
        Command::Calendar { month } => views::cmd_calendar(ws, renderer, month.as_deref()),
        Command::Templates(cmd) => messaging_ops::dispatch_templates(ws, renderer, cmd),
        Command::Email(args) => messaging_ops::cmd_email(ws, renderer, args),
        Command::Alerts(cmd) => messaging_ops::dispatch_alerts(ws, renderer, cmd),
        Command::Notifications(args) => messaging_ops::cmd_notifications(ws, renderer, args),
        Command::Export => views::cmd_export(ws),
    }
}

/// Missing flag and the literal "all" both mean the All sentinel; anything
/// else must name a known value.
fn choice_of<T>(
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> anyhow::Result<Choice<T>> {
    match raw {
        None => Ok(Choice::All),
        Some(token) if token.eq_ignore_ascii_case("all") => Ok(Choice::All),
        Some(token) => parse(token)
            .map(Choice::Only)
            .ok_or_else(|| anyhow!("unknown {what}: {token}")),
    }
}
