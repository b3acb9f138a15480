use tracing::{info, instrument};

use crate::calendar::{DatedEvent, MonthGrid};
use crate::datetime::{self, parse_year_month};
use crate::render::Renderer;
use crate::stats::{PipelineStats, stage_counts};
use crate::store::Workspace;

#[instrument(skip(ws, renderer))]
pub fn cmd_stats(ws: &Workspace, renderer: &mut Renderer) -> anyhow::Result<()> {
    info!("command stats");

    let stats = PipelineStats::collect(ws);
    let stages = stage_counts(ws);
    renderer.print_stats(&stats, &stages)
}

/// One line per calendar entry; slots and scheduled interviews share the
/// month view the way they share the recruiter's day.
struct CalendarEntry {
    date_key: String,
    summary: String,
}

impl DatedEvent for CalendarEntry {
    fn date_key(&self) -> String {
        self.date_key.clone()
    }

    fn summary(&self) -> String {
        self.summary.clone()
    }
}

#[instrument(skip(ws, renderer, month))]
pub fn cmd_calendar(
    ws: &Workspace,
    renderer: &mut Renderer,
    month: Option<&str>,
) -> anyhow::Result<()> {
    info!("command calendar");

    let today = datetime::today();
    let (year, month) = match month {
        Some(raw) => parse_year_month(raw)?,
        None => {
            use chrono::Datelike;
            (today.year(), today.month())
        }
    };

    let grid = MonthGrid::new(year, month)?;

    let mut entries: Vec<CalendarEntry> = ws
        .slots
        .iter()
        .map(|slot| CalendarEntry {
            date_key: slot.date_key(),
            summary: slot.summary(),
        })
        .collect();
    for candidate in &ws.candidates {
        for interview in candidate.scheduled_interviews() {
            entries.push(CalendarEntry {
                date_key: interview.date_key(),
                summary: format!(
                    "{} {} - {}",
                    datetime::format_clock(interview.time),
                    interview.kind.label(),
                    candidate.name
                ),
            });
        }
    }

    renderer.print_month(&grid, &entries, &datetime::today_iso())
}

#[instrument(skip(ws))]
pub fn cmd_export(ws: &Workspace) -> anyhow::Result<()> {
    info!("command export");

    let out = serde_json::to_string(ws)?;
    println!("{out}");
    Ok(())
}
