use anyhow::anyhow;
use tracing::{info, instrument, warn};

use crate::cli::{BulkBlockArgs, SlotAddArgs, SlotAssignArgs, SlotCmd, SlotListArgs};
use crate::datetime::{parse_clock, parse_iso_date};
use crate::filter::SlotQuery;
use crate::render::Renderer;
use crate::schedule::{CalendarSlot, Recurrence, SlotKind};
use crate::store::Workspace;

use super::choice_of;

pub fn dispatch(ws: &mut Workspace, renderer: &mut Renderer, cmd: SlotCmd) -> anyhow::Result<()> {
    match cmd {
        SlotCmd::List(args) => cmd_list(ws, renderer, &args),
        SlotCmd::Add(args) => cmd_add(ws, args),
        SlotCmd::Delete { id } => cmd_delete(ws, &id),
        SlotCmd::Assign(args) => cmd_assign(ws, args),
        SlotCmd::BulkBlock(args) => cmd_bulk_block(ws, args),
    }
}

#[instrument(skip(ws, renderer, args))]
fn cmd_list(ws: &Workspace, renderer: &mut Renderer, args: &SlotListArgs) -> anyhow::Result<()> {
    info!("command slots list");

    let query = SlotQuery {
        term: args.search.clone(),
        kind: choice_of(args.kind.as_deref(), SlotKind::parse, "slot type")?,
    };

    let filtered = query.apply(&ws.slots);
    renderer.print_slots(ws, &filtered)
}

#[instrument(skip(ws, args))]
fn cmd_add(ws: &mut Workspace, args: SlotAddArgs) -> anyhow::Result<()> {
    info!("command slots add");

    let kind =
        SlotKind::parse(&args.kind).ok_or_else(|| anyhow!("unknown slot type: {}", args.kind))?;
    let recurrence = args
        .recurring
        .as_deref()
        .map(|raw| {
            Recurrence::parse(raw).ok_or_else(|| anyhow!("unknown recurring pattern: {raw}"))
        })
        .transpose()?;

    let mut slot = CalendarSlot::new(
        Workspace::next_id(),
        parse_iso_date(&args.date)?,
        parse_clock(&args.start)?,
        parse_clock(&args.end)?,
        kind,
    );
    slot.title = args.title;
    slot.notes = args.notes;
    slot.recurrence = recurrence;

    let id = slot.id.clone();
    ws.add_slot(slot);
    println!("Created slot {id}.");
    Ok(())
}

#[instrument(skip(ws))]
fn cmd_delete(ws: &mut Workspace, id: &str) -> anyhow::Result<()> {
    info!("command slots delete");

    let removed = ws.remove_slot(id)?;
    println!("Deleted slot {} ({}).", id, removed.display_title());
    Ok(())
}

#[instrument(skip(ws, args), fields(id = %args.id))]
fn cmd_assign(ws: &mut Workspace, args: SlotAssignArgs) -> anyhow::Result<()> {
    info!("command slots assign");

    // Dangling ids are allowed (they render as "Unknown"), but a typo is
    // worth a warning at assignment time.
    for id in &args.interviewers {
        if ws.interviewer(id).is_none() {
            warn!(interviewer = %id, "assigning unknown interviewer id");
        }
    }
    for id in &args.candidates {
        if ws.candidate(id).is_none() {
            warn!(candidate = %id, "assigning unknown candidate id");
        }
    }

    ws.assign_slot(&args.id, args.interviewers, args.candidates)?;
    println!("Assigned slot {}.", args.id);
    Ok(())
}

#[instrument(skip(ws, args))]
fn cmd_bulk_block(ws: &mut Workspace, args: BulkBlockArgs) -> anyhow::Result<()> {
    info!("command slots bulk-block");

    let created = ws.bulk_block(
        parse_iso_date(&args.from)?,
        args.days,
        parse_clock(&args.start)?,
        parse_clock(&args.end)?,
        &args.title,
    );

    println!("Blocked {} slot(s).", created.len());
    Ok(())
}
