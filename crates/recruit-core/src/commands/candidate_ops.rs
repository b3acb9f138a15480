use anyhow::anyhow;
use tracing::{info, instrument};

use crate::candidate::{
    Candidate, CandidateSource, CandidateStatus, Interview, InterviewKind, InterviewStatus,
};
use crate::cli::{
    CandidateAddArgs, CandidateCmd, CandidateListArgs, CandidateModifyArgs, InterviewerAddArgs,
    InterviewerCmd, InterviewerListArgs, InterviewerModifyArgs, OutcomeArgs, ScheduleArgs,
};
use crate::datetime::{parse_clock, parse_iso_date, today};
use crate::filter::{CandidateQuery, Choice, InterviewerQuery};
use crate::interviewer::Interviewer;
use crate::render::Renderer;
use crate::store::Workspace;

use super::choice_of;

pub fn dispatch(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    cmd: CandidateCmd,
) -> anyhow::Result<()> {
    match cmd {
        CandidateCmd::List(args) => cmd_list(ws, renderer, &args),
        CandidateCmd::Show { id } => cmd_show(ws, renderer, &id),
        CandidateCmd::Add(args) => cmd_add(ws, args),
        CandidateCmd::Modify(args) => cmd_modify(ws, args),
        CandidateCmd::Delete { id } => cmd_delete(ws, &id),
        CandidateCmd::Schedule(args) => cmd_schedule(ws, args),
        CandidateCmd::Outcome(args) => cmd_outcome(ws, args),
    }
}

#[instrument(skip(ws, renderer, args))]
fn cmd_list(
    ws: &Workspace,
    renderer: &mut Renderer,
    args: &CandidateListArgs,
) -> anyhow::Result<()> {
    info!("command candidates list");

    let query = CandidateQuery {
        term: args.search.clone(),
        status: choice_of(args.status.as_deref(), CandidateStatus::parse, "status")?,
        source: choice_of(args.source.as_deref(), CandidateSource::parse, "source")?,
    };

    let filtered = query.apply(&ws.candidates);
    renderer.print_candidates(&filtered)
}

#[instrument(skip(ws, renderer))]
fn cmd_show(ws: &Workspace, renderer: &mut Renderer, id: &str) -> anyhow::Result<()> {
    info!("command candidates show");

    let candidate = ws
        .candidate(id)
        .ok_or_else(|| anyhow!("candidate not found: {id}"))?;
    renderer.print_candidate_info(candidate)
}

#[instrument(skip(ws, args))]
fn cmd_add(ws: &mut Workspace, args: CandidateAddArgs) -> anyhow::Result<()> {
    info!("command candidates add");

    let source = CandidateSource::parse(&args.source)
        .ok_or_else(|| anyhow!("unknown source: {}", args.source))?;

    let mut candidate = Candidate::new(
        Workspace::next_id(),
        args.name,
        args.email,
        args.position,
        source,
        today(),
    );
    candidate.phone = args.phone;
    candidate.skills = args.skills;
    candidate.notes = args.notes;
    if let Some(experience) = args.experience {
        candidate.experience = experience;
    }
    if let Some(rounds) = args.rounds {
        candidate.total_rounds = rounds.max(1);
    }

    let id = candidate.id.clone();
    ws.add_candidate(candidate);
    println!("Created candidate {id}.");
    Ok(())
}

#[instrument(skip(ws, args), fields(id = %args.id))]
fn cmd_modify(ws: &mut Workspace, args: CandidateModifyArgs) -> anyhow::Result<()> {
    info!("command candidates modify");

    let status = args
        .status
        .as_deref()
        .map(|raw| {
            CandidateStatus::parse(raw).ok_or_else(|| anyhow!("unknown status: {raw}"))
        })
        .transpose()?;
    let source = args
        .source
        .as_deref()
        .map(|raw| {
            CandidateSource::parse(raw).ok_or_else(|| anyhow!("unknown source: {raw}"))
        })
        .transpose()?;

    let now = today();
    let candidate = ws
        .candidate_mut(&args.id)
        .ok_or_else(|| anyhow!("candidate not found: {}", args.id))?;

    if let Some(name) = args.name {
        candidate.name = name;
    }
    if let Some(email) = args.email {
        candidate.email = email;
    }
    if args.phone.is_some() {
        candidate.phone = args.phone;
    }
    if let Some(position) = args.position {
        candidate.position = position;
    }
    if let Some(source) = source {
        candidate.source = source;
    }
    if let Some(status) = status {
        candidate.status = status;
    }
    if let Some(round) = args.round {
        candidate.current_round = round.clamp(1, candidate.total_rounds);
    }
    if let Some(experience) = args.experience {
        candidate.experience = experience;
    }
    if args.notes.is_some() {
        candidate.notes = args.notes;
    }
    candidate.updated = now;

    println!("Updated candidate {}.", args.id);
    Ok(())
}

#[instrument(skip(ws))]
fn cmd_delete(ws: &mut Workspace, id: &str) -> anyhow::Result<()> {
    info!("command candidates delete");

    let removed = ws.remove_candidate(id)?;
    println!("Deleted candidate {} ({}).", id, removed.name);
    Ok(())
}

#[instrument(skip(ws, args), fields(id = %args.id))]
fn cmd_schedule(ws: &mut Workspace, args: ScheduleArgs) -> anyhow::Result<()> {
    info!("command candidates schedule");

    let kind =
        InterviewKind::parse(&args.kind).ok_or_else(|| anyhow!("unknown type: {}", args.kind))?;
    let date = parse_iso_date(&args.date)?;
    let time = parse_clock(&args.time)?;

    let candidate = ws
        .candidate(&args.id)
        .ok_or_else(|| anyhow!("candidate not found: {}", args.id))?;
    let round = args.round.unwrap_or(candidate.current_round);
    let candidate_name = candidate.name.clone();

    let interviewers: Vec<Interviewer> = args
        .interviewers
        .iter()
        .map(|id| {
            ws.interviewer(id)
                .cloned()
                .ok_or_else(|| anyhow!("interviewer not found: {id}"))
        })
        .collect::<anyhow::Result<_>>()?;

    let interview = Interview {
        id: Workspace::next_id(),
        candidate_id: args.id.clone(),
        round,
        kind,
        date,
        time,
        duration_minutes: args.duration,
        interviewers,
        status: InterviewStatus::Scheduled,
        rating: None,
        feedback: None,
        notes: args.notes,
        meeting_link: args.meeting_link,
        location: args.location,
    };
    let interview_id = interview.id.clone();

    ws.schedule_interview(interview, today())?;
    println!("Scheduled interview {interview_id} for {candidate_name}.");
    Ok(())
}

#[instrument(skip(ws, args), fields(id = %args.id, interview = %args.interview))]
fn cmd_outcome(ws: &mut Workspace, args: OutcomeArgs) -> anyhow::Result<()> {
    info!("command candidates outcome");

    let status = InterviewStatus::parse(&args.status)
        .ok_or_else(|| anyhow!("unknown status: {}", args.status))?;
    if let Some(rating) = args.rating {
        if !(1..=5).contains(&rating) {
            return Err(anyhow!("rating out of range (1-5): {rating}"));
        }
    }

    ws.record_interview_outcome(
        &args.id,
        &args.interview,
        status,
        args.rating,
        args.feedback,
        today(),
    )?;
    println!("Recorded {} for interview {}.", status.label(), args.interview);
    Ok(())
}

pub fn dispatch_interviewers(
    ws: &mut Workspace,
    renderer: &mut Renderer,
    cmd: InterviewerCmd,
) -> anyhow::Result<()> {
    match cmd {
        InterviewerCmd::List(args) => cmd_interviewer_list(ws, renderer, &args),
        InterviewerCmd::Add(args) => cmd_interviewer_add(ws, args),
        InterviewerCmd::Modify(args) => cmd_interviewer_modify(ws, args),
        InterviewerCmd::Delete { id } => cmd_interviewer_delete(ws, &id),
    }
}

#[instrument(skip(ws, renderer, args))]
fn cmd_interviewer_list(
    ws: &Workspace,
    renderer: &mut Renderer,
    args: &InterviewerListArgs,
) -> anyhow::Result<()> {
    info!("command interviewers list");

    let department = match args.department.as_deref() {
        None => Choice::All,
        Some(raw) if raw.eq_ignore_ascii_case("all") => Choice::All,
        Some(raw) => Choice::Only(raw.to_string()),
    };
    let query = InterviewerQuery {
        term: args.search.clone(),
        department,
    };

    let filtered = query.apply(&ws.interviewers);
    renderer.print_interviewers(&filtered)
}

#[instrument(skip(ws, args))]
fn cmd_interviewer_add(ws: &mut Workspace, args: InterviewerAddArgs) -> anyhow::Result<()> {
    info!("command interviewers add");

    let interviewer = Interviewer::new(
        Workspace::next_id(),
        args.name,
        args.email,
        args.role,
        args.department,
    );
    let id = interviewer.id.clone();
    ws.add_interviewer(interviewer);
    println!("Created interviewer {id}.");
    Ok(())
}

#[instrument(skip(ws, args), fields(id = %args.id))]
fn cmd_interviewer_modify(ws: &mut Workspace, args: InterviewerModifyArgs) -> anyhow::Result<()> {
    info!("command interviewers modify");

    let interviewer = ws
        .interviewer_mut(&args.id)
        .ok_or_else(|| anyhow!("interviewer not found: {}", args.id))?;

    if let Some(name) = args.name {
        interviewer.name = name;
    }
    if let Some(email) = args.email {
        interviewer.email = email;
    }
    if let Some(role) = args.role {
        interviewer.role = role;
    }
    if let Some(department) = args.department {
        interviewer.department = department;
    }

    println!("Updated interviewer {}.", args.id);
    Ok(())
}

#[instrument(skip(ws))]
fn cmd_interviewer_delete(ws: &mut Workspace, id: &str) -> anyhow::Result<()> {
    info!("command interviewers delete");

    let removed = ws.remove_interviewer(id)?;
    println!("Deleted interviewer {} ({}).", id, removed.name);
    Ok(())
}
