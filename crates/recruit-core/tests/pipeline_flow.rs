use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use recruit_core::calendar::{DayAgenda, MonthGrid, bucket_events_by_date};
use recruit_core::candidate::{CandidateStatus, Interview, InterviewKind, InterviewStatus};
use recruit_core::datetime::parse_clock;
use recruit_core::filter::{CandidateQuery, Choice};
use recruit_core::messaging::{EmailRecord, EmailStatus};
use recruit_core::seed::seed_workspace;
use recruit_core::stats::PipelineStats;
use recruit_core::store::Workspace;
use recruit_core::template::render_template;

#[test]
fn seeded_flow_filters_schedules_and_buckets() {
    let mut ws = seed_workspace();

    // Search plus facet across the seeded pipeline.
    let query = CandidateQuery {
        term: "david".to_string(),
        status: Choice::Only(CandidateStatus::Screening),
        ..CandidateQuery::default()
    };
    let matches = query.apply(&ws.candidates);
    assert_eq!(matches.len(), 1);
    let david_id = matches[0].id.clone();

    // Schedule David's technical round.
    let interview = Interview {
        id: Workspace::next_id(),
        candidate_id: david_id.clone(),
        round: 1,
        kind: InterviewKind::Technical,
        date: NaiveDate::from_ymd_opt(2024, 1, 24).expect("valid date"),
        time: parse_clock("15:00").expect("valid time"),
        duration_minutes: 60,
        interviewers: vec![ws.interviewers[0].clone()],
        status: InterviewStatus::Scheduled,
        rating: None,
        feedback: None,
        notes: None,
        meeting_link: None,
        location: None,
    };
    ws.schedule_interview(interview, NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date"))
        .expect("schedule should succeed");

    let david = ws.candidate(&david_id).expect("candidate exists");
    assert_eq!(david.status, CandidateStatus::InterviewScheduled);
    assert_eq!(david.interviews.len(), 1);

    // The month grid buckets the seeded slots under their exact days.
    let grid = MonthGrid::new(2024, 1).expect("valid month");
    let on_22 = bucket_events_by_date(&ws.slots, &grid.iso_date(22));
    assert_eq!(on_22.len(), 3);
    let agenda = DayAgenda::new(on_22);
    assert_eq!(agenda.visible().len(), 3);
    assert_eq!(agenda.overflow(), 0);

    // Scheduled interviews bucket by the same exact-match key.
    let all_interviews: Vec<Interview> = ws
        .candidates
        .iter()
        .flat_map(|candidate| candidate.interviews.iter().cloned())
        .collect();
    let on_24 = bucket_events_by_date(&all_interviews, "2024-01-24");
    assert_eq!(on_24.len(), 1);
    assert_eq!(on_24[0].candidate_id, david_id);

    // Stats follow the mutation: int2, int3 and David's new round.
    let stats = PipelineStats::collect(&ws);
    assert_eq!(stats.interviews_scheduled, 3);
}

#[test]
fn composing_an_email_appends_to_history_only() {
    let mut ws = seed_workspace();

    let template = ws.template("t1").cloned().expect("template exists");
    let candidate = ws.candidate("c3").expect("candidate exists");

    let mut vars = BTreeMap::new();
    vars.insert("candidateName".to_string(), candidate.name.clone());
    vars.insert("position".to_string(), candidate.position.clone());
    let subject = render_template(&template.subject, &vars).expect("render");
    assert_eq!(subject, "Application Received - Backend Developer");

    let record = EmailRecord {
        id: Workspace::next_id(),
        kind: template.kind,
        recipient: candidate.email.clone(),
        subject,
        sent: Utc::now(),
        status: EmailStatus::Sent,
    };
    ws.record_email("c3", record).expect("record");

    let candidate = ws.candidate("c3").expect("candidate exists");
    assert_eq!(candidate.email_history.len(), 1);
    assert_eq!(candidate.email_history[0].recipient, "david.wilson@email.com");

    // Everything else is untouched.
    assert_eq!(ws.templates.len(), 2);
    assert_eq!(ws.notifications.len(), 4);
}
