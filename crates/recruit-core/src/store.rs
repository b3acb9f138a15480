use anyhow::anyhow;
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::candidate::{Candidate, CandidateStatus, Interview, InterviewStatus};
use crate::interviewer::Interviewer;
use crate::messaging::{Alert, EmailRecord, EmailTemplate, Notification};
use crate::schedule::{CalendarSlot, Recurrence, SlotKind};

/// Every record list for one session, exclusively owned by the invocation
/// that seeded it. Nothing here persists; mutations live until exit.
#[derive(Debug, Default, Serialize)]
pub struct Workspace {
    pub candidates: Vec<Candidate>,
    pub interviewers: Vec<Interviewer>,
    pub slots: Vec<CalendarSlot>,
    pub templates: Vec<EmailTemplate>,
    pub alerts: Vec<Alert>,
    pub notifications: Vec<Notification>,
}

impl Workspace {
    /// Fresh opaque id for any record kind.
    pub fn next_id() -> String {
        Uuid::new_v4().to_string()
    }

    #[tracing::instrument(skip(self, candidate), fields(id = %candidate.id))]
    pub fn add_candidate(&mut self, candidate: Candidate) {
        info!(name = %candidate.name, "adding candidate");
        self.candidates.push(candidate);
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    pub fn candidate_mut(&mut self, id: &str) -> Option<&mut Candidate> {
        self.candidates
            .iter_mut()
            .find(|candidate| candidate.id == id)
    }

    /// Removes the candidate. Interview and email history leave with it;
    /// nothing else is touched (no cascade).
    #[tracing::instrument(skip(self))]
    pub fn remove_candidate(&mut self, id: &str) -> anyhow::Result<Candidate> {
        let idx = self
            .candidates
            .iter()
            .position(|candidate| candidate.id == id)
            .ok_or_else(|| anyhow!("candidate not found: {id}"))?;

        let removed = self.candidates.remove(idx);
        info!(name = %removed.name, "removed candidate");
        Ok(removed)
    }

    pub fn candidate_name(&self, id: &str) -> String {
        self.candidate(id)
            .map(|candidate| candidate.name.clone())
            .unwrap_or_else(|| "Unknown Candidate".to_string())
    }

    #[tracing::instrument(skip(self, interviewer), fields(id = %interviewer.id))]
    pub fn add_interviewer(&mut self, interviewer: Interviewer) {
        info!(name = %interviewer.name, "adding interviewer");
        self.interviewers.push(interviewer);
    }

    pub fn interviewer(&self, id: &str) -> Option<&Interviewer> {
        self.interviewers
            .iter()
            .find(|interviewer| interviewer.id == id)
    }

    pub fn interviewer_mut(&mut self, id: &str) -> Option<&mut Interviewer> {
        self.interviewers
            .iter_mut()
            .find(|interviewer| interviewer.id == id)
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_interviewer(&mut self, id: &str) -> anyhow::Result<Interviewer> {
        let idx = self
            .interviewers
            .iter()
            .position(|interviewer| interviewer.id == id)
            .ok_or_else(|| anyhow!("interviewer not found: {id}"))?;

        let removed = self.interviewers.remove(idx);
        info!(name = %removed.name, "removed interviewer");
        Ok(removed)
    }

    pub fn interviewer_name(&self, id: &str) -> String {
        self.interviewer(id)
            .map(|interviewer| interviewer.name.clone())
            .unwrap_or_else(|| "Unknown Interviewer".to_string())
    }

    /// Attaches a new interview to its candidate, bumping the candidate to
    /// Interview Scheduled and syncing the round counter. The interview
    /// carries its interviewers by value; the roster can change afterwards
    /// without rewriting it.
    #[tracing::instrument(skip(self, interview), fields(candidate = %interview.candidate_id))]
    pub fn schedule_interview(
        &mut self,
        interview: Interview,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        let candidate = self
            .candidate_mut(&interview.candidate_id)
            .ok_or_else(|| anyhow!("candidate not found: {}", interview.candidate_id))?;

        candidate.status = CandidateStatus::InterviewScheduled;
        candidate.current_round = interview.round.clamp(1, candidate.total_rounds);
        candidate.updated = today;

        info!(
            round = interview.round,
            kind = interview.kind.label(),
            "scheduled interview"
        );
        candidate.interviews.push(interview);
        Ok(())
    }

    /// Records the outcome of one interview. Candidate status is left alone:
    /// there are no enforced stage transitions.
    #[tracing::instrument(skip(self, feedback))]
    pub fn record_interview_outcome(
        &mut self,
        candidate_id: &str,
        interview_id: &str,
        status: InterviewStatus,
        rating: Option<u8>,
        feedback: Option<String>,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        let candidate = self
            .candidate_mut(candidate_id)
            .ok_or_else(|| anyhow!("candidate not found: {candidate_id}"))?;
        candidate.updated = today;

        let interview = candidate
            .interviews
            .iter_mut()
            .find(|interview| interview.id == interview_id)
            .ok_or_else(|| anyhow!("interview not found: {interview_id}"))?;

        interview.status = status;
        if rating.is_some() {
            interview.rating = rating;
        }
        if feedback.is_some() {
            interview.feedback = feedback;
        }

        info!(status = status.label(), "recorded interview outcome");
        Ok(())
    }

    /// Accepts the slot unconditionally. Backwards windows and interviewer
    /// double-bookings are surfaced as warnings for the operator to resolve,
    /// never rejected.
    #[tracing::instrument(skip(self, slot), fields(id = %slot.id))]
    pub fn add_slot(&mut self, slot: CalendarSlot) {
        if slot.is_backwards() {
            warn!(
                start = %slot.start,
                end = %slot.end,
                "slot ends at or before it starts"
            );
        }
        self.warn_double_bookings(&slot);

        info!(date = %slot.date, kind = slot.kind.label(), "adding slot");
        self.slots.push(slot);
    }

    pub fn slot(&self, id: &str) -> Option<&CalendarSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn slot_mut(&mut self, id: &str) -> Option<&mut CalendarSlot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_slot(&mut self, id: &str) -> anyhow::Result<CalendarSlot> {
        let idx = self
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or_else(|| anyhow!("slot not found: {id}"))?;

        let removed = self.slots.remove(idx);
        info!(date = %removed.date, "removed slot");
        Ok(removed)
    }

    /// Replaces both assignment lists wholesale, then re-checks conflicts.
    #[tracing::instrument(skip(self, interviewers, candidates))]
    pub fn assign_slot(
        &mut self,
        id: &str,
        interviewers: Vec<String>,
        candidates: Vec<String>,
    ) -> anyhow::Result<()> {
        let slot = self
            .slot_mut(id)
            .ok_or_else(|| anyhow!("slot not found: {id}"))?;

        slot.assigned_interviewers = interviewers;
        slot.assigned_candidates = candidates;
        info!(
            interviewers = slot.assigned_interviewers.len(),
            candidates = slot.assigned_candidates.len(),
            "assigned slot"
        );

        let reassigned = slot.clone();
        self.warn_double_bookings(&reassigned);
        Ok(())
    }

    /// A weekday-only run of identical blocked slots starting at `from`,
    /// spanning `days` calendar days. Returns the ids created.
    #[tracing::instrument(skip(self, title))]
    pub fn bulk_block(
        &mut self,
        from: NaiveDate,
        days: u32,
        start: NaiveTime,
        end: NaiveTime,
        title: &str,
    ) -> Vec<String> {
        let mut created = Vec::new();

        for offset in 0..u64::from(days) {
            let Some(date) = from.checked_add_days(Days::new(offset)) else {
                warn!(offset, "date overflow while bulk blocking, stopping early");
                break;
            };
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }

            let mut slot =
                CalendarSlot::new(Self::next_id(), date, start, end, SlotKind::Blocked);
            slot.title = Some(title.to_string());
            slot.recurrence = Some(Recurrence::Daily);

            created.push(slot.id.clone());
            self.add_slot(slot);
        }

        debug!(count = created.len(), "bulk blocked slots");
        created
    }

    pub fn template(&self, id: &str) -> Option<&EmailTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Appends to the candidate's email history. The record is the whole
    /// effect; nothing is delivered anywhere.
    #[tracing::instrument(skip(self, record), fields(kind = record.kind.label()))]
    pub fn record_email(&mut self, candidate_id: &str, record: EmailRecord) -> anyhow::Result<()> {
        let candidate = self
            .candidate_mut(candidate_id)
            .ok_or_else(|| anyhow!("candidate not found: {candidate_id}"))?;

        info!(recipient = %record.recipient, "recording email");
        candidate.email_history.push(record);
        Ok(())
    }

    #[tracing::instrument(skip(self, alert), fields(id = %alert.id))]
    pub fn add_alert(&mut self, alert: Alert) {
        info!(kind = alert.kind.label(), "adding alert");
        self.alerts.push(alert);
    }

    #[tracing::instrument(skip(self, notification), fields(id = %notification.id))]
    pub fn add_notification(&mut self, notification: Notification) {
        info!(kind = notification.kind.label(), "adding notification");
        self.notifications.push(notification);
    }

    fn warn_double_bookings(&self, slot: &CalendarSlot) {
        for other in &self.slots {
            if other.id != slot.id && slot.overlaps(other) && slot.shares_interviewer(other) {
                warn!(
                    slot = %slot.id,
                    other = %other.id,
                    date = %slot.date,
                    "interviewer double-booked across overlapping slots"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Workspace;
    use crate::candidate::{Candidate, CandidateSource, CandidateStatus, Interview, InterviewKind, InterviewStatus};
    use crate::datetime::parse_clock;
    use crate::interviewer::Interviewer;
    use crate::schedule::{CalendarSlot, SlotKind};

    fn day(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid date")
    }

    fn workspace_with_candidate() -> Workspace {
        let mut ws = Workspace::default();
        ws.add_interviewer(Interviewer::new(
            "i1".to_string(),
            "Sarah Johnson".to_string(),
            "sarah.j@company.com".to_string(),
            "Senior Developer".to_string(),
            "Engineering".to_string(),
        ));
        ws.add_candidate(Candidate::new(
            "c1".to_string(),
            "John Smith".to_string(),
            "john.smith@email.com".to_string(),
            "Senior Frontend Developer".to_string(),
            CandidateSource::LinkedIn,
            day("2024-01-15"),
        ));
        ws
    }

    fn interview_for(ws: &Workspace, candidate_id: &str, round: u32) -> Interview {
        Interview {
            id: Workspace::next_id(),
            candidate_id: candidate_id.to_string(),
            round,
            kind: InterviewKind::Technical,
            date: day("2024-01-22"),
            time: parse_clock("14:00").expect("valid time"),
            duration_minutes: 90,
            interviewers: ws.interviewers.clone(),
            status: InterviewStatus::Scheduled,
            rating: None,
            feedback: None,
            notes: None,
            meeting_link: None,
            location: None,
        }
    }

    #[test]
    fn scheduling_bumps_status_and_round() {
        let mut ws = workspace_with_candidate();
        let interview = interview_for(&ws, "c1", 2);

        ws.schedule_interview(interview, day("2024-01-20"))
            .expect("schedule");

        let candidate = ws.candidate("c1").expect("candidate exists");
        assert_eq!(candidate.status, CandidateStatus::InterviewScheduled);
        assert_eq!(candidate.current_round, 2);
        assert_eq!(candidate.interviews.len(), 1);
        assert_eq!(candidate.updated, day("2024-01-20"));
    }

    #[test]
    fn interviews_carry_interviewers_by_value() {
        let mut ws = workspace_with_candidate();
        let interview = interview_for(&ws, "c1", 1);
        ws.schedule_interview(interview, day("2024-01-20"))
            .expect("schedule");

        // A later roster edit must not rewrite history.
        ws.interviewer_mut("i1").expect("interviewer").name = "S. Johnson-Lee".to_string();

        let candidate = ws.candidate("c1").expect("candidate exists");
        assert_eq!(candidate.interviews[0].interviewers[0].name, "Sarah Johnson");
    }

    #[test]
    fn deleting_a_candidate_does_not_cascade() {
        let mut ws = workspace_with_candidate();
        let mut slot = CalendarSlot::new(
            "s1".to_string(),
            day("2024-01-22"),
            parse_clock("09:00").expect("valid time"),
            parse_clock("10:00").expect("valid time"),
            SlotKind::Interview,
        );
        slot.assigned_candidates = vec!["c1".to_string()];
        ws.add_slot(slot);

        ws.remove_candidate("c1").expect("remove");

        assert_eq!(ws.slots.len(), 1);
        assert_eq!(ws.slots[0].assigned_candidates, vec!["c1".to_string()]);
        assert_eq!(ws.candidate_name("c1"), "Unknown Candidate");
    }

    #[test]
    fn conflicting_slots_are_accepted_not_rejected() {
        let mut ws = workspace_with_candidate();

        let mut first = CalendarSlot::new(
            "s1".to_string(),
            day("2024-01-22"),
            parse_clock("09:00").expect("valid time"),
            parse_clock("10:00").expect("valid time"),
            SlotKind::Interview,
        );
        first.assigned_interviewers = vec!["i1".to_string()];
        ws.add_slot(first);

        // Overlapping window for the same interviewer: warned, kept.
        let mut second = CalendarSlot::new(
            "s2".to_string(),
            day("2024-01-22"),
            parse_clock("09:30").expect("valid time"),
            parse_clock("10:30").expect("valid time"),
            SlotKind::Meeting,
        );
        second.assigned_interviewers = vec!["i1".to_string()];
        ws.add_slot(second);

        // Backwards window: warned, kept.
        let backwards = CalendarSlot::new(
            "s3".to_string(),
            day("2024-01-23"),
            parse_clock("15:00").expect("valid time"),
            parse_clock("14:00").expect("valid time"),
            SlotKind::Blocked,
        );
        ws.add_slot(backwards);

        assert_eq!(ws.slots.len(), 3);
    }

    #[test]
    fn bulk_block_skips_weekends() {
        let mut ws = Workspace::default();
        // 2024-01-19 is a Friday; a 4-day run covers Fri, Sat, Sun, Mon.
        let created = ws.bulk_block(
            day("2024-01-19"),
            4,
            parse_clock("12:00").expect("valid time"),
            parse_clock("13:00").expect("valid time"),
            "Lunch Break",
        );

        assert_eq!(created.len(), 2);
        let dates: Vec<String> = ws
            .slots
            .iter()
            .map(|slot| slot.date.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(dates, vec!["2024-01-19", "2024-01-22"]);
        assert!(ws.slots.iter().all(|slot| slot.kind == SlotKind::Blocked));
    }

    #[test]
    fn missing_ids_are_errors_for_mutations() {
        let mut ws = Workspace::default();
        assert!(ws.remove_candidate("nope").is_err());
        assert!(ws.remove_slot("nope").is_err());
        assert!(
            ws.assign_slot("nope", vec![], vec![]).is_err()
        );
    }
}
