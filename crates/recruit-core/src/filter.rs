use tracing::trace;

use crate::candidate::{Candidate, CandidateSource, CandidateStatus};
use crate::interviewer::Interviewer;
use crate::messaging::{
    Alert, AlertKind, AlertPriority, AlertStatus, EmailKind, EmailTemplate, Notification,
    NotificationKind, NotificationStatus,
};
use crate::schedule::{CalendarSlot, SlotKind};

/// Typed rendition of the "All" dropdown sentinel: `All` admits every value,
/// `Only` admits exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

// Manual impl: the derive would demand T: Default for the All case.
impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(want) => want == value,
        }
    }
}

/// Case-insensitive substring over the view's designated text fields. The
/// empty term matches everything.
pub fn term_matches(term: &str, haystacks: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    haystacks
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

fn apply<'a, T>(records: &'a [T], matches: impl Fn(&T) -> bool) -> Vec<&'a T> {
    records.iter().filter(|record| matches(record)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct CandidateQuery {
    pub term: String,
    pub status: Choice<CandidateStatus>,
    pub source: Choice<CandidateSource>,
}

impl CandidateQuery {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        let ok = term_matches(
            &self.term,
            &[&candidate.name, &candidate.email, &candidate.position],
        ) && self.status.admits(&candidate.status)
            && self.source.admits(&candidate.source);
        trace!(id = %candidate.id, ok, "candidate query evaluation");
        ok
    }

    pub fn apply<'a>(&self, records: &'a [Candidate]) -> Vec<&'a Candidate> {
        apply(records, |candidate| self.matches(candidate))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InterviewerQuery {
    pub term: String,
    pub department: Choice<String>,
}

impl InterviewerQuery {
    pub fn matches(&self, interviewer: &Interviewer) -> bool {
        term_matches(
            &self.term,
            &[&interviewer.name, &interviewer.email, &interviewer.role],
        ) && self.department.admits(&interviewer.department)
    }

    pub fn apply<'a>(&self, records: &'a [Interviewer]) -> Vec<&'a Interviewer> {
        apply(records, |interviewer| self.matches(interviewer))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotQuery {
    pub term: String,
    pub kind: Choice<SlotKind>,
}

impl SlotQuery {
    pub fn matches(&self, slot: &CalendarSlot) -> bool {
        let title = slot.title.as_deref().unwrap_or_default();
        let date = crate::datetime::iso_date(slot.date);
        term_matches(&self.term, &[title, date.as_str()]) && self.kind.admits(&slot.kind)
    }

    pub fn apply<'a>(&self, records: &'a [CalendarSlot]) -> Vec<&'a CalendarSlot> {
        apply(records, |slot| self.matches(slot))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateQuery {
    pub term: String,
    pub kind: Choice<EmailKind>,
}

impl TemplateQuery {
    pub fn matches(&self, template: &EmailTemplate) -> bool {
        term_matches(&self.term, &[&template.name, &template.subject])
            && self.kind.admits(&template.kind)
    }

    pub fn apply<'a>(&self, records: &'a [EmailTemplate]) -> Vec<&'a EmailTemplate> {
        apply(records, |template| self.matches(template))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertQuery {
    pub term: String,
    pub kind: Choice<AlertKind>,
    pub priority: Choice<AlertPriority>,
    pub status: Choice<AlertStatus>,
}

impl AlertQuery {
    pub fn matches(&self, alert: &Alert) -> bool {
        term_matches(&self.term, &[&alert.title, &alert.message])
            && self.kind.admits(&alert.kind)
            && self.priority.admits(&alert.priority)
            && self.status.admits(&alert.status)
    }

    pub fn apply<'a>(&self, records: &'a [Alert]) -> Vec<&'a Alert> {
        apply(records, |alert| self.matches(alert))
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQuery {
    pub term: String,
    pub kind: Choice<NotificationKind>,
    pub status: Choice<NotificationStatus>,
}

impl NotificationQuery {
    pub fn matches(&self, notification: &Notification) -> bool {
        term_matches(&self.term, &[&notification.title, &notification.message])
            && self.kind.admits(&notification.kind)
            && self.status.admits(&notification.status)
    }

    pub fn apply<'a>(&self, records: &'a [Notification]) -> Vec<&'a Notification> {
        apply(records, |notification| self.matches(notification))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{CandidateQuery, Choice, InterviewerQuery, term_matches};
    use crate::candidate::{Candidate, CandidateSource, CandidateStatus};
    use crate::interviewer::Interviewer;

    fn candidate(id: &str, name: &str, email: &str, position: &str) -> Candidate {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        Candidate::new(
            id.to_string(),
            name.to_string(),
            email.to_string(),
            position.to_string(),
            CandidateSource::LinkedIn,
            today,
        )
    }

    #[test]
    fn empty_term_and_all_facets_is_identity() {
        let records = vec![
            candidate("1", "John Smith", "john@x.com", "Frontend Developer"),
            candidate("2", "Maria Garcia", "maria@x.com", "Product Manager"),
        ];

        let query = CandidateQuery::default();
        let filtered = query.apply(&records);

        assert_eq!(filtered.len(), records.len());
        assert!(filtered[0].id == "1" && filtered[1].id == "2");
    }

    #[test]
    fn term_is_case_insensitive_substring_over_designated_fields() {
        let records = vec![
            candidate("1", "John Smith", "john@x.com", "Frontend Developer"),
            candidate("2", "Maria Garcia", "maria@x.com", "Product Manager"),
            candidate("3", "Dana Frontman", "dana@x.com", "Backend Developer"),
        ];

        let query = CandidateQuery {
            term: "FRONT".to_string(),
            ..CandidateQuery::default()
        };
        let filtered = query.apply(&records);

        // Matches on position for 1, on name for 3; order preserved.
        let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn facets_are_conjunctive_with_the_term() {
        let mut hired = candidate("1", "Robert Lee", "robert@x.com", "DevOps Engineer");
        hired.status = CandidateStatus::Selected;
        let records = vec![
            hired,
            candidate("2", "Roberta Mills", "roberta@x.com", "DevOps Engineer"),
        ];

        let query = CandidateQuery {
            term: "robert".to_string(),
            status: Choice::Only(CandidateStatus::Selected),
            ..CandidateQuery::default()
        };
        let filtered = query.apply(&records);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn absent_facet_value_matches_nothing() {
        let records = vec![candidate("1", "John Smith", "john@x.com", "Developer")];
        let query = CandidateQuery {
            status: Choice::Only(CandidateStatus::FinalRound),
            ..CandidateQuery::default()
        };
        assert!(query.apply(&records).is_empty());
    }

    #[test]
    fn department_facet_is_exact_match() {
        let records = vec![
            Interviewer::new(
                "1".to_string(),
                "Sarah Johnson".to_string(),
                "sarah@x.com".to_string(),
                "Senior Developer".to_string(),
                "Engineering".to_string(),
            ),
            Interviewer::new(
                "2".to_string(),
                "Emily Davis".to_string(),
                "emily@x.com".to_string(),
                "HR Manager".to_string(),
                "Human Resources".to_string(),
            ),
        ];

        let query = InterviewerQuery {
            term: String::new(),
            department: Choice::Only("Engineering".to_string()),
        };
        let filtered = query.apply(&records);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sarah Johnson");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(term_matches("", &[]));
        assert!(term_matches("", &["anything"]));
        assert!(!term_matches("x", &[]));
    }
}
