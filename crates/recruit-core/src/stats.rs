use serde::Serialize;

use crate::candidate::{CandidateStatus, InterviewStatus};
use crate::store::Workspace;

/// Dashboard numbers, always derived from the live workspace rather than
/// carried alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub total_candidates: usize,
    pub new_applications: usize,
    pub interviews_scheduled: usize,
    pub selected: usize,
    pub rejected: usize,
    pub dropouts: usize,
    pub average_days_to_hire: i64,
}

impl PipelineStats {
    pub fn collect(ws: &Workspace) -> Self {
        let count_status = |status: CandidateStatus| {
            ws.candidates
                .iter()
                .filter(|candidate| candidate.status == status)
                .count()
        };

        let interviews_scheduled = ws
            .candidates
            .iter()
            .flat_map(|candidate| candidate.interviews.iter())
            .filter(|interview| interview.status == InterviewStatus::Scheduled)
            .count();

        let hire_spans: Vec<i64> = ws
            .candidates
            .iter()
            .filter(|candidate| candidate.status == CandidateStatus::Selected)
            .map(|candidate| (candidate.updated - candidate.applied).num_days())
            .collect();
        let average_days_to_hire = if hire_spans.is_empty() {
            0
        } else {
            hire_spans.iter().sum::<i64>() / hire_spans.len() as i64
        };

        Self {
            total_candidates: ws.candidates.len(),
            new_applications: count_status(CandidateStatus::New),
            interviews_scheduled,
            selected: count_status(CandidateStatus::Selected),
            rejected: count_status(CandidateStatus::Rejected),
            dropouts: count_status(CandidateStatus::DroppedOut),
            average_days_to_hire,
        }
    }
}

/// Candidate count per pipeline stage, in pipeline order, including empty
/// stages.
pub fn stage_counts(ws: &Workspace) -> Vec<(CandidateStatus, usize)> {
    CandidateStatus::ALL
        .iter()
        .map(|status| {
            let count = ws
                .candidates
                .iter()
                .filter(|candidate| candidate.status == *status)
                .count();
            (*status, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{PipelineStats, stage_counts};
    use crate::candidate::CandidateStatus;
    use crate::seed::seed_workspace;

    #[test]
    fn stats_agree_with_direct_scans() {
        let ws = seed_workspace();
        let stats = PipelineStats::collect(&ws);

        assert_eq!(stats.total_candidates, 5);
        assert_eq!(stats.new_applications, 0);
        // int2 and int3 are the only Scheduled interviews in the seed.
        assert_eq!(stats.interviews_scheduled, 2);
        assert_eq!(stats.selected, 1);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.dropouts, 1);
        // Robert Lee: applied 2024-01-08, selected 2024-01-21.
        assert_eq!(stats.average_days_to_hire, 13);
    }

    #[test]
    fn stage_counts_cover_every_stage() {
        let ws = seed_workspace();
        let counts = stage_counts(&ws);

        assert_eq!(counts.len(), CandidateStatus::ALL.len());
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, ws.candidates.len());
        assert!(
            counts
                .iter()
                .any(|(status, count)| *status == CandidateStatus::Screening && *count == 1)
        );
    }

    #[test]
    fn average_is_zero_with_no_hires() {
        let mut ws = seed_workspace();
        for candidate in &mut ws.candidates {
            candidate.status = CandidateStatus::Screening;
        }
        assert_eq!(PipelineStats::collect(&ws).average_days_to_hire, 0);
    }
}
