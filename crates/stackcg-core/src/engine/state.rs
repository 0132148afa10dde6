use crate::core::models::assignment::Assignment;
use serde::Serialize;
use std::ops::AddAssign;

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub assignment: Assignment,
    pub cg: f64,
    pub score: f64,
}

/// Keeps the candidate with the lowest objective score. Only a strictly lower score
/// replaces the current best, so the earliest candidate wins ties.
#[derive(Debug, Clone, Default)]
pub struct BestCandidate {
    current: Option<Candidate>,
}

impl BestCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> Option<f64> {
        self.current.as_ref().map(|candidate| candidate.score)
    }

    #[inline]
    fn improves(&self, score: f64) -> bool {
        self.current
            .as_ref()
            .is_none_or(|candidate| score < candidate.score)
    }

    /// Records the candidate if it improves on the current best; returns whether it did.
    pub fn offer(&mut self, assignment: &Assignment, cg: f64, score: f64) -> bool {
        if !self.improves(score) {
            return false;
        }
        self.current = Some(Candidate {
            assignment: assignment.clone(),
            cg,
            score,
        });
        true
    }

    /// Folds in the best of a later partition of the enumeration.
    pub fn merge(&mut self, later: BestCandidate) {
        if let Some(candidate) = later.current {
            if self.improves(candidate.score) {
                self.current = Some(candidate);
            }
        }
    }

    pub fn into_inner(self) -> Option<Candidate> {
        self.current
    }
}

/// Counters collected while enumerating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Assignment orders explored.
    pub orders: u64,
    /// Complete candidates enumerated.
    pub candidates: u64,
    /// Candidates passing every distance bound.
    pub feasible: u64,
    /// Feasible candidates whose CG lies in the target range.
    pub in_range: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.orders += rhs.orders;
        self.candidates += rhs.candidates;
        self.feasible += rhs.feasible;
        self.in_range += rhs.in_range;
    }
}
