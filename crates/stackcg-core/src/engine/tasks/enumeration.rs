use crate::core::models::assignment::Assignment;
use crate::core::models::ids::ElementId;
use crate::engine::config::Objective;
use crate::engine::layout::Layout;
use crate::engine::state::{BestCandidate, SearchStats};
use tracing::{instrument, trace};

#[derive(Debug, Clone, Default)]
pub struct OrderOutcome {
    pub best: BestCandidate,
    pub stats: SearchStats,
}

struct Walker<'a, 's> {
    layout: &'a Layout<'s>,
    order: &'a [ElementId],
    objective: Objective,
    assignment: Assignment,
    outcome: OrderOutcome,
}

impl Walker<'_, '_> {
    fn descend(&mut self, level: usize) {
        if level == self.order.len() {
            self.evaluate();
            return;
        }
        let id = self.order[level];
        let range = self.layout.range_for(self.order, level, &self.assignment);
        for height in range.iter() {
            self.assignment.set(id, height as f64);
            self.descend(level + 1);
        }
    }

    fn evaluate(&mut self) {
        let stats = &mut self.outcome.stats;
        stats.candidates += 1;
        if !self.layout.is_feasible(&self.assignment) {
            return;
        }
        stats.feasible += 1;

        let cg = self.layout.center_of_gravity(&self.assignment);
        if !self.layout.scenario().target_cg_range().contains(cg) {
            return;
        }
        stats.in_range += 1;

        if self
            .outcome
            .best
            .offer(&self.assignment, cg, self.objective.score(cg))
        {
            trace!(cg, heights = ?self.assignment.as_slice(), "New best candidate.");
        }
    }
}

/// Exhausts the nested height ranges of `order`, outermost level first and heights
/// ascending, and returns the best in-range candidate of that order.
#[instrument(level = "debug", skip_all, fields(order = ?order))]
pub fn explore(layout: &Layout<'_>, order: &[ElementId], objective: Objective) -> OrderOutcome {
    let mut walker = Walker {
        layout,
        order,
        objective,
        assignment: layout.base_assignment().clone(),
        outcome: OrderOutcome {
            best: BestCandidate::new(),
            stats: SearchStats {
                orders: 1,
                ..SearchStats::default()
            },
        },
    };
    walker.descend(0);
    walker.outcome
}
