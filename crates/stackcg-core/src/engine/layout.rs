use super::bounds::{self, HeightRange};
use crate::core::balance::MassBalance;
use crate::core::geometry;
use crate::core::models::assignment::Assignment;
use crate::core::models::error::ModelError;
use crate::core::models::ids::ElementId;
use crate::core::models::scenario::Scenario;
use itertools::Itertools;
use tracing::debug;

/// A scenario prepared for one search invocation.
///
/// Everything that does not depend on the movable heights is computed once here: the mass
/// totals, the ceiling for the upper height bound, and the fixed-to-fixed distance check.
/// Pairs of two fixed elements are dropped from the per-candidate check afterwards.
#[derive(Debug, Clone)]
pub struct Layout<'s> {
    scenario: &'s Scenario,
    balance: MassBalance,
    ceiling: f64,
    movable: Vec<ElementId>,
    checked_pairs: Vec<(ElementId, ElementId)>,
    fixed_feasible: bool,
    base: Assignment,
}

impl<'s> Layout<'s> {
    pub fn prepare(scenario: &'s Scenario) -> Result<Self, ModelError> {
        let balance = MassBalance::of(scenario)?;
        let base = scenario.fixed_assignment();

        let (fixed_pairs, checked_pairs): (Vec<_>, Vec<_>) = scenario
            .ids()
            .tuple_combinations()
            .partition(|&(a, b)| {
                !scenario.element(a).is_movable() && !scenario.element(b).is_movable()
            });

        let fixed_feasible = fixed_pairs
            .iter()
            .all(|&(a, b)| geometry::pair_is_feasible(scenario, &base, a, b));

        let layout = Self {
            scenario,
            balance,
            ceiling: bounds::ceiling(scenario),
            movable: scenario.movable_ids(),
            checked_pairs,
            fixed_feasible,
            base,
        };
        debug!(
            total_mass = layout.balance.total_mass(),
            ceiling = layout.ceiling,
            movable = layout.movable.len(),
            checked_pairs = layout.checked_pairs.len(),
            fixed_feasible,
            "Layout prepared."
        );
        Ok(layout)
    }

    pub fn scenario(&self) -> &'s Scenario {
        self.scenario
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn movable(&self) -> &[ElementId] {
        &self.movable
    }

    /// Whether the fixed elements alone respect their pairwise bounds.
    pub fn fixed_feasible(&self) -> bool {
        self.fixed_feasible
    }

    /// Fixed heights in place, movable heights zeroed.
    pub fn base_assignment(&self) -> &Assignment {
        &self.base
    }

    #[inline]
    pub fn range_for(&self, order: &[ElementId], level: usize, placed: &Assignment) -> HeightRange {
        bounds::range_for(self.scenario, self.ceiling, order, level, placed)
    }

    /// Checks every pair that involves at least one movable element.
    #[inline]
    pub fn is_feasible(&self, assignment: &Assignment) -> bool {
        self.checked_pairs
            .iter()
            .all(|&(a, b)| geometry::pair_is_feasible(self.scenario, assignment, a, b))
    }

    #[inline]
    pub fn center_of_gravity(&self, assignment: &Assignment) -> f64 {
        self.balance.center_of_gravity(self.scenario, assignment)
    }
}
