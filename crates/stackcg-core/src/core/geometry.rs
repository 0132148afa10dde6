//! Edge geometry and the pairwise distance-constraint check.
//!
//! An element placed at center `c` with thickness `t` occupies `[c - t/2, c + t/2]`. The
//! gap between two elements is measured from the top edge of the lower one to the bottom
//! edge of the higher one and is negative when they overlap; overlap is therefore only
//! rejected through the minimum-distance bound.

use super::models::assignment::Assignment;
use super::models::ids::ElementId;
use super::models::scenario::Scenario;
use itertools::Itertools;

/// An element's extent at a given center height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub center: f64,
    pub thickness: f64,
}

impl Slab {
    pub const fn new(center: f64, thickness: f64) -> Self {
        Self { center, thickness }
    }

    #[inline]
    pub fn low(&self) -> f64 {
        self.center - self.thickness / 2.0
    }

    #[inline]
    pub fn high(&self) -> f64 {
        self.center + self.thickness / 2.0
    }
}

/// Occupied interval `(low, high)` of a slab.
#[inline]
pub fn edge_interval(slab: Slab) -> (f64, f64) {
    (slab.low(), slab.high())
}

/// Signed edge-to-edge gap between two slabs.
///
/// `a` counts as the lower slab when `a.center <= b.center`, so equal centers always
/// resolve in favor of the first argument.
#[inline]
pub fn gap(a: Slab, b: Slab) -> f64 {
    let (lower, higher) = if a.center <= b.center { (a, b) } else { (b, a) };
    higher.low() - lower.high()
}

#[inline]
pub fn within_bounds(gap: f64, min: f64, max: f64) -> bool {
    min <= gap && gap <= max
}

pub fn slab_of(scenario: &Scenario, assignment: &Assignment, id: ElementId) -> Slab {
    Slab::new(assignment.height(id), scenario.element(id).thickness)
}

/// Checks a single unordered pair against both distance matrices.
pub fn pair_is_feasible(
    scenario: &Scenario,
    assignment: &Assignment,
    a: ElementId,
    b: ElementId,
) -> bool {
    let gap = gap(
        slab_of(scenario, assignment, a),
        slab_of(scenario, assignment, b),
    );
    within_bounds(
        gap,
        scenario.min_distance().get(a, b),
        scenario.max_distance().get(a, b),
    )
}

/// Returns `true` when every unordered pair of elements respects its `[min, max]` gap bound.
///
/// An assignment whose length does not match the scenario is never feasible.
pub fn is_feasible(scenario: &Scenario, assignment: &Assignment) -> bool {
    if assignment.len() != scenario.elements().len() {
        return false;
    }
    scenario
        .ids()
        .tuple_combinations()
        .all(|(a, b)| pair_is_feasible(scenario, assignment, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::scenario::CgRange;

    #[test]
    fn edge_interval_is_centered_on_the_slab() {
        assert_eq!(edge_interval(Slab::new(10.0, 20.0)), (0.0, 20.0));
        assert_eq!(edge_interval(Slab::new(90.5, 15.0)), (83.0, 98.0));
    }

    #[test]
    fn gap_is_positive_for_separated_slabs() {
        let lower = Slab::new(10.0, 20.0);
        let upper = Slab::new(30.0, 10.0);
        assert_eq!(gap(lower, upper), 5.0);
        assert_eq!(gap(upper, lower), 5.0);
    }

    #[test]
    fn gap_is_zero_for_touching_slabs() {
        assert_eq!(gap(Slab::new(10.0, 20.0), Slab::new(27.5, 15.0)), 0.0);
    }

    #[test]
    fn gap_is_negative_for_overlapping_slabs() {
        assert_eq!(gap(Slab::new(10.0, 20.0), Slab::new(15.0, 10.0)), -10.0);
    }

    #[test]
    fn equal_centers_treat_first_argument_as_lower() {
        let a = Slab::new(20.0, 4.0);
        let b = Slab::new(20.0, 10.0);
        assert_eq!(gap(a, b), (20.0 - 5.0) - (20.0 + 2.0));
        assert_eq!(gap(b, a), (20.0 - 2.0) - (20.0 + 5.0));
    }

    #[test]
    fn within_bounds_is_inclusive_and_rejects_nan() {
        assert!(within_bounds(0.0, 0.0, 10.0));
        assert!(within_bounds(10.0, 0.0, 10.0));
        assert!(!within_bounds(-0.5, 0.0, 10.0));
        assert!(!within_bounds(f64::NAN, 0.0, 10.0));
    }

    fn two_board_scenario(min: f64, max: f64) -> Scenario {
        Scenario::builder(100.0, CgRange::new(0.0, 100.0))
            .fixed_bottom("A", 1.0, 10.0)
            .movable("B", 1.0, 10.0)
            .distance("A", "B", min, max)
            .build()
            .unwrap()
    }

    #[test]
    fn is_feasible_accepts_gap_inside_bounds() {
        let scenario = two_board_scenario(2.0, 8.0);
        assert!(is_feasible(
            &scenario,
            &Assignment::from_heights(vec![5.0, 20.0])
        ));
    }

    #[test]
    fn is_feasible_rejects_gap_below_minimum() {
        let scenario = two_board_scenario(2.0, 8.0);
        assert!(!is_feasible(
            &scenario,
            &Assignment::from_heights(vec![5.0, 16.0])
        ));
    }

    #[test]
    fn is_feasible_rejects_gap_above_maximum() {
        let scenario = two_board_scenario(2.0, 8.0);
        assert!(!is_feasible(
            &scenario,
            &Assignment::from_heights(vec![5.0, 24.0])
        ));
    }

    #[test]
    fn overlap_is_tolerated_by_a_negative_minimum() {
        let scenario = two_board_scenario(-5.0, 8.0);
        assert!(is_feasible(
            &scenario,
            &Assignment::from_heights(vec![5.0, 12.0])
        ));
    }

    #[test]
    fn inverted_bounds_are_never_feasible() {
        let scenario = two_board_scenario(8.0, 2.0);
        for height in 0..40 {
            assert!(!is_feasible(
                &scenario,
                &Assignment::from_heights(vec![5.0, f64::from(height)])
            ));
        }
    }

    #[test]
    fn mismatched_assignment_is_not_feasible() {
        let scenario = two_board_scenario(0.0, 100.0);
        assert!(!is_feasible(&scenario, &Assignment::from_heights(vec![5.0])));
    }
}
