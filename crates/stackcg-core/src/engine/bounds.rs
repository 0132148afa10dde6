//! Integer height range of a movable element at one nesting level.
//!
//! Both ends are truncated toward zero, matching the one-millimeter step of the search.
//! The bounds prune, they do not decide feasibility: the lower end only accounts for the
//! immediate predecessor in the assignment order and the upper end only for the topmost
//! fixed element, so every complete candidate is re-checked against all pairs.

use crate::core::models::assignment::Assignment;
use crate::core::models::ids::ElementId;
use crate::core::models::scenario::Scenario;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightRange {
    pub lo: i64,
    pub hi: i64,
}

impl HeightRange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hi < self.lo
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (i128::from(self.hi) - i128::from(self.lo) + 1) as u64
        }
    }

    #[inline]
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.lo..=self.hi
    }
}

/// Truncates toward zero; `NaN` maps to `0` and infinities saturate.
#[inline]
pub fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Slack allowed when deciding whether a fixed element's top edge reaches the enclosure top.
const CAP_TOLERANCE: f64 = 1e-9;

/// Height that no movable element may rise above.
///
/// This is the bottom edge of the topmost fixed element when that element caps the
/// enclosure (its top edge reaches `total_height`). Otherwise it is the enclosure height
/// itself, so a stack with only floor-mounted or mid-stack fixed elements still spans the
/// full headroom; crossings of those elements are rejected by the full feasibility check.
pub fn ceiling(scenario: &Scenario) -> f64 {
    let total_height = scenario.total_height();
    scenario
        .elements()
        .iter()
        .filter_map(|element| {
            element.fixed_height().map(|height| {
                let half = element.half_thickness();
                (height, height - half, height + half)
            })
        })
        .fold(None, |top: Option<(f64, f64, f64)>, candidate| match top {
            Some((height, _, _)) if candidate.0 <= height => top,
            _ => Some(candidate),
        })
        .filter(|&(_, _, high)| high >= total_height - CAP_TOLERANCE)
        .map_or(total_height, |(_, low, _)| low)
}

/// Candidate heights for `order[level]`, given the heights already placed for
/// `order[..level]`.
///
/// The first element of an order starts at its own half thickness. Every later element
/// starts where it would just satisfy the minimum gap above its immediate predecessor:
/// `prev_height + prev_thickness/2 + min_distance(prev, self) + self_thickness/2`.
/// The upper end is `ceiling - self_thickness/2`.
///
/// The `self_thickness/2` term in the lower end is kept even though it only excludes
/// candidates that violate `min_distance(prev, self)`; with a negative minimum distance
/// this enumerates fewer overlapping candidates than a bound without that term would.
///
/// # Panics
///
/// Panics if `level` is out of bounds for `order`.
pub fn range_for(
    scenario: &Scenario,
    ceiling: f64,
    order: &[ElementId],
    level: usize,
    placed: &Assignment,
) -> HeightRange {
    let id = order[level];
    let half = scenario.element(id).half_thickness();

    let lower = match level.checked_sub(1).map(|previous| order[previous]) {
        None => half,
        Some(previous) => {
            placed.height(previous)
                + scenario.element(previous).half_thickness()
                + scenario.min_distance().get(previous, id)
                + half
        }
    };

    HeightRange {
        lo: truncate(lower),
        hi: truncate(ceiling - half),
    }
}
