use super::ids::ElementId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_DISTANCE: f64 = 0.0;
pub const DEFAULT_MAX_DISTANCE: f64 = 9999.0;

/// Symmetric pairwise bound between elements, keyed by unordered element pair.
///
/// Only the strict upper triangle is stored. Lookups canonicalize the pair so that the
/// lower index comes first, which makes `get(a, b)` and `get(b, a)` the same slot. The
/// diagonal is not stored and always reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            size,
            values: vec![value; size * size.saturating_sub(1) / 2],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bound for the unordered pair `{a, b}`; zero on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` differ and either lies outside the matrix.
    #[inline]
    pub fn get(&self, a: ElementId, b: ElementId) -> f64 {
        self.slot(a, b).map_or(0.0, |slot| self.values[slot])
    }

    /// Sets the bound for the unordered pair `{a, b}`. Diagonal writes are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` differ and either lies outside the matrix.
    pub fn set(&mut self, a: ElementId, b: ElementId, value: f64) {
        if let Some(slot) = self.slot(a, b) {
            self.values[slot] = value;
        }
    }

    fn slot(&self, a: ElementId, b: ElementId) -> Option<usize> {
        let (lo, hi) = if a <= b {
            (a.index(), b.index())
        } else {
            (b.index(), a.index())
        };
        if lo == hi {
            return None;
        }
        assert!(hi < self.size, "element {hi} outside matrix of size {}", self.size);
        Some(lo * (2 * self.size - lo - 1) / 2 + (hi - lo - 1))
    }
}
