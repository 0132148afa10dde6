use super::ids::ElementId;
use serde::{Deserialize, Serialize};

/// Center heights for every element of a scenario, indexed by [`ElementId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    heights: Vec<f64>,
}

impl Assignment {
    pub fn from_heights(heights: Vec<f64>) -> Self {
        Self { heights }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    #[inline]
    pub fn height(&self, id: ElementId) -> f64 {
        self.heights[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: ElementId, height: f64) {
        self.heights[id.index()] = height;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, f64)> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(|(index, &height)| (ElementId::new(index), height))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.heights
    }
}
