use serde::{Deserialize, Serialize};

/// How an element's center height is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Height set once when the scenario is built; never changed by the search.
    Fixed(f64),
    /// Height is a search variable.
    Movable,
}

/// A physical mass with an extent along the stacking axis, centered on its placement height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    /// Mass in grams.
    pub mass: f64,
    /// Extent along the stacking axis in millimeters.
    pub thickness: f64,
    pub placement: Placement,
}

impl Element {
    pub fn fixed(name: impl Into<String>, mass: f64, thickness: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            thickness,
            placement: Placement::Fixed(height),
        }
    }

    pub fn movable(name: impl Into<String>, mass: f64, thickness: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            thickness,
            placement: Placement::Movable,
        }
    }

    #[inline]
    pub fn is_movable(&self) -> bool {
        matches!(self.placement, Placement::Movable)
    }

    #[inline]
    pub fn fixed_height(&self) -> Option<f64> {
        match self.placement {
            Placement::Fixed(height) => Some(height),
            Placement::Movable => None,
        }
    }

    #[inline]
    pub fn half_thickness(&self) -> f64 {
        self.thickness / 2.0
    }
}

/// A point mass that contributes to the moment sum but takes no part in collision checks,
/// e.g. a solar panel, an antenna or the chassis itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalContribution {
    pub name: String,
    pub mass: f64,
    pub height: f64,
}

impl ExternalContribution {
    pub fn new(name: impl Into<String>, mass: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            height,
        }
    }

    #[inline]
    pub fn moment(&self) -> f64 {
        self.mass * self.height
    }
}
