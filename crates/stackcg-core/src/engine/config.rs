use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Which in-range candidate the search keeps.
///
/// Every objective maps a CG to a score; a candidate replaces the current best only when
/// its score is strictly lower, so ties keep the first candidate in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    /// Lowest CG inside the target range.
    #[default]
    Lowest,
    /// Highest CG inside the target range.
    Highest,
    /// CG closest to the given height.
    NearestTo(f64),
}

impl Objective {
    #[inline]
    pub fn score(self, cg: f64) -> f64 {
        match self {
            Objective::Lowest => cg,
            Objective::Highest => -cg,
            Objective::NearestTo(target) => (cg - target).abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchConfig {
    pub objective: Objective,
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    objective: Option<Objective>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objective(mut self, objective: Objective) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let objective = self.objective.unwrap_or_default();
        if let Objective::NearestTo(target) = objective {
            if !target.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name: "objective.nearest-to",
                    value: target,
                });
            }
        }
        Ok(SearchConfig { objective })
    }
}
