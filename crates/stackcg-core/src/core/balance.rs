//! Center-of-gravity computation along the stacking axis.

use super::models::assignment::Assignment;
use super::models::error::ModelError;
use super::models::scenario::Scenario;

/// Mass totals of a scenario that do not depend on the movable heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBalance {
    total_mass: f64,
    external_moment: f64,
}

impl MassBalance {
    /// Sums element and external masses.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveTotalMass`] when the total mass is zero, negative or
    /// not a number, since no center of gravity is defined in that case.
    pub fn of(scenario: &Scenario) -> Result<Self, ModelError> {
        let element_mass: f64 = scenario.elements().iter().map(|e| e.mass).sum();
        let external_mass: f64 = scenario.externals().iter().map(|e| e.mass).sum();
        let total_mass = element_mass + external_mass;
        if total_mass.is_nan() || total_mass <= 0.0 {
            return Err(ModelError::NonPositiveTotalMass { total_mass });
        }
        Ok(Self {
            total_mass,
            external_moment: scenario.externals().iter().map(|e| e.moment()).sum(),
        })
    }

    #[inline]
    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Mass-weighted mean height of all elements and external contributions.
    #[inline]
    pub fn center_of_gravity(&self, scenario: &Scenario, assignment: &Assignment) -> f64 {
        let element_moment: f64 = scenario
            .elements()
            .iter()
            .zip(assignment.as_slice())
            .map(|(element, &height)| height * element.mass)
            .sum();
        (element_moment + self.external_moment) / self.total_mass
    }
}

/// Computes the CG of `scenario` with every element centered at its assigned height.
pub fn center_of_gravity(scenario: &Scenario, assignment: &Assignment) -> Result<f64, ModelError> {
    let expected = scenario.elements().len();
    if assignment.len() != expected {
        return Err(ModelError::AssignmentSize {
            expected,
            actual: assignment.len(),
        });
    }
    Ok(MassBalance::of(scenario)?.center_of_gravity(scenario, assignment))
}
