use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Element '{0}' is defined more than once")]
    DuplicateElement(String),

    #[error("Unknown element '{0}' referenced by a distance constraint")]
    UnknownElement(String),

    #[error("Total mass must be positive to define a center of gravity (got {total_mass})")]
    NonPositiveTotalMass { total_mass: f64 },

    #[error("Assignment holds {actual} heights but the scenario defines {expected} elements")]
    AssignmentSize { expected: usize, actual: usize },
}
