//! Data structures describing a stacking scenario.
//!
//! A [`scenario::Scenario`] owns an ordered list of [`element::Element`]s, each identified by
//! its position ([`ids::ElementId`]), together with the point-mass
//! [`element::ExternalContribution`]s, the two symmetric [`distance::DistanceMatrix`]
//! instances and the target CG range. Scenarios are assembled through
//! [`scenario::ScenarioBuilder`], which resolves element names into identities.

pub mod assignment;
pub mod distance;
pub mod element;
pub mod error;
pub mod ids;
pub mod scenario;
