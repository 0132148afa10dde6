//! # Core Module
//!
//! Stateless building blocks of the placement model.
//!
//! - **Data Model** ([`models`]) - Elements, external contributions, distance matrices,
//!   height assignments and the immutable [`models::scenario::Scenario`].
//! - **Geometry** ([`geometry`]) - Edge intervals, signed edge gaps and the pairwise
//!   min/max feasibility check.
//! - **Mass Balance** ([`balance`]) - Mass-weighted center of gravity along the stacking axis.
//!
//! Every height and thickness is expressed in millimeters and every mass in grams; the
//! functions here are pure and never mutate their inputs.

pub mod balance;
pub mod geometry;
pub mod models;
