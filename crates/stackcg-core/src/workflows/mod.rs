//! # Workflows Module
//!
//! Top-level entry points for callers of the library.
//!
//! - **Placement Search** ([`search`]) - Enumerates movable-element heights over every
//!   assignment order and returns the best feasible configuration whose CG lies in the
//!   target range.

pub mod search;
