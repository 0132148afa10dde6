//! # stackcg Core Library
//!
//! Placement search for a one-dimensional stack of mass elements inside a fixed-height
//! enclosure, such as the subsystem boards of a CubeSat chassis. Given fixed and movable
//! elements, point-mass external contributions and pairwise edge-distance bounds, the
//! library enumerates integer-millimeter heights for the movable elements and returns the
//! feasible configuration whose center of gravity (CG) best satisfies the target range.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Scenario`, `Element`,
//!   `DistanceMatrix`), the geometry of edge intervals and gaps, and the CG computation.
//!
//! - **[`engine`]: The Logic Core.** Search configuration, the per-level height bounds,
//!   the prepared per-invocation layout, and the nested enumeration of one assignment order.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into the
//!   [`workflows::search::search`] and [`workflows::search::run`] entry points.

pub mod core;
pub mod engine;
pub mod workflows;
