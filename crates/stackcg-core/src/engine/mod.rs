//! # Engine Module
//!
//! The placement-search machinery that sits between the stateless [`crate::core`] model and
//! the public [`crate::workflows`] entry points.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Objective selection and its builder
//! - **Bounds** ([`bounds`]) - Per-level integer height range of a movable element
//! - **Layout** ([`layout`]) - Per-invocation preparation of a scenario (mass totals,
//!   ceiling, pairs that still need checking)
//! - **State Tracking** ([`state`]) - Best candidate and search statistics
//! - **Progress Monitoring** ([`progress`]) - Optional callback for host applications
//! - **Error Handling** ([`error`]) - Engine error type
//!
//! The heavy lifting happens in the crate-private `tasks` module, which walks the nested
//! height ranges of a single assignment order.

pub mod bounds;
pub mod config;
pub mod error;
pub mod layout;
pub mod progress;
pub mod state;
pub(crate) mod tasks;
