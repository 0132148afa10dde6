//! Computational units of the search.
//!
//! [`enumeration`] walks every integer height of every movable element for one fixed
//! assignment order. Orders are independent of each other, which is what the workflow
//! layer parallelizes over.

pub mod enumeration;
