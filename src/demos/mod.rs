//! Single-period demonstration models.
//!
//! Structurally simpler siblings of the replenishment optimizer: no
//! time-indexed state, no recursion, no indicator linking. They share the
//! same solver boundary and status mapping.

pub mod budget;
pub mod knapsack;
