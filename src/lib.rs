//! Demonstration MILP models for inventory planning.
//!
//! The centrepiece is a multi-period replenishment optimizer: per planning
//! day it decides whether to order, how much (at least the supplier's MOQ),
//! and lets the solver trade delivery cost against holding cost and lost
//! sales across the whole horizon. Two smaller single-period demos
//! (knapsack item selection, budget allocation) live in [`demos`].

pub mod demos;
pub mod error;
pub mod io;
pub mod model;
pub mod solver;

pub use error::{InputError, PlanningError};
pub use model::plan::{InventoryState, OrderDecision, PeriodPlan, Plan};
pub use model::problem::{ReplenishmentProblem, SupplierTerms};
pub use solver::{plan_replenishment, plan_replenishment_with, PlannerOptions, SolveStatus};
