// src/error.rs

use thiserror::Error;

use crate::solver::status::SolveStatus;

/// Problems with the input data, caught before anything reaches the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("demand forecast is empty; the horizon needs at least one period")]
    EmptyHorizon,

    #[error("selling price must be finite and non-negative, got {0}")]
    InvalidSellingPrice(f64),

    #[error("delivery cost must be finite and non-negative, got {0}")]
    InvalidDeliveryCost(f64),

    #[error("big-M {given} is too small: it must cover the MOQ and the largest single-period demand ({required})")]
    BigMTooSmall { given: f64, required: f64 },
}

/// Anything that can stop a planning run from producing a [`Plan`].
///
/// Terminal solver verdicts are surfaced verbatim: no retry, no constraint
/// relaxation, no partial plan.
///
/// [`Plan`]: crate::model::plan::Plan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("solver terminated with status {0}; no plan available")]
    Solve(SolveStatus),
}
