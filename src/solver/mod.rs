// src/solver/mod.rs

pub mod builder;
pub mod constraints;
pub mod extract;
pub mod objective;
pub mod status;

use good_lp::{default_solver, ProblemVariables, SolverModel};
use tracing::debug;

use crate::error::{InputError, PlanningError};
use crate::model::plan::Plan;
use crate::model::problem::ReplenishmentProblem;
use builder::DecisionVariables;
pub use status::SolveStatus;

/// Tunables for one planning run.
#[derive(Debug, Clone, Default)]
pub struct PlannerOptions {
    /// Override for the big-M linking constant. `None` derives it from the
    /// problem data (starting stock + cumulative demand). An override that
    /// cannot cover the MOQ or the largest single-period demand is rejected
    /// before model construction: such a bound would silently truncate
    /// feasible orders.
    pub big_m: Option<f64>,
}

impl PlannerOptions {
    fn resolve_big_m(&self, problem: &ReplenishmentProblem) -> Result<f64, InputError> {
        match self.big_m {
            None => Ok(problem.derived_big_m()),
            Some(given) => {
                let required = problem.min_usable_big_m();
                if !given.is_finite() || given < required {
                    Err(InputError::BigMTooSmall { given, required })
                } else {
                    Ok(given)
                }
            }
        }
    }
}

/// Plans replenishment with the big-M derived from the problem data.
pub fn plan_replenishment(problem: &ReplenishmentProblem) -> Result<Plan, PlanningError> {
    plan_replenishment_with(problem, &PlannerOptions::default())
}

/// Validates the input, assembles the period-indexed MILP, hands it to the
/// solver, and extracts the plan.
///
/// The model instance is owned by this call: variables, constraints and
/// solution are dropped when it returns. A terminal solver status comes
/// back verbatim as [`PlanningError::Solve`]; nothing is retried or
/// relaxed.
pub fn plan_replenishment_with(
    problem: &ReplenishmentProblem,
    options: &PlannerOptions,
) -> Result<Plan, PlanningError> {
    problem.validate()?;
    let big_m = options.resolve_big_m(problem)?;

    let mut registry = ProblemVariables::new();
    let vars = DecisionVariables::declare(&mut registry, problem.horizon(), big_m);
    let cost = objective::total_cost(problem, &vars);

    let mut model = registry.minimise(cost.clone()).using(default_solver);
    for family in [
        constraints::indicator_upper_bounds(&vars, big_m),
        constraints::moq_lower_bounds(&vars, problem.supplier.moq),
        constraints::inventory_balance(problem, &vars),
    ] {
        for constraint in family {
            model = model.with(constraint);
        }
    }

    debug!(
        periods = problem.horizon(),
        big_m, "submitting replenishment model to the solver"
    );

    let solution = model
        .solve()
        .map_err(|err| PlanningError::Solve(SolveStatus::from(err)))?;

    Ok(extract::extract_plan(
        problem,
        &vars,
        &cost,
        &solution,
        SolveStatus::Optimal,
    ))
}
