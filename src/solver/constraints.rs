// src/solver/constraints.rs
//
// The three per-period constraint families. Each function emits one family
// for the whole horizon; the caller attaches them to the model. No
// feasibility pre-checks happen here: if the data cannot balance, the
// verdict belongs to the solver.

use good_lp::{constraint, Constraint, Expression};

use crate::model::problem::ReplenishmentProblem;
use crate::solver::builder::DecisionVariables;

/// `quantity[t] <= big_m * order_placed[t]`
///
/// Forces the quantity to zero whenever no order is placed. Together with
/// [`moq_lower_bounds`] this linearizes the disjunctive domain
/// `quantity[t] ∈ {0} ∪ [moq, big_m]`.
pub fn indicator_upper_bounds(vars: &DecisionVariables, big_m: f64) -> Vec<Constraint> {
    (0..vars.horizon())
        .map(|t| constraint!(vars.quantity[t] <= vars.order_placed[t] * big_m))
        .collect()
}

/// `quantity[t] >= moq * order_placed[t]`
///
/// A placed order is at least the minimum order quantity; without an order
/// the bound collapses to `quantity[t] >= 0`.
pub fn moq_lower_bounds(vars: &DecisionVariables, moq: u32) -> Vec<Constraint> {
    let moq = f64::from(moq);
    (0..vars.horizon())
        .map(|t| constraint!(vars.quantity[t] >= vars.order_placed[t] * moq))
        .collect()
}

/// `carried + quantity[t] - demand[t] + lost[t] == ending[t]`
///
/// `carried` is the starting stock for the first period and the previous
/// period's ending level afterwards. Because `ending[t]` is non-negative
/// and the equality must hold, `lost[t]` absorbs exactly the demand that
/// cannot be met. The recurrence is solved implicitly by the optimizer over
/// the whole horizon, not simulated forward.
pub fn inventory_balance(
    problem: &ReplenishmentProblem,
    vars: &DecisionVariables,
) -> Vec<Constraint> {
    let mut family = Vec::with_capacity(vars.horizon());
    for t in 0..vars.horizon() {
        let carried: Expression = if t == 0 {
            f64::from(problem.starting_stock).into()
        } else {
            vars.ending[t - 1].into()
        };
        let demand = f64::from(problem.demand[t]);
        family.push(constraint!(
            carried + vars.quantity[t] - demand + vars.lost[t] == vars.ending[t]
        ));
    }
    family
}
