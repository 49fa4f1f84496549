// src/solver/objective.rs

use good_lp::Expression;

use crate::model::problem::ReplenishmentProblem;
use crate::solver::builder::DecisionVariables;

/// Total cost over the horizon, to be minimized:
///
/// `Σ_t delivery_cost·order_placed[t] + holding_cost_rate·ending[t] +
/// lost_sales_unit_cost·lost[t]`
///
/// The cost rates are derived once from the problem; this is a plain
/// linear combination with no per-period recomputation.
pub fn total_cost(problem: &ReplenishmentProblem, vars: &DecisionVariables) -> Expression {
    let delivery = problem.supplier.delivery_cost;
    let holding = problem.holding_cost_rate();
    let lost_sale = problem.lost_sales_unit_cost();

    let mut cost = Expression::default();
    for t in 0..vars.horizon() {
        cost += vars.order_placed[t] * delivery;
        cost += vars.ending[t] * holding;
        cost += vars.lost[t] * lost_sale;
    }
    cost
}
