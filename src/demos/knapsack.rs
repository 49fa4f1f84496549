// src/demos/knapsack.rs

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, Solution, SolverModel,
    Variable,
};

use crate::error::PlanningError;
use crate::solver::extract::BINARY_THRESHOLD;
use crate::solver::status::SolveStatus;

/// A candidate item for the knapsack.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackItem {
    pub name: String,
    pub value: f64,
    pub weight: f64,
}

/// The solved selection.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSelection {
    /// Indices into the input slice, in input order.
    pub chosen: Vec<usize>,
    pub total_value: f64,
    pub total_weight: f64,
}

/// 0/1 knapsack: pick the subset of items maximizing total value without
/// exceeding the weight capacity. One binary variable per item, one
/// capacity constraint.
pub fn select_items(
    items: &[KnapsackItem],
    capacity: f64,
) -> Result<KnapsackSelection, PlanningError> {
    let mut registry = ProblemVariables::new();
    let picks: Vec<Variable> = items
        .iter()
        .map(|item| registry.add(variable().binary().name(item.name.clone())))
        .collect();

    let mut value = Expression::default();
    let mut weight = Expression::default();
    for (item, &pick) in items.iter().zip(&picks) {
        value += pick * item.value;
        weight += pick * item.weight;
    }

    let solution = registry
        .maximise(value)
        .using(default_solver)
        .with(constraint!(weight <= capacity))
        .solve()
        .map_err(|err| PlanningError::Solve(SolveStatus::from(err)))?;

    let chosen: Vec<usize> = picks
        .iter()
        .enumerate()
        .filter(|(_, &pick)| solution.value(pick) > BINARY_THRESHOLD)
        .map(|(i, _)| i)
        .collect();

    Ok(KnapsackSelection {
        total_value: chosen.iter().map(|&i| items[i].value).sum(),
        total_weight: chosen.iter().map(|&i| items[i].weight).sum(),
        chosen,
    })
}
