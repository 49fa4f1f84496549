// src/demos/budget.rs

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, Solution, SolverModel,
    Variable,
};

use crate::error::PlanningError;
use crate::solver::extract;
use crate::solver::status::SolveStatus;

/// Something money can be spent on.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOption {
    pub name: String,
    pub unit_cost: f64,
    /// Benefit of one unit, in the same scale across options.
    pub utility: f64,
    /// Cap on how many units are worth buying at all.
    pub max_units: u32,
}

/// The solved allocation: units to buy per option, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasePlan {
    pub quantities: Vec<u32>,
    pub total_cost: f64,
    pub total_utility: f64,
}

/// Budget-constrained purchase allocation: integer quantities per option,
/// maximize total utility without overspending the budget.
pub fn allocate_budget(
    options: &[PurchaseOption],
    budget: f64,
) -> Result<PurchasePlan, PlanningError> {
    let mut registry = ProblemVariables::new();
    let amounts: Vec<Variable> = options
        .iter()
        .map(|opt| {
            registry.add(
                variable()
                    .integer()
                    .min(0.0)
                    .max(f64::from(opt.max_units))
                    .name(opt.name.clone()),
            )
        })
        .collect();

    let mut utility = Expression::default();
    let mut spend = Expression::default();
    for (opt, &amount) in options.iter().zip(&amounts) {
        utility += amount * opt.utility;
        spend += amount * opt.unit_cost;
    }

    let solution = registry
        .maximise(utility)
        .using(default_solver)
        .with(constraint!(spend <= budget))
        .solve()
        .map_err(|err| PlanningError::Solve(SolveStatus::from(err)))?;

    let quantities: Vec<u32> = options
        .iter()
        .zip(&amounts)
        .map(|(opt, &amount)| extract::rounded_integral(solution.value(amount), &opt.name))
        .collect();

    let total_cost = options
        .iter()
        .zip(&quantities)
        .map(|(opt, &q)| opt.unit_cost * f64::from(q))
        .sum();
    let total_utility = options
        .iter()
        .zip(&quantities)
        .map(|(opt, &q)| opt.utility * f64::from(q))
        .sum();

    Ok(PurchasePlan {
        quantities,
        total_cost,
        total_utility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, unit_cost: f64, utility: f64, max_units: u32) -> PurchaseOption {
        PurchaseOption {
            name: name.to_string(),
            unit_cost,
            utility,
            max_units,
        }
    }

    #[test]
    fn spends_the_budget_on_the_best_utility_per_cost() {
        // "good" dominates on utility per unit cost; budget 10 fits 3 of it
        // (capped) plus 2 "filler".
        let options = vec![
            option("good", 2.0, 5.0, 3),
            option("filler", 2.0, 3.0, 10),
        ];

        let plan = allocate_budget(&options, 10.0).unwrap();

        assert_eq!(plan.quantities, vec![3, 2]);
        assert!((plan.total_utility - 21.0).abs() < 1e-6);
        assert!(plan.total_cost <= 10.0 + 1e-6);
    }

    #[test]
    fn zero_budget_buys_nothing() {
        let options = vec![option("anything", 1.0, 1.0, 5)];

        let plan = allocate_budget(&options, 0.0).unwrap();

        assert_eq!(plan.quantities, vec![0]);
        assert_eq!(plan.total_cost, 0.0);
    }
}
