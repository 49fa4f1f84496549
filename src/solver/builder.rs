// src/solver/builder.rs

use good_lp::{variable, ProblemVariables, Variable};

/// Per-period decision variables, all registered in one
/// [`ProblemVariables`] owned by the planning run.
///
/// Vectors are indexed `0..horizon` (period `t+1` lives at index `t`).
#[derive(Debug)]
pub struct DecisionVariables {
    /// Binary: 1 if an order is placed in the period.
    pub order_placed: Vec<Variable>,
    /// Integer in `[0, big_m]`: units ordered in the period.
    pub quantity: Vec<Variable>,
    /// Continuous, non-negative: units carried out of the period.
    pub ending: Vec<Variable>,
    /// Continuous, non-negative: demand left unmet in the period.
    pub lost: Vec<Variable>,
}

impl DecisionVariables {
    /// Declares the four variable families for every period.
    ///
    /// Pure registration: domains only, no constraints. `big_m` doubles as
    /// the practical upper bound on a single order.
    pub fn declare(registry: &mut ProblemVariables, horizon: usize, big_m: f64) -> Self {
        let mut order_placed = Vec::with_capacity(horizon);
        let mut quantity = Vec::with_capacity(horizon);
        let mut ending = Vec::with_capacity(horizon);
        let mut lost = Vec::with_capacity(horizon);

        for t in 1..=horizon {
            order_placed.push(registry.add(variable().binary().name(format!("order_{t}"))));
            quantity.push(registry.add(
                variable()
                    .integer()
                    .min(0.0)
                    .max(big_m)
                    .name(format!("qty_{t}")),
            ));
            ending.push(registry.add(variable().min(0.0).name(format!("ending_{t}"))));
            lost.push(registry.add(variable().min(0.0).name(format!("lost_{t}"))));
        }

        Self {
            order_placed,
            quantity,
            ending,
            lost,
        }
    }

    pub fn horizon(&self) -> usize {
        self.order_placed.len()
    }
}
