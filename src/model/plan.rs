// src/model/plan.rs

use serde::Serialize;

use crate::solver::status::SolveStatus;

/// What happens at the supplier in one period.
///
/// Invariant (enforced by the model's linking constraints, asserted again
/// in tests): `placed == false` implies `quantity == 0`, and
/// `placed == true` implies `quantity >= moq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderDecision {
    pub placed: bool,
    pub quantity: u32,
}

/// Inventory position at the end of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryState {
    /// Units carried into the next period.
    pub ending_level: u32,
    /// Demand in this period that could not be met.
    pub lost_sales: u32,
}

/// One period's slice of the solved plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodPlan {
    /// 1-based period index.
    pub period: usize,
    /// Forecast demand, echoed from the input for reporting.
    pub demand: u32,
    pub order: OrderDecision,
    pub inventory: InventoryState,
}

/// The solved replenishment schedule for the whole horizon.
///
/// Only produced after an `Optimal` or `Feasible` solve; immutable once
/// built. Aggregates are derived from the per-period rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub status: SolveStatus,
    /// Minimized total cost as reported by the solver.
    pub objective_value: f64,
    pub periods: Vec<PeriodPlan>,
}

impl Plan {
    /// Total units ordered across the horizon.
    pub fn total_ordered(&self) -> u64 {
        self.periods
            .iter()
            .map(|p| u64::from(p.order.quantity))
            .sum()
    }

    /// Total ending inventory summed over all periods (the quantity the
    /// holding cost is charged on).
    pub fn total_ending_inventory(&self) -> u64 {
        self.periods
            .iter()
            .map(|p| u64::from(p.inventory.ending_level))
            .sum()
    }

    /// Total demand that went unmet.
    pub fn total_lost_sales(&self) -> u64 {
        self.periods
            .iter()
            .map(|p| u64::from(p.inventory.lost_sales))
            .sum()
    }

    /// Number of periods in which an order is placed.
    pub fn deliveries(&self) -> usize {
        self.periods.iter().filter(|p| p.order.placed).count()
    }
}
