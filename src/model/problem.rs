// src/model/problem.rs

use crate::error::InputError;

/// Supplier conditions, fixed for the whole planning horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplierTerms {
    /// Minimum order quantity: an order is either 0 or at least this many units.
    pub moq: u32,
    /// Fixed cost charged per delivery, independent of the quantity.
    pub delivery_cost: f64,
}

/// Static input for one replenishment planning run.
///
/// Demand, stock, and MOQ are unsigned, so negative values are
/// unrepresentable; [`validate`](Self::validate) covers what the types
/// cannot (empty horizon, bad cost signs).
#[derive(Debug, Clone, PartialEq)]
pub struct ReplenishmentProblem {
    /// Units on hand before the first period.
    pub starting_stock: u32,
    /// Per-unit selling price; holding and lost-sales costs derive from it.
    pub selling_price: f64,
    /// Forecast demand, one entry per period, in period order.
    pub demand: Vec<u32>,
    pub supplier: SupplierTerms,
}

impl ReplenishmentProblem {
    /// Number of planning periods (N).
    pub fn horizon(&self) -> usize {
        self.demand.len()
    }

    /// Cost of carrying one unit of ending inventory for one period.
    pub fn holding_cost_rate(&self) -> f64 {
        self.selling_price * 0.01
    }

    /// Cost of one unit of unmet demand (the foregone sale).
    pub fn lost_sales_unit_cost(&self) -> f64 {
        self.selling_price
    }

    /// Default big-M: starting stock plus cumulative demand.
    ///
    /// No single order larger than this can ever be useful, so it is the
    /// tightest data-derived bound that never truncates a feasible order.
    pub fn derived_big_m(&self) -> f64 {
        let total_demand: u64 = self.demand.iter().map(|&d| u64::from(d)).sum();
        u64::from(self.starting_stock) as f64 + total_demand as f64
    }

    /// Largest value a big-M override must still cover: the MOQ (otherwise
    /// no order can ever be placed) and the biggest single-period demand.
    pub fn min_usable_big_m(&self) -> f64 {
        let peak_demand = self.demand.iter().copied().max().unwrap_or(0);
        f64::from(self.supplier.moq.max(peak_demand))
    }

    /// Checks the input before any model construction. Nothing invalid is
    /// ever handed to the solver.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.demand.is_empty() {
            return Err(InputError::EmptyHorizon);
        }
        if !self.selling_price.is_finite() || self.selling_price < 0.0 {
            return Err(InputError::InvalidSellingPrice(self.selling_price));
        }
        if !self.supplier.delivery_cost.is_finite() || self.supplier.delivery_cost < 0.0 {
            return Err(InputError::InvalidDeliveryCost(self.supplier.delivery_cost));
        }
        Ok(())
    }
}
