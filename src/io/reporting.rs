// src/io/reporting.rs

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::model::plan::Plan;

/// Flat per-period row for CSV export. The nested plan structs are
/// flattened by hand because the csv crate writes plain records only.
#[derive(Debug, Clone, Serialize)]
pub struct PlanRow {
    pub period: usize,
    pub demand: u32,
    pub order_placed: bool,
    pub order_quantity: u32,
    pub ending_inventory: u32,
    pub lost_sales: u32,
}

impl PlanRow {
    fn from_plan(plan: &Plan) -> Vec<Self> {
        plan.periods
            .iter()
            .map(|p| PlanRow {
                period: p.period,
                demand: p.demand,
                order_placed: p.order.placed,
                order_quantity: p.order.quantity,
                ending_inventory: p.inventory.ending_level,
                lost_sales: p.inventory.lost_sales,
            })
            .collect()
    }
}

/// Writes the solved plan to a CSV file, one row per period.
pub fn write_plan_csv<P: AsRef<Path>>(file_path: P, plan: &Plan) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(file_path)?;
    for row in PlanRow::from_plan(plan) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints the plan as a console table with aggregate totals.
pub fn print_plan(plan: &Plan) {
    println!("Status: {} | Total cost: {:.2}", plan.status, plan.objective_value);
    println!("Period |  Demand |  Order |  Qty | Ending | Lost");
    for p in &plan.periods {
        println!(
            "{:>6} | {:>7} | {:>6} | {:>4} | {:>6} | {:>4}",
            p.period,
            p.demand,
            if p.order.placed { "yes" } else { "no" },
            p.order.quantity,
            p.inventory.ending_level,
            p.inventory.lost_sales,
        );
    }
    println!(
        "Totals: ordered {}, ending inventory {}, lost sales {}, deliveries {}",
        plan.total_ordered(),
        plan.total_ending_inventory(),
        plan.total_lost_sales(),
        plan.deliveries(),
    );
}
