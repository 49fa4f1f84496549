// src/solver/extract.rs

use good_lp::{Expression, Solution};
use tracing::warn;

use crate::model::plan::{InventoryState, OrderDecision, PeriodPlan, Plan};
use crate::model::problem::ReplenishmentProblem;
use crate::solver::builder::DecisionVariables;
use crate::solver::status::SolveStatus;

/// How far a value may sit from the nearest integer before it is flagged
/// as a data-quality problem.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-4;

/// Anything past 0.5 counts as a set binary variable.
pub const BINARY_THRESHOLD: f64 = 0.5;

/// Rounds a solver value that should be integral.
///
/// Solver floats carry rounding noise (`5.999999999` has to read as `6`).
/// A value outside [`INTEGRALITY_TOLERANCE`] is logged as a warning and
/// still rounded; it is never raised as an error. Negative noise clamps
/// to zero.
pub(crate) fn rounded_integral(raw: f64, label: &str) -> u32 {
    let nearest = raw.round();
    if (raw - nearest).abs() > INTEGRALITY_TOLERANCE {
        warn!(value = raw, label, "expected an integral solver value; rounding to nearest");
    }
    if nearest <= 0.0 {
        0
    } else {
        nearest as u32
    }
}

/// Reads the solved variables back into an immutable [`Plan`].
///
/// Only called once the solver has reported a status that carries a
/// solution. All four families are rounded defensively: quantities and
/// indicators are integer-typed in the model, and ending/lost levels are
/// integral whenever the input data is, which the balance tests rely on.
pub fn extract_plan<S: Solution>(
    problem: &ReplenishmentProblem,
    vars: &DecisionVariables,
    objective: &Expression,
    solution: &S,
    status: SolveStatus,
) -> Plan {
    let mut periods = Vec::with_capacity(vars.horizon());
    for t in 0..vars.horizon() {
        let placed = solution.value(vars.order_placed[t]) > BINARY_THRESHOLD;
        let quantity = rounded_integral(solution.value(vars.quantity[t]), "order quantity");
        let ending_level = rounded_integral(solution.value(vars.ending[t]), "ending inventory");
        let lost_sales = rounded_integral(solution.value(vars.lost[t]), "lost sales");

        periods.push(PeriodPlan {
            period: t + 1,
            demand: problem.demand[t],
            order: OrderDecision { placed, quantity },
            inventory: InventoryState {
                ending_level,
                lost_sales,
            },
        });
    }

    Plan {
        status,
        objective_value: solution.eval(objective),
        periods,
    }
}
