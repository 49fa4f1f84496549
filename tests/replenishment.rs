//! End-to-end checks of the replenishment optimizer on small instances.

use stock_planner::solver::{plan_replenishment_with, PlannerOptions};
use stock_planner::{
    plan_replenishment, InputError, Plan, PlanningError, ReplenishmentProblem, SolveStatus,
    SupplierTerms,
};

fn problem(starting_stock: u32, demand: Vec<u32>, moq: u32, delivery_cost: f64) -> ReplenishmentProblem {
    ReplenishmentProblem {
        starting_stock,
        selling_price: 10.0,
        demand,
        supplier: SupplierTerms { moq, delivery_cost },
    }
}

/// Balance law, exact integer arithmetic: ending[t-1] + qty[t] - demand[t]
/// + lost[t] == ending[t], with ending[0] = starting stock.
fn assert_balance(problem: &ReplenishmentProblem, plan: &Plan) {
    let mut carried = i64::from(problem.starting_stock);
    for p in &plan.periods {
        let expected = carried + i64::from(p.order.quantity) - i64::from(p.demand)
            + i64::from(p.inventory.lost_sales);
        assert_eq!(
            expected,
            i64::from(p.inventory.ending_level),
            "balance violated in period {}",
            p.period
        );
        carried = i64::from(p.inventory.ending_level);
    }
}

/// qty > 0 implies an order was placed; a placed order is at least the MOQ;
/// no order means qty 0.
fn assert_indicator_linkage(problem: &ReplenishmentProblem, plan: &Plan) {
    for p in &plan.periods {
        if p.order.quantity > 0 {
            assert!(p.order.placed, "period {}: quantity without order", p.period);
        }
        if p.order.placed {
            assert!(
                p.order.quantity >= problem.supplier.moq,
                "period {}: order below MOQ ({} < {})",
                p.period,
                p.order.quantity,
                problem.supplier.moq
            );
        } else {
            assert_eq!(p.order.quantity, 0, "period {}: phantom quantity", p.period);
        }
    }
}

fn recomputed_objective(problem: &ReplenishmentProblem, plan: &Plan) -> f64 {
    plan.periods
        .iter()
        .map(|p| {
            let delivery = if p.order.placed {
                problem.supplier.delivery_cost
            } else {
                0.0
            };
            delivery
                + problem.holding_cost_rate() * f64::from(p.inventory.ending_level)
                + problem.lost_sales_unit_cost() * f64::from(p.inventory.lost_sales)
        })
        .sum()
}

#[test]
fn degenerate_horizon_keeps_the_stock() {
    // One period, demand covered by starting stock: no order, no lost sales.
    let problem = problem(4, vec![3], 10, 5.0);

    let plan = plan_replenishment(&problem).unwrap();

    assert_eq!(plan.status, SolveStatus::Optimal);
    assert_eq!(plan.periods.len(), 1);
    let p = &plan.periods[0];
    assert!(!p.order.placed);
    assert_eq!(p.order.quantity, 0);
    assert_eq!(p.inventory.lost_sales, 0);
    assert_eq!(p.inventory.ending_level, 1);
    assert_balance(&problem, &plan);
}

#[test]
fn forced_order_scenario_batches_above_the_moq() {
    // Starting stock 4 cannot cover demand 40; losing a sale costs the full
    // selling price, so the optimizer must order, and only in lots of >= 10.
    let problem = problem(4, vec![3, 5, 3, 5, 3, 5, 3, 5, 3, 5], 10, 1.0);

    let plan = plan_replenishment(&problem).unwrap();

    assert_eq!(plan.status, SolveStatus::Optimal);
    assert_eq!(plan.total_lost_sales(), 0);
    assert!(plan.deliveries() >= 1);
    assert_balance(&problem, &plan);
    assert_indicator_linkage(&problem, &plan);

    // Demand net of starting stock must be ordered exactly or over-ordered;
    // holding cost makes exact coverage optimal here.
    assert_eq!(plan.total_ordered(), 36);
}

#[test]
fn objective_reconciles_with_the_per_period_costs() {
    let problem = problem(4, vec![3, 5, 3, 5, 3, 5, 3, 5, 3, 5], 10, 1.0);

    let plan = plan_replenishment(&problem).unwrap();

    let recomputed = recomputed_objective(&problem, &plan);
    assert!(
        (plan.objective_value - recomputed).abs() < 1e-6,
        "objective {} vs recomputed {}",
        plan.objective_value,
        recomputed
    );
}

#[test]
fn all_extracted_values_are_non_negative_and_balanced() {
    let problem = problem(20, vec![8, 0, 15, 2, 30, 1], 12, 3.0);

    let plan = plan_replenishment(&problem).unwrap();

    // Non-negativity is structural (u32), the balance and linkage are not.
    assert_balance(&problem, &plan);
    assert_indicator_linkage(&problem, &plan);
}

#[test]
fn expensive_deliveries_trade_into_lost_sales() {
    // Cheap goods, ruinous delivery fee: losing the tail demand is cheaper
    // than a second delivery. The emergent complementary slackness holds:
    // never positive ending inventory and positive lost sales at once.
    let problem = ReplenishmentProblem {
        starting_stock: 0,
        selling_price: 1.0,
        demand: vec![2, 2, 2],
        supplier: SupplierTerms {
            moq: 1,
            delivery_cost: 100.0,
        },
    };

    let plan = plan_replenishment(&problem).unwrap();

    assert_eq!(plan.deliveries(), 0);
    assert_eq!(plan.total_lost_sales(), 6);
    assert_balance(&problem, &plan);
    for p in &plan.periods {
        assert!(
            p.inventory.ending_level == 0 || p.inventory.lost_sales == 0,
            "period {}: inventory and lost sales both positive",
            p.period
        );
    }
}

#[test]
fn undersized_big_m_override_is_rejected_up_front() {
    // Demand spike beyond the override: with quantities capped at 50 the
    // linking constraint would silently truncate feasible orders, so the
    // builder precondition rejects the bound before any model exists.
    let problem = problem(4, vec![1000, 5, 3], 10, 1.0);
    let options = PlannerOptions { big_m: Some(50.0) };

    let err = plan_replenishment_with(&problem, &options).unwrap_err();

    assert_eq!(
        err,
        PlanningError::Input(InputError::BigMTooSmall {
            given: 50.0,
            required: 1000.0,
        })
    );
}

#[test]
fn adequate_big_m_override_is_accepted() {
    let problem = problem(4, vec![3, 5, 3], 10, 1.0);
    let options = PlannerOptions { big_m: Some(20.0) };

    let plan = plan_replenishment_with(&problem, &options).unwrap();

    assert_eq!(plan.status, SolveStatus::Optimal);
    assert_balance(&problem, &plan);
}

#[test]
fn invalid_input_never_reaches_the_solver() {
    let empty = problem(4, vec![], 10, 1.0);
    assert_eq!(
        plan_replenishment(&empty).unwrap_err(),
        PlanningError::Input(InputError::EmptyHorizon)
    );

    let mut bad_price = problem(4, vec![3], 10, 1.0);
    bad_price.selling_price = -2.0;
    assert!(matches!(
        plan_replenishment(&bad_price).unwrap_err(),
        PlanningError::Input(InputError::InvalidSellingPrice(_))
    ));
}
