use stock_planner::demos::{budget, knapsack};
use stock_planner::io::{demand, reporting};
use stock_planner::{plan_replenishment, ReplenishmentProblem, SupplierTerms};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Inventory Planning MILP Demos ===\n");

    // 1. MULTI-PERIOD REPLENISHMENT
    // Ten days of alternating demand, tight starting stock, supplier with a
    // minimum order quantity. The solver decides when ordering in bulk beats
    // carrying inventory or losing sales.
    let problem = ReplenishmentProblem {
        starting_stock: 4,
        selling_price: 10.0,
        demand: demand::spike_forecast(10, 4, 6, 12),
        supplier: SupplierTerms {
            moq: 10,
            delivery_cost: 1.0,
        },
    };

    println!("--- Replenishment over {} periods ---", problem.horizon());
    println!("Demand forecast: {:?}", problem.demand);
    match plan_replenishment(&problem) {
        Ok(plan) => {
            reporting::print_plan(&plan);
            let output_file = "replenishment_plan.csv";
            match reporting::write_plan_csv(output_file, &plan) {
                Ok(_) => println!("Plan exported to ./{output_file}"),
                Err(e) => eprintln!("Error writing CSV: {e}"),
            }
        }
        Err(e) => eprintln!("Planning failed: {e}"),
    }

    // 2. KNAPSACK (single-period item selection)
    println!("\n--- Knapsack demo ---");
    let items = vec![
        knapsack::KnapsackItem {
            name: "camera".into(),
            value: 9.0,
            weight: 4.5,
        },
        knapsack::KnapsackItem {
            name: "laptop".into(),
            value: 12.0,
            weight: 6.0,
        },
        knapsack::KnapsackItem {
            name: "tripod".into(),
            value: 5.0,
            weight: 3.0,
        },
    ];
    match knapsack::select_items(&items, 9.0) {
        Ok(selection) => {
            for &i in &selection.chosen {
                println!("  take {} (value {}, weight {})", items[i].name, items[i].value, items[i].weight);
            }
            println!(
                "  total value {:.1}, total weight {:.1}",
                selection.total_value, selection.total_weight
            );
        }
        Err(e) => eprintln!("Knapsack failed: {e}"),
    }

    // 3. BUDGET ALLOCATION (single-period purchase split)
    println!("\n--- Budget allocation demo ---");
    let options = vec![
        budget::PurchaseOption {
            name: "espresso beans".into(),
            unit_cost: 14.0,
            utility: 9.0,
            max_units: 6,
        },
        budget::PurchaseOption {
            name: "filter beans".into(),
            unit_cost: 9.0,
            utility: 5.0,
            max_units: 10,
        },
    ];
    match budget::allocate_budget(&options, 100.0) {
        Ok(plan) => {
            for (opt, &qty) in options.iter().zip(&plan.quantities) {
                println!("  buy {} x {}", qty, opt.name);
            }
            println!(
                "  spend {:.2}, utility {:.1}",
                plan.total_cost, plan.total_utility
            );
        }
        Err(e) => eprintln!("Budget allocation failed: {e}"),
    }
}
