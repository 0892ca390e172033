/// Reporting and output formatting module
/// Handles all console output and result presentation

use crate::demand::DemandDistribution;
use crate::models::{PeriodRecord, RunResult, SimulationParams};
use crate::paging::{page, page_count, slice_range};

/// Display the scenario banner and the parameters driving the run
pub fn display_scenario_header(params: &SimulationParams, distribution: &DemandDistribution) {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                  MONTHLY INVENTORY SIMULATION                    ║");
    println!("╚══════════════════════════════════════════════════════════════════╝\n");

    println!(
        "Horizon: {} months | Unit Price: ${:.2} | Cost per Dozen: ${:.2}",
        params.horizon_months, params.unit_price, params.cost_per_dozen
    );
    println!(
        "Fixed Monthly Cost: ${:.2} | Order Band: [{}, {}] dozens",
        params.fixed_monthly_cost, params.min_order_dozens, params.max_order_dozens
    );
    println!(
        "Demand Levels: {:?} | Expected Demand: {:.1} units/month\n",
        distribution.levels(),
        distribution.mean()
    );
}

/// Display total and average monthly profit for a completed run
pub fn display_run_summary(result: &RunResult) {
    println!("Total Profit: ${:.2}", result.total_profit);
    println!(
        "Average Monthly Profit: ${:.2}\n",
        result.average_monthly_profit
    );
}

/// Display the month window [start, end] of a run, paginated
pub fn display_paged_records(
    periods: &[PeriodRecord],
    start: u32,
    end: u32,
    rows_per_page: usize,
) {
    let window = slice_range(periods, start, end);
    let pages = page_count(window.len(), rows_per_page);

    for page_number in 1..=pages {
        println!("--- Page {} of {} ---", page_number, pages);
        display_period_table(page(window, page_number, rows_per_page));
    }
}

/// Display one table of period records
pub fn display_period_table(rows: &[PeriodRecord]) {
    println!(
        "{:>5} {:>8} {:>9} {:>8} {:>7} {:>9} {:>7} {:>11} {:>11} {:>11} {:>11} {:>11}",
        "Month",
        "Q (doz)",
        "Ordered",
        "Draw",
        "Demand",
        "Dem (doz)",
        "Stock",
        "Order Cost",
        "Fixed Cost",
        "Total Cost",
        "Revenue",
        "Profit"
    );

    for record in rows {
        println!(
            "{:>5} {:>8} {:>9} {:>8.4} {:>7} {:>9.2} {:>7} {:>11.2} {:>11.2} {:>11.2} {:>11.2} {:>11.2}",
            record.month,
            record.order_quantity,
            record.units_ordered,
            record.draw,
            record.demand,
            record.demand_dozens,
            record.stock,
            record.order_cost,
            record.fixed_cost,
            record.total_cost,
            record.revenue,
            record.profit
        );
    }
    println!();
}
