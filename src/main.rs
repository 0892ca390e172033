mod demand;
mod models;
mod paging;
mod reporting;
mod simulation;

use std::env;
use std::error::Error;
use std::process;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use demand::{DemandDistribution, RngSource};
use models::SimulationParams;
use reporting::{display_paged_records, display_run_summary, display_scenario_header};
use simulation::run_simulation;

// Classic kiosk scenario: dozen-based replenishment of a single product
const COST_PER_DOZEN: f64 = 45.0;
const FIXED_MONTHLY_COST: f64 = 683.34;
const MIN_ORDER_DOZENS: u32 = 30;
const MAX_ORDER_DOZENS: u32 = 50;
const DEMAND_LEVELS: [u32; 7] = [250, 300, 350, 400, 450, 500, 600];
const DEMAND_PROBABILITIES: [f64; 7] = [0.30, 0.05, 0.20, 0.15, 0.10, 0.10, 0.10];

const DEFAULT_HORIZON_MONTHS: u32 = 12;
const DEFAULT_UNIT_PRICE: f64 = 8.0;
const ROWS_PER_PAGE: usize = 12;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

/// Usage: inventory-sim [months] [unit_price] [seed]
/// Without a seed the run draws from the thread RNG and is not reproducible
fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let horizon_months = parse_arg(&args, 0, DEFAULT_HORIZON_MONTHS)?;
    let unit_price = parse_arg(&args, 1, DEFAULT_UNIT_PRICE)?;
    let seed: Option<u64> = match args.get(2) {
        Some(raw) => Some(raw.parse().map_err(|_| format!("invalid seed '{raw}'"))?),
        None => None,
    };

    let distribution =
        DemandDistribution::new(DEMAND_LEVELS.to_vec(), DEMAND_PROBABILITIES.to_vec())?;
    let params = SimulationParams {
        horizon_months,
        unit_price,
        cost_per_dozen: COST_PER_DOZEN,
        fixed_monthly_cost: FIXED_MONTHLY_COST,
        min_order_dozens: MIN_ORDER_DOZENS,
        max_order_dozens: MAX_ORDER_DOZENS,
    };

    let result = match seed {
        Some(seed) => {
            let mut draws = RngSource(StdRng::seed_from_u64(seed));
            run_simulation(&params, &distribution, &mut draws)?
        }
        None => {
            let mut draws = RngSource(thread_rng());
            run_simulation(&params, &distribution, &mut draws)?
        }
    };

    display_scenario_header(&params, &distribution);
    display_run_summary(&result);
    display_paged_records(&result.periods, 1, params.horizon_months, ROWS_PER_PAGE);

    Ok(())
}

fn parse_arg<T: FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid argument '{raw}'")),
        None => Ok(default),
    }
}
