/// Monthly simulation logic for the single-product replenishment policy
/// Runs the period loop: sample demand, receive the order, sell, carry stock,
/// and account for the month

use std::cmp;
use thiserror::Error;

use crate::demand::{DemandDistribution, UniformSource};
use crate::models::{PeriodRecord, RunResult, SimulationParams};

/// Orders are placed in whole dozens
pub const UNITS_PER_DOZEN: u32 = 12;

/// Caller-input failures rejected before the period loop starts
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("simulation horizon must cover at least one month")]
    EmptyHorizon,
}

/// Run the monthly simulation over the full horizon
///
/// The order quantity Q starts at the policy minimum and is recomputed every
/// month from that month's realized demand, so the quantity ordered in month
/// t always reflects month t-1's demand. The run owns its inventory state
/// exclusively; nothing survives across calls.
pub fn run_simulation(
    params: &SimulationParams,
    demand: &DemandDistribution,
    draws: &mut impl UniformSource,
) -> Result<RunResult, SimulationError> {
    if params.horizon_months == 0 {
        return Err(SimulationError::EmptyHorizon);
    }

    let mut stock: u32 = 0;
    let mut order_quantity = params.min_order_dozens;
    // Accumulated unrounded; rounding per month and then summing would drift
    // over long horizons
    let mut total_profit: f64 = 0.0;
    let mut periods = Vec::with_capacity(params.horizon_months as usize);

    for month in 1..=params.horizon_months {
        let draw = draws.next_uniform();
        let monthly_demand = demand.sample(draw);

        let units_ordered = order_quantity * UNITS_PER_DOZEN;
        let units_available = stock + units_ordered;
        let units_sold = cmp::min(monthly_demand, units_available);
        stock = units_available - units_sold;

        let order_cost = order_quantity as f64 * params.cost_per_dozen;
        let revenue = units_sold as f64 * params.unit_price;
        let total_cost = order_cost + params.fixed_monthly_cost;
        let profit = revenue - total_cost;
        total_profit += profit;

        periods.push(PeriodRecord {
            month,
            order_quantity,
            units_ordered,
            draw,
            demand: monthly_demand,
            demand_dozens: round_to_cents(monthly_demand as f64 / UNITS_PER_DOZEN as f64),
            stock,
            order_cost: round_to_cents(order_cost),
            fixed_cost: round_to_cents(params.fixed_monthly_cost),
            total_cost: round_to_cents(total_cost),
            revenue: round_to_cents(revenue),
            profit: round_to_cents(profit),
        });

        // Next month's Q: realized demand rounded up to whole dozens, clamped
        // into the allowed band. The policy reacts one month late.
        let demand_in_dozens = (monthly_demand + UNITS_PER_DOZEN - 1) / UNITS_PER_DOZEN;
        order_quantity =
            demand_in_dozens.clamp(params.min_order_dozens, params.max_order_dozens);
    }

    Ok(RunResult {
        total_profit: round_to_cents(total_profit),
        average_monthly_profit: round_to_cents(total_profit / params.horizon_months as f64),
        periods,
    })
}

/// Round a monetary value to two decimal places for presentation
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::RngSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed draw sequence, cycling when exhausted
    struct FixedDraws {
        draws: Vec<f64>,
        next: usize,
    }

    impl FixedDraws {
        fn new(draws: &[f64]) -> Self {
            FixedDraws {
                draws: draws.to_vec(),
                next: 0,
            }
        }
    }

    impl UniformSource for FixedDraws {
        fn next_uniform(&mut self) -> f64 {
            let draw = self.draws[self.next % self.draws.len()];
            self.next += 1;
            draw
        }
    }

    fn kiosk_params(horizon_months: u32) -> SimulationParams {
        SimulationParams {
            horizon_months,
            unit_price: 8.0,
            cost_per_dozen: 45.0,
            fixed_monthly_cost: 683.34,
            min_order_dozens: 30,
            max_order_dozens: 50,
        }
    }

    fn classic_distribution() -> DemandDistribution {
        DemandDistribution::new(
            vec![250, 300, 350, 400, 450, 500, 600],
            vec![0.30, 0.05, 0.20, 0.15, 0.10, 0.10, 0.10],
        )
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_horizon_is_rejected() {
        let params = kiosk_params(0);
        let distribution = classic_distribution();
        let mut draws = FixedDraws::new(&[0.5]);

        let result = run_simulation(&params, &distribution, &mut draws);
        assert_eq!(result.unwrap_err(), SimulationError::EmptyHorizon);
    }

    #[test]
    fn test_three_month_fixed_draw_scenario() {
        let params = kiosk_params(3);
        let distribution = classic_distribution();
        let mut draws = FixedDraws::new(&[0.1, 0.5, 0.95]);

        let result = run_simulation(&params, &distribution, &mut draws).unwrap();
        assert_eq!(result.periods.len(), 3);

        // Month 1: draw 0.1 -> demand 250; initial Q is the policy minimum
        let first = &result.periods[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.order_quantity, 30);
        assert_eq!(first.units_ordered, 360);
        assert_close(first.draw, 0.1);
        assert_eq!(first.demand, 250);
        assert_eq!(first.stock, 110);
        assert_close(first.order_cost, 1350.0);
        assert_close(first.fixed_cost, 683.34);
        assert_close(first.total_cost, 2033.34);
        assert_close(first.revenue, 2000.0);
        assert_close(first.profit, -33.34);

        // Month 2: draw 0.5 -> demand 350 (first cumulative value reaching
        // 0.5 is 0.55); 470 units available, 350 sold
        let second = &result.periods[1];
        assert_eq!(second.order_quantity, 30);
        assert_eq!(second.demand, 350);
        assert_eq!(second.stock, 120);
        assert_close(second.revenue, 2800.0);

        // Month 3: draw 0.95 -> demand 600; only 480 units available, so the
        // month sells out
        let third = &result.periods[2];
        assert_eq!(third.order_quantity, 30);
        assert_eq!(third.demand, 600);
        assert_eq!(third.stock, 0);
        assert_close(third.revenue, 3840.0);

        assert_close(result.total_profit, 2539.98);
        assert_close(result.average_monthly_profit, 846.66);
    }

    #[test]
    fn test_order_quantity_stays_within_policy_band() {
        let params = kiosk_params(240);
        let distribution = classic_distribution();
        let mut rng = RngSource(StdRng::seed_from_u64(42));

        let result = run_simulation(&params, &distribution, &mut rng).unwrap();
        assert_eq!(result.periods[0].order_quantity, params.min_order_dozens);
        for record in &result.periods {
            assert!(record.order_quantity >= params.min_order_dozens);
            assert!(record.order_quantity <= params.max_order_dozens);
            assert_eq!(record.units_ordered, record.order_quantity * UNITS_PER_DOZEN);
        }
    }

    #[test]
    fn test_stock_conservation_every_month() {
        let params = kiosk_params(120);
        let distribution = classic_distribution();
        let mut rng = RngSource(StdRng::seed_from_u64(7));

        let result = run_simulation(&params, &distribution, &mut rng).unwrap();
        let mut carried_stock = 0;
        for (index, record) in result.periods.iter().enumerate() {
            assert_eq!(record.month, index as u32 + 1);

            let units_available = carried_stock + record.units_ordered;
            let units_sold = cmp::min(record.demand, units_available);
            assert!(units_sold <= units_available);
            assert_eq!(record.stock, units_available - units_sold);

            carried_stock = record.stock;
        }
    }

    #[test]
    fn test_aggregates_match_period_profits() {
        let params = kiosk_params(120);
        let distribution = classic_distribution();
        let mut rng = RngSource(StdRng::seed_from_u64(99));

        let result = run_simulation(&params, &distribution, &mut rng).unwrap();

        // Period profits are presentation-rounded, so the sum may differ from
        // the unrounded accumulation by up to half a cent per month
        let summed: f64 = result.periods.iter().map(|r| r.profit).sum();
        let tolerance = result.periods.len() as f64 * 0.005 + 1e-9;
        assert!((summed - result.total_profit).abs() <= tolerance);

        let average = result.total_profit / params.horizon_months as f64;
        assert!((result.average_monthly_profit - average).abs() <= 0.01);
    }

    #[test]
    fn test_identical_draw_sequences_produce_identical_runs() {
        let params = kiosk_params(36);
        let distribution = classic_distribution();
        let draws = [0.02, 0.33, 0.61, 0.88, 0.12, 0.47, 0.95];

        let first = run_simulation(&params, &distribution, &mut FixedDraws::new(&draws)).unwrap();
        let second = run_simulation(&params, &distribution, &mut FixedDraws::new(&draws)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_identical_seeds_produce_identical_runs() {
        let params = kiosk_params(60);
        let distribution = classic_distribution();

        let first =
            run_simulation(&params, &distribution, &mut RngSource(StdRng::seed_from_u64(1234))).unwrap();
        let second =
            run_simulation(&params, &distribution, &mut RngSource(StdRng::seed_from_u64(1234))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_demand_peak_drives_order_quantity_to_the_cap() {
        let params = kiosk_params(2);
        let distribution = classic_distribution();
        // Month 1 sees peak demand (600 units = 50 dozens), so month 2 must
        // order at the cap
        let mut draws = FixedDraws::new(&[0.95, 0.1]);

        let result = run_simulation(&params, &distribution, &mut draws).unwrap();
        assert_eq!(result.periods[0].order_quantity, 30);
        assert_eq!(result.periods[1].order_quantity, 50);
        assert_eq!(result.periods[1].units_ordered, 600);
    }
}
