/// Core data structures for the monthly inventory simulation

/// Simulation parameters for configuring the replenishment policy and pricing
#[derive(Clone, Debug)]
pub struct SimulationParams {
    /// Number of months to simulate
    pub horizon_months: u32,
    /// Price received per unit sold
    pub unit_price: f64,
    /// Cost per dozen ordered
    pub cost_per_dozen: f64,
    /// Fixed cost charged every month regardless of activity
    pub fixed_monthly_cost: f64,
    /// Smallest allowed order quantity, in dozens
    pub min_order_dozens: u32,
    /// Largest allowed order quantity, in dozens
    pub max_order_dozens: u32,
}

/// Result of a single month's simulation, one table row per month
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodRecord {
    /// Month index, 1-based
    pub month: u32,
    /// Order quantity Q active this month, in dozens
    pub order_quantity: u32,
    /// Units received this month (Q * 12)
    pub units_ordered: u32,
    /// Raw uniform draw that produced this month's demand
    pub draw: f64,
    /// Sampled unit demand
    pub demand: u32,
    /// Demand expressed in dozens
    pub demand_dozens: f64,
    /// Unsold units carried into the next month
    pub stock: u32,
    pub order_cost: f64,
    pub fixed_cost: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Complete simulation result for one run
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    pub total_profit: f64,
    pub average_monthly_profit: f64,
    /// One record per month, in strictly increasing month order
    pub periods: Vec<PeriodRecord>,
}
