/// Demand distribution module
/// Owns the discrete demand distribution, its validation, and the uniform-draw sampling

use rand::Rng;
use thiserror::Error;

/// How far the probability sum may stray from 1.0 before construction is rejected
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Validation failures raised when building a demand distribution
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("demand levels and probabilities differ in length ({levels} vs {probabilities})")]
    LengthMismatch { levels: usize, probabilities: usize },
    #[error("demand distribution must have at least one level")]
    Empty,
    #[error("probability {probability} at index {index} is negative")]
    NegativeProbability { index: usize, probability: f64 },
    #[error("probabilities sum to {sum}, expected 1.0")]
    BadProbabilitySum { sum: f64 },
}

/// Source of uniform draws in [0, 1), one per simulated month
///
/// Production runs hand the engine a `rand` RNG through `RngSource`; tests
/// inject a fixed draw sequence to pin down every sampled demand.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// Adapter serving draws from any `rand` RNG
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Discrete demand distribution over a fixed set of unit-demand levels
#[derive(Clone, Debug)]
pub struct DemandDistribution {
    levels: Vec<u32>,
    probabilities: Vec<f64>,
    /// Running sums of `probabilities`, non-decreasing; the final value is
    /// the sampling upper bound
    cumulative: Vec<f64>,
}

impl DemandDistribution {
    /// Build a distribution from parallel level/probability lists
    /// Malformed input is rejected here so it can never surface mid-run
    pub fn new(levels: Vec<u32>, probabilities: Vec<f64>) -> Result<Self, DistributionError> {
        if levels.len() != probabilities.len() {
            return Err(DistributionError::LengthMismatch {
                levels: levels.len(),
                probabilities: probabilities.len(),
            });
        }
        if levels.is_empty() {
            return Err(DistributionError::Empty);
        }
        if let Some((index, &probability)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, &p)| p < 0.0)
        {
            return Err(DistributionError::NegativeProbability { index, probability });
        }

        let mut cumulative = Vec::with_capacity(probabilities.len());
        let mut running = 0.0;
        for p in &probabilities {
            running += p;
            cumulative.push(running);
        }

        if (running - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(DistributionError::BadProbabilitySum { sum: running });
        }

        Ok(DemandDistribution {
            levels,
            probabilities,
            cumulative,
        })
    }

    /// Map a uniform draw to a demand level: first index whose cumulative
    /// probability reaches the draw
    ///
    /// A draw past the final cumulative value (floating-point drift when the
    /// probabilities sum just short of 1.0) selects the last level, keeping
    /// total probability covered.
    pub fn sample(&self, u: f64) -> u32 {
        match self.cumulative.iter().position(|&c| u <= c) {
            Some(index) => self.levels[index],
            None => self.levels[self.levels.len() - 1],
        }
    }

    /// Expected demand per month - used for planning display, not by the run loop
    pub fn mean(&self) -> f64 {
        self.levels
            .iter()
            .zip(&self.probabilities)
            .map(|(&level, &p)| level as f64 * p)
            .sum()
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    #[allow(dead_code)]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    #[allow(dead_code)]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }
}
