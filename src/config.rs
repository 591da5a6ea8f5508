use crate::error::{check_probability, check_size, PercolationError, Result};

/// Pass bound used when the caller does not pick one.
pub const DEFAULT_MAX_PASSES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthConfig {
    pub max_passes: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl GrowthConfig {
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// Parameters of a probability sweep over static lattices.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub size: usize,
    pub p_min: f64,
    pub p_max: f64,
    pub steps: usize,
    pub trials: usize,
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            size: 64,
            p_min: 0.0,
            p_max: 1.0,
            steps: 101,
            trials: 20,
            seed: 0,
        }
    }
}

impl SweepConfig {
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn range(mut self, p_min: f64, p_max: f64) -> Self {
        self.p_min = p_min;
        self.p_max = p_max;
        self
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        check_probability(self.p_min)?;
        check_probability(self.p_max)?;
        if self.p_min > self.p_max {
            return Err(PercolationError::InvalidSweep("p_min is greater than p_max"));
        }
        if self.steps == 0 {
            return Err(PercolationError::InvalidSweep("steps must be non-zero"));
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidSweep("trials must be non-zero"));
        }
        Ok(())
    }

    /// Evenly spaced probabilities from `p_min` to `p_max` inclusive.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.p_min];
        }
        let step = (self.p_max - self.p_min) / (self.steps - 1) as f64;
        (0..self.steps)
            .map(|k| (self.p_min + step * k as f64).min(self.p_max))
            .collect()
    }
}
