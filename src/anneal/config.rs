//! Annealing schedule configuration.

use crate::error::{Result, SimpixError};

/// Configuration for an annealing run.
///
/// The schedule is linear: temperature step `it` runs at
/// `max_temperature * it / temperature_steps`, for `it` from
/// `temperature_steps` down to `1`. Each step runs `sweeps_per_step`
/// sweeps of one proposal per pixel.
///
/// # Examples
///
/// ```
/// use u_simpix::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_temperature_steps(150)
///     .with_sweeps_per_step(15)
///     .with_max_temperature(500.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of temperature steps (`nt`).
    pub temperature_steps: usize,

    /// Thermalization sweeps at each temperature (`ntherm`).
    pub sweeps_per_step: usize,

    /// Starting temperature (`Tmax`). The last step runs at
    /// `max_temperature / temperature_steps`.
    pub max_temperature: f64,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Temperature steps between resynchronizing the running energy with a
    /// full recomputation. 0 = never.
    pub resync_interval: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl AnnealConfig {
    /// 100 steps of 10 sweeps from `T = 1000`.
    pub fn standard() -> Self {
        Self {
            temperature_steps: 100,
            sweeps_per_step: 10,
            max_temperature: 1000.0,
            seed: None,
            resync_interval: 10,
        }
    }

    /// 150 steps of 15 sweeps from `T = 1000`. Slower, lower final energy.
    pub fn fine() -> Self {
        Self {
            temperature_steps: 150,
            sweeps_per_step: 15,
            ..Self::standard()
        }
    }

    pub fn with_temperature_steps(mut self, n: usize) -> Self {
        self.temperature_steps = n;
        self
    }

    pub fn with_sweeps_per_step(mut self, n: usize) -> Self {
        self.sweeps_per_step = n;
        self
    }

    pub fn with_max_temperature(mut self, t: f64) -> Self {
        self.max_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_resync_interval(mut self, steps: usize) -> Self {
        self.resync_interval = steps;
        self
    }

    /// Temperature at step `it` (counting down from `temperature_steps`).
    pub fn temperature_at(&self, it: usize) -> f64 {
        self.max_temperature * it as f64 / self.temperature_steps as f64
    }

    /// Temperatures of the whole schedule, hottest first.
    pub fn schedule(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.temperature_steps)
            .rev()
            .map(move |it| self.temperature_at(it))
    }

    /// Total move proposals a run over `num_pixels` pixels will make.
    pub fn total_proposals(&self, num_pixels: usize) -> usize {
        self.temperature_steps * self.sweeps_per_step * num_pixels
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.temperature_steps == 0 {
            return Err(SimpixError::InvalidConfig(
                "temperature_steps must be positive".into(),
            ));
        }
        if self.sweeps_per_step == 0 {
            return Err(SimpixError::InvalidConfig(
                "sweeps_per_step must be positive".into(),
            ));
        }
        if !self.max_temperature.is_finite() || self.max_temperature <= 0.0 {
            return Err(SimpixError::InvalidConfig(format!(
                "max_temperature must be positive and finite, got {}",
                self.max_temperature
            )));
        }
        Ok(())
    }
}
