//! Annealing engine.
//!
//! # Algorithm
//!
//! 1. Shuffle the source pixels uniformly and compute the starting energy
//! 2. For each temperature step `it = nt..=1`, at `T = Tmax * it / nt`:
//!    a. Run `ntherm` sweeps of one proposal per pixel
//!    b. Accept each proposal if `dE < 0`, else with probability `exp(-dE / T)`
//!    c. Record `(T, E)`
//! 3. Hand back the permuted buffer and the trace
//!
//! Energy deltas are computed from the positions a move touches only, so a
//! swap costs four color distances and a reversal four per exchanged pair.

use super::config::AnnealConfig;
use super::trace::{Trace, TracePoint};
use super::tracker::EnergyTracker;
use crate::color::{pair_energy, total_energy, Pixel, PixelBuffer};
use crate::error::{Result, SimpixError};
use crate::moves::{Move, MoveGenerator};
use crate::random::{rng_from_seed, SimpixRng};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// Lifecycle of an [`AnnealEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Buffer shuffled and energy computed; no step has run yet.
    Initialized,
    /// At least one temperature step has run, and more remain.
    Annealing,
    /// The schedule is exhausted.
    Done,
}

/// Move counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnealStats {
    /// Moves evaluated.
    pub proposals: usize,
    /// Proposals that were global swaps.
    pub swaps_proposed: usize,
    /// Proposals that were segment reversals.
    pub reversals_proposed: usize,
    /// Moves applied (including improvements).
    pub accepted_moves: usize,
    /// Applied moves with `dE < 0`.
    pub improving_moves: usize,
}

/// Final artifacts of a completed run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The rearranged source pixels, with the source geometry.
    pub output: PixelBuffer,
    /// Running energy at the end of the schedule.
    pub energy: f64,
    /// One `(T, E)` record per temperature step, hottest first.
    pub trace: Trace,
    pub stats: AnnealStats,
}

/// Rearranges source pixels to approximate a target image.
///
/// Owns the working buffer and the running energy for the whole run.
///
/// # Examples
///
/// ```
/// use u_simpix::anneal::{AnnealConfig, AnnealEngine};
/// use u_simpix::color::{Pixel, PixelBuffer};
///
/// let source = PixelBuffer::new(2, 1, vec![Pixel::BLACK, Pixel::WHITE]).unwrap();
/// let target = PixelBuffer::new(2, 1, vec![Pixel::WHITE, Pixel::BLACK]).unwrap();
/// let config = AnnealConfig::default()
///     .with_temperature_steps(10)
///     .with_sweeps_per_step(5)
///     .with_max_temperature(10.0)
///     .with_seed(42);
///
/// let result = AnnealEngine::new(source, target, config).unwrap().run();
/// assert_eq!(result.output.as_slice(), &[Pixel::WHITE, Pixel::BLACK]);
/// assert_eq!(result.trace.len(), 10);
/// ```
pub struct AnnealEngine<R = SimpixRng> {
    config: AnnealConfig,
    out: PixelBuffer,
    target: PixelBuffer,
    moves: Option<MoveGenerator>,
    tracker: EnergyTracker,
    rng: R,
    /// Temperature step index still to run, counting down to 0.
    remaining_steps: usize,
    phase: Phase,
    trace: Trace,
    stats: AnnealStats,
}

impl AnnealEngine<SimpixRng> {
    /// Creates an engine seeded from `config.seed`.
    pub fn new(source: PixelBuffer, target: PixelBuffer, config: AnnealConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(source, target, config, rng)
    }
}

impl<R: Rng> AnnealEngine<R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// Configuration and geometry are checked before `rng` is touched;
    /// on error no shuffle has happened.
    pub fn with_rng(
        source: PixelBuffer,
        target: PixelBuffer,
        config: AnnealConfig,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;
        check_geometry(&source, &target)?;

        let mut out = source;
        out.as_mut_slice().shuffle(&mut rng);
        let energy = total_energy(out.as_slice(), target.as_slice());

        info!(
            width = out.width(),
            height = out.height(),
            temperature_steps = config.temperature_steps,
            sweeps_per_step = config.sweeps_per_step,
            max_temperature = config.max_temperature,
            energy,
            "annealing initialized"
        );

        Ok(Self {
            moves: MoveGenerator::new(out.len()),
            tracker: EnergyTracker::new(energy),
            remaining_steps: config.temperature_steps,
            phase: Phase::Initialized,
            trace: Trace::with_capacity(config.temperature_steps),
            stats: AnnealStats::default(),
            config,
            out,
            target,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Running energy.
    pub fn energy(&self) -> f64 {
        self.tracker.current()
    }

    /// Full recomputation of the current energy.
    pub fn verify_energy(&self) -> f64 {
        total_energy(self.out.as_slice(), self.target.as_slice())
    }

    pub fn output(&self) -> &PixelBuffer {
        &self.out
    }

    pub fn target(&self) -> &PixelBuffer {
        &self.target
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn stats(&self) -> &AnnealStats {
        &self.stats
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs one temperature step and returns its trace record, or `None`
    /// once the schedule is exhausted.
    pub fn step(&mut self) -> Option<TracePoint> {
        if self.remaining_steps == 0 {
            self.phase = Phase::Done;
            return None;
        }
        self.phase = Phase::Annealing;

        let it = self.remaining_steps;
        let temperature = self.config.temperature_at(it);
        let beta = 1.0 / temperature;
        for _ in 0..self.config.sweeps_per_step {
            self.sweep(beta);
        }
        self.remaining_steps -= 1;

        let completed = self.config.temperature_steps - self.remaining_steps;
        if self.config.resync_interval > 0 && completed.is_multiple_of(self.config.resync_interval)
        {
            let exact = self.verify_energy();
            let drift = self.tracker.resync(exact);
            debug!(step = completed, drift, "energy resynchronized");
        }

        let point = TracePoint {
            temperature,
            energy: self.tracker.current(),
        };
        self.trace.push(point);

        let progress = completed as f64 / self.config.temperature_steps as f64 * 100.0;
        debug!(
            step = completed,
            temperature,
            energy = point.energy,
            progress,
            "temperature step finished"
        );

        if self.remaining_steps == 0 {
            self.phase = Phase::Done;
        }
        Some(point)
    }

    /// Runs the remaining schedule and returns the final artifacts.
    pub fn run(mut self) -> AnnealResult {
        while self.step().is_some() {}

        info!(
            energy = self.tracker.current(),
            proposals = self.stats.proposals,
            accepted = self.stats.accepted_moves,
            improving = self.stats.improving_moves,
            "annealing finished"
        );

        AnnealResult {
            output: self.out,
            energy: self.tracker.current(),
            trace: self.trace,
            stats: self.stats,
        }
    }

    /// One proposal per pixel at inverse temperature `beta`.
    fn sweep(&mut self, beta: f64) {
        let Some(moves) = self.moves else {
            return;
        };
        for _ in 0..moves.len() {
            let mv = moves.propose(&mut self.rng);
            self.try_move(mv, beta);
        }
    }

    /// Evaluates `mv` and applies it under the Metropolis rule.
    ///
    /// Returns whether the move was accepted.
    fn try_move(&mut self, mv: Move, beta: f64) -> bool {
        self.stats.proposals += 1;
        match mv {
            Move::Swap { .. } => self.stats.swaps_proposed += 1,
            Move::Reverse { .. } => self.stats.reversals_proposed += 1,
        }

        let delta = move_delta(self.out.as_slice(), self.target.as_slice(), mv);

        // dE == 0 always passes: exp(0) = 1 exceeds every draw in [0, 1).
        let accept = delta < 0.0 || self.rng.random::<f64>() < (-delta * beta).exp();
        if accept {
            mv.apply(self.out.as_mut_slice());
            self.tracker.apply_delta(delta);
            self.stats.accepted_moves += 1;
            if delta < 0.0 {
                self.stats.improving_moves += 1;
            }
        }
        accept
    }
}

/// Energy change from applying `mv` to `out`, measured against `target`.
pub fn move_delta(out: &[Pixel], target: &[Pixel], mv: Move) -> f64 {
    mv.pairs()
        .map(|(i, j)| {
            pair_energy(out[j], target[i]) + pair_energy(out[i], target[j])
                - pair_energy(out[i], target[i])
                - pair_energy(out[j], target[j])
        })
        .sum()
}

fn check_geometry(source: &PixelBuffer, target: &PixelBuffer) -> Result<()> {
    if source.dimensions() != target.dimensions() {
        return Err(SimpixError::DimensionMismatch {
            source_dims: source.dimensions(),
            target_dims: target.dimensions(),
        });
    }
    if source.is_empty() {
        return Err(SimpixError::InvalidInput("images have no pixels".into()));
    }
    Ok(())
}
