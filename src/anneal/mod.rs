//! Simulated annealing over pixel permutations.
//!
//! The working buffer starts as a uniform shuffle of the source pixels and
//! is only ever rearranged, never recolored. A linear cooling schedule
//! drives Metropolis sweeps of swap and reversal moves; the running energy
//! is updated from per-move deltas.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod trace;
mod tracker;

pub use config::AnnealConfig;
pub use runner::{move_delta, AnnealEngine, AnnealResult, AnnealStats, Phase};
pub use trace::{Trace, TracePoint};
pub use tracker::EnergyTracker;
