//! Pixel-rearrangement image reconstruction by simulated annealing.
//!
//! Given a source and a target image of equal size, searches for the
//! permutation of the source's pixels that best reproduces the target's
//! spatial color layout. Pixel values are never changed, only moved.
//!
//! - **Color model** ([`color`]): packed ARGB conversion and the perceptual
//!   "redmean" color distance used as energy.
//! - **Moves** ([`moves`]): a 50/50 mix of global pixel swaps and local
//!   segment reversals, always within bounds.
//! - **Annealing** ([`anneal`]): linear cooling schedule, Metropolis
//!   acceptance with incremental energy tracking, and a `(T, E)` trace.
//!
//! # Architecture
//!
//! The crate is a pure computational core. Image decoding/encoding,
//! visualization and command-line handling belong to the caller, which
//! passes in [`color::PixelBuffer`]s and receives one back. All randomness
//! comes from an explicit generator, so a seed reproduces a run exactly.
//!
//! ```
//! use u_simpix::anneal::{AnnealConfig, AnnealEngine};
//! use u_simpix::color::PixelBuffer;
//!
//! let source = PixelBuffer::from_argb(2, 2, &[0xFF000000, 0xFF808080, 0xFFFFFFFF, 0xFF404040]).unwrap();
//! let target = PixelBuffer::from_argb(2, 2, &[0xFFFFFFFF, 0xFF404040, 0xFF000000, 0xFF808080]).unwrap();
//!
//! let config = AnnealConfig::default().with_temperature_steps(20).with_seed(1);
//! let result = AnnealEngine::new(source, target, config).unwrap().run();
//! let packed = result.output.to_argb();
//! assert_eq!(packed.len(), 4);
//! ```

pub mod anneal;
pub mod color;
pub mod error;
pub mod moves;
pub mod random;

pub use error::{Result, SimpixError};
