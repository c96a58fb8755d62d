//! Color model.
//!
//! Pixels are plain RGB triples. Packed `0xAARRGGBB` words from an image
//! decoder are split with [`decompose`] and rebuilt with [`recompose`];
//! [`pair_energy`] measures how far one color is from another.

mod energy;
mod pixel;

pub use energy::{pair_energy, total_energy};
pub use pixel::{decompose, decompose_all, recompose, recompose_all, Pixel, PixelBuffer};
