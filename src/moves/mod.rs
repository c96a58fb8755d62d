//! Move proposals for the pixel permutation search.
//!
//! Two neighborhoods are mixed: global swaps let any pixel jump anywhere,
//! while local segment reversals rearrange short runs and let spatially
//! coherent patches settle into place.

mod generator;
mod types;

pub use generator::{
    MoveGenerator, GLOBAL_SWAP_PROBABILITY, NARROW_MARGIN, NARROW_WINDOW, TAIL_WINDOW,
    WIDE_MARGIN, WIDE_WINDOW,
};
pub use types::Move;
