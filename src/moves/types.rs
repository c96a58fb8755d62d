//! Move representation.

/// A rearrangement of positions in the working buffer.
///
/// Both kinds only exchange positions, so applying any sequence of moves
/// keeps the buffer a permutation of its starting contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange the pixels at `a` and `b`.
    Swap { a: usize, b: usize },

    /// Reverse the run `start..=end` by swapping pairs from the outside in.
    /// Always `start < end`.
    Reverse { start: usize, end: usize },
}

impl Move {
    /// The two endpoint positions of the move.
    pub fn endpoints(&self) -> (usize, usize) {
        match *self {
            Move::Swap { a, b } => (a, b),
            Move::Reverse { start, end } => (start, end),
        }
    }

    /// Position pairs exchanged by this move.
    ///
    /// A swap yields its single pair. A reversal yields
    /// `(start + k, end - k)` for each `k` below half the run length, so an
    /// odd-length run leaves its middle element in place.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let (lo, hi, count) = match *self {
            Move::Swap { a, b } => (a, b, 1),
            Move::Reverse { start, end } => (start, end, (end - start + 1) / 2),
        };
        (0..count).map(move |k| (lo + k, hi - k))
    }

    /// Applies the move to `items` in place.
    pub fn apply<T>(&self, items: &mut [T]) {
        match *self {
            Move::Swap { a, b } => items.swap(a, b),
            Move::Reverse { start, end } => items[start..=end].reverse(),
        }
    }
}
