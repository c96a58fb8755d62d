//! Random move proposals.

use super::types::Move;
use rand::Rng;

/// Probability that a proposal is a global swap rather than a local reversal.
pub const GLOBAL_SWAP_PROBABILITY: f64 = 0.5;

/// Maximum reversal span for positions far from the end of the buffer.
pub const WIDE_WINDOW: usize = 200;

/// Positions at least this far from the end use [`WIDE_WINDOW`].
pub const WIDE_MARGIN: usize = 300;

/// Maximum reversal span for positions approaching the end.
pub const NARROW_WINDOW: usize = 40;

/// Positions at least this far from the end use [`NARROW_WINDOW`].
pub const NARROW_MARGIN: usize = 50;

/// Maximum reversal span, and backward step, at the very end.
pub const TAIL_WINDOW: usize = 20;

/// Proposes moves over a buffer of fixed length.
///
/// Each call picks, with equal odds, either a global swap of two distinct
/// positions anywhere in the buffer, or a local reversal of a short run
/// starting at a random position. Local reversals reach up to
/// [`WIDE_WINDOW`] positions ahead, shrinking to [`NARROW_WINDOW`] and then
/// [`TAIL_WINDOW`] near the end so that no index ever leaves the buffer.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator {
    len: usize,
}

impl MoveGenerator {
    /// Creates a generator for a buffer of `len` positions.
    ///
    /// Returns `None` when `len < 2`, since no move exists.
    pub fn new(len: usize) -> Option<Self> {
        (len >= 2).then_some(Self { len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Draws one move.
    pub fn propose<R: Rng>(&self, rng: &mut R) -> Move {
        if rng.random_bool(GLOBAL_SWAP_PROBABILITY) {
            self.global_swap(rng)
        } else {
            self.local_reversal(rng)
        }
    }

    /// Two distinct positions, uniform over the buffer.
    pub fn global_swap<R: Rng>(&self, rng: &mut R) -> Move {
        let a = rng.random_range(0..self.len);
        let mut b = rng.random_range(0..self.len);
        while b == a {
            b = rng.random_range(0..self.len);
        }
        Move::Swap { a, b }
    }

    /// A run starting at a uniform position, with a span limited by how close
    /// that position is to the end.
    pub fn local_reversal<R: Rng>(&self, rng: &mut R) -> Move {
        let n = self.len;
        let mut start = rng.random_range(0..n);

        let window = if start + WIDE_MARGIN < n {
            WIDE_WINDOW
        } else if start + NARROW_MARGIN < n {
            NARROW_WINDOW
        } else {
            // Walk back until a full tail window fits (or the front is hit).
            while start + TAIL_WINDOW > n && start > 0 {
                start = start.saturating_sub(rng.random_range(1..=TAIL_WINDOW));
            }
            TAIL_WINDOW
        };

        // Only buffers shorter than the tail window need the clamp; n - start >= 2 here.
        let window = window.min(n - start);
        let end = start + rng.random_range(1..window);
        debug_assert!(end < n);

        Move::Reverse { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn check_bounds(mv: Move, len: usize) {
        let (a, b) = mv.endpoints();
        assert_ne!(a, b, "degenerate move {mv:?}");
        assert!(a < len && b < len, "{mv:?} out of bounds for {len}");
        if let Move::Reverse { start, end } = mv {
            assert!(start < end);
        }
    }

    #[test]
    fn test_rejects_tiny_buffers() {
        assert!(MoveGenerator::new(0).is_none());
        assert!(MoveGenerator::new(1).is_none());
        assert!(MoveGenerator::new(2).is_some());
    }

    #[test]
    fn test_two_pixel_buffer() {
        let gen = MoveGenerator::new(2).unwrap();
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            let mv = gen.propose(&mut rng);
            check_bounds(mv, 2);
            let (a, b) = mv.endpoints();
            assert_eq!(a.min(b), 0);
            assert_eq!(a.max(b), 1);
        }
    }

    #[test]
    fn test_local_span_limits() {
        let n = 1000;
        let gen = MoveGenerator::new(n).unwrap();
        let mut rng = create_rng(11);
        for _ in 0..20_000 {
            let Move::Reverse { start, end } = gen.local_reversal(&mut rng) else {
                panic!("local move must be a reversal");
            };
            let span = end - start;
            if start + WIDE_MARGIN < n {
                assert!(span < WIDE_WINDOW);
            } else if start + NARROW_MARGIN < n {
                assert!(span < NARROW_WINDOW);
            } else {
                assert!(start + TAIL_WINDOW <= n);
                assert!(span < TAIL_WINDOW);
            }
            assert!(end < n);
        }
    }

    #[test]
    fn test_tail_positions_reachable() {
        let n = 500;
        let gen = MoveGenerator::new(n).unwrap();
        let mut rng = create_rng(5);
        let touched_last = (0..50_000)
            .map(|_| gen.local_reversal(&mut rng))
            .any(|mv| mv.endpoints().1 == n - 1);
        assert!(touched_last);
    }

    #[test]
    fn test_mix_of_kinds() {
        let gen = MoveGenerator::new(100).unwrap();
        let mut rng = create_rng(42);
        let swaps = (0..10_000)
            .filter(|_| matches!(gen.propose(&mut rng), Move::Swap { .. }))
            .count();
        assert!((4_000..6_000).contains(&swaps), "swaps = {swaps}");
    }

    proptest! {
        #[test]
        fn prop_moves_in_bounds(len in 2usize..2_000, seed in any::<u64>()) {
            let gen = MoveGenerator::new(len).unwrap();
            let mut rng = create_rng(seed);
            for _ in 0..200 {
                check_bounds(gen.propose(&mut rng), len);
            }
        }

        #[test]
        fn prop_small_buffers_in_bounds(len in 2usize..=TAIL_WINDOW + 1, seed in any::<u64>()) {
            let gen = MoveGenerator::new(len).unwrap();
            let mut rng = create_rng(seed);
            for _ in 0..200 {
                check_bounds(gen.local_reversal(&mut rng), len);
            }
        }
    }
}
