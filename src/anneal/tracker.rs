//! Running energy bookkeeping.

/// Running total energy of the working buffer.
///
/// Changed only by the deltas of accepted moves, plus an occasional
/// [`resync`](Self::resync) against a full recomputation to shed
/// accumulated rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyTracker {
    current: f64,
}

impl EnergyTracker {
    pub fn new(initial: f64) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Adds the energy change of an accepted move.
    pub fn apply_delta(&mut self, delta: f64) {
        self.current += delta;
    }

    /// Replaces the running value with `exact` and returns the drift
    /// (`running - exact`) that was discarded.
    pub fn resync(&mut self, exact: f64) -> f64 {
        let drift = self.current - exact;
        self.current = exact;
        drift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta_accumulates() {
        let mut tracker = EnergyTracker::new(10.0);
        tracker.apply_delta(-3.5);
        tracker.apply_delta(1.25);
        assert!((tracker.current() - 7.75).abs() < 1e-12);
    }

    #[test]
    fn test_resync_reports_drift() {
        let mut tracker = EnergyTracker::new(5.0);
        tracker.apply_delta(0.5);
        let drift = tracker.resync(5.25);
        assert!((drift - 0.25).abs() < 1e-12);
        assert_eq!(tracker.current(), 5.25);
    }
}
