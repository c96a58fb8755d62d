//! Temperature/energy trace.

use std::fmt;
use std::io;

/// Energy recorded at the end of one temperature step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracePoint {
    pub temperature: f64,
    pub energy: f64,
}

/// One [`TracePoint`] per temperature step, hottest first.
///
/// Renders as one `temperature  energy` line per point:
///
/// ```
/// use u_simpix::anneal::{Trace, TracePoint};
///
/// let mut trace = Trace::default();
/// trace.push(TracePoint { temperature: 1000.0, energy: 12.5 });
/// assert_eq!(trace.to_string(), "1000.000000  12.500000\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    points: Vec<TracePoint>,
}

impl Trace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: TracePoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The coldest (most recent) point.
    pub fn last(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    /// Writes the trace as whitespace-separated text, one point per line.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for point in &self.points {
            writeln!(writer, "{:.6}  {:.6}", point.temperature, point.energy)?;
        }
        writer.flush()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{:.6}  {:.6}", point.temperature, point.energy)?;
        }
        Ok(())
    }
}
