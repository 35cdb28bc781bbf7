use std::path::PathBuf;

use thiserror::Error;

/// One current reading: time in seconds, current in milliamps.
///
/// Current is stored in milliamps after the A -> mA conversion applied
/// at load time; the chart Y axis and all intermediate storage use mA,
/// and the analyzer converts back to amps when integrating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    /// Timestamp in seconds (assumed monotonically non-decreasing)
    pub time: f64,
    /// Current in milliamps
    pub current: f64,
}

/// Errors produced while loading a trace file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected at least 2 comma-separated columns, found {found}")]
    TooFewColumns { line: usize, found: usize },
    #[error("line {line}: {column} value {value:?} is not a number")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("no data rows found after the header")]
    NoData,
}

/// Parsed current trace.
///
/// Times and currents are stored as parallel vectors in row order. The
/// time column is assumed to be sorted ascending (the parser warns when
/// it is not, but never re-sorts); range lookups rely on that ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    /// Time values in seconds, ascending
    pub times: Vec<f64>,
    /// Current values in milliamps, one per timestamp
    pub currents: Vec<f64>,
}

impl Trace {
    /// The degenerate two-point trace {(0 s, 0 mA), (5 s, 0 mA)}.
    ///
    /// Used at startup and after a cancelled file dialog so the chart and
    /// the analyzer always have a valid, if trivial, series to work with.
    pub fn placeholder() -> Self {
        Self {
            times: vec![0.0, 5.0],
            currents: vec![0.0, 0.0],
        }
    }

    /// Number of samples in the trace
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check whether the trace has no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Get a single sample by index
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.times.get(index)?,
            current: *self.currents.get(index)?,
        })
    }

    /// Iterate over all samples in time order
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(self.currents.iter())
            .map(|(&time, &current)| Sample { time, current })
    }

    /// First and last timestamp, or `None` for an empty trace
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }

    /// Slice the trace to the samples whose time falls in the closed
    /// interval `[lo, hi]`.
    ///
    /// Both bounds are inclusive. The lookup is a binary search over the
    /// sorted time column, so a range disjoint from the data yields empty
    /// slices rather than an error. An inverted range (`lo > hi`) is
    /// treated as empty.
    pub fn slice_range(&self, lo: f64, hi: f64) -> (&[f64], &[f64]) {
        if lo > hi {
            return (&[], &[]);
        }
        let start = self.times.partition_point(|&t| t < lo);
        let end = self.times.partition_point(|&t| t <= hi);
        (&self.times[start..end], &self.currents[start..end])
    }
}

/// Trait for trace file parsers
pub trait Parseable {
    fn parse(&self, data: &str) -> Result<Trace, ParseError>;
}
