//! MCUXpresso power-measurement CSV parser.
//!
//! The power tool exports comma-separated text with a header row and three
//! positional columns: `time (s), voltage (V), current (A)`. The header
//! names are ignored; mapping is by position. The measured voltage column
//! is read and discarded - energy computation uses the user-supplied
//! supply voltage, not the measured one. Two-column `time, current`
//! exports are also accepted.

use rayon::prelude::*;

use super::types::{ParseError, Parseable, Trace};

/// MCUXpresso CSV trace parser
pub struct McuXpresso;

impl Parseable for McuXpresso {
    fn parse(&self, file_contents: &str) -> Result<Trace, ParseError> {
        // Phase 1: collect data rows. The first line is always the header
        // row, whatever it says. Blank lines are skipped. Line numbers are
        // 1-based for error reporting.
        let rows: Vec<(usize, &str)> = file_contents
            .lines()
            .enumerate()
            .skip(1)
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        // Phase 2: parse rows in parallel, preserving row order
        let samples: Vec<(f64, f64)> = rows
            .par_iter()
            .map(|&(line, row)| Self::parse_row(line, row))
            .collect::<Result<_, _>>()?;

        if samples.is_empty() {
            return Err(ParseError::NoData);
        }

        let mut times = Vec::with_capacity(samples.len());
        let mut currents = Vec::with_capacity(samples.len());
        for (time, current_amps) in samples {
            times.push(time);
            // Store as mA for display and integration
            currents.push(current_amps * 1000.0);
        }

        // The time column is trusted to be ascending; range slicing is
        // undefined for unsorted input, so at least say so in the log.
        if times.windows(2).any(|w| w[1] < w[0]) {
            tracing::warn!("time column is not sorted ascending; region selection will misbehave");
        }

        Ok(Trace { times, currents })
    }
}

impl McuXpresso {
    /// Parse one data row.
    ///
    /// Rows with 3+ columns map to `(time, voltage, current)`; rows with
    /// exactly 2 map to `(time, current)`. Fewer than 2 columns, or any
    /// cell that does not parse as a float, fails the whole load.
    fn parse_row(line: usize, row: &str) -> Result<(f64, f64), ParseError> {
        let cols: Vec<&str> = row.split(',').map(str::trim).collect();
        if cols.len() < 2 {
            return Err(ParseError::TooFewColumns {
                line,
                found: cols.len(),
            });
        }

        let time = Self::parse_cell(line, "time", cols[0])?;
        let current_col = if cols.len() >= 3 {
            // Validate the measured voltage cell, then drop it
            let _ = Self::parse_cell(line, "voltage", cols[1])?;
            cols[2]
        } else {
            cols[1]
        };
        let current = Self::parse_cell(line, "current", current_col)?;

        Ok((time, current))
    }

    fn parse_cell(line: usize, column: &'static str, cell: &str) -> Result<f64, ParseError> {
        cell.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            line,
            column,
            value: cell.to_string(),
        })
    }
}
