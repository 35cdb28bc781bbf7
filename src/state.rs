//! Core application state types and constants.
//!
//! This module contains the fundamental data structures used throughout
//! the application: the loaded trace, the region selection, and shared
//! display constants.

use std::path::PathBuf;

use crate::parsers::Trace;

// ============================================================================
// Constants
// ============================================================================

/// Maximum points to render in the chart (peak downsampling keeps the
/// analyzer untouched - it always integrates the full-resolution slice)
pub const MAX_CHART_POINTS: usize = 2000;

/// Supported trace file extensions (used in file dialogs)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt", "log"];

/// Default supply voltage (Ualim) in volts
pub const DEFAULT_SUPPLY_VOLTAGE: f64 = 5.12;

/// Default chart line width in pixels
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

/// Selection seeded on every load, in the file's time units.
/// Deliberately not clamped to the data extent.
pub const SELECTION_SEED: (f64, f64) = (1.0e4, 2.0e4);

/// Trace line color
pub const TRACE_COLOR: [u8; 3] = [71, 108, 155]; // Blue

/// Selection band edge color
pub const SELECTION_COLOR: [u8; 3] = [191, 78, 48]; // Rust orange

/// Crosshair marker color
pub const CROSSHAIR_COLOR: [u8; 3] = [0, 255, 255]; // Cyan

// ============================================================================
// Core Types
// ============================================================================

/// A closed time interval `[lo, hi]` chosen on the chart.
///
/// `lo <= hi` holds by construction; `new` orders its endpoints so a
/// right-to-left drag produces the same interval as a left-to-right one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    /// Lower bound, seconds
    pub lo: f64,
    /// Upper bound, seconds
    pub hi: f64,
}

impl Selection {
    /// Create a selection from two endpoints in either order
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The zero-width selection `[t, t]` produced by a plain click
    pub fn collapsed(t: f64) -> Self {
        Self { lo: t, hi: t }
    }

    /// The seed selection applied whenever a trace is loaded
    pub fn seed() -> Self {
        let (lo, hi) = SELECTION_SEED;
        Self { lo, hi }
    }

    /// Nominal width `hi - lo` in seconds
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Whether the selection has collapsed to a single point
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0
    }

    /// Whether `t` lies inside the closed interval
    pub fn contains(&self, t: f64) -> bool {
        t >= self.lo && t <= self.hi
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::seed()
    }
}

/// A loaded trace with its source path and display name
#[derive(Clone, Debug)]
pub struct LoadedTrace {
    /// Path to the original file; `None` for the startup placeholder
    pub path: Option<PathBuf>,
    /// Display name (file name, or a placeholder label)
    pub name: String,
    /// Parsed trace data
    pub trace: Trace,
}

impl LoadedTrace {
    /// Create a loaded trace from a parsed file
    pub fn new(path: PathBuf, trace: Trace) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        Self {
            path: Some(path),
            name,
            trace,
        }
    }

    /// The degenerate startup trace used before any file is loaded
    pub fn placeholder() -> Self {
        Self {
            path: None,
            name: "No file loaded".to_string(),
            trace: Trace::placeholder(),
        }
    }
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Warning message (amber)
    Warning,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],    // Blue
            ToastType::Success => [113, 120, 78], // Olive green
            ToastType::Warning => [253, 193, 73], // Amber
            ToastType::Error => [135, 30, 28],    // Dark red
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30], // Dark text for amber background
            _ => [255, 255, 255],               // White text for other backgrounds
        }
    }
}
