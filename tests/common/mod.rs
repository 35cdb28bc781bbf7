//! Common test utilities shared across all test modules
//!
//! This module provides builders for synthetic trace CSV content and
//! float comparison helpers.

/// Build a three-column MCUXpresso-style CSV (time, voltage, current)
/// with a header row.
pub fn csv_three_column(rows: &[(f64, f64, f64)]) -> String {
    let mut out = String::from("TIME (s),VOLTAGE (V),CURRENT (A)\n");
    for (time, voltage, current) in rows {
        out.push_str(&format!("{time},{voltage},{current}\n"));
    }
    out
}

/// Build a two-column (time, current) CSV with a header row.
pub fn csv_two_column(rows: &[(f64, f64)]) -> String {
    let mut out = String::from("TIME (s),CURRENT (A)\n");
    for (time, current) in rows {
        out.push_str(&format!("{time},{current}\n"));
    }
    out
}

/// Write CSV content to a uniquely named file in the system temp dir and
/// return its path. Callers remove the file when done.
pub fn write_temp_csv(tag: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "ampscope_test_{}_{}.csv",
        std::process::id(),
        tag
    ));
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write temp file '{}': {}", path.display(), e));
    path
}

/// Float comparison helpers for testing
pub mod float_cmp {
    /// Check if two floats are approximately equal within a tolerance
    pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    /// Assert that two floats are approximately equal
    pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
        assert!(
            approx_eq(a, b, tolerance),
            "Values not approximately equal: {} vs {} (tolerance: {})",
            a,
            b,
            tolerance
        );
    }

    /// Default tolerance for float comparisons
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
}
