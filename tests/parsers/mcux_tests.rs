//! MCUXpresso CSV parser tests

#[path = "../common/mod.rs"]
mod common;

use common::{csv_three_column, csv_two_column};

use ampscope::parsers::{McuXpresso, ParseError, Parseable};

// ============================================
// Conversion Tests
// ============================================

#[test]
fn test_amps_to_milliamps_exact() {
    let content = csv_three_column(&[(0.0, 3.3, 1.0), (1.0, 3.3, 2.0), (2.0, 3.3, 3.0)]);
    let trace = McuXpresso.parse(&content).expect("Should parse");

    assert_eq!(trace.times, vec![0.0, 1.0, 2.0]);
    assert_eq!(trace.currents, vec![1000.0, 2000.0, 3000.0]);
}

#[test]
fn test_fractional_currents() {
    let content = csv_three_column(&[(0.0, 3.3, 0.000_123)]);
    let trace = McuXpresso.parse(&content).expect("Should parse");
    assert!((trace.currents[0] - 0.123).abs() < 1e-12);
}

// ============================================
// Column Mapping Tests
// ============================================

#[test]
fn test_positional_mapping_ignores_header_names() {
    // Header names are wrong on purpose; mapping is positional
    let content = "CURRENT,TIME,VOLTAGE\n1.5,3.3,0.002\n";
    let trace = McuXpresso.parse(content).expect("Should parse");
    assert_eq!(trace.times, vec![1.5]);
    assert_eq!(trace.currents, vec![2.0]);
}

#[test]
fn test_two_column_export() {
    let content = csv_two_column(&[(0.0, 0.004), (0.5, 0.008)]);
    let trace = McuXpresso.parse(&content).expect("Should parse");
    assert_eq!(trace.times, vec![0.0, 0.5]);
    assert_eq!(trace.currents, vec![4.0, 8.0]);
}

#[test]
fn test_extra_columns_beyond_three_ignored() {
    let content = "t,v,c,flags,notes\n0,3.3,0.001,7,boot\n";
    let trace = McuXpresso.parse(content).expect("Should parse");
    assert_eq!(trace.currents, vec![1.0]);
}

#[test]
fn test_measured_voltage_never_reaches_trace() {
    let content = csv_three_column(&[(0.0, 1.0, 0.1), (1.0, 100.0, 0.1)]);
    let trace = McuXpresso.parse(&content).expect("Should parse");
    assert_eq!(trace.currents, vec![100.0, 100.0]);
}

// ============================================
// Error Tests
// ============================================

#[test]
fn test_single_column_row_rejected() {
    let content = "t,v,c\n0,3.3,0.001\njunk\n";
    let err = McuXpresso.parse(content).unwrap_err();
    assert!(matches!(err, ParseError::TooFewColumns { line: 3, found: 1 }));
}

#[test]
fn test_bad_time_cell_rejected() {
    let content = "t,v,c\nabc,3.3,0.001\n";
    match McuXpresso.parse(content).unwrap_err() {
        ParseError::InvalidNumber { line, column, .. } => {
            assert_eq!(line, 2);
            assert_eq!(column, "time");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn test_bad_voltage_cell_rejected() {
    let content = "t,v,c\n0,?,0.001\n";
    match McuXpresso.parse(content).unwrap_err() {
        ParseError::InvalidNumber { column, .. } => assert_eq!(column, "voltage"),
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn test_header_only_file_rejected() {
    let err = McuXpresso.parse("TIME,VOLTAGE,CURRENT\n").unwrap_err();
    assert!(matches!(err, ParseError::NoData));
}

// ============================================
// Robustness Tests
// ============================================

#[test]
fn test_crlf_line_endings() {
    let content = "t,v,c\r\n0,3.3,0.001\r\n1,3.3,0.002\r\n";
    let trace = McuXpresso.parse(content).expect("Should parse");
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.currents, vec![1.0, 2.0]);
}

#[test]
fn test_scientific_notation_cells() {
    let content = "t,v,c\n1e-3,3.3,2.5e-4\n";
    let trace = McuXpresso.parse(content).expect("Should parse");
    assert_eq!(trace.times, vec![0.001]);
    assert!((trace.currents[0] - 0.25).abs() < 1e-12);
}

#[test]
fn test_large_export_parses_in_order() {
    let rows: Vec<(f64, f64, f64)> = (0..50_000)
        .map(|i| (i as f64 * 0.0001, 3.3, (i % 100) as f64 * 1e-5))
        .collect();
    let content = csv_three_column(&rows);
    let trace = McuXpresso.parse(&content).expect("Should parse");

    assert_eq!(trace.len(), 50_000);
    // Parallel parsing must preserve row order
    for pair in trace.times.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}
