//! Tests for the peak-preserving render downsampler

use ampscope::app::AmpScopeApp;

#[test]
fn test_small_input_passes_through() {
    let times = vec![0.0, 1.0, 2.0];
    let values = vec![5.0, 6.0, 7.0];
    let out = AmpScopeApp::downsample_peak(&times, &values, 2000);
    assert_eq!(out, vec![[0.0, 5.0], [1.0, 6.0], [2.0, 7.0]]);
}

#[test]
fn test_output_stays_near_target() {
    let n = 100_000;
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let values: Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();
    let out = AmpScopeApp::downsample_peak(&times, &values, 2000);
    assert!(out.len() <= 2002, "got {} points", out.len());
    assert!(out.len() >= 1000, "got {} points", out.len());
}

#[test]
fn test_endpoints_preserved() {
    let n = 50_000;
    let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
    let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let out = AmpScopeApp::downsample_peak(&times, &values, 100);
    assert_eq!(out.first().unwrap()[0], 0.0);
    assert_eq!(out.last().unwrap()[0], times[n - 1]);
}

#[test]
fn test_narrow_spike_survives() {
    // A one-sample 500 mA spike in an otherwise flat 1 mA trace
    let n = 100_000;
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut values = vec![1.0; n];
    values[43_217] = 500.0;

    let out = AmpScopeApp::downsample_peak(&times, &values, 500);
    let max = out.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(max, 500.0);
}

#[test]
fn test_negative_dip_survives() {
    let n = 100_000;
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut values = vec![1.0; n];
    values[91_003] = -500.0;

    let out = AmpScopeApp::downsample_peak(&times, &values, 500);
    let min = out.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
    assert_eq!(min, -500.0);
}

#[test]
fn test_times_remain_ascending() {
    let n = 10_000;
    let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
    let values: Vec<f64> = (0..n).map(|i| ((i * 7919) % 100) as f64).collect();
    let out = AmpScopeApp::downsample_peak(&times, &values, 200);
    for pair in out.windows(2) {
        assert!(pair[1][0] >= pair[0][0]);
    }
}
