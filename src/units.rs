//! SI-prefix value formatting.
//!
//! All four region results (energy, average current, average power, delta
//! t) and the crosshair readout are displayed in engineering notation with
//! an SI prefix and a fixed number of significant digits, e.g.
//! `0.00234 J` -> `"2.34 mJ"`.

/// SI prefixes from yocto (1e-24) to yotta (1e24); index 8 is the empty
/// prefix for the 1e0 band.
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Format `value` with `precision` significant digits, an SI prefix, and
/// the given unit suffix.
///
/// Magnitudes beyond the prefix table are pinned to the extreme prefix.
/// Non-finite values are passed through with the unit attached rather
/// than formatted, so NaN never masquerades as a measurement.
pub fn si_format(value: f64, precision: usize, unit: &str) -> String {
    let precision = precision.max(1);

    if !value.is_finite() {
        return format!("{value} {unit}");
    }
    if value == 0.0 {
        return format!("{:.*} {}", precision - 1, 0.0, unit);
    }

    let mut band = (value.abs().log10() / 3.0).floor() as i32;
    band = band.clamp(-8, 8);
    let mut mantissa = value / 10f64.powi(band * 3);
    let mut decimals = decimals_for(mantissa, precision);

    // Rounding at the requested precision can carry the mantissa into the
    // next band (999.6 -> "1000"); renormalize when it does
    let rounded = format!("{mantissa:.decimals$}");
    let int_len = rounded.trim_start_matches('-').split('.').next().map_or(0, str::len);
    if int_len > 3 && band < 8 {
        band += 1;
        mantissa = value / 10f64.powi(band * 3);
        decimals = decimals_for(mantissa, precision);
    }

    let prefix = SI_PREFIXES[(band + 8) as usize];
    format!("{mantissa:.decimals$} {prefix}{unit}")
}

/// Decimal places needed so the mantissa shows `precision` significant
/// digits
fn decimals_for(mantissa: f64, precision: usize) -> usize {
    let int_digits = mantissa.abs().log10().floor().max(0.0) as usize + 1;
    precision.saturating_sub(int_digits)
}
