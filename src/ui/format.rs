//! Human-readable number formatting for the panels.

use crate::types::AU_TO_KM;

/// Compact form with one decimal: `1.2B`, `3.4M`, `5.6K`, `7.8`.
pub fn format_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.1}")
    }
}

/// Distance in km with a word scale and two decimals.
pub fn format_distance(km: f64) -> String {
    if km >= 1e9 {
        format!("{:.2} billion km", km / 1e9)
    } else if km >= 1e6 {
        format!("{:.2} million km", km / 1e6)
    } else if km >= 1e3 {
        format!("{:.2} thousand km", km / 1e3)
    } else {
        format!("{km:.2} km")
    }
}

pub fn au_to_km(au: f64) -> f64 {
    au * AU_TO_KM
}

/// Scientific notation for quantities far beyond the compact suffixes,
/// e.g. `5.97 × 10^24`.
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let exponent = value.abs().log10().floor() as i32;
    let mantissa = value / 10f64.powi(exponent);
    // Rounding can carry the mantissa up to 10.00
    if format!("{mantissa:.2}") == "10.00" {
        return format!("1.00 × 10^{}", exponent + 1);
    }
    format!("{mantissa:.2} × 10^{exponent}")
}
