//! Resource calculators
//!
//! Pure deterministic formulas behind the resource-tools page. No failure
//! modes: out-of-domain inputs yield `None` rather than an error.

/// Crops the calculators offer options for
pub const CALCULATOR_CROPS: [&str; 4] = ["rice", "wheat", "maize", "potato"];

/// Daily irrigation water requirement in liters for a field.
///
/// `area_hectares` of standing crop irrigated over `days` days. Returns
/// `None` when either input is non-positive.
#[must_use]
pub fn water_requirement(area_hectares: f64, days: f64) -> Option<f64> {
    if area_hectares <= 0.0 || days <= 0.0 {
        return None;
    }
    Some((area_hectares * 1000.0) / (days * 10.0))
}

/// Fertilizer requirement in tons for a field.
///
/// Returns `None` when the area is non-positive.
#[must_use]
pub fn fertilizer_requirement(area_hectares: f64) -> Option<f64> {
    if area_hectares <= 0.0 {
        return None;
    }
    Some((area_hectares * 100.0) / 1000.0)
}
