use crate::coefficients::{freezing, sqrt_abs};

/// Freezing point of seawater (°C) at salinity `s` and pressure `p_dbar`.
pub fn freezing_point(s: f64, p_dbar: f64) -> f64 {
    let [a0, a1, a2] = freezing::S;
    a0 * s + a1 * s * sqrt_abs(s) + a2 * s * s + freezing::P * p_dbar
}
