use crate::coefficients::{adiabat, poly};

/// Adiabatic temperature gradient Γ (°C/dbar), Bryden (1973).
pub fn adiabatic_lapse_rate(s: f64, temp: f64, p_dbar: f64) -> f64 {
    let ds = s - adiabat::S_REF;
    poly(temp, &adiabat::T)
        + poly(temp, &adiabat::DS) * ds
        + poly(temp, &adiabat::P) * p_dbar
        + poly(temp, &adiabat::DS_P) * ds * p_dbar
        + poly(temp, &adiabat::P2) * p_dbar * p_dbar
}

/// Potential temperature θ (°C) of a parcel at `temp`, `p_dbar` brought
/// adiabatically to `p_ref` (dbar).
///
/// One classical Runge-Kutta step over the whole span `h = p_ref - p_dbar`,
/// using [`adiabatic_lapse_rate`] as `dT/dP`. Non-finite inputs propagate.
pub fn potential_temperature(s: f64, temp: f64, p_dbar: f64, p_ref: f64) -> f64 {
    let h = p_ref - p_dbar;
    let q1 = adiabatic_lapse_rate(s, temp, p_dbar);
    let q2 = adiabatic_lapse_rate(s, temp + 0.5 * h * q1, p_dbar + 0.5 * h);
    let q3 = adiabatic_lapse_rate(s, temp + 0.5 * h * q2, p_dbar + 0.5 * h);
    let q4 = adiabatic_lapse_rate(s, temp + h * q3, p_dbar + h);
    temp + (h / 6.0) * (q1 + 2.0 * q2 + 2.0 * q3 + q4)
}
