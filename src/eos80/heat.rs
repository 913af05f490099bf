use crate::coefficients::{DBAR_PER_BAR, heat, poly, sqrt_abs};

/// Specific heat of seawater Cp (J kg⁻¹ °C⁻¹) at salinity `s`, temperature
/// `temp` (°C) and pressure `p_dbar` (dbar).
///
/// Sum of the one-atmosphere heat capacity and two pressure corrections, one
/// for pure water and one for the salinity dependence, each cubic in bars.
pub fn specific_heat(s: f64, temp: f64, p_dbar: f64) -> f64 {
    let p_bar = p_dbar / DBAR_PER_BAR;
    let s15 = s * sqrt_abs(s);

    let cp0 = poly(temp, &heat::CP0_T) + poly(temp, &heat::CP0_S) * s + poly(temp, &heat::CP0_S15) * s15;

    // Pure water pressure correction.
    let a = poly(temp, &heat::DCP1_A);
    let b = poly(temp, &heat::DCP1_B);
    let c = poly(temp, &heat::DCP1_C);
    let del_cp1 = p_bar * (a + p_bar * (b + p_bar * c));

    // Salinity dependence of the pressure correction.
    let a = poly(temp, &heat::DCP2_A_S) * s + poly(temp, &heat::DCP2_A_S15) * s15;
    let b = poly(temp, &heat::DCP2_B_S) * s + heat::DCP2_B_S15 * s15;
    let c = poly(temp, &heat::DCP2_C_S) * s + poly(temp, &heat::DCP2_C_S15) * s15;
    let del_cp2 = p_bar * (a + p_bar * (b + p_bar * c));

    cp0 + del_cp1 + del_cp2
}
