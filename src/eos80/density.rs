use crate::coefficients::{DBAR_PER_BAR, eos80, poly, sqrt_abs};

/// Density of standard mean ocean water (kg/m³) at temperature `temp` (°C).
pub fn pure_water_density(temp: f64) -> f64 {
    poly(temp, &eos80::RHO_W)
}

/// One-atmosphere seawater density (kg/m³).
fn surface_density(s: f64, temp: f64) -> f64 {
    pure_water_density(temp)
        + poly(temp, &eos80::RHO_S) * s
        + poly(temp, &eos80::RHO_S15) * s * sqrt_abs(s)
        + eos80::RHO_S2 * s * s
}

/// Secant bulk modulus K(S, T, P) in bars, with `p_dbar` in decibars.
///
/// `K = K(S,T,0) + A·P + B·P²` where `A` and `B` are polynomials in S and T
/// and P is in bars.
pub fn secant_bulk_modulus(s: f64, temp: f64, p_dbar: f64) -> f64 {
    let p_bar = p_dbar / DBAR_PER_BAR;
    let s15 = s * sqrt_abs(s);

    let k0 = poly(temp, &eos80::K_W) + poly(temp, &eos80::K_S) * s + poly(temp, &eos80::K_S15) * s15;
    let a = poly(temp, &eos80::A_W) + poly(temp, &eos80::A_S) * s + eos80::A_S15 * s15;
    let b = poly(temp, &eos80::B_W) + poly(temp, &eos80::B_S) * s;

    k0 + a * p_bar + b * p_bar * p_bar
}

/// In-situ density (kg/m³) from the International Equation of State of
/// Seawater 1980.
///
/// `rho = rho(S,T,0) / (1 - P / K(S,T,P))` with P in bars. No range checks:
/// out-of-range inputs give out-of-range densities.
pub fn density(s: f64, temp: f64, p_dbar: f64) -> f64 {
    let p_bar = p_dbar / DBAR_PER_BAR;
    surface_density(s, temp) / (1.0 - p_bar / secant_bulk_modulus(s, temp, p_dbar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unesco_check_value() {
        assert_abs_diff_eq!(density(40.0, 40.0, 10000.0), 1059.82037, epsilon = 1e-4);
    }

    #[test]
    fn pure_water_maximum_density_near_four_degrees() {
        assert_abs_diff_eq!(density(0.0, 4.0, 0.0), 999.97496, epsilon = 1e-4);
        assert!(pure_water_density(4.0) > pure_water_density(2.0));
        assert!(pure_water_density(4.0) > pure_water_density(6.0));
    }

    #[test]
    fn surface_values() {
        assert_abs_diff_eq!(density(35.0, 0.0, 0.0), 1028.10633, epsilon = 1e-4);
        assert_abs_diff_eq!(density(35.0, 25.0, 0.0), 1023.34306, epsilon = 1e-4);
    }

    #[test]
    fn bulk_modulus_grows_with_pressure() {
        let k0 = secant_bulk_modulus(35.0, 10.0, 0.0);
        let k1 = secant_bulk_modulus(35.0, 10.0, 5000.0);
        assert!(k1 > k0);
        assert!(k0 > 20_000.0 && k0 < 25_000.0);
    }

    #[test]
    fn density_increases_with_pressure() {
        assert!(density(35.0, 2.0, 4000.0) > density(35.0, 2.0, 0.0));
    }
}
