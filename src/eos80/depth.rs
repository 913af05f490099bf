use crate::coefficients::{depth, poly};

/// Gravity (m/s²) at latitude `lat` (degrees) including the mean vertical
/// gradient for pressure `p_dbar`.
pub fn gravity(lat: f64, p_dbar: f64) -> f64 {
    let x = (lat / depth::DEG_PER_RAD).sin().powi(2);
    depth::GRAVITY_EQUATOR * (1.0 + poly(x, &depth::GRAVITY_LAT) * x) + depth::GRAVITY_P * p_dbar
}

/// Depth (m) from pressure `p_dbar` (dbar) at latitude `lat` (degrees),
/// Saunders & Fofonoff (1976).
pub fn depth_from_pressure(p_dbar: f64, lat: f64) -> f64 {
    poly(p_dbar, &depth::Z) / gravity(lat, p_dbar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unesco_check_value() {
        assert_abs_diff_eq!(depth_from_pressure(10000.0, 30.0), 9712.653, epsilon = 1e-3);
    }

    #[test]
    fn equator_one_thousand_decibars() {
        assert_abs_diff_eq!(depth_from_pressure(1000.0, 0.0), 992.117, epsilon = 1e-3);
    }

    #[test]
    fn gravity_increases_towards_poles() {
        assert!(gravity(90.0, 0.0) > gravity(45.0, 0.0));
        assert!(gravity(45.0, 0.0) > gravity(0.0, 0.0));
        assert_abs_diff_eq!(gravity(30.0, 0.0), gravity(-30.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn surface_is_zero_depth() {
        assert_eq!(depth_from_pressure(0.0, 45.0), 0.0);
    }
}
