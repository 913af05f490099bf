use crate::coefficients::{DBAR_PER_BAR, poly, sound, sqrt_abs};

/// Sound speed in seawater (m/s), Chen & Millero (1977).
///
/// `c = Cw(T,P) + A(T,P)·S + B(T,P)·S^1.5 + D(P)·S²` with P in bars.
pub fn sound_speed(s: f64, temp: f64, p_dbar: f64) -> f64 {
    let p = p_dbar / DBAR_PER_BAR;

    let cw = poly(
        p,
        &[
            poly(temp, &sound::CW0),
            poly(temp, &sound::CW1),
            poly(temp, &sound::CW2),
            poly(temp, &sound::CW3),
        ],
    );
    let a = poly(
        p,
        &[
            poly(temp, &sound::A0),
            poly(temp, &sound::A1),
            poly(temp, &sound::A2),
            poly(temp, &sound::A3),
        ],
    );
    let b = poly(temp, &sound::B0) + poly(temp, &sound::B1) * p;
    let d = poly(p, &sound::D);

    cw + a * s + b * s * sqrt_abs(s) + d * s * s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unesco_check_value() {
        assert_abs_diff_eq!(sound_speed(40.0, 40.0, 10000.0), 1731.995, epsilon = 1e-3);
    }

    #[test]
    fn standard_seawater_at_freezing_surface() {
        assert_abs_diff_eq!(sound_speed(35.0, 0.0, 0.0), 1449.1388, epsilon = 1e-3);
    }

    #[test]
    fn pressure_speeds_sound_up() {
        assert!(sound_speed(35.0, 2.0, 4000.0) > sound_speed(35.0, 2.0, 0.0));
    }
}
