//! Coefficient tables for the UNESCO-44 (1983) seawater algorithms.
//!
//! This module provides:
//! - One inline module per formula holding its empirical coefficients
//! - The PSS-78 temperature correction constant `K_SAL`, shared by the forward
//!   salinity formula and the conductivity solver
//! - Small numeric helpers used by every formula (Horner evaluation, guarded
//!   square root)
//!
//! Table conventions:
//! - Arrays are ordered by ascending power of the variable named in the doc
//!   comment, so `[c0, c1, c2]` evaluates as `c0 + c1*x + c2*x^2` via [`poly`]
//! - Temperatures are °C (IPTS-68), pressures are decibars unless a table says
//!   bars, salinity is PSU
//! - Names mirror the published UNESCO tables so each formula can be audited
//!   line by line against the standard
//!
//! # Examples
//! ```rust
//! use seawater_rs::coefficients::{poly, pss78};
//!
//! // rt(T) at the PSS-78 reference temperature is unity.
//! let rt = poly(15.0, &pss78::C);
//! assert!((rt - 1.0).abs() < 1e-6);
//! ```
//!
//! # Panics
//! Nothing here panics; helpers are plain arithmetic.

/// Temperature correction constant of PSS-78, `k` in `ΔT / (1 + k·ΔT)`.
pub const K_SAL: f64 = 0.0162;

/// Reference temperature of the Practical Salinity Scale (°C).
pub const PSS78_REF_TEMP: f64 = 15.0;

/// Practical salinity of standard seawater at `R = 1`, `T = 15 °C`, `P = 0`.
pub const PSS78_REF_SALINITY: f64 = 35.0;

/// Decibars per bar; the EOS-80 bulk modulus, heat capacity and sound speed
/// formulas are written in bars.
pub const DBAR_PER_BAR: f64 = 10.0;

/// PSS-78 conductivity ratio / practical salinity coefficients.
pub mod pss78 {
    /// `a0..a5`: salinity polynomial in `Rt^(1/2)`.
    pub const A: [f64; 6] = [0.0080, -0.1692, 25.3851, 14.0941, -7.0261, 2.7081];
    /// `b0..b5`: temperature correction polynomial in `Rt^(1/2)`.
    pub const B: [f64; 6] = [0.0005, -0.0056, -0.0066, -0.0375, 0.0636, -0.0144];
    /// `c0..c4`: `rt(T)`, conductivity ratio of standard seawater at T to 15 °C.
    pub const C: [f64; 5] = [0.6766097, 2.00564e-2, 1.104259e-4, -6.9698e-7, 1.0031e-9];
    /// `d1..d4`: denominator of the pressure correction `Rp`.
    pub const D: [f64; 4] = [3.426e-2, 4.464e-4, 4.215e-1, -3.107e-3];
    /// `e1..e3`: numerator of the pressure correction `Rp` (in powers of P, starting at P^1).
    pub const E: [f64; 3] = [2.070e-5, -6.370e-10, 3.989e-15];
}

/// EOS-80 one-atmosphere density and secant bulk modulus coefficients.
pub mod eos80 {
    /// Standard mean ocean water density, powers of T.
    pub const RHO_W: [f64; 6] = [
        999.842594,
        6.793952e-2,
        -9.095290e-3,
        1.001685e-4,
        -1.120083e-6,
        6.536332e-9,
    ];
    /// Coefficient of S in the one-atmosphere density, powers of T.
    pub const RHO_S: [f64; 5] = [8.24493e-1, -4.0899e-3, 7.6438e-5, -8.2467e-7, 5.3875e-9];
    /// Coefficient of S^1.5 in the one-atmosphere density, powers of T.
    pub const RHO_S15: [f64; 3] = [-5.72466e-3, 1.0227e-4, -1.6546e-6];
    /// Coefficient of S^2 in the one-atmosphere density.
    pub const RHO_S2: f64 = 4.8314e-4;

    /// Pure water secant bulk modulus at one atmosphere (bar), powers of T.
    pub const K_W: [f64; 5] = [19652.21, 148.4206, -2.327105, 1.360477e-2, -5.155288e-5];
    /// Coefficient of S in the one-atmosphere bulk modulus, powers of T.
    pub const K_S: [f64; 4] = [54.6746, -0.603459, 1.09987e-2, -6.1670e-5];
    /// Coefficient of S^1.5 in the one-atmosphere bulk modulus, powers of T.
    pub const K_S15: [f64; 3] = [7.944e-2, 1.6483e-2, -5.3009e-4];

    /// Pure water part of `A` (linear pressure term), powers of T.
    pub const A_W: [f64; 4] = [3.239908, 1.43713e-3, 1.16092e-4, -5.77905e-7];
    /// Coefficient of S in `A`, powers of T.
    pub const A_S: [f64; 3] = [2.2838e-3, -1.0981e-5, -1.6078e-6];
    /// Coefficient of S^1.5 in `A`.
    pub const A_S15: f64 = 1.91075e-4;

    /// Pure water part of `B` (quadratic pressure term), powers of T.
    pub const B_W: [f64; 3] = [8.50935e-5, -6.12293e-6, 5.2787e-8];
    /// Coefficient of S in `B`, powers of T.
    pub const B_S: [f64; 3] = [-9.9348e-7, 2.0816e-8, 9.1697e-10];
}

/// Saunders & Fofonoff pressure to depth coefficients.
pub mod depth {
    /// Degrees per radian as used by the published algorithm.
    pub const DEG_PER_RAD: f64 = 57.29578;
    /// Equatorial gravity at the surface (m/s²).
    pub const GRAVITY_EQUATOR: f64 = 9.780318;
    /// Coefficients of `sin²(lat)` and `sin⁴(lat)` in the gravity formula.
    pub const GRAVITY_LAT: [f64; 2] = [5.2788e-3, 2.36e-5];
    /// Mean vertical gravity gradient term per decibar.
    pub const GRAVITY_P: f64 = 1.092e-6;
    /// Geopotential polynomial in P, powers P^0..P^4.
    pub const Z: [f64; 5] = [0.0, 9.72659, -2.2512e-5, 2.279e-10, -1.82e-15];
}

/// Millero freezing point coefficients.
pub mod freezing {
    /// Coefficients of S, S^1.5 and S^2.
    pub const S: [f64; 3] = [-0.0575, 1.710523e-3, -2.154996e-4];
    /// Coefficient of P (°C per decibar).
    pub const P: f64 = -7.53e-4;
}

/// Millero, Perron & Desnoyers specific heat coefficients.
pub mod heat {
    /// Pure water heat capacity at one atmosphere, powers of T.
    pub const CP0_T: [f64; 5] = [4217.4, -3.720283, 0.1412855, -2.654387e-3, 2.093236e-5];
    /// Coefficient of S at one atmosphere, powers of T.
    pub const CP0_S: [f64; 3] = [-7.643575, 0.1072763, -1.38385e-3];
    /// Coefficient of S^1.5 at one atmosphere, powers of T.
    pub const CP0_S15: [f64; 3] = [0.1770383, -4.07718e-3, 5.148e-5];

    /// Pure water pressure correction, `A` (bar^1), powers of T.
    pub const DCP1_A: [f64; 5] = [-0.49592, 1.45747e-2, -3.13885e-4, 2.0357e-6, 1.7168e-8];
    /// Pure water pressure correction, `B` (bar^2), powers of T.
    pub const DCP1_B: [f64; 5] = [2.4931e-4, -1.08645e-5, 2.87533e-7, -4.0027e-9, 2.2956e-11];
    /// Pure water pressure correction, `C` (bar^3), powers of T.
    pub const DCP1_C: [f64; 4] = [-5.422e-8, 2.6380e-9, -6.5637e-11, 6.136e-13];

    /// Salinity pressure correction, S part of `A`, powers of T.
    pub const DCP2_A_S: [f64; 5] = [4.9247e-3, -1.28315e-4, 9.802e-7, 2.5941e-8, -2.9179e-10];
    /// Salinity pressure correction, S^1.5 part of `A`, powers of T.
    pub const DCP2_A_S15: [f64; 3] = [-1.2331e-4, -1.517e-6, 3.122e-8];
    /// Salinity pressure correction, S part of `B`, powers of T.
    pub const DCP2_B_S: [f64; 4] = [-2.9558e-6, 1.17054e-7, -2.3905e-9, 1.8448e-11];
    /// Salinity pressure correction, S^1.5 part of `B`.
    pub const DCP2_B_S15: f64 = 9.971e-8;
    /// Salinity pressure correction, S part of `C`, powers of T.
    pub const DCP2_C_S: [f64; 3] = [5.540e-10, -1.7682e-11, 3.513e-13];
    /// Salinity pressure correction, S^1.5 part of `C`, powers of T.
    pub const DCP2_C_S15: [f64; 2] = [0.0, -1.4300e-12];
}

/// Bryden adiabatic lapse rate coefficients (°C/dbar).
pub mod adiabat {
    /// Pure temperature term, powers of T.
    pub const T: [f64; 4] = [3.5803e-5, 8.5258e-6, -6.8360e-8, 6.6228e-10];
    /// Coefficient of `S - 35`, powers of T.
    pub const DS: [f64; 2] = [1.8932e-6, -4.2393e-8];
    /// Coefficient of P, powers of T.
    pub const P: [f64; 4] = [1.8741e-8, -6.7795e-10, 8.7330e-12, -5.4481e-14];
    /// Coefficient of `(S - 35)·P`, powers of T.
    pub const DS_P: [f64; 2] = [-1.1351e-10, 2.7759e-12];
    /// Coefficient of P^2, powers of T.
    pub const P2: [f64; 3] = [-4.6206e-13, 1.8676e-14, -2.1687e-16];
    /// Salinity anomaly reference (PSU).
    pub const S_REF: f64 = 35.0;
}

/// Chen & Millero sound speed coefficients (pressure in bars).
pub mod sound {
    /// Pure water sound speed, P^0 term, powers of T.
    pub const CW0: [f64; 6] = [1402.388, 5.03711, -5.80852e-2, 3.3420e-4, -1.47800e-6, 3.1464e-9];
    /// Pure water sound speed, P^1 term, powers of T.
    pub const CW1: [f64; 5] = [0.153563, 6.8982e-4, -8.1788e-6, 1.3621e-7, -6.1185e-10];
    /// Pure water sound speed, P^2 term, powers of T.
    pub const CW2: [f64; 5] = [3.1260e-5, -1.7107e-6, 2.5974e-8, -2.5335e-10, 1.0405e-12];
    /// Pure water sound speed, P^3 term, powers of T.
    pub const CW3: [f64; 3] = [-9.7729e-9, 3.8504e-10, -2.3643e-12];

    /// Linear salinity coefficient `A`, P^0 term, powers of T.
    pub const A0: [f64; 5] = [1.389, -1.262e-2, 7.164e-5, 2.006e-6, -3.21e-8];
    /// `A`, P^1 term, powers of T.
    pub const A1: [f64; 5] = [9.4742e-5, -1.2580e-5, -6.4885e-8, 1.0507e-8, -2.0122e-10];
    /// `A`, P^2 term, powers of T.
    pub const A2: [f64; 4] = [-3.9064e-7, 9.1041e-9, -1.6002e-10, 7.988e-12];
    /// `A`, P^3 term, powers of T.
    pub const A3: [f64; 3] = [1.100e-10, 6.649e-12, -3.389e-13];

    /// S^1.5 coefficient `B`, P^0 term, powers of T.
    pub const B0: [f64; 2] = [-1.922e-2, -4.42e-5];
    /// `B`, P^1 term, powers of T.
    pub const B1: [f64; 2] = [7.3637e-5, 1.7945e-7];

    /// S^2 coefficient `D`, powers of P.
    pub const D: [f64; 2] = [1.727e-3, -7.9836e-6];
}

/// Evaluate a polynomial with ascending coefficients at `x` (Horner scheme).
///
/// `poly(x, &[c0, c1, c2])` is `c0 + c1*x + c2*x^2`. An empty slice is 0.
pub fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Square root of `|x|`.
///
/// Salinity-like quantities can go slightly negative for pathological
/// inputs; the published algorithms take the root of the magnitude there.
pub fn sqrt_abs(x: f64) -> f64 {
    x.abs().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn poly_is_ascending_horner() {
        assert_abs_diff_eq!(poly(2.0, &[1.0, 2.0, 3.0]), 17.0);
        assert_abs_diff_eq!(poly(5.0, &[]), 0.0);
        assert_abs_diff_eq!(poly(-1.0, &[4.0]), 4.0);
    }

    #[test]
    fn pss78_tables_hit_reference_point() {
        assert_abs_diff_eq!(poly(PSS78_REF_TEMP, &pss78::C), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pss78::A.iter().sum::<f64>(), PSS78_REF_SALINITY, epsilon = 1e-9);
        assert_abs_diff_eq!(pss78::B.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn sqrt_abs_ignores_sign() {
        assert_abs_diff_eq!(sqrt_abs(-4.0), 2.0);
        assert_abs_diff_eq!(sqrt_abs(9.0), 3.0);
    }
}
