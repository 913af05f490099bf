use serde::Serialize;
use tracing::{trace, warn};

use crate::coefficients::{K_SAL, PSS78_REF_SALINITY, PSS78_REF_TEMP, poly, pss78, sqrt_abs};

/// Iteration cap of the salinity to conductivity solver.
pub const MAX_ITERATIONS: usize = 20;
/// Convergence tolerance on `|S - SI|` (PSU).
pub const TOLERANCE: f64 = 1e-5;

/// Outcome of the salinity to conductivity Newton-Raphson solve.
///
/// - `ratio`: conductivity ratio R; always the last estimate, even when the
///   solver did not converge
/// - `iterations`: Newton steps taken (never more than the cap)
/// - `converged`: whether `|S - SI|` dropped below the tolerance
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ConductivitySolution {
    pub ratio: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// `rt(T)`: conductivity ratio of standard seawater (S = 35) at T relative to 15 °C.
fn rt35(temp: f64) -> f64 {
    poly(temp, &pss78::C)
}

/// Temperature weight `ΔT / (1 + k·ΔT)` applied to the `b` polynomial.
fn temperature_weight(temp: f64) -> f64 {
    let dt = temp - PSS78_REF_TEMP;
    dt / (1.0 + K_SAL * dt)
}

/// Pressure correction terms `(A, B, C)` with `Rp = 1 + C / (B + A·R)`.
fn pressure_terms(temp: f64, p_dbar: f64) -> (f64, f64, f64) {
    let [d1, d2, d3, d4] = pss78::D;
    let a = d3 + d4 * temp;
    let b = 1.0 + temp * (d1 + temp * d2);
    let c = p_dbar * poly(p_dbar, &pss78::E);
    (a, b, c)
}

/// PSS-78 salinity as a function of `Rt^(1/2)` and the temperature weight.
fn salinity_from_root(rt_root: f64, weight: f64) -> f64 {
    poly(rt_root, &pss78::A) + weight * poly(rt_root, &pss78::B)
}

/// Termwise derivative of [`salinity_from_root`] with respect to `Rt^(1/2)`.
fn salinity_derivative(rt_root: f64, weight: f64) -> f64 {
    (1..pss78::A.len())
        .rev()
        .fold(0.0, |acc, i| acc * rt_root + i as f64 * (pss78::A[i] + weight * pss78::B[i]))
}

/// Practical salinity (PSS-78) from conductivity ratio `r`, in-situ temperature
/// `temp` (°C) and pressure `p_dbar` (dbar).
///
/// The ratio is corrected for pressure (`Rp`) and temperature (`rt`) before
/// the salinity polynomial is applied. The result is floored at 0.
pub fn salinity_from_conductivity(r: f64, temp: f64, p_dbar: f64) -> f64 {
    let (a, b, c) = pressure_terms(temp, p_dbar);
    let rp = 1.0 + c / (b + a * r);
    let rt = r / (rp * rt35(temp));
    let s = salinity_from_root(sqrt_abs(rt), temperature_weight(temp));
    s.max(0.0)
}

/// Conductivity ratio from practical salinity `s`, temperature `temp` (°C) and
/// pressure `p_dbar` (dbar).
///
/// Best-effort: if the solver runs out of iterations the last estimate is
/// returned without signalling. Use [`solve_conductivity`] to inspect
/// convergence.
pub fn conductivity_from_salinity(s: f64, temp: f64, p_dbar: f64) -> f64 {
    solve_conductivity(s, temp, p_dbar).ratio
}

/// Solve for the conductivity ratio with the default cap and tolerance.
pub fn solve_conductivity(s: f64, temp: f64, p_dbar: f64) -> ConductivitySolution {
    solve_conductivity_with(s, temp, p_dbar, MAX_ITERATIONS, TOLERANCE)
}

/// Solve for the conductivity ratio by Newton-Raphson on `Rt^(1/2)`.
///
/// Starts from `sqrt(|S| / 35)`, applies the Newton update each step and stops
/// once `|S - SI| < tol` (the update of that step is kept) or after `max_iter`
/// steps. A zero or non-finite derivative ends the iteration early with the
/// current estimate and `converged = false`.
///
/// The temperature-compensated ratio `rt·Rt` is then corrected for pressure by
/// solving `A·R² + (B - A·rt·Rt)·R - rt·Rt·(B + C) = 0` for R.
pub fn solve_conductivity_with(
    s: f64,
    temp: f64,
    p_dbar: f64,
    max_iter: usize,
    tol: f64,
) -> ConductivitySolution {
    let weight = temperature_weight(temp);
    let mut rt_root = sqrt_abs(s / PSS78_REF_SALINITY);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iter {
        iterations += 1;
        let residual = s - salinity_from_root(rt_root, weight);
        let deriv = salinity_derivative(rt_root, weight);
        if deriv == 0.0 || !deriv.is_finite() {
            warn!(s, temp, p_dbar, rt_root, deriv, "degenerate derivative in conductivity solver");
            break;
        }
        rt_root += residual / deriv;
        trace!(iterations, rt_root, residual, "newton step");
        if residual.abs() < tol {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(s, temp, p_dbar, iterations, "conductivity solver did not converge; returning last estimate");
    }

    let rtt = rt35(temp) * rt_root * rt_root;
    let (a, b, c) = pressure_terms(temp, p_dbar);
    let lin = b - rtt * a;
    let constant = rtt * (b + c);
    let disc = sqrt_abs(lin * lin + 4.0 * a * constant);
    // A vanishes near 135.66 °C; the rationalised root avoids 0/0 there.
    let ratio = if lin >= 0.0 {
        2.0 * constant / (lin + disc)
    } else {
        0.5 * (disc - lin) / a
    };

    ConductivitySolution {
        ratio,
        iterations,
        converged,
    }
}
