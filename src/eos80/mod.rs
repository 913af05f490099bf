//! UNESCO-44 seawater property algorithms (PSS-78 and EOS-80).
//!
//! Every function is a pure scalar evaluation: same inputs, same output, no
//! shared state, safe to call from any thread. Units follow the UNESCO report:
//! salinity in PSU, temperature in °C, pressure in decibars relative to the sea
//! surface, latitude in degrees.
//!
//! Only two routines carry control flow. [`solve_conductivity`] inverts the
//! PSS-78 salinity polynomial by Newton-Raphson (at most 20 steps, tolerance
//! 1e-5 PSU) and [`potential_temperature`] integrates [`adiabatic_lapse_rate`]
//! with a single fourth-order Runge-Kutta step.
//!
//! # Examples
//! ```rust
//! use seawater_rs::eos80::{salinity_from_conductivity, sound_speed};
//!
//! let s = salinity_from_conductivity(1.0, 15.0, 0.0);
//! assert!((s - 35.0).abs() < 1e-3);
//! assert!((sound_speed(35.0, 0.0, 0.0) - 1449.14).abs() < 0.01);
//! ```

pub mod adiabatic;
pub mod calculator;
pub mod conductivity;
pub mod density;
pub mod depth;
pub mod freezing;
pub mod heat;
pub mod sound;

pub use adiabatic::{adiabatic_lapse_rate, potential_temperature};
pub use calculator::{PropertySummary, compute_summary, evaluate};
pub use conductivity::{
    ConductivitySolution, MAX_ITERATIONS, TOLERANCE, conductivity_from_salinity,
    salinity_from_conductivity, solve_conductivity, solve_conductivity_with,
};
pub use density::{density, pure_water_density, secant_bulk_modulus};
pub use depth::{depth_from_pressure, gravity};
pub use freezing::freezing_point;
pub use heat::specific_heat;
pub use sound::sound_speed;
