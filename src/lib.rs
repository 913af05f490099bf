pub mod adapters;
pub mod coefficients;
pub mod eos80;
pub mod error;
pub mod models;

pub use crate::eos80::{
    ConductivitySolution, PropertySummary, adiabatic_lapse_rate, compute_summary,
    conductivity_from_salinity, density, depth_from_pressure, evaluate, freezing_point,
    potential_temperature, salinity_from_conductivity, solve_conductivity, sound_speed,
    specific_heat,
};
pub use crate::error::AppError;
pub use crate::models::{Algorithm, Evaluation, Sample};
