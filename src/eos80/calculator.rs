use serde::Serialize;
use tracing::debug;

use crate::eos80::{
    adiabatic_lapse_rate, density, depth_from_pressure, freezing_point, potential_temperature,
    salinity_from_conductivity, solve_conductivity, sound_speed, specific_heat,
};
use crate::models::{Algorithm, Evaluation, Sample};

/// All derived properties of one seawater sample.
///
/// Fields:
/// - `salinity`, `temperature_c`, `pressure_dbar`, `latitude_deg`, `p_ref_dbar`: the inputs
/// - `conductivity_ratio`: R from the Newton solver, with `conductivity_converged`
/// - `density_kg_per_m3`: EOS-80 in-situ density
/// - `depth_m`: depth at `latitude_deg`
/// - `freezing_point_c`: freezing point at the sample pressure
/// - `specific_heat_j_per_kg_c`: Cp
/// - `adiabatic_lapse_rate_c_per_dbar`: Γ
/// - `potential_temperature_c`: θ referenced to `p_ref_dbar`
/// - `sound_speed_m_per_s`: sound speed
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PropertySummary {
    pub salinity: f64,
    pub temperature_c: f64,
    pub pressure_dbar: f64,
    pub latitude_deg: f64,
    pub p_ref_dbar: f64,
    pub conductivity_ratio: f64,
    pub conductivity_converged: bool,
    pub density_kg_per_m3: f64,
    pub depth_m: f64,
    pub freezing_point_c: f64,
    pub specific_heat_j_per_kg_c: f64,
    pub adiabatic_lapse_rate_c_per_dbar: f64,
    pub potential_temperature_c: f64,
    pub sound_speed_m_per_s: f64,
}

/// Run `algorithm` on the slots of `sample`.
///
/// Slot mapping:
/// - depth: `v1` = pressure, `v2` = latitude
/// - freezing point: `v1` = salinity, `v3` = pressure (`v2` ignored)
/// - potential temperature: `v1..v3` = S, T, in-situ P, referenced to `p_ref`
/// - everything else: `v1..v3` = S (or R for salinity), T, P
pub fn evaluate(algorithm: Algorithm, sample: &Sample) -> Evaluation {
    let Sample { v1, v2, v3, p_ref } = *sample;
    let value = match algorithm {
        Algorithm::Salinity => salinity_from_conductivity(v1, v2, v3),
        Algorithm::Conductivity => solve_conductivity(v1, v2, v3).ratio,
        Algorithm::Density => density(v1, v2, v3),
        Algorithm::Depth => depth_from_pressure(v1, v2),
        Algorithm::FreezingPoint => freezing_point(v1, v3),
        Algorithm::SpecificHeat => specific_heat(v1, v2, v3),
        Algorithm::AdiabaticLapseRate => adiabatic_lapse_rate(v1, v2, v3),
        Algorithm::PotentialTemperature => potential_temperature(v1, v2, v3, p_ref),
        Algorithm::SoundSpeed => sound_speed(v1, v2, v3),
    };
    debug!(%algorithm, v1, v2, v3, p_ref, value, "evaluated");

    Evaluation {
        algorithm,
        value,
        unit: algorithm.unit_at(p_ref),
    }
}

/// Compute every derived property for salinity `s`, temperature `temp`,
/// pressure `p_dbar`, latitude `lat` and reference pressure `p_ref`.
pub fn compute_summary(s: f64, temp: f64, p_dbar: f64, lat: f64, p_ref: f64) -> PropertySummary {
    let conductivity = solve_conductivity(s, temp, p_dbar);

    PropertySummary {
        salinity: s,
        temperature_c: temp,
        pressure_dbar: p_dbar,
        latitude_deg: lat,
        p_ref_dbar: p_ref,
        conductivity_ratio: conductivity.ratio,
        conductivity_converged: conductivity.converged,
        density_kg_per_m3: density(s, temp, p_dbar),
        depth_m: depth_from_pressure(p_dbar, lat),
        freezing_point_c: freezing_point(s, p_dbar),
        specific_heat_j_per_kg_c: specific_heat(s, temp, p_dbar),
        adiabatic_lapse_rate_c_per_dbar: adiabatic_lapse_rate(s, temp, p_dbar),
        potential_temperature_c: potential_temperature(s, temp, p_dbar, p_ref),
        sound_speed_m_per_s: sound_speed(s, temp, p_dbar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn depth_reads_pressure_and_latitude_slots() {
        let e = evaluate(Algorithm::Depth, &Sample::new(10000.0, 30.0, 999.0));
        assert_abs_diff_eq!(e.value, depth_from_pressure(10000.0, 30.0));
        assert_eq!(e.unit, " meter");
    }

    #[test]
    fn freezing_point_skips_temperature_slot() {
        let e = evaluate(Algorithm::FreezingPoint, &Sample::new(40.0, 123.0, 500.0));
        assert_abs_diff_eq!(e.value, -2.588567, epsilon = 1e-6);
    }

    #[test]
    fn potential_temperature_defaults_to_surface() {
        let sample = Sample::new(40.0, 40.0, 10000.0);
        let at_surface = evaluate(Algorithm::PotentialTemperature, &sample);
        assert_abs_diff_eq!(at_surface.value, 36.89073, epsilon = 1e-4);

        assert_eq!(at_surface.unit, " °C (at Surface)");

        let in_place = evaluate(Algorithm::PotentialTemperature, &sample.with_p_ref(10000.0));
        assert_eq!(in_place.value, 40.0);
        assert_eq!(in_place.unit, " °C (at reference pressure)");
    }

    #[test]
    fn summary_is_consistent_with_single_evaluations() {
        let summary = compute_summary(35.0, 10.0, 1000.0, 45.0, 0.0);
        assert!(summary.conductivity_converged);
        assert_abs_diff_eq!(
            salinity_from_conductivity(summary.conductivity_ratio, 10.0, 1000.0),
            35.0,
            epsilon = 1e-4
        );
        assert_eq!(
            summary.sound_speed_m_per_s,
            evaluate(Algorithm::SoundSpeed, &Sample::new(35.0, 10.0, 1000.0)).value
        );
        assert!(summary.potential_temperature_c < 10.0);
    }
}
