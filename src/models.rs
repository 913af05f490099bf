use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The nine UNESCO-44 algorithms, numbered as in the published report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Salinity,
    Conductivity,
    Density,
    Depth,
    FreezingPoint,
    SpecificHeat,
    AdiabaticLapseRate,
    PotentialTemperature,
    SoundSpeed,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Salinity,
        Algorithm::Conductivity,
        Algorithm::Density,
        Algorithm::Depth,
        Algorithm::FreezingPoint,
        Algorithm::SpecificHeat,
        Algorithm::AdiabaticLapseRate,
        Algorithm::PotentialTemperature,
        Algorithm::SoundSpeed,
    ];

    /// Numeric identifier, 1 through 9.
    pub fn id(self) -> u8 {
        match self {
            Algorithm::Salinity => 1,
            Algorithm::Conductivity => 2,
            Algorithm::Density => 3,
            Algorithm::Depth => 4,
            Algorithm::FreezingPoint => 5,
            Algorithm::SpecificHeat => 6,
            Algorithm::AdiabaticLapseRate => 7,
            Algorithm::PotentialTemperature => 8,
            Algorithm::SoundSpeed => 9,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Salinity => "salinity",
            Algorithm::Conductivity => "conductivity",
            Algorithm::Density => "density",
            Algorithm::Depth => "depth",
            Algorithm::FreezingPoint => "freezing_point",
            Algorithm::SpecificHeat => "specific_heat",
            Algorithm::AdiabaticLapseRate => "adiabatic_lapse_rate",
            Algorithm::PotentialTemperature => "potential_temperature",
            Algorithm::SoundSpeed => "sound_speed",
        }
    }

    /// Unit label appended to a formatted result, leading space included.
    pub fn unit(self) -> &'static str {
        match self {
            Algorithm::Salinity => " PSU",
            Algorithm::Conductivity => " (Ratio)",
            Algorithm::Density => " kg/m³",
            Algorithm::Depth => " meter",
            Algorithm::FreezingPoint => " °C",
            Algorithm::SpecificHeat => " J/(kg °C)",
            Algorithm::AdiabaticLapseRate => " °C/dbar",
            Algorithm::PotentialTemperature => " °C (at Surface)",
            Algorithm::SoundSpeed => " m/s",
        }
    }

    /// Unit label for a result evaluated with reference pressure `p_ref` (dbar).
    ///
    /// Only potential temperature depends on it: the surface label applies at 0.
    pub fn unit_at(self, p_ref: f64) -> &'static str {
        match self {
            Algorithm::PotentialTemperature if p_ref != 0.0 => " °C (at reference pressure)",
            _ => self.unit(),
        }
    }

    /// Labels for the three input slots; `None` marks a slot the algorithm ignores.
    pub fn input_labels(self) -> [Option<&'static str>; 3] {
        const SALINITY_OR_RATIO: &str = "Salinity (PSU) / Ratio";
        const TEMPERATURE: &str = "Temperature (C)";
        const PRESSURE: &str = "Pressure (decibars)";

        match self {
            Algorithm::Depth => [Some(PRESSURE), Some("Latitude (degrees)"), None],
            Algorithm::FreezingPoint => [Some("Salinity (PSU)"), None, Some(PRESSURE)],
            Algorithm::PotentialTemperature => [
                Some(SALINITY_OR_RATIO),
                Some(TEMPERATURE),
                Some("Pressure In-Situ (db)"),
            ],
            _ => [Some(SALINITY_OR_RATIO), Some(TEMPERATURE), Some(PRESSURE)],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AppError;

    /// Accepts the numeric identifier (`"3"`) or the snake_case name (`"density"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Ok(id) = key.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| AppError::UnknownAlgorithm(s.to_string()));
        }
        let key = key.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| AppError::UnknownAlgorithm(s.to_string()))
    }
}

/// Three scalar input slots plus the reference pressure of potential temperature.
///
/// What each slot means depends on the algorithm (see [`Algorithm::input_labels`]).
/// Missing fields deserialize as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub v1: f64,
    pub v2: f64,
    pub v3: f64,
    pub p_ref: f64,
}

impl Sample {
    pub fn new(v1: f64, v2: f64, v3: f64) -> Self {
        Self {
            v1,
            v2,
            v3,
            p_ref: 0.0,
        }
    }

    /// Build a sample from raw text fields; unparsable or missing values become 0.
    pub fn from_fields(fields: &[&str]) -> Self {
        let field = |i: usize| fields.get(i).map_or(0.0, |raw| parse_or_zero(raw));
        Self::new(field(0), field(1), field(2))
    }

    pub fn with_p_ref(mut self, p_ref: f64) -> Self {
        self.p_ref = p_ref;
        self
    }
}

/// Parse a numeric field the way a form field is read: the longest leading
/// number counts (`"12abc"` is 12) and anything without one becomes 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    let text = raw.trim_start();
    match numeric_prefix(text).parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            tracing::debug!(raw, "unparsable numeric input, using 0");
            0.0
        }
    }
}

/// Longest prefix of `s` shaped like `[+-](digits[.digits]|.digits)[e[+-]digits]` or `[+-]Infinity`.
fn numeric_prefix(s: &str) -> &str {
    let b = s.as_bytes();
    let digits_from = |mut j: usize| {
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let start = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    if s[start..].starts_with("Infinity") {
        return &s[..start + "Infinity".len()];
    }

    let int_end = digits_from(start);
    let mut end = int_end;
    if b.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }
    if int_end == start && end <= int_end + 1 {
        return "";
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    &s[..end]
}

/// Result of running one algorithm on a [`Sample`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub algorithm: Algorithm,
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for Evaluation {
    /// Five decimal places followed by the unit label, e.g. `1449.13883 m/s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}{}", self.value, self.unit)
    }
}
