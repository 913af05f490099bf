use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use tracing::Level;

use crate::error::AppError;
use crate::eos80::{PropertySummary, compute_summary, evaluate};
use crate::models::{Algorithm, Evaluation, Sample};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater property calculator (UNESCO EOS-80), optional JSON output", long_about = None)]
pub struct Args {
    #[arg(
        long,
        value_name = "ALGO",
        help = "Algorithm: 1-9 or a name (salinity, conductivity, density, depth, freezing_point, specific_heat, adiabatic_lapse_rate, potential_temperature, sound_speed)"
    )]
    algo: Option<String>,
    #[arg(long)]
    json: bool,
    #[arg(long, help = "Print every property for S T P instead of a single algorithm")]
    summary: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON document with 'algorithm' and 'sample'; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON sample {v1, v2, v3, p_ref} (overrides positional values)"
    )]
    sample_json: Option<String>,
    #[arg(
        long,
        value_name = "DBAR",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Reference pressure for potential temperature"
    )]
    p_ref: f64,
    #[arg(
        long,
        value_name = "DEG",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Latitude used by --summary for depth"
    )]
    latitude: f64,
    #[arg(long, value_name = "LEVEL", default_value = "warn", help = "trace, debug, info, warn or error")]
    log_level: String,
    #[arg(
        value_name = "VALUE",
        num_args = 0..=3,
        allow_negative_numbers = true,
        help = "Input slots v1 v2 v3; missing or unparsable values count as 0"
    )]
    values: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Evaluate(Algorithm, Sample),
    Summary { sample: Sample, latitude: f64 },
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum CalculationOutput {
    Evaluation(Evaluation),
    Summary(PropertySummary),
}

#[derive(Deserialize)]
struct CmdInput {
    #[serde(default)]
    algorithm: Option<Algorithm>,
    #[serde(default)]
    sample: Sample,
}

pub fn init_logging(args: &Args) -> Result<(), AppError> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::InitLogging(e.to_string()))
}

fn parse_sample_json(json: &str) -> Result<Sample, AppError> {
    serde_json::from_str(json).map_err(|source| AppError::ParseSampleJson { source })
}

fn parse_cmd_input_doc(doc: &str) -> Result<CmdInput, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })
}

fn read_input_doc(path: &str) -> Result<String, AppError> {
    if path == "-" {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .map_err(|source| AppError::ReadStdin { source })?;
        Ok(s)
    } else {
        fs::read_to_string(path).map_err(|source| AppError::ReadFile {
            path: path.to_string(),
            source,
        })
    }
}

fn positional_sample(args: &Args) -> Sample {
    let fields: Vec<&str> = args.values.iter().map(String::as_str).collect();
    Sample::from_fields(&fields).with_p_ref(args.p_ref)
}

pub fn parse_request(args: &Args) -> Result<Request, AppError> {
    let algo = args.algo.as_deref().map(str::parse::<Algorithm>).transpose()?;

    let (doc_algo, sample) = match (&args.sample_json, &args.input) {
        (Some(json), _) => (None, parse_sample_json(json)?),
        (None, Some(path)) => {
            let doc = parse_cmd_input_doc(&read_input_doc(path)?)?;
            (doc.algorithm, doc.sample)
        }
        (None, None) if args.summary || algo.is_some() => (None, positional_sample(args)),
        (None, None) => return Err(AppError::MissingInputData),
    };

    if args.summary {
        return Ok(Request::Summary {
            sample,
            latitude: args.latitude,
        });
    }

    let algorithm = algo.or(doc_algo).ok_or(AppError::MissingAlgorithm)?;
    Ok(Request::Evaluate(algorithm, sample))
}

pub fn compute(request: &Request) -> CalculationOutput {
    match request {
        Request::Evaluate(algorithm, sample) => CalculationOutput::Evaluation(evaluate(*algorithm, sample)),
        Request::Summary { sample, latitude } => CalculationOutput::Summary(compute_summary(
            sample.v1,
            sample.v2,
            sample.v3,
            *latitude,
            sample.p_ref,
        )),
    }
}

pub fn print_output(out: &CalculationOutput, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    match out {
        CalculationOutput::Evaluation(e) => println!("{}", e),
        CalculationOutput::Summary(s) => {
            println!("Conductivity ratio: {:.5}", s.conductivity_ratio);
            println!("Density: {:.5} kg/m³", s.density_kg_per_m3);
            println!("Depth: {:.5} meter", s.depth_m);
            println!("Freezing point: {:.5} °C", s.freezing_point_c);
            println!("Specific heat: {:.5} J/(kg °C)", s.specific_heat_j_per_kg_c);
            println!("Adiabatic lapse rate: {:.5e} °C/dbar", s.adiabatic_lapse_rate_c_per_dbar);
            println!(
                "Potential temperature: {:.5} °C (at {} dbar)",
                s.potential_temperature_c, s.p_ref_dbar
            );
            println!("Sound speed: {:.5} m/s", s.sound_speed_m_per_s);
        }
    }

    Ok(())
}
