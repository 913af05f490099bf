#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, compute, init_logging, parse_request, print_output};

    let args = Args::parse();
    init_logging(&args)?;

    let request = parse_request(&args)?;
    let out = compute(&request);

    print_output(&out, &args)?;

    Ok(())
}
