//! room-anneal CLI.
//!
//! Reads a pairwise compatibility table, runs the annealing search, and
//! writes the final room assignment report. Input and output paths are
//! optional positional arguments defaulting to the classic file names.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use room_anneal::error::SolverResult;
use room_anneal::io::{load_matrix, save_report};
use room_anneal::sa::{AnnealConfig, AnnealRunner};

const DEFAULT_INPUT: &str = "roommates.txt";
const DEFAULT_OUTPUT: &str = "results.txt";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    match run(Path::new(&input), Path::new(&output)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("room-anneal: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path) -> SolverResult<()> {
    let matrix = load_matrix(input)?;
    let config = AnnealConfig::default();

    println!("Beginning simulated annealing...");
    let result = AnnealRunner::run(&matrix, &config)?;
    save_report(output, &result, &config)?;

    println!("Search completed...");
    println!("Results printed to {}", output.display());
    Ok(())
}
