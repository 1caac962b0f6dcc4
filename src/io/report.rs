//! Final results report.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::SolverResult;
use crate::sa::{AnnealConfig, AnnealResult};

/// Human-readable report of a finished run.
///
/// Renders the configured temperature schedule, the aggregate score
/// statistics, and the full room-by-room listing, one room per line.
/// "Best" is the lowest room score and "Worst" the highest.
pub struct Report<'a> {
    result: &'a AnnealResult,
    config: &'a AnnealConfig,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnnealResult, config: &'a AnnealConfig) -> Self {
        Self { result, config }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.result.summary;
        writeln!(f, "Final Results:")?;
        writeln!(f, "Initial T value: {}", self.config.initial_temperature)?;
        writeln!(f, "Cooling schedule: {}", self.config.cooling_factor)?;
        writeln!(f, "Average Score: {:.2}", summary.mean)?;
        writeln!(f, "Best Score: {}", summary.min)?;
        writeln!(f, "Worst Score: {}", summary.max)?;
        writeln!(f)?;
        writeln!(f, "Final Room Assignment:")?;
        for (idx, room) in self.result.assignment.rooms().iter().enumerate() {
            let members = room
                .members()
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "Room #{}   Compatibility Score: {}   {}",
                idx + 1,
                room.score(),
                members
            )?;
        }
        Ok(())
    }
}

/// Writes the rendered report to any writer.
pub fn write_report<W: Write>(
    mut writer: W,
    result: &AnnealResult,
    config: &AnnealConfig,
) -> SolverResult<()> {
    write!(writer, "{}", Report::new(result, config))?;
    Ok(())
}

/// Creates `path` and writes the report into it.
pub fn save_report(path: &Path, result: &AnnealResult, config: &AnnealConfig) -> SolverResult<()> {
    write_report(File::create(path)?, result, config)
}
