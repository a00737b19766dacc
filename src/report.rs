//! Summary Writer
//! Serializes both aggregation tables into one labeled text file in a single
//! write pass. The file handle is scoped to the function, so it closes on
//! error paths as well.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write summary: {0}")]
    Io(#[from] std::io::Error),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

pub const TASK1_HEADER: &str =
    "Task 1: Mean Ranks by Employment Status (Lower = Higher Priority)";
pub const TASK2_HEADER: &str =
    "Task 2: Percentage Belief in Higher Lifetime Earnings by Program Type";

/// Write the combined summary, overwriting any existing file. Layout:
/// task-1 header, mean-rank table as CSV, blank line, task-2 header,
/// percentage table as CSV.
pub fn write_summary(
    path: &Path,
    mean_ranks: &DataFrame,
    belief_percentages: &DataFrame,
) -> Result<(), ReportError> {
    let mut file = File::create(path)?;

    writeln!(file, "{}", TASK1_HEADER)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut mean_ranks.clone())?;

    writeln!(file)?;
    writeln!(file, "{}", TASK2_HEADER)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut belief_percentages.clone())?;

    Ok(())
}
