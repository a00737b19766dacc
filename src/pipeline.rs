//! Pipeline Orchestration
//! Runs the six stages in order: load, strip metadata, validate columns,
//! task 1 (priorities), task 2 (earnings belief), summary.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::analysis::{beliefs, priorities};
use crate::charts;
use crate::data;
use crate::report;
use crate::schema;

/// Output artifact locations for one run.
pub struct ArtifactPaths {
    pub priorities_chart: PathBuf,
    pub beliefs_chart: PathBuf,
    pub summary: PathBuf,
}

impl ArtifactPaths {
    /// The fixed artifact names, rooted in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            priorities_chart: dir.join("task1_priorities.png"),
            beliefs_chart: dir.join("task2_earnings.png"),
            summary: dir.join("results_summary.csv"),
        }
    }
}

/// Execute the full analysis over one survey export.
pub fn run(input: &Path, artifacts: &ArtifactPaths) -> anyhow::Result<()> {
    let raw = data::load_survey(input)?;
    let responses = data::strip_metadata(&raw);
    info!(
        "loaded {} response rows from {}",
        responses.height(),
        input.display()
    );

    data::ensure_columns(&responses, &schema::required_fields())?;

    info!("starting task 1");
    let priority = priorities::analyze(&responses).context("task 1 aggregation failed")?;
    charts::render_priority_chart(&priority.long, &artifacts.priorities_chart)
        .context("task 1 chart rendering failed")?;
    info!(
        "task 1 complete, saved {}",
        artifacts.priorities_chart.display()
    );

    info!("starting task 2");
    let belief = beliefs::analyze(&responses).context("task 2 aggregation failed")?;
    charts::render_belief_chart(&belief, &artifacts.beliefs_chart)
        .context("task 2 chart rendering failed")?;
    info!(
        "task 2 complete, saved {}",
        artifacts.beliefs_chart.display()
    );

    report::write_summary(&artifacts.summary, &priority.means, &belief.table)
        .context("summary writing failed")?;
    info!("summary saved to {}", artifacts.summary.display());

    Ok(())
}
