//! Analysis module - the two aggregation tasks

pub mod beliefs;
pub mod priorities;

pub use beliefs::BeliefBreakdown;
pub use priorities::PriorityAnalysis;

use crate::data::ProcessorError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error(transparent)]
    Processor(#[from] ProcessorError),
    #[error("No usable responses after filtering")]
    NoResponses,
}
