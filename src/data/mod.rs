//! Data module - survey CSV loading and response-table processing

pub mod loader;
pub mod processor;

pub use loader::{ensure_columns, load_survey, strip_metadata, LoaderError};
pub use processor::{coerce_numeric, complete_cases, melt, project, ProcessorError};
