//! Batch analysis of the Alternative CPA Pathways survey export.
//!
//! Load the CSV export, drop the two Qualtrics metadata rows, then produce
//! three artifacts: a grouped bar chart of mean benefit ranks by employment
//! status, a stacked bar chart of earnings-belief percentages by program
//! type, and a combined text summary of both tables.

pub mod analysis;
pub mod charts;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod schema;
