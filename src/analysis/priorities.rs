//! Task 1: Program Priorities by Employment Status
//! Mean rank of each graduate-program benefit, grouped by whether the
//! respondent currently works in a CPA firm. Lower rank = higher priority.

use std::collections::BTreeMap;

use polars::prelude::*;

use super::AnalysisError;
use crate::data::{coerce_numeric, complete_cases, melt, project};
use crate::schema;

/// Task 1 output: the mean-rank table for the summary and the respondent-level
/// long form the chart aggregates from.
pub struct PriorityAnalysis {
    /// One row per employment value (sorted), one column per benefit label.
    pub means: DataFrame,
    /// Columns: ["Work in CPA Firm", "Benefit", "Rank"].
    pub long: DataFrame,
}

/// Run the priority analysis over the cleaned response table (metadata rows
/// already stripped, raw identifiers still in place).
pub fn analyze(responses: &DataFrame) -> Result<PriorityAnalysis, AnalysisError> {
    let mut mapping = vec![(schema::EMPLOYMENT_FIELD, schema::EMPLOYMENT_LABEL)];
    mapping.extend_from_slice(&schema::RANKING_FIELDS);

    let rank_labels = schema::ranking_labels();
    let mut required = vec![schema::EMPLOYMENT_LABEL.to_string()];
    required.extend(rank_labels.iter().cloned());

    let subset = project(responses, &mapping)?;
    let coerced = coerce_numeric(&subset, &rank_labels)?;
    let filtered = complete_cases(&coerced, &required)?;

    if filtered.height() == 0 {
        return Err(AnalysisError::NoResponses);
    }

    let means = mean_ranks(&filtered, &rank_labels)?;
    let long = melt(&filtered, schema::EMPLOYMENT_LABEL, &rank_labels)?;

    Ok(PriorityAnalysis { means, long })
}

/// Arithmetic mean of each ranking column per employment group. Rows are
/// complete cases, so one count per group covers every column.
fn mean_ranks(df: &DataFrame, rank_labels: &[String]) -> Result<DataFrame, AnalysisError> {
    let group_col = df.column(schema::EMPLOYMENT_LABEL)?;
    let rank_cas: Vec<Float64Chunked> = rank_labels
        .iter()
        .map(|label| Ok(df.column(label)?.f64()?.clone()))
        .collect::<Result<_, AnalysisError>>()?;

    // group -> (per-benefit sums, respondent count); BTreeMap keeps the row
    // order deterministic across runs.
    let mut accum: BTreeMap<String, (Vec<f64>, usize)> = BTreeMap::new();

    for i in 0..df.height() {
        let g = group_col.get(i)?;
        let group = g.to_string().trim_matches('"').to_string();
        let entry = accum
            .entry(group)
            .or_insert_with(|| (vec![0.0; rank_labels.len()], 0));
        for (j, ca) in rank_cas.iter().enumerate() {
            if let Some(v) = ca.get(i) {
                entry.0[j] += v;
            }
        }
        entry.1 += 1;
    }

    let groups: Vec<String> = accum.keys().cloned().collect();
    let mut columns = vec![Column::new(schema::EMPLOYMENT_LABEL.into(), groups)];
    for (j, label) in rank_labels.iter().enumerate() {
        let means: Vec<f64> = accum
            .values()
            .map(|(sums, count)| sums[j] / *count as f64)
            .collect();
        columns.push(Column::new(label.as_str().into(), means));
    }

    Ok(DataFrame::new(columns)?)
}
