//! Data Processor
//! Projection, renaming, numeric coercion and complete-case filtering of the
//! cleaned response table, plus the long-form reshape used for charting.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// A value is missing when it is null or a coerced-to-NaN float.
fn is_missing(value: &AnyValue) -> bool {
    value.is_null() || matches!(value, AnyValue::Float64(v) if v.is_nan())
}

fn to_label(value: &AnyValue) -> String {
    value.to_string().trim_matches('"').to_string()
}

/// Project the fixed raw identifiers and rename them to display labels.
pub fn project(df: &DataFrame, mapping: &[(&str, &str)]) -> Result<DataFrame, ProcessorError> {
    let ids: Vec<&str> = mapping.iter().map(|(id, _)| *id).collect();
    let mut out = df.select(ids)?;
    for &(id, label) in mapping {
        out.rename(id, label.into())?;
    }
    Ok(out)
}

/// Cast the named columns to Float64; unparseable values become null.
pub fn coerce_numeric(df: &DataFrame, labels: &[String]) -> Result<DataFrame, ProcessorError> {
    let mut out = df.clone();
    for label in labels {
        let casted = out.column(label)?.cast(&DataType::Float64)?;
        out.with_column(casted)?;
    }
    Ok(out)
}

/// Keep only rows with every named column present. A row missing any required
/// value is excluded entirely, never partially.
pub fn complete_cases(df: &DataFrame, labels: &[String]) -> Result<DataFrame, ProcessorError> {
    let columns: Vec<&Column> = labels
        .iter()
        .map(|label| df.column(label))
        .collect::<PolarsResult<_>>()?;

    let mut keep = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let mut complete = true;
        for col in &columns {
            if is_missing(&col.get(i)?) {
                complete = false;
                break;
            }
        }
        keep.push(complete);
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Reshape to long form: one output row per respondent x value column.
///
/// Output columns: [id_label, "Benefit", "Rank"]
pub fn melt(
    df: &DataFrame,
    id_label: &str,
    value_labels: &[String],
) -> Result<DataFrame, ProcessorError> {
    let mut groups: Vec<String> = Vec::new();
    let mut benefits: Vec<String> = Vec::new();
    let mut ranks: Vec<f64> = Vec::new();

    let group_col = df.column(id_label)?;

    for label in value_labels {
        let value_col = df.column(label)?.cast(&DataType::Float64)?;
        let value_ca = value_col.f64()?;

        for i in 0..df.height() {
            if let (Ok(g), Some(v)) = (group_col.get(i), value_ca.get(i)) {
                if !v.is_nan() && !g.is_null() {
                    groups.push(to_label(&g));
                    benefits.push(label.clone());
                    ranks.push(v);
                }
            }
        }
    }

    let df = DataFrame::new(vec![
        Column::new(id_label.into(), groups),
        Column::new("Benefit".into(), benefits),
        Column::new("Rank".into(), ranks),
    ])?;

    Ok(df)
}
