//! Survey CSV Loader
//! Reads the raw Qualtrics export with Polars and strips the two metadata
//! rows that follow the header (question text and import identifiers).

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {0}")]
    FileNotFound(String),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Required column missing from export: {0}")]
    MissingColumn(String),
}

/// Load the survey export. Row 0 of the file becomes the header; the two
/// metadata rows are still present in the result and must be removed with
/// [`strip_metadata`].
pub fn load_survey(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.display().to_string()));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    Ok(df)
}

/// Drop the first two data rows (question text, import id) and renumber.
///
/// This is a positional contract of the export format, not a content filter:
/// exactly two rows go, whatever they contain.
pub fn strip_metadata(df: &DataFrame) -> DataFrame {
    df.slice(2, df.height().saturating_sub(2))
}

/// Verify every required raw identifier is present before any task runs.
/// A missing column is unrecoverable; aborting here beats failing later in
/// the middle of an aggregation with an opaque lookup error.
pub fn ensure_columns(df: &DataFrame, required: &[&str]) -> Result<(), LoaderError> {
    for name in required {
        if df.column(name).is_err() {
            log::error!("column {name} not found in survey export");
            return Err(LoaderError::MissingColumn((*name).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "Q47".into(),
                vec!["question text", "ImportId", "Yes", "No", "Yes"],
            ),
            Column::new("Q24_1".into(), vec!["rank text", "ImportId", "1", "2", "3"]),
        ])
        .unwrap()
    }

    #[test]
    fn strip_removes_exactly_two_rows() {
        let df = sample_frame();
        let stripped = strip_metadata(&df);
        assert_eq!(stripped.height(), df.height() - 2);
    }

    #[test]
    fn strip_is_positional() {
        let df = sample_frame();
        let stripped = strip_metadata(&df);
        let first = stripped.column("Q47").unwrap().get(0).unwrap();
        assert_eq!(first.to_string().trim_matches('"'), "Yes");
    }

    #[test]
    fn strip_handles_short_frames() {
        let df = DataFrame::new(vec![Column::new("Q47".into(), vec!["only"])]).unwrap();
        assert_eq!(strip_metadata(&df).height(), 0);
    }

    #[test]
    fn ensure_columns_accepts_present() {
        let df = sample_frame();
        assert!(ensure_columns(&df, &["Q47", "Q24_1"]).is_ok());
    }

    #[test]
    fn ensure_columns_rejects_missing() {
        let df = sample_frame();
        let err = ensure_columns(&df, &["Q47", "Q99"]).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(c) if c == "Q99"));
    }
}
