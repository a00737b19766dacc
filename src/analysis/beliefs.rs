//! Task 2: Lifetime Earnings Belief by Program Type
//! Row-normalized cross-tabulation of the five-point earnings-belief scale
//! for MAcc and MBA respondents.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::*;

use super::AnalysisError;
use crate::data::project;
use crate::schema;

/// Task 2 output: percentage breakdown per program type, with belief levels
/// in canonical scale order.
pub struct BeliefBreakdown {
    /// Program types in table row order.
    pub programs: Vec<String>,
    /// Belief levels in column order: canonical scale first, then any
    /// out-of-scale labels.
    pub levels: Vec<String>,
    /// cells[program][level], row percentages summing to 100.
    pub cells: Vec<Vec<f64>>,
    /// The same breakdown as a DataFrame for the summary file.
    pub table: DataFrame,
}

/// Run the earnings-belief analysis over the cleaned response table.
pub fn analyze(responses: &DataFrame) -> Result<BeliefBreakdown, AnalysisError> {
    let subset = project(
        responses,
        &[
            (schema::PROGRAM_FIELD, schema::PROGRAM_LABEL),
            (schema::BELIEF_FIELD, schema::BELIEF_LABEL),
        ],
    )?;

    let program_col = subset.column(schema::PROGRAM_LABEL)?;
    let belief_col = subset.column(schema::BELIEF_LABEL)?;

    // program -> belief -> count, program -> total
    let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut totals: BTreeMap<String, usize> = BTreeMap::new();
    let mut observed: BTreeSet<String> = BTreeSet::new();

    for i in 0..subset.height() {
        let p = program_col.get(i)?;
        let b = belief_col.get(i)?;
        if p.is_null() || b.is_null() {
            continue;
        }
        let program = p.to_string().trim_matches('"').to_string();
        if !schema::PROGRAM_TYPES.contains(&program.as_str()) {
            continue;
        }
        let belief = b.to_string().trim_matches('"').to_string();
        observed.insert(belief.clone());
        *counts
            .entry(program.clone())
            .or_default()
            .entry(belief)
            .or_default() += 1;
        *totals.entry(program).or_default() += 1;
    }

    if counts.is_empty() {
        return Err(AnalysisError::NoResponses);
    }

    let levels = order_levels(&observed);
    let programs: Vec<String> = counts.keys().cloned().collect();

    let cells: Vec<Vec<f64>> = programs
        .iter()
        .map(|program| {
            let row = &counts[program];
            let total = totals[program] as f64;
            levels
                .iter()
                .map(|level| 100.0 * row.get(level).copied().unwrap_or(0) as f64 / total)
                .collect()
        })
        .collect();

    let mut columns = vec![Column::new(schema::PROGRAM_LABEL.into(), programs.clone())];
    for (j, level) in levels.iter().enumerate() {
        let values: Vec<f64> = cells.iter().map(|row| row[j]).collect();
        columns.push(Column::new(level.as_str().into(), values));
    }
    let table = DataFrame::new(columns)?;

    Ok(BeliefBreakdown {
        programs,
        levels,
        cells,
        table,
    })
}

/// Canonical scale labels that actually occur, in scale order, then any
/// out-of-scale labels in their lexical (table-default) order.
pub fn order_levels(observed: &BTreeSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = schema::LIKERT_LEVELS
        .iter()
        .filter(|level| observed.contains(**level))
        .map(|level| (*level).to_string())
        .collect();
    ordered.extend(
        observed
            .iter()
            .filter(|level| !schema::LIKERT_LEVELS.contains(&level.as_str()))
            .cloned(),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[(&str, &str)]) -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "Q58".into(),
                rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            ),
            Column::new(
                "Q44".into(),
                rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            ),
        ])
        .unwrap()
    }

    fn set(levels: &[&str]) -> BTreeSet<String> {
        levels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn row_percentages_sum_to_100() {
        let df = frame(&[
            ("MAcc", "Definitely yes"),
            ("MAcc", "Probably yes"),
            ("MAcc", "Probably yes"),
            ("MBA", "Definitely not"),
            ("MBA", "Might or might not"),
        ]);
        let breakdown = analyze(&df).unwrap();
        for row in &breakdown.cells {
            let sum: f64 = row.iter().sum();
            assert!((sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn cells_follow_the_count_formula() {
        let df = frame(&[
            ("MAcc", "Definitely yes"),
            ("MAcc", "Definitely yes"),
            ("MAcc", "Probably yes"),
            ("MAcc", "Probably not"),
        ]);
        let breakdown = analyze(&df).unwrap();
        assert_eq!(breakdown.programs, vec!["MAcc"]);
        assert_eq!(
            breakdown.levels,
            vec!["Definitely yes", "Probably yes", "Probably not"]
        );
        assert_eq!(breakdown.cells[0], vec![50.0, 25.0, 25.0]);
    }

    #[test]
    fn other_program_types_are_fully_excluded() {
        let df = frame(&[
            ("MAcc", "Definitely yes"),
            ("MBA", "Probably yes"),
            ("PhD", "Definitely yes"),
            ("PhD", "Probably not"),
        ]);
        let breakdown = analyze(&df).unwrap();
        assert_eq!(breakdown.programs, vec!["MAcc", "MBA"]);
        // "Probably not" only occurred for PhD rows, so it must not appear.
        assert_eq!(breakdown.levels, vec!["Definitely yes", "Probably yes"]);
    }

    #[test]
    fn canonical_levels_come_first_in_scale_order() {
        let observed = set(&["Probably not", "Definitely yes", "Might or might not"]);
        assert_eq!(
            order_levels(&observed),
            vec!["Definitely yes", "Might or might not", "Probably not"]
        );
    }

    #[test]
    fn unknown_levels_sort_after_the_scale() {
        let observed = set(&["Unsure", "Definitely not", "Definitely yes"]);
        assert_eq!(
            order_levels(&observed),
            vec!["Definitely yes", "Definitely not", "Unsure"]
        );
    }
}
