//! Chart Renderer
//! Draws the two report charts as PNG files with Plotters:
//! a grouped bar chart of mean benefit ranks by employment status, and a
//! stacked horizontal bar chart of earnings-belief percentages by program.

use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;
use polars::prelude::*;
use thiserror::Error;

use crate::analysis::BeliefBreakdown;
use crate::schema;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Backend(String),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

fn backend_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Backend(e.to_string())
}

/// Bar colors for employment groups.
const GROUP_PALETTE: [RGBColor; 6] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
];

/// Diverging palette for the five-point scale, most agreement first.
const LIKERT_PALETTE: [RGBColor; 5] = [
    RGBColor(27, 120, 55),   // Definitely yes
    RGBColor(127, 191, 123), // Probably yes
    RGBColor(247, 209, 61),  // Might or might not
    RGBColor(239, 138, 98),  // Probably not
    RGBColor(178, 24, 43),   // Definitely not
];

/// Out-of-scale belief levels.
const UNKNOWN_LEVEL_COLOR: RGBColor = RGBColor(140, 140, 140);

fn level_color(level: &str) -> RGBColor {
    schema::LIKERT_LEVELS
        .iter()
        .position(|known| *known == level)
        .map(|idx| LIKERT_PALETTE[idx])
        .unwrap_or(UNKNOWN_LEVEL_COLOR)
}

/// Render the task 1 grouped bar chart from the long-form frame
/// (["Work in CPA Firm", "Benefit", "Rank"]). Bar height is the mean rank,
/// recomputed here from the respondent-level rows; no error bars.
pub fn render_priority_chart(long: &DataFrame, path: &Path) -> Result<(), ChartError> {
    let group_col = long.column(schema::EMPLOYMENT_LABEL)?;
    let benefit_col = long.column("Benefit")?;
    let rank_ca = long.column("Rank")?.f64()?;

    // group -> benefit -> (sum, count)
    let mut accum: BTreeMap<String, BTreeMap<String, (f64, usize)>> = BTreeMap::new();
    for i in 0..long.height() {
        let (g, b) = (group_col.get(i)?, benefit_col.get(i)?);
        if let Some(rank) = rank_ca.get(i) {
            let group = g.to_string().trim_matches('"').to_string();
            let benefit = b.to_string().trim_matches('"').to_string();
            let cell = accum.entry(group).or_default().entry(benefit).or_default();
            cell.0 += rank;
            cell.1 += 1;
        }
    }

    let groups: Vec<String> = accum.keys().cloned().collect();
    let benefits = schema::ranking_labels();

    let mut y_max = 0f64;
    for per_benefit in accum.values() {
        for (sum, count) in per_benefit.values() {
            y_max = y_max.max(sum / *count as f64);
        }
    }
    let y_max = (y_max * 1.15).max(1.0);

    let root = BitMapBackend::new(path, (1280, 900)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Average Rank of Graduate Program Benefits by Employment Status (Lower is Higher Priority)",
            ("sans-serif", 22),
        )
        .margin(14)
        .x_label_area_size(250)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..benefits.len() as f64, 0f64..y_max)
        .map_err(backend_err)?;

    let tick_labels = benefits.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(benefits.len())
        .x_label_formatter(&move |x| {
            let idx = x.floor() as usize;
            tick_labels.get(idx).cloned().unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc("Benefit Category")
        .y_desc("Average Rank")
        .draw()
        .map_err(backend_err)?;

    let cluster = 0.8; // width of the bar cluster within each benefit slot
    let bar_width = cluster / groups.len() as f64;

    for (gi, group) in groups.iter().enumerate() {
        let color = GROUP_PALETTE[gi % GROUP_PALETTE.len()];
        let per_benefit = &accum[group];

        let bars: Vec<Rectangle<(f64, f64)>> = benefits
            .iter()
            .enumerate()
            .filter_map(|(bi, benefit)| {
                per_benefit.get(benefit).map(|(sum, count)| {
                    let mean = sum / *count as f64;
                    let x0 = bi as f64 + (1.0 - cluster) / 2.0 + gi as f64 * bar_width;
                    let x1 = x0 + bar_width * 0.92;
                    Rectangle::new([(x0, 0.0), (x1, mean)], color.filled())
                })
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(backend_err)?
            .label(group.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

/// Render the task 2 stacked horizontal bar chart: one bar per program type,
/// one segment per belief level, cumulative length 100.
pub fn render_belief_chart(breakdown: &BeliefBreakdown, path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (1280, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let n_programs = breakdown.programs.len();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Belief in Higher Lifetime Earnings by Program Type",
            ("sans-serif", 24),
        )
        .margin(14)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..100f64, 0f64..n_programs as f64)
        .map_err(backend_err)?;

    let program_labels = breakdown.programs.clone();
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n_programs)
        .y_label_formatter(&move |y| {
            let idx = y.floor() as usize;
            program_labels.get(idx).cloned().unwrap_or_default()
        })
        .x_desc("Percentage")
        .y_desc("Program Type")
        .draw()
        .map_err(backend_err)?;

    // Per-program running offset so segments stack left to right.
    let mut offsets = vec![0f64; n_programs];

    for (j, level) in breakdown.levels.iter().enumerate() {
        let color = level_color(level);

        let segments: Vec<Rectangle<(f64, f64)>> = (0..n_programs)
            .filter_map(|i| {
                let value = breakdown.cells[i][j];
                if value <= 0.0 {
                    return None;
                }
                let start = offsets[i];
                offsets[i] += value;
                let y0 = i as f64 + 0.25;
                let y1 = i as f64 + 0.75;
                Some(Rectangle::new(
                    [(start, y0), (start + value, y1)],
                    color.filled(),
                ))
            })
            .collect();

        chart
            .draw_series(segments)
            .map_err(backend_err)?
            .label(level.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}
