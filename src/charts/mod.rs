//! Charts module - static chart rendering

pub mod renderer;

pub use renderer::{render_belief_chart, render_priority_chart, ChartError};
