//! Scatter charts of per-file average CPU usage, colored by factor.
//!
//! Two renderers share the same classification: a self-contained HTML page
//! and an interactive terminal viewer.

pub mod app;
pub mod class;
pub mod components;
pub mod html;
pub mod ui;

pub use app::{App, TableMode};
pub use class::FactorClass;
pub use html::{ChartOptions, PlotError, render_scatter_html, save_scatter_html};
pub use ui::Theme;
