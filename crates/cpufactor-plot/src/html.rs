//! HTML scatter chart of per-file average CPU count.

use crate::class::FactorClass;
use camino::{Utf8Path, Utf8PathBuf};
use cpufactor_core::SummaryTable;
use std::fmt::{self, Write as _};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to serialize chart data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to format chart: {0}")]
    Format(#[from] fmt::Error),
    #[error("Failed to write {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Layout of the scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub y_title: String,
    /// Fixed y-axis range; points outside it are not drawn
    pub y_range: (f64, f64),
    pub width: u32,
    pub height: u32,
}

impl ChartOptions {
    pub const TITLE: &'static str = "Average Number of CPUs per Slurm File";

    /// Default layout, titled according to whether the table was refactored.
    pub fn for_table(table: &SummaryTable) -> Self {
        let title = if table.refactored {
            format!("{} (Refactored)", Self::TITLE)
        } else {
            Self::TITLE.to_string()
        };
        Self {
            title,
            ..Self::default()
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: Self::TITLE.to_string(),
            y_title: "Average Number of CPUs Used".to_string(),
            y_range: (0.0, 130.0),
            width: 960,
            height: 540,
        }
    }
}

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 120.0;
const Y_TICK_STEP: f64 = 20.0;
const MAX_X_LABELS: usize = 40;

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the scatter chart as an SVG element.
///
/// x is categorical (one slot per file, in table order), y is the average CPU count.
fn render_svg(table: &SummaryTable, options: &ChartOptions) -> Result<String, fmt::Error> {
    let width = options.width as f64;
    let height = options.height as f64;
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let (y_min, y_max) = options.y_range;
    let n = table.len().max(1) as f64;

    let x_of = |i: usize| MARGIN_LEFT + (i as f64 + 0.5) * plot_w / n;
    let y_of = |v: f64| MARGIN_TOP + plot_h * (1.0 - (v - y_min) / (y_max - y_min));

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        options.width, options.height, options.width, options.height
    )?;
    writeln!(
        svg,
        r#"<text class="title" x="{:.1}" y="28" text-anchor="middle">{}</text>"#,
        width / 2.0,
        escape_xml(&options.title)
    )?;

    // Grid and y ticks
    let mut tick = y_min;
    while tick <= y_max {
        let y = y_of(tick);
        writeln!(
            svg,
            r#"<line class="grid" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
            MARGIN_LEFT,
            y,
            width - MARGIN_RIGHT,
            y
        )?;
        writeln!(
            svg,
            r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            tick
        )?;
        tick += Y_TICK_STEP;
    }
    writeln!(
        svg,
        r#"<text class="axis-title" transform="translate(18,{:.1}) rotate(-90)" text-anchor="middle">{}</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        escape_xml(&options.y_title)
    )?;

    // x labels, thinned out when there are many files
    let every = table.len().div_ceil(MAX_X_LABELS).max(1);
    for (i, row) in table.rows().iter().enumerate() {
        if i % every != 0 {
            continue;
        }
        let x = x_of(i);
        let y = MARGIN_TOP + plot_h + 14.0;
        writeln!(
            svg,
            r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="end" transform="rotate(-45 {:.1} {:.1})">{}</text>"#,
            x,
            y,
            x,
            y,
            escape_xml(&row.file)
        )?;
    }

    // Points
    for (i, row) in table.rows().iter().enumerate() {
        if !(y_min..=y_max).contains(&row.avg) {
            continue;
        }
        let class = FactorClass::of(row.factor);
        writeln!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{}"><title>{}: avg {:.2}, factor {}, {} jobs</title></circle>"#,
            x_of(i),
            y_of(row.avg),
            class.css_color(),
            escape_xml(&row.file),
            row.avg,
            row.factor,
            row.len
        )?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Render a self-contained HTML page with the scatter chart (data embedded as JSON).
pub fn render_scatter_html(table: &SummaryTable, options: &ChartOptions) -> Result<String, PlotError> {
    // Keep "</script>" inside file names from closing the data block
    let json = serde_json::to_string(table)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 16px; }
  .title { font-size: 18px; }
  .axis-title { font-size: 14px; fill: #333; }
  .tick { font-size: 11px; fill: #555; }
  .grid { stroke: #eee; stroke-width: 1; }
  circle { stroke: white; stroke-width: 1; }
  circle:hover { r: 8; }
</style>
</head>
<body>
__SVG__
<script type="application/json" id="summary-data">__DATA__</script>
</body>
</html>
"#;

    Ok(TEMPLATE
        .replace("__TITLE__", &escape_xml(&options.title))
        .replace("__SVG__", &render_svg(table, options)?)
        .replace("__DATA__", &json))
}

/// Render the chart and write it to `path`.
pub fn save_scatter_html(
    table: &SummaryTable,
    options: &ChartOptions,
    path: &Utf8Path,
) -> Result<(), PlotError> {
    let html = render_scatter_html(table, options)?;
    std::fs::write(path, html).map_err(|source| PlotError::Io {
        path: path.to_owned(),
        source,
    })?;
    tracing::info!("Wrote chart to {}", path);
    Ok(())
}
