//! Scatter chart of average CPU count per file.

use crate::class::FactorClass;
use crate::html::ChartOptions;
use crate::ui::Theme;
use cpufactor_core::SummaryTable;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

pub struct ScatterChart;

impl ScatterChart {
    /// Points per color class, x being the file's position in the table.
    pub fn points(table: &SummaryTable) -> Vec<(FactorClass, Vec<(f64, f64)>)> {
        FactorClass::ALL
            .iter()
            .map(|&class| {
                let points = table
                    .rows()
                    .iter()
                    .enumerate()
                    .filter(|(_, row)| FactorClass::of(row.factor) == class)
                    .map(|(i, row)| (i as f64, row.avg))
                    .collect();
                (class, points)
            })
            .collect()
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        table: &SummaryTable,
        selected: Option<usize>,
        theme: &Theme,
    ) {
        let options = ChartOptions::for_table(table);
        let (y_min, y_max) = options.y_range;

        let class_points = Self::points(table);
        let selected_point: Vec<(f64, f64)> = selected
            .and_then(|i| table.rows().get(i).map(|row| (i as f64, row.avg)))
            .into_iter()
            .collect();

        let mut datasets: Vec<Dataset> = class_points
            .iter()
            .map(|(class, points)| {
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(theme.class_color(*class)))
                    .data(points)
            })
            .collect();
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(theme.highlight))
                .data(&selected_point),
        );

        let n = table.len();
        let x_bounds = if n > 0 {
            [-0.5, n as f64 - 0.5]
        } else {
            [0.0, 1.0]
        };
        let x_labels: Vec<Span> = match table.rows() {
            [] => vec![],
            [only] => vec![Span::raw(only.file.clone())],
            [first, .., last] => vec![
                Span::raw(first.file.clone()),
                Span::raw(table.rows()[n / 2].file.clone()),
                Span::raw(last.file.clone()),
            ],
        };

        let axis_style = Style::default().fg(theme.muted);
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        options.title,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
            )
            .x_axis(
                Axis::default()
                    .title("File")
                    .style(axis_style)
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(options.y_title)
                    .style(axis_style)
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format!("{}", y_min)),
                        Span::raw(format!("{}", (y_min + y_max) / 2.0)),
                        Span::raw(format!("{}", y_max)),
                    ]),
            );

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpufactor_core::{Factor, SummaryRow};

    #[test]
    fn test_points_by_class() {
        let rows = [
            (12.0, Factor::Gcd(1.0)),
            (48.0, Factor::Gcd(4.0)),
            (3.0, Factor::Half),
            (20.0, Factor::Gcd(1.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (avg, factor))| SummaryRow {
            file: format!("{i}.log"),
            len: 1,
            avg,
            factor,
        })
        .collect();
        let table = SummaryTable::new(rows, false);

        let points = ScatterChart::points(&table);
        assert_eq!(points[0].0, FactorClass::Unit);
        assert_eq!(points[0].1, vec![(0.0, 12.0), (3.0, 20.0)]);
        assert_eq!(points[1].1, vec![(1.0, 48.0)]);
        assert_eq!(points[2].1, vec![(2.0, 3.0)]);
    }
}
