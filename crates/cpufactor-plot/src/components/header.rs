//! Header component with the selected file's summary.

use crate::class::FactorClass;
use crate::ui::Theme;
use cpufactor_core::SummaryRow;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct Header;

impl Header {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        dir: &str,
        mode_label: &str,
        selected: Option<&SummaryRow>,
        theme: &Theme,
    ) {
        let title = Line::from(vec![
            Span::raw("cpufactor"),
            Span::styled(" │ ", Style::default().fg(theme.muted)),
            Span::styled(dir.to_string(), Style::default().fg(theme.highlight)),
        ]);
        let mode = Line::from(Span::styled(
            mode_label.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);

        let body = match selected {
            Some(row) => {
                let class = FactorClass::of(row.factor);
                Line::from(vec![
                    Span::styled(
                        row.file.clone(),
                        Style::default()
                            .fg(theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  jobs {}  avg {:.2}  ", row.len, row.avg)),
                    Span::styled(
                        format!("factor {} ({})", row.factor, class.label()),
                        Style::default().fg(theme.class_color(class)),
                    ),
                ])
            }
            None => Line::from(Span::styled(
                "No accounting logs found",
                Style::default().fg(theme.muted),
            )),
        };

        let paragraph = Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_top(mode),
        );
        frame.render_widget(paragraph, area);
    }
}
