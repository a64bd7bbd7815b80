//! Footer component with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help = "h/l:select  g/G:first/last  r:raw/refactored  q:quit";
        let version = format!("v{}", VERSION);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(version.len() as u16 + 1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(help, Style::default().fg(Color::Gray)))),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                version,
                Style::default().fg(Color::Gray),
            ))),
            chunks[1],
        );
    }
}
