//! Main TUI application.

use crate::components::{Footer, Header, ScatterChart};
use crate::ui::Theme;
use cpufactor_core::{SummaryRow, SummaryTable};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use std::time::Duration;

/// Which summary table the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    #[default]
    Raw,
    Refactored,
}

impl TableMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Raw => Self::Refactored,
            Self::Refactored => Self::Raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Refactored => "Refactored",
        }
    }
}

/// Main application state.
pub struct App {
    pub dir: String,
    pub raw: SummaryTable,
    pub refactored: SummaryTable,
    pub mode: TableMode,
    pub selected_index: usize,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(dir: impl Into<String>, raw: SummaryTable, refactored: SummaryTable) -> Self {
        Self {
            dir: dir.into(),
            raw,
            refactored,
            mode: TableMode::default(),
            selected_index: 0,
            should_quit: false,
            theme: Theme::dark(),
        }
    }

    pub fn with_mode(mut self, mode: TableMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Table for the current mode.
    pub fn table(&self) -> &SummaryTable {
        match self.mode {
            TableMode::Raw => &self.raw,
            TableMode::Refactored => &self.refactored,
        }
    }

    pub fn selected_row(&self) -> Option<&SummaryRow> {
        self.table().rows().get(self.selected_index)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    pub fn select_next(&mut self) {
        let len = self.table().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.table().len().saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Right | KeyCode::Down => {
                self.select_next()
            }
            KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::Left | KeyCode::Up => {
                self.select_previous()
            }
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Char('r') | KeyCode::Tab => self.toggle_mode(),
            _ => {}
        }
    }

    pub fn poll_events(&mut self, timeout: Duration) -> std::io::Result<bool> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Chart
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        Header::render(
            frame,
            chunks[0],
            &self.dir,
            self.mode.label(),
            self.selected_row(),
            &self.theme,
        );
        let selected = self.selected_row().map(|_| self.selected_index);
        ScatterChart::render(frame, chunks[1], self.table(), selected, &self.theme);
        Footer::render(frame, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpufactor_core::Factor;
    use ratatui::{Terminal, backend::TestBackend};

    fn tables() -> (SummaryTable, SummaryTable) {
        let raw = SummaryTable::new(
            vec![
                SummaryRow {
                    file: "2017-01.log".to_string(),
                    len: 2,
                    avg: 12.0,
                    factor: Factor::Gcd(8.0),
                },
                SummaryRow {
                    file: "2017-02.log".to_string(),
                    len: 3,
                    avg: 3.0,
                    factor: Factor::Half,
                },
            ],
            false,
        );
        let mut refactored = raw.clone();
        refactored.refactored = true;
        refactored.rows[0].avg = 6.0;
        refactored.rows[1].avg = 6.0;
        (raw, refactored)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_table_mode_toggle() {
        assert_eq!(TableMode::Raw.toggle(), TableMode::Refactored);
        assert_eq!(TableMode::Refactored.toggle(), TableMode::Raw);
    }

    #[test]
    fn test_toggle_switches_table() {
        let (raw, refactored) = tables();
        let mut app = App::new("data/nots", raw, refactored);
        assert_eq!(app.selected_row().unwrap().avg, 12.0);

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.mode, TableMode::Refactored);
        assert_eq!(app.selected_row().unwrap().avg, 6.0);
    }

    #[test]
    fn test_selection_bounds() {
        let (raw, refactored) = tables();
        let mut app = App::new("data/nots", raw, refactored);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.selected_index, 0);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selected_index, 1);
        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.selected_index, 0);
        app.handle_key(key(KeyCode::Char('G')));
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_quit_keys() {
        let (raw, refactored) = tables();
        let mut app = App::new("data/nots", raw.clone(), refactored.clone());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new("data/nots", raw, refactored);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render() {
        let (raw, refactored) = tables();
        let app = App::new("data/nots", raw, refactored);
        let text = screen(&app);
        assert!(text.contains("cpufactor"));
        assert!(text.contains("data/nots"));
        assert!(text.contains("Average Number of CPUs per Slurm File"));
        assert!(text.contains("2017-01.log"));
        assert!(text.contains("factor 8"));

        let app = app.with_mode(TableMode::Refactored);
        assert!(screen(&app).contains("(Refactored)"));
    }

    #[test]
    fn test_render_empty() {
        let app = App::new("data/nots", SummaryTable::default(), SummaryTable::default());
        assert!(app.selected_row().is_none());
        assert!(screen(&app).contains("No accounting logs found"));
    }
}
