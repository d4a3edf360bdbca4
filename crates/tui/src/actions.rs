use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::outcome::SearchOutcome;

impl App {
    /// Route a key press; returns an outcome when the picker should close.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Esc => Some(SearchOutcome {
                accepted: false,
                query: self.input.text().to_string(),
                selection: None,
            }),
            KeyCode::Enter => Some(SearchOutcome {
                accepted: true,
                query: self.input.text().to_string(),
                selection: self.selection(),
            }),
            KeyCode::Up => {
                self.move_selection_up();
                None
            }
            KeyCode::Down => {
                self.move_selection_down();
                None
            }
            _ => {
                if self.input.input(key) {
                    // Every edit is a raw query-change event; supersession in
                    // the controller takes the place of debouncing.
                    self.toast.clear();
                    let query = self.input.text().to_string();
                    self.controller.on_query_change(&query);
                }
                None
            }
        }
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let len = self.controller.store().results().len();
            if selected + 1 < len {
                self.table_state.select(Some(selected + 1));
            }
        }
    }
}
