use std::sync::Arc;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use sayt_client::{SearchController, Suggestion};

use crate::input::SearchInput;
use crate::theme::Theme;
use crate::toast::StatusToast;

/// Presentation settings for the search surface.
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    /// Title shown next to the query prompt; falls back to the provider
    /// label.
    pub input_title: Option<String>,
    pub provider_label: String,
    pub initial_query: String,
}

/// Aggregate state for the terminal surface: the controller plus the UI
/// affordances (cursor, selection, spinner, toast) layered on top of it.
pub struct App {
    pub(crate) controller: SearchController,
    pub(crate) input: SearchInput,
    pub(crate) table_state: TableState,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) toast: Arc<StatusToast>,
    pub(crate) theme: Theme,
    pub(crate) ui: UiConfig,
}

impl App {
    pub fn new(controller: SearchController, toast: Arc<StatusToast>, ui: UiConfig) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let input = SearchInput::new(ui.initial_query.clone());
        Self {
            controller,
            input,
            table_state,
            throbber_state: ThrobberState::default(),
            toast,
            theme: Theme::default(),
            ui,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub(crate) fn prompt_label(&self) -> &str {
        self.ui
            .input_title
            .as_deref()
            .unwrap_or(self.ui.provider_label.as_str())
    }

    pub(crate) fn selection(&self) -> Option<Suggestion> {
        let index = self.table_state.selected()?;
        self.controller.store().results().get(index).cloned()
    }

    /// Keep the highlighted row inside the committed result list after each
    /// pump.
    pub(crate) fn ensure_selection(&mut self) {
        let len = self.controller.store().results().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        match self.table_state.selected() {
            Some(selected) if selected < len => {}
            _ => self.table_state.select(Some(0)),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.controller.dispose();
    }
}
