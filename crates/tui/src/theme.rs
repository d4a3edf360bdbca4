use ratatui::style::{Color, Modifier, Style};

/// Styling for the search surface.
#[derive(Debug, Clone)]
pub struct Theme {
    prompt: Style,
    muted: Style,
    header: Style,
    row_highlight: Style,
    toast: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt: Style::default().fg(Color::Cyan),
            muted: Style::default().fg(Color::DarkGray),
            header: Style::default().add_modifier(Modifier::BOLD),
            row_highlight: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            toast: Style::default().fg(Color::Red),
        }
    }
}

impl Theme {
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    pub fn muted_style(&self) -> Style {
        self.muted
    }

    pub fn header_style(&self) -> Style {
        self.header
    }

    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    pub fn toast_style(&self) -> Style {
        self.toast
    }
}
