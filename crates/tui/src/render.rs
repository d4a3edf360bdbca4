use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 2;

pub(crate) fn draw(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_input_row(frame, app, rows[0]);
    draw_results(frame, app, rows[1]);
    draw_status_line(frame, app, rows[2]);
}

fn draw_input_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let prompt = format!("{} > ", app.prompt_label());
    let prompt_width = prompt.width() as u16;

    let line = Line::from(vec![
        Span::styled(prompt, app.theme.prompt_style()),
        Span::raw(app.input.text().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if app.controller.store().is_loading() {
        draw_spinner(frame, app, area);
    }

    let cursor_x = area
        .x
        .saturating_add(prompt_width)
        .saturating_add(app.input.cursor_offset());
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

fn draw_spinner(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 2 {
        return;
    }
    let spinner = Throbber::default()
        .style(app.theme.muted_style())
        .throbber_style(app.theme.muted_style());
    let span = spinner.to_symbol_span(&app.throbber_state);
    let spinner_area = Rect {
        x: area.right().saturating_sub(2),
        width: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(span)), spinner_area);
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let store = app.controller.store();
    if store.results().is_empty() {
        let placeholder = if store.is_loading() {
            "searching…"
        } else {
            "no results — type to search"
        };
        let widget = Paragraph::new(placeholder).style(app.theme.muted_style());
        frame.render_widget(widget, area);
        return;
    }

    let header = Row::new([Cell::from("Suggestion"), Cell::from("URL")])
        .style(app.theme.header_style())
        .height(1);
    let rows: Vec<Row> = store
        .results()
        .iter()
        .map(|entry| {
            Row::new([
                Cell::from(entry.name.clone()),
                Cell::from(Span::styled(entry.url.clone(), app.theme.muted_style())),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Fill(1)])
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(HighlightSpacing::Always)
        .row_highlight_style(app.theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(toast) = app.toast.current() {
        let line = Line::from(vec![
            Span::styled(toast.title, app.theme.toast_style()),
            Span::raw(": "),
            Span::raw(toast.message),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let count = app.controller.store().results().len();
    let hint = format!("{count} results · enter accepts · esc dismisses");
    let widget = Paragraph::new(hint).style(app.theme.muted_style());
    frame.render_widget(widget, area);
}
