use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

/// Render the settings view: language and theme rows, the selected one
/// highlighted; values cycle with the arrow keys.
pub fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.catalog.get("title-settings")))
        .title_style(
            Style::default()
                .fg(app.theme.header)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(bg).fg(app.theme.dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = [
        ("settings-language", app.config.effective_lang()),
        ("settings-theme", app.config.theme.clone()),
    ];

    let mut lines: Vec<Line> = vec![Line::default()];
    for (i, (label_key, value)) in rows.iter().enumerate() {
        let selected = i == app.settings_cursor;
        let label_style = if selected {
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}{:<12}", marker, app.catalog.get(label_key)),
                label_style,
            ),
            Span::styled(
                format!("  ◂ {} ▸", value),
                Style::default().fg(app.theme.header).bg(bg),
            ),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        app.catalog.get("settings-hint").to_string(),
        Style::default().fg(app.theme.dim),
    )));

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}
