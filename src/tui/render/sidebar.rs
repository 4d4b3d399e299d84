use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, View};

/// Render the sidebar: app title, the key menu for the current view,
/// and a clock at the bottom.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(bg).fg(app.theme.dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        app.catalog.get("app-title").to_string(),
        Style::default()
            .fg(app.theme.header)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for (hint, label_key) in menu_entries(app.view) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>5}  ", hint),
                Style::default().fg(app.theme.header),
            ),
            Span::styled(
                app.catalog.get(label_key).to_string(),
                Style::default().fg(app.theme.text),
            ),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );

    // Clock in the bottom row of the sidebar
    if inner.height > 1 {
        let clock_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let time = chrono::Local::now().format("%H:%M").to_string();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                time,
                Style::default().fg(app.theme.dim),
            )))
            .right_aligned()
            .style(Style::default().bg(bg)),
            clock_area,
        );
    }
}

/// Key hint + message-catalog label for each menu row of a view
fn menu_entries(view: View) -> &'static [(&'static str, &'static str)] {
    match view {
        View::Tasks => &[
            ("a", "menu-add"),
            ("e", "menu-edit"),
            ("spc", "menu-toggle"),
            ("d", "menu-trash"),
            ("u", "menu-undo"),
            ("y", "menu-redo"),
            ("t", "menu-view-trash"),
            ("s", "menu-settings"),
            ("q", "menu-quit"),
        ],
        View::Trash => &[
            ("r", "menu-restore"),
            ("d", "menu-purge"),
            ("t", "menu-back"),
        ],
        View::Settings => &[("esc", "menu-back")],
    }
}
