pub mod overlays;
pub mod settings_view;
pub mod sidebar;
pub mod status_row;
pub mod task_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthChar;

use super::app::{App, Mode, View};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 26;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Content: sidebar | list
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[0]);

    sidebar::render_sidebar(frame, app, cols[0]);

    match app.view {
        View::Tasks | View::Trash => task_list::render_task_list(frame, app, cols[1]),
        View::Settings => settings_view::render_settings(frame, app, cols[1]),
    }

    status_row::render_status_row(frame, app, rows[1]);

    // Overlays on top of everything
    match app.mode {
        Mode::Prompt => overlays::render_prompt(frame, app, area),
        Mode::Confirm => overlays::render_confirm(frame, app, area),
        Mode::Navigate => {}
    }
}

/// Cut a string to the given display width, appending `…` when anything
/// was dropped. Wide characters are never split.
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            // Reserve one cell for the ellipsis
            let mut cut = i;
            let mut cut_width = width;
            while cut_width + 1 > max_width {
                let prev = text[..cut]
                    .char_indices()
                    .next_back()
                    .map(|(j, pc)| (j, pc.width().unwrap_or(0)))
                    .unwrap_or((0, 0));
                cut = prev.0;
                cut_width -= prev.1;
            }
            return format!("{}…", &text[..cut]);
        }
        width += w;
    }
    text.to_string()
}
