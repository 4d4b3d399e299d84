use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, View};

use super::truncate_to_width;

/// Render the active-task or trash list with selection and scrolling.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let title_key = match app.view {
        View::Trash => "title-trash",
        _ => "title-tasks",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", app.catalog.get(title_key), app.tasks.len()))
        .title_style(
            Style::default()
                .fg(app.theme.header)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(bg).fg(app.theme.dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.tasks.is_empty() {
        let empty_key = match app.view {
            View::Trash => "empty-trash",
            _ => "empty-tasks",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                app.catalog.get(empty_key).to_string(),
                Style::default().fg(app.theme.dim),
            )))
            .style(Style::default().bg(bg)),
            inner,
        );
        return;
    }

    let height = inner.height as usize;
    app.update_scroll(height);

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = i == app.cursor;
        let text_color = if task.completed {
            app.theme.done
        } else {
            app.theme.text
        };
        let mut style = Style::default().fg(text_color).bg(bg);
        if task.completed {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if selected {
            style = style
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD);
        }

        let marker = if selected { "▸ " } else { "  " };
        let row = format!("{}[{}] {}", marker, task.checkbox_char(), task.description);
        let row = truncate_to_width(&row, inner.width as usize);
        lines.push(Line::from(Span::styled(row, style)));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}
