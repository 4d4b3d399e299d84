use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Severity};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = match &app.status {
        Some((message, severity)) => {
            let color = match severity {
                Severity::Info => app.theme.success,
                Severity::Error => app.theme.error,
            };
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(color).bg(bg),
            ))
        }
        None => Line::from(Span::styled(
            " ".repeat(area.width as usize),
            Style::default().bg(bg),
        )),
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
