use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, PromptPurpose};

/// Centered box of the given size, clamped to the screen
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the add/edit text-entry overlay
pub fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt else {
        return;
    };
    let bg = app.theme.background;
    let title_key = match prompt.purpose {
        PromptPurpose::AddTask => "prompt-add",
        PromptPurpose::EditTask { .. } => "prompt-edit",
    };

    let popup = centered_rect(area, 60, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.catalog.get(title_key)))
        .title_style(Style::default().fg(app.theme.header))
        .style(Style::default().bg(bg).fg(app.theme.header));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    // Input line with a block cursor
    let (before, after) = prompt.buffer.split_at(prompt.cursor);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                before.to_string(),
                Style::default().fg(app.theme.text).bg(bg),
            ),
            Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.header).bg(bg),
            ),
            Span::styled(
                after.to_string(),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            app.catalog.get("prompt-hint").to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}

/// Render the purge confirmation overlay
pub fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup = centered_rect(area, 46, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(bg).fg(app.theme.error));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            app.catalog.get("confirm-purge").to_string(),
            Style::default()
                .fg(app.theme.error)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            app.catalog.get("confirm-hint").to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}
