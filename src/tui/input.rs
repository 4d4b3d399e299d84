use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, View};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    match app.mode {
        Mode::Prompt => handle_prompt(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Navigate => handle_navigate(app, key),
    }
}

fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.cancel_prompt(),
        _ => {
            let Some(prompt) = app.prompt.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Backspace => prompt.backspace(),
                KeyCode::Left => prompt.move_left(),
                KeyCode::Right => prompt.move_right(),
                KeyCode::Home => prompt.cursor = 0,
                KeyCode::End => prompt.cursor = prompt.buffer.len(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    prompt.insert(c);
                }
                _ => {}
            }
        }
    }
}

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => app.confirm_purge(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_confirm(),
        _ => {}
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Global keys first
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.view == View::Tasks {
                if key.code == KeyCode::Char('q') {
                    app.should_quit = true;
                }
            } else {
                app.switch_view(View::Tasks);
            }
            return;
        }
        KeyCode::Char('t') => {
            let target = if app.view == View::Trash {
                View::Tasks
            } else {
                View::Trash
            };
            app.switch_view(target);
            return;
        }
        KeyCode::Char('s') => {
            app.switch_view(View::Settings);
            return;
        }
        _ => {}
    }

    match app.view {
        View::Tasks => handle_tasks_view(app, key),
        View::Trash => handle_trash_view(app, key),
        View::Settings => handle_settings_view(app, key),
    }
}

fn handle_tasks_view(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Char('a') => app.open_add_prompt(),
        KeyCode::Char('e') => app.open_edit_prompt(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') => app.trash_selected(),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Char('y') => app.redo(),
        _ => {}
    }
}

fn handle_trash_view(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Char('r') => app.restore_selected(),
        KeyCode::Char('d') => app.request_purge(),
        _ => {}
    }
}

fn handle_settings_view(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
            app.settings_cursor = 1 - app.settings_cursor;
        }
        KeyCode::Right | KeyCode::Char('l') => app.settings_cycle(true),
        KeyCode::Left | KeyCode::Char('h') => app.settings_cycle(false),
        _ => {}
    }
}

/// Move the list selection, wrapping at both ends.
fn move_selection(app: &mut App, delta: i64) {
    let count = app.tasks.len() as i64;
    if count == 0 {
        return;
    }
    let cursor = app.cursor as i64;
    app.cursor = ((cursor + delta + count) % count) as usize;
}
