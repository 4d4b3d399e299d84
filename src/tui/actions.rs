//! User-intent handlers: the bridge between key input, the task store,
//! and the command history.
//!
//! Every fresh mutation follows the same sequence: invalidate the redo
//! branch, capture whatever pre-mutation state the inverse needs, run the
//! store call, and only on success record the command. A failed store
//! call surfaces a status message and records nothing.

use crate::history::Command;
use crate::i18n::BUILTIN_LANGS;
use crate::model::clamp_description;
use crate::store::StoreError;

use super::app::{App, ConfirmAction, Mode, PromptPurpose, PromptState};
use super::theme::THEME_NAMES;

fn store_error_key(err: &StoreError) -> &'static str {
    match err {
        StoreError::NotFound(_) => "task-not-found",
        StoreError::EmptyDescription => "add-empty",
        _ => "generic-error",
    }
}

impl App {
    // -----------------------------------------------------------------------
    // Prompt lifecycle
    // -----------------------------------------------------------------------

    pub fn open_add_prompt(&mut self) {
        self.prompt = Some(PromptState::new(PromptPurpose::AddTask, ""));
        self.mode = Mode::Prompt;
    }

    /// Open the edit prompt for the selected task. The current description
    /// is captured here, before any store call, because the undo command
    /// needs the pre-edit text.
    pub fn open_edit_prompt(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let purpose = PromptPurpose::EditTask {
            task_id: task.id,
            old_description: task.description.clone(),
        };
        let initial = task.description.clone();
        self.prompt = Some(PromptState::new(purpose, &initial));
        self.mode = Mode::Prompt;
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.mode = Mode::Navigate;
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        self.mode = Mode::Navigate;

        match prompt.purpose {
            PromptPurpose::AddTask => {
                self.history.clear_redo();
                match self.store.add(&prompt.buffer) {
                    Ok(id) => {
                        self.history.push(Command::Add { task_id: id });
                        self.info("add-success");
                        self.needs_refresh = true;
                    }
                    Err(e) => self.error(store_error_key(&e)),
                }
            }
            PromptPurpose::EditTask {
                task_id,
                old_description,
            } => {
                self.history.clear_redo();
                match self.store.set_description(task_id, &prompt.buffer) {
                    Ok(()) => {
                        // Record what the store actually persisted
                        let new_description = clamp_description(&prompt.buffer);
                        self.history.push(Command::Edit {
                            task_id,
                            old_description,
                            new_description,
                        });
                        self.info("edit-success");
                        self.needs_refresh = true;
                    }
                    Err(e) => self.error(store_error_key(&e)),
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Tasks view mutations
    // -----------------------------------------------------------------------

    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (task_id, old_completed) = (task.id, task.completed);

        self.history.clear_redo();
        match self.store.set_completed(task_id, !old_completed) {
            Ok(()) => {
                self.history.push(Command::Toggle {
                    task_id,
                    old_completed,
                });
                self.info(if old_completed {
                    "toggle-reopen"
                } else {
                    "toggle-done"
                });
                self.needs_refresh = true;
            }
            Err(e) => {
                self.error(store_error_key(&e));
                self.needs_refresh = true;
            }
        }
    }

    pub fn trash_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let task_id = task.id;

        self.history.clear_redo();
        match self.store.soft_delete(task_id) {
            Ok(()) => {
                self.history.push(Command::Trash { task_id });
                self.info("trash-success");
                self.needs_refresh = true;
            }
            Err(e) => {
                self.error(store_error_key(&e));
                self.needs_refresh = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Undo / redo
    // -----------------------------------------------------------------------

    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            self.error("undo-nothing");
            return;
        }
        if self.history.undo(&self.store) {
            self.info("undo-success");
            self.needs_refresh = true;
        } else {
            // History is intact; the inverse just couldn't be applied
            // (typically the task was purged from the trash).
            self.error("task-not-found");
        }
    }

    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            self.error("redo-nothing");
            return;
        }
        if self.history.redo(&self.store) {
            self.info("redo-success");
            self.needs_refresh = true;
        } else {
            self.error("task-not-found");
        }
    }

    // -----------------------------------------------------------------------
    // Trash view: restore and purge (not undoable, but they still start a
    // new timeline and so invalidate the redo branch)
    // -----------------------------------------------------------------------

    pub fn restore_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let task_id = task.id;

        self.history.clear_redo();
        match self.store.restore(task_id) {
            Ok(()) => {
                self.info("restore-success");
                self.needs_refresh = true;
            }
            Err(e) => {
                self.error(store_error_key(&e));
                self.needs_refresh = true;
            }
        }
    }

    pub fn request_purge(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        self.confirm = Some(ConfirmAction::PurgeTask { task_id: task.id });
        self.mode = Mode::Confirm;
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
        self.mode = Mode::Navigate;
    }

    pub fn confirm_purge(&mut self) {
        let confirm = self.confirm.take();
        self.mode = Mode::Navigate;
        let Some(ConfirmAction::PurgeTask { task_id }) = confirm else {
            return;
        };

        // Dropping the redo branch also discards any redo entry that still
        // refers to the purged id; undo entries stay and fail recoverably.
        self.history.clear_redo();
        match self.store.hard_delete(task_id) {
            Ok(()) => {
                self.info("purge-success");
                self.needs_refresh = true;
            }
            Err(e) => {
                self.error(store_error_key(&e));
                self.needs_refresh = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Cycle the value of the selected settings row (language or theme)
    /// and persist + re-apply the configuration.
    pub fn settings_cycle(&mut self, forward: bool) {
        match self.settings_cursor {
            0 => {
                let current = self.config.effective_lang();
                let next = cycle(BUILTIN_LANGS, &current, forward);
                self.config.lang = Some(next.to_string());
            }
            _ => {
                let next = cycle(THEME_NAMES, &self.config.theme, forward);
                self.config.theme = next.to_string();
            }
        }
        self.apply_config();
    }
}

fn cycle<'a>(options: &'a [&'a str], current: &str, forward: bool) -> &'a str {
    let len = options.len();
    let idx = options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(current))
        .unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crate::store::TaskStore;
    use crate::tui::app::{Severity, View};
    use std::path::PathBuf;

    fn test_app() -> App {
        let store = TaskStore::open_in_memory().unwrap();
        App::new(store, AppConfig::default(), PathBuf::from("/tmp"), None)
    }

    fn submit_add(app: &mut App, text: &str) {
        app.open_add_prompt();
        let prompt = app.prompt.as_mut().unwrap();
        prompt.buffer = text.to_string();
        prompt.cursor = prompt.buffer.len();
        app.submit_prompt();
        app.refresh();
    }

    #[test]
    fn add_pushes_command_after_success() {
        let mut app = test_app();
        submit_add(&mut app, "Buy milk");
        assert_eq!(app.tasks.len(), 1);
        assert!(app.history.can_undo());
        assert_eq!(app.status.as_ref().unwrap().1, Severity::Info);
    }

    #[test]
    fn failed_add_pushes_nothing() {
        let mut app = test_app();
        submit_add(&mut app, "   ");
        assert!(app.tasks.is_empty());
        assert!(!app.history.can_undo());
        assert_eq!(app.status.as_ref().unwrap().1, Severity::Error);
    }

    #[test]
    fn add_undo_redo_round_trip() {
        let mut app = test_app();
        submit_add(&mut app, "Buy milk");

        app.undo();
        app.refresh();
        assert!(app.tasks.is_empty());
        assert_eq!(app.store.list_trashed().unwrap().len(), 1);

        app.redo();
        app.refresh();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].description, "Buy milk");
    }

    #[test]
    fn edit_snapshots_old_description_before_mutation() {
        let mut app = test_app();
        submit_add(&mut app, "A");

        app.open_edit_prompt();
        {
            let prompt = app.prompt.as_mut().unwrap();
            assert_eq!(prompt.buffer, "A");
            prompt.buffer = "B".to_string();
        }
        app.submit_prompt();
        app.refresh();
        assert_eq!(app.tasks[0].description, "B");

        app.undo();
        app.refresh();
        assert_eq!(app.tasks[0].description, "A");

        app.redo();
        app.refresh();
        assert_eq!(app.tasks[0].description, "B");
    }

    #[test]
    fn toggle_round_trip_restores_state() {
        let mut app = test_app();
        submit_add(&mut app, "Water plants");

        app.toggle_selected();
        app.refresh();
        assert!(app.tasks[0].completed);

        app.undo();
        app.refresh();
        assert!(!app.tasks[0].completed);

        app.redo();
        app.refresh();
        assert!(app.tasks[0].completed);
    }

    #[test]
    fn fresh_action_clears_redo_branch() {
        let mut app = test_app();
        submit_add(&mut app, "first");
        app.undo();
        app.refresh();
        assert!(app.history.can_redo());

        submit_add(&mut app, "second");
        assert!(!app.history.can_redo());
    }

    #[test]
    fn undo_with_empty_history_reports_and_changes_nothing() {
        let mut app = test_app();
        app.undo();
        assert_eq!(
            app.status.as_ref().unwrap().0,
            app.catalog.get("undo-nothing")
        );
        assert!(!app.history.can_undo());
        assert!(!app.history.can_redo());
    }

    #[test]
    fn trash_then_undo_restores_task() {
        let mut app = test_app();
        submit_add(&mut app, "Keep me");

        app.trash_selected();
        app.refresh();
        assert!(app.tasks.is_empty());

        app.undo();
        app.refresh();
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn purge_requires_confirmation_and_clears_redo() {
        let mut app = test_app();
        submit_add(&mut app, "doomed");
        // Undoing the add leaves the task in the trash with a redo entry
        // that still refers to its id
        app.undo();
        app.refresh();
        assert!(app.history.can_redo());

        app.switch_view(View::Trash);
        app.refresh();
        app.request_purge();
        assert_eq!(app.mode, Mode::Confirm);
        app.confirm_purge();
        app.refresh();

        // The purge dropped the redo branch along with the stale entry
        assert!(app.tasks.is_empty());
        assert!(!app.history.can_redo());
        assert!(app.store.list_active().unwrap().is_empty());
    }

    #[test]
    fn undo_after_purge_fails_but_keeps_history() {
        let mut app = test_app();
        submit_add(&mut app, "doomed");
        app.trash_selected();

        app.switch_view(View::Trash);
        app.refresh();
        app.request_purge();
        app.confirm_purge();
        app.refresh();

        // Both the trash and the add refer to a row that no longer
        // exists; undoing fails, history stays put.
        app.undo();
        assert_eq!(
            app.status.as_ref().unwrap().0,
            app.catalog.get("task-not-found")
        );
        assert!(app.history.can_undo());
    }

    #[test]
    fn restore_from_trash_clears_redo() {
        let mut app = test_app();
        submit_add(&mut app, "wanted");
        app.undo();
        app.refresh();
        assert!(app.history.can_redo());

        app.switch_view(View::Trash);
        app.refresh();
        app.restore_selected();
        assert!(!app.history.can_redo());
        assert_eq!(app.store.list_active().unwrap().len(), 1);
    }

    #[test]
    fn settings_cycle_wraps_both_ways() {
        assert_eq!(cycle(&["a", "b", "c"], "c", true), "a");
        assert_eq!(cycle(&["a", "b", "c"], "a", false), "c");
        assert_eq!(cycle(&["a", "b", "c"], "unknown", true), "b");
    }

    #[test]
    fn settings_cycle_updates_theme_and_config() {
        let mut app = test_app();
        app.settings_cursor = 1;
        app.settings_cycle(true);
        assert_eq!(app.config.theme, "Dracula");
        assert_ne!(app.theme, crate::tui::theme::Theme::default());
    }
}
