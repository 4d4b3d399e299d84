use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::history::History;
use crate::i18n::Catalog;
use crate::io::config_io;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::model::{AppConfig, Task};
use crate::store::{DB_FILE_NAME, TaskStore, paths};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Active tasks
    Tasks,
    /// Soft-deleted tasks
    Trash,
    /// Language/theme settings
    Settings,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Prompt,
    Confirm,
}

/// What a submitted prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPurpose {
    AddTask,
    /// Editing keeps the pre-edit description around: the undo command
    /// needs it, and it must be captured before the store is touched.
    EditTask {
        task_id: i64,
        old_description: String,
    },
}

/// Single-line text entry state for the prompt overlay
#[derive(Debug, Clone)]
pub struct PromptState {
    pub purpose: PromptPurpose,
    pub buffer: String,
    pub cursor: usize,
}

impl PromptState {
    pub fn new(purpose: PromptPurpose, initial: &str) -> Self {
        PromptState {
            purpose,
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.buffer, self.cursor);
        self.buffer.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(&self.buffer, self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = next_char_boundary(&self.buffer, self.cursor);
        }
    }
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from - 1;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// A destructive action awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    PurgeTask { task_id: i64 },
}

/// Status row message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Main application state: the single context object owning the store
/// connection, the command history, and all view state.
pub struct App {
    pub store: TaskStore,
    pub history: History,
    pub config: AppConfig,
    pub catalog: Catalog,
    pub theme: Theme,
    pub data_dir: PathBuf,
    pub config_dir: Option<PathBuf>,

    pub view: View,
    pub mode: Mode,
    /// Read-only snapshot of the current view's tasks, reloaded from the
    /// store after every successful mutation
    pub tasks: Vec<Task>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub settings_cursor: usize,

    pub prompt: Option<PromptState>,
    pub confirm: Option<ConfirmAction>,
    pub status: Option<(String, Severity)>,
    pub should_quit: bool,
    pub needs_refresh: bool,
}

impl App {
    pub fn new(
        store: TaskStore,
        config: AppConfig,
        data_dir: PathBuf,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let catalog = Catalog::load(&config.effective_lang());
        let theme = Theme::from_config(&config);
        App {
            store,
            history: History::new(),
            config,
            catalog,
            theme,
            data_dir,
            config_dir,
            view: View::Tasks,
            mode: Mode::Navigate,
            tasks: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            settings_cursor: 0,
            prompt: None,
            confirm: None,
            status: None,
            should_quit: false,
            needs_refresh: true,
        }
    }

    /// Reload the task snapshot for the current view and clamp the cursor.
    pub fn refresh(&mut self) {
        let loaded = match self.view {
            View::Tasks => self.store.list_active(),
            View::Trash => self.store.list_trashed(),
            View::Settings => Ok(Vec::new()),
        };
        match loaded {
            Ok(tasks) => self.tasks = tasks,
            Err(_) => {
                self.tasks.clear();
                self.error("generic-error");
            }
        }
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
        self.needs_refresh = false;
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    /// Switch view, resetting cursor state and forcing a reload.
    pub fn switch_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.cursor = 0;
            self.scroll_offset = 0;
            self.needs_refresh = true;
        }
    }

    pub fn info(&mut self, key: &str) {
        self.status = Some((self.catalog.get(key).to_string(), Severity::Info));
    }

    pub fn error(&mut self, key: &str) {
        self.status = Some((self.catalog.get(key).to_string(), Severity::Error));
    }

    /// Keep the selection visible within a list of the given height.
    pub fn update_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Re-resolve catalog and theme after a settings change, and persist
    /// the config when a config directory is available.
    pub fn apply_config(&mut self) {
        self.catalog = Catalog::load(&self.config.effective_lang());
        self.theme = Theme::from_config(&self.config);
        if let Some(dir) = &self.config_dir {
            let _ = config_io::save_config(dir, &self.config);
        }
    }
}

/// Restore view/cursor from state.json
fn restore_ui_state(app: &mut App) {
    let Some(state) = read_ui_state(&app.data_dir) else {
        return;
    };
    match state.view.as_str() {
        "trash" => app.view = View::Trash,
        "settings" => app.view = View::Settings,
        _ => app.view = View::Tasks,
    }
    app.cursor = state.cursor;
    app.scroll_offset = state.scroll_offset;
}

/// Save view/cursor to state.json
fn save_ui_state(app: &App) {
    let view = match app.view {
        View::Tasks => "tasks",
        View::Trash => "trash",
        View::Settings => "settings",
    };
    let state = UiState {
        view: view.to_string(),
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(&app.data_dir, &state);
}

/// Run the TUI application
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => paths::data_dir().ok_or("could not determine a data directory")?,
    };
    std::fs::create_dir_all(&data_dir)?;

    let config_dir = paths::config_dir();
    let config = match &config_dir {
        Some(dir) => config_io::load_config(dir).unwrap_or_default(),
        None => AppConfig::default(),
    };

    let store = TaskStore::open(&data_dir.join(DB_FILE_NAME))?;
    let mut app = App::new(store, config, data_dir, config_dir);

    restore_ui_state(&mut app);
    app.refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.needs_refresh {
            app.refresh();
        }

        terminal.draw(|frame| render::render(frame, app))?;

        // The 250 ms tick keeps the sidebar clock current even when idle
        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let store = TaskStore::open_in_memory().unwrap();
        App::new(store, AppConfig::default(), PathBuf::from("/tmp"), None)
    }

    #[test]
    fn refresh_loads_active_tasks() {
        let mut app = test_app();
        app.store.add("one").unwrap();
        app.store.add("two").unwrap();
        app.refresh();
        assert_eq!(app.tasks.len(), 2);
        assert!(!app.needs_refresh);
    }

    #[test]
    fn refresh_clamps_cursor() {
        let mut app = test_app();
        app.store.add("only").unwrap();
        app.cursor = 10;
        app.refresh();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn switch_view_resets_cursor_and_flags_refresh() {
        let mut app = test_app();
        app.cursor = 3;
        app.needs_refresh = false;
        app.switch_view(View::Trash);
        assert_eq!(app.view, View::Trash);
        assert_eq!(app.cursor, 0);
        assert!(app.needs_refresh);
    }

    #[test]
    fn trash_view_lists_trashed_tasks() {
        let mut app = test_app();
        let id = app.store.add("gone").unwrap();
        app.store.soft_delete(id).unwrap();
        app.switch_view(View::Trash);
        app.refresh();
        assert_eq!(app.tasks.len(), 1);
        assert!(app.tasks[0].deleted);
    }

    #[test]
    fn update_scroll_follows_cursor() {
        let mut app = test_app();
        for i in 0..20 {
            app.store.add(format!("task {}", i).as_str()).unwrap();
        }
        app.refresh();

        app.cursor = 15;
        app.update_scroll(10);
        assert_eq!(app.scroll_offset, 6);

        app.cursor = 2;
        app.update_scroll(10);
        assert_eq!(app.scroll_offset, 2);
    }

    #[test]
    fn prompt_state_edits_by_char() {
        let mut prompt = PromptState::new(PromptPurpose::AddTask, "");
        prompt.insert('é');
        prompt.insert('x');
        assert_eq!(prompt.buffer, "éx");
        prompt.move_left();
        prompt.move_left();
        prompt.move_right();
        prompt.backspace();
        assert_eq!(prompt.buffer, "x");
        assert_eq!(prompt.cursor, 0);
    }
}
