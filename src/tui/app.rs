use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::config_io::{config_dir, read_config};
use crate::io::state::{FileThemePreference, MemoryThemePreference, ThemePreference};
use crate::model::UiConfig;
use crate::model::todo::{Todo, TodoId};
use crate::ops::store::TodoStore;

use super::input;
use super::menu::FilterMenu;
use super::modal::Modal;
use super::render;
use super::theme::Theme;

/// Current interaction mode when no popup is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box
    Search,
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub mode: Mode,
    pub modal: Modal,
    pub filter_menu: FilterMenu,
    /// Index into the visible list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub dark: bool,
    pub theme: Theme,
    pub ui_config: UiConfig,
    preference: Box<dyn ThemePreference>,
    /// One-shot message shown in the status row until the next key
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the app, reading the saved theme once
    pub fn new(ui_config: UiConfig, preference: Box<dyn ThemePreference>) -> Self {
        let dark = preference.load();
        let theme = Theme::for_mode(dark, &ui_config);
        App {
            store: TodoStore::new(),
            mode: Mode::Navigate,
            modal: Modal::Closed,
            filter_menu: FilterMenu::Closed,
            cursor: 0,
            scroll_offset: 0,
            dark,
            theme,
            ui_config,
            preference,
            status_message: None,
            should_quit: false,
        }
    }

    /// Flip dark/light and persist the choice. A failed save still flips
    /// the theme for this session.
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        self.theme = Theme::for_mode(self.dark, &self.ui_config);
        if let Err(e) = self.preference.save(self.dark) {
            tracing::warn!(error = %e, "could not save theme preference");
            self.status_message = Some(format!("theme not saved: {}", e));
        }
    }

    /// The todo under the cursor
    pub fn selected(&self) -> Option<&Todo> {
        self.store.visible_todos().get(self.cursor).copied()
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.selected().map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after it changes
    pub fn clamp_cursor(&mut self) {
        let count = self.store.visible_todos().len();
        if count == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Move the cursor by `delta` rows, stopping at the ends
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.store.visible_todos().len();
        if count == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, count as isize - 1) as usize;
    }

    /// Case-insensitive regex of the literal search text, for highlighting
    pub fn search_re(&self) -> Option<Regex> {
        let query = &self.store.query().search_query;
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }
}

/// Run the TUI application
pub fn run(config_dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = config_dir(config_dir_override);
    let config = match &dir {
        Some(dir) => read_config(dir)?,
        None => Default::default(),
    };
    let preference: Box<dyn ThemePreference> = match dir {
        Some(dir) => Box::new(FileThemePreference::new(dir)),
        None => {
            tracing::warn!("no config directory; theme will not be remembered");
            Box::new(MemoryThemePreference::default())
        }
    };

    let mut app = App::new(config.ui, preference);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(dark = app.dark, "starting tui");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
