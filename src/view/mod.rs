//! Terminal front end: event loop, key routing and drawing.

pub mod constants;
mod filter_bar;
mod help;
mod layout;
mod pagination;
mod styles;
mod table;

pub use filter_bar::{input_line, FilterBar};
pub use help::render_help_overlay;
pub use layout::{render_layout, LOADING_TEXT, NO_RESULTS_HINT, NO_RESULTS_TITLE};
pub use styles::{ColorConfig, Theme};
pub use table::{display_message, format_timestamp, results_table};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::source::{load_records, InputSource, LogSource};
use crate::state::input_handler::{
    handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right, handle_delete,
    handle_end, handle_home,
};
use crate::state::{AppState, InputField, PageIntent, PageSize};
use chrono::Utc;
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Terminal failures. Always fatal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Raw mode, the alternate screen, drawing or event polling failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Reload,
    Quit,
}

/// The viewer: state, input source and terminal.
///
/// Tests drive it on a `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: Box<dyn LogSource>,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Switch the terminal to raw mode on the alternate screen.
    ///
    /// Nothing is fetched until [`run`](Self::run).
    pub fn new(source: Box<dyn LogSource>, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, source, args))
    }

    /// Fetch once, then redraw on each key, resize or tick until quit.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.reload()?;

        loop {
            self.draw()?;

            if !event::poll(TICK_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match self.handle_key(key) {
                    Flow::Quit => return Ok(()),
                    Flow::Reload => self.reload()?,
                    Flow::Continue => {}
                },
                Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, source: Box<dyn LogSource>, args: CliArgs) -> Self {
        let mut app_state = AppState::new(args.items_per_page);
        app_state.source_label = source.describe();
        if let Some(search) = args.search {
            app_state.set_search(search);
        }

        Self {
            terminal,
            app_state,
            source,
            key_bindings: KeyBindings::default(),
            theme: Theme::new(args.color),
        }
    }

    /// Fetch and replace the record set.
    ///
    /// A loading frame is drawn first since the fetch blocks this thread.
    fn reload(&mut self) -> Result<(), TuiError> {
        self.app_state.begin_load();
        self.draw()?;

        info!(source = %self.app_state.source_label, "Fetching logs");
        let result = load_records(self.source.as_mut());
        if let Err(err) = &result {
            warn!(error = %err, "Fetch failed");
        }
        self.app_state.apply_fetch_result(result);

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        // Ctrl+C quits from anywhere, including text fields
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }

        if self.app_state.input.is_some() {
            self.handle_input_key(key);
            return Flow::Continue;
        }

        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return Flow::Quit,
                _ => {}
            }
            return Flow::Continue;
        }

        if key.code == KeyCode::Esc {
            self.app_state.notice = None;
            return Flow::Continue;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return Flow::Continue;
        };

        self.app_state.notice = None;
        self.dispatch(action)
    }

    fn dispatch(&mut self, action: KeyAction) -> Flow {
        let state = &mut self.app_state;
        match action {
            KeyAction::EditSearch => state.begin_input(InputField::Search),
            KeyAction::EditStartDate => state.begin_input(InputField::StartDate),
            KeyAction::EditEndDate => state.begin_input(InputField::EndDate),
            KeyAction::NextMessageFilter => state.cycle_message_filter(true),
            KeyAction::PrevMessageFilter => state.cycle_message_filter(false),
            KeyAction::ClearFilters => state.clear_filters(),
            KeyAction::ToggleSort => state.toggle_sort(),
            KeyAction::FirstPage => state.page(PageIntent::First),
            KeyAction::PrevPage => state.page(PageIntent::Previous),
            KeyAction::NextPage => state.page(PageIntent::Next),
            KeyAction::LastPage => state.page(PageIntent::Last),
            KeyAction::GoToPage => state.begin_input(InputField::GoToPage),
            KeyAction::IncreasePageSize => state.cycle_items_per_page(true),
            KeyAction::DecreasePageSize => state.cycle_items_per_page(false),
            KeyAction::Help => state.help_visible = true,
            KeyAction::Reload => return Flow::Reload,
            KeyAction::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Keys while a text field is open.
    fn handle_input_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Esc => state.cancel_input(),
            KeyCode::Enter => state.submit_input(Utc::now()),
            KeyCode::Backspace => state.edit_input(handle_backspace),
            KeyCode::Delete => state.edit_input(handle_delete),
            KeyCode::Left => state.edit_input(handle_cursor_left),
            KeyCode::Right => state.edit_input(handle_cursor_right),
            KeyCode::Home => state.edit_input(handle_home),
            KeyCode::End => state.edit_input(handle_end),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.edit_input(|buffer| handle_char_input(buffer, ch));
            }
            _ => {}
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let theme = self.theme;
        self.terminal
            .draw(|frame| render_layout(frame, state, theme))?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        source: Box<dyn LogSource>,
        args: CliArgs,
    ) -> Self {
        Self::with_terminal(terminal, source, args)
    }
}

/// What the first screen looks like, taken from the resolved settings.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Initial page size.
    pub items_per_page: PageSize,
    /// Search text applied before the first fetch (`--search`).
    pub search: Option<String>,
    /// Whether to draw colors.
    pub color: ColorConfig,
}

impl CliArgs {
    /// Bundle the startup view settings.
    pub fn new(items_per_page: PageSize, search: Option<String>, color: ColorConfig) -> Self {
        Self {
            items_per_page,
            search,
            color,
        }
    }
}

impl Default for CliArgs {
    fn default() -> Self {
        Self::new(PageSize::default(), None, ColorConfig::default())
    }
}

/// Run the viewer until the user quits.
///
/// The terminal is restored whether the loop ends normally or with an error.
/// Tracing should already be initialised, since nothing may print to stdout
/// while the alternate screen is active.
pub fn run_with_source(input_source: InputSource, args: CliArgs) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(Box::new(input_source), args) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    restore_terminal()?;

    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
