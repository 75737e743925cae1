//! Full-screen terminal front end (impure shell).
//!
//! Key events from crossterm are turned into controller calls on a
//! [`Session`]; every frame draws the search box, the functions list and a
//! status line.

use super::{FunctionsList, ListWidget};
use crate::model::{EventsFunctionsContainer, FunctionId};
use crate::session::{describe_delete, describe_rename, Session, SessionError, SessionHost};
use crate::state::{DeleteOutcome, EventsFunctionsList, MenuAction, MenuItem};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListState, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const MISSING_EXTENSION: &str = "The listed extension no longer exists.";

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// What typed keys currently mean.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    Browse,
    Search { buffer: String },
    Rename { function: FunctionId, buffer: String },
    ConfirmDelete,
    Menu { items: Vec<MenuItem>, cursor: usize },
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    session: Session<FunctionsList>,
    mode: InputMode,
    status: Option<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(session: Session<FunctionsList>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, session))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;
        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.session.list_mut().widget_mut().recompute_layout();
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B: Backend> TuiApp<B> {
    /// Wrap an existing terminal, such as a `TestBackend` one.
    pub fn with_terminal(terminal: Terminal<B>, session: Session<FunctionsList>) -> Self {
        Self {
            terminal,
            session,
            mode: InputMode::Browse,
            status: None,
        }
    }

    /// The session being edited.
    pub fn session(&self) -> &Session<FunctionsList> {
        &self.session
    }

    /// The terminal drawn into.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Last status line shown to the user.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Handle one key press. Returns `true` when the user quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let quit = match std::mem::replace(&mut self.mode, InputMode::Browse) {
            InputMode::Browse => self.browse_key(key),
            InputMode::Search { buffer } => {
                self.search_key(key, buffer);
                false
            }
            InputMode::Rename { function, buffer } => {
                self.rename_key(key, function, buffer);
                false
            }
            InputMode::ConfirmDelete => {
                self.confirm_key(key);
                false
            }
            InputMode::Menu { items, cursor } => {
                self.menu_key(key, items, cursor);
                false
            }
        };

        let messages = self.session.host_mut().drain_messages();
        if !messages.is_empty() {
            self.status = Some(messages.join("  "));
        }
        quit
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            session,
            mode,
            status,
        } = self;
        terminal.draw(|frame| render(frame, session, mode, status.as_deref()))?;
        Ok(())
    }

    fn browse_key(&mut self, key: KeyEvent) -> bool {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Up if shift => self.move_function(-1),
            KeyCode::Down if shift => self.move_function(1),
            KeyCode::Char('K') => self.move_function(-1),
            KeyCode::Char('J') => self.move_function(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => self.activate(),
            KeyCode::Char('a') => self.add(),
            KeyCode::Char('r') | KeyCode::F(2) => {
                if let Some(function) = self.cursor_function() {
                    self.start_rename(function);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(function) = self.cursor_function() {
                    self.delete(function);
                }
            }
            KeyCode::Char('/') => {
                let buffer = self.session.list().search_text().to_string();
                self.mode = InputMode::Search { buffer };
            }
            KeyCode::Char('m') => self.open_menu(),
            KeyCode::Char('o') => {
                self.with_list(|_, host, list| list.edit_options(host));
            }
            KeyCode::Char('s') => self.save(),
            _ => {}
        }
        false
    }

    fn search_key(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Esc => {
                self.session.search("");
                return;
            }
            KeyCode::Enter => return,
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(ch);
            }
            _ => {}
        }
        self.session.search(&buffer);
        self.mode = InputMode::Search { buffer };
    }

    fn rename_key(&mut self, key: KeyEvent, function: FunctionId, mut buffer: String) {
        match key.code {
            KeyCode::Esc => {
                self.with_list(|functions, host, list| list.begin_rename(functions, &*host, None));
                return;
            }
            KeyCode::Enter => {
                let outcome = self.with_list(|functions, host, list| {
                    list.commit_rename(functions, host, function, &buffer)
                });
                self.status = Some(outcome.map_or(MISSING_EXTENSION, describe_rename).to_string());
                return;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(ch);
            }
            _ => {}
        }
        self.mode = InputMode::Rename { function, buffer };
    }

    fn confirm_key(&mut self, key: KeyEvent) {
        let confirmed = match key.code {
            KeyCode::Char('y') | KeyCode::Enter => true,
            KeyCode::Char('n') | KeyCode::Esc => false,
            _ => {
                self.mode = InputMode::ConfirmDelete;
                return;
            }
        };
        let Some(request) = self.session.host_mut().take_pending_delete() else {
            return;
        };
        let outcome = self.with_list(|functions, host, list| {
            list.resolve_delete(functions, host, request, confirmed)
        });
        self.status = Some(outcome.map_or(MISSING_EXTENSION, describe_delete).to_string());
    }

    fn menu_key(&mut self, key: KeyEvent, items: Vec<MenuItem>, mut cursor: usize) {
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Up | KeyCode::Char('k') => cursor = cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                cursor = (cursor + 1).min(items.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(item) = items.get(cursor) {
                    match item.action {
                        MenuAction::Rename(function) => self.start_rename(function),
                        MenuAction::Remove(function) => self.delete(function),
                    }
                }
                return;
            }
            _ => {}
        }
        self.mode = InputMode::Menu { items, cursor };
    }

    /// Run `f` with the container, host and controller.
    fn with_list<R>(
        &mut self,
        f: impl FnOnce(
            &mut EventsFunctionsContainer,
            &mut SessionHost,
            &mut EventsFunctionsList<FunctionsList>,
        ) -> R,
    ) -> Option<R> {
        let result = self
            .session
            .parts()
            .map(|(functions, host, list)| f(functions, host, list));
        if result.is_none() {
            self.status = Some(MISSING_EXTENSION.to_string());
        }
        result
    }

    fn cursor(&self) -> Option<usize> {
        self.session.list().widget().cursor()
    }

    fn cursor_function(&self) -> Option<FunctionId> {
        self.session.function_on_row(self.cursor()?)
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.session.list().widget().len().saturating_sub(1);
        let row = match self.cursor() {
            Some(row) => row.saturating_add_signed(delta).min(last),
            None => 0,
        };
        let function = self.session.function_on_row(row);
        self.with_list(|functions, host, list| {
            list.select(functions, host, function);
            list.widget_mut().set_cursor(Some(row));
        });
    }

    fn move_function(&mut self, delta: isize) {
        let (Some(from), Some(function)) = (self.cursor(), self.cursor_function()) else {
            return;
        };
        let Some(to) = from.checked_add_signed(delta) else {
            return;
        };
        self.with_list(|functions, host, list| {
            list.select(functions, host, Some(function));
            list.reorder(functions, &*host, from, to);
        });
    }

    fn activate(&mut self) {
        let Some(row) = self.cursor() else {
            return;
        };
        self.with_list(|functions, host, list| {
            let added = list.visible_rows(functions).get(row).is_some_and(|r| r.is_add_new());
            let function = list.activate_row(functions, host, row);
            if added {
                list.select(functions, host, function);
            }
        });
    }

    fn add(&mut self) {
        let added = self.with_list(|functions, host, list| {
            let function = list.add_new(functions, &*host);
            list.select(functions, host, Some(function));
            function
        });
        if let Some(function) = added {
            self.status = Some(format!("Added {}", self.session.name_of(function)));
        }
    }

    fn start_rename(&mut self, function: FunctionId) {
        let buffer = self.session.name_of(function);
        self.with_list(|functions, host, list| {
            list.begin_rename(functions, &*host, Some(function));
        });
        self.mode = InputMode::Rename { function, buffer };
    }

    fn delete(&mut self, function: FunctionId) {
        let name = self.session.name_of(function);
        let outcome = self.with_list(|functions, host, list| list.delete(functions, host, function));
        match outcome {
            Some(DeleteOutcome::Pending) => {
                self.status = Some(format!("Remove {name}? (y/n)"));
                self.mode = InputMode::ConfirmDelete;
            }
            Some(outcome) => self.status = Some(describe_delete(outcome).to_string()),
            None => {}
        }
    }

    fn open_menu(&mut self) {
        let menu = self.cursor().and_then(|row| {
            let functions = self.session.functions()?;
            self.session.list().context_menu(functions, row)
        });
        if let Some(items) = menu {
            self.mode = InputMode::Menu { items, cursor: 0 };
        }
    }

    fn save(&mut self) {
        self.status = Some(match self.session.save() {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err @ SessionError::NoProjectFile) => err.to_string(),
            Err(err) => format!("error: {err}"),
        });
    }
}

fn render(
    frame: &mut Frame,
    session: &mut Session<FunctionsList>,
    mode: &InputMode,
    status: Option<&str>,
) {
    let [search_area, list_area, status_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let (search_text, search_style) = match mode {
        InputMode::Search { buffer } => (format!("{buffer}_"), Style::default().bg(Color::DarkGray)),
        _ => (session.list().search_text().to_string(), Style::default()),
    };
    frame.render_widget(
        Paragraph::new(Line::from(search_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .style(search_style),
        ),
        search_area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(session.extension_name().to_string());
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);
    frame.render_widget(session.list_mut().widget_mut(), inner);

    let status_line = match mode {
        InputMode::Rename { buffer, .. } => format!("Rename: {buffer}_"),
        _ => status.unwrap_or_default().to_string(),
    };
    frame.render_widget(Paragraph::new(status_line), status_area);
    frame.render_widget(
        Paragraph::new(hints(mode)).style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    if let InputMode::Menu { items, cursor } = mode {
        render_menu(frame, list_area, items, *cursor);
    }
}

fn hints(mode: &InputMode) -> &'static str {
    match mode {
        InputMode::Browse => {
            "a add  r rename  d delete  J/K move  / search  m menu  o options  s save  q quit"
        }
        InputMode::Search { .. } => "type to filter  Enter keep  Esc clear",
        InputMode::Rename { .. } => "Enter commit  Esc cancel",
        InputMode::ConfirmDelete => "y remove  n keep",
        InputMode::Menu { .. } => "Enter run  Esc close",
    }
}

fn render_menu(frame: &mut Frame, anchor: Rect, items: &[MenuItem], cursor: usize) {
    let width = 16.min(anchor.width);
    let height = (items.len() as u16 + 2).min(anchor.height);
    let area = Rect::new(
        anchor.x + anchor.width.saturating_sub(width) / 2,
        anchor.y + anchor.height.saturating_sub(height) / 2,
        width,
        height,
    );
    let list = List::new(items.iter().map(|item| item.label))
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Run the full-screen UI on `session` until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_tui(session: Session<FunctionsList>) -> Result<(), TuiError> {
    let mut app = TuiApp::new(session)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventsFunctionsExtension, Project};
    use crate::state::{ListHost, ListSettings};
    use ratatui::backend::TestBackend;

    fn create_test_app(names: &[&str], width: u16, height: u16) -> TuiApp<TestBackend> {
        let mut project = Project::new("Test");
        let mut extension = EventsFunctionsExtension::new("Platformer");
        for name in names {
            extension.functions.push_new(*name);
        }
        project.add_extension(extension);
        let session = Session::new(project, 0, None, ListSettings::default(), FunctionsList::new());
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        TuiApp::with_terminal(terminal, session)
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn names(app: &TuiApp<TestBackend>) -> Vec<String> {
        app.session().project().extensions()[0]
            .functions
            .names()
            .map(str::to_string)
            .collect()
    }

    fn screen(app: &mut TuiApp<TestBackend>) -> String {
        app.draw().unwrap();
        let buffer = app.terminal().backend().buffer();
        let area = buffer.area();
        let mut lines = Vec::new();
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn tui_error_from_io_error() {
        let tui_err: TuiError = io::Error::other("test error").into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_and_ctrl_c_quit() {
        let mut app = create_test_app(&[], 40, 12);
        assert!(press(&mut app, KeyCode::Char('q')));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
        assert!(!press(&mut app, KeyCode::Char('x')));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = create_test_app(&[], 40, 12);
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key(release));
        assert!(names(&app).is_empty());
    }

    #[test]
    fn draws_title_rows_and_add_row() {
        let mut app = create_test_app(&["Jump", "Run"], 40, 12);
        let text = screen(&mut app);
        assert!(text.contains("Platformer"));
        assert!(text.contains("Jump"));
        assert!(text.contains("Run"));
        assert!(text.contains("+ Add a new function"));
    }

    #[test]
    fn arrows_select_the_row_under_the_cursor() {
        let mut app = create_test_app(&["Jump", "Run"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        let run = app.session().function_on_row(1);
        assert_eq!(app.session().host().selected(), run);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.session().host().selected(), None, "add row selects nothing");
        assert!(screen(&mut app).contains("> + Add a new function"));
    }

    #[test]
    fn enter_on_add_row_adds_and_selects() {
        let mut app = create_test_app(&["Jump"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(names(&app), vec!["Jump", "Function"]);
        let added = app.session().function_on_row(1);
        assert_eq!(app.session().host().selected(), added);
    }

    #[test]
    fn rename_commits_typed_name() {
        let mut app = create_test_app(&["Jump", "Run"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('r'));
        assert!(screen(&mut app).contains("Rename: Jump_"));
        assert!(screen(&mut app).contains("[Jump]"));

        for _ in 0.."Jump".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Leap");
        press(&mut app, KeyCode::Enter);

        assert_eq!(names(&app), vec!["Leap", "Run"]);
        assert_eq!(app.status(), Some("Renamed"));
        assert_eq!(app.session().list().renamed(), None);
    }

    #[test]
    fn rename_to_taken_name_shows_warning() {
        let mut app = create_test_app(&["Jump", "Run"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::F(2));
        for _ in 0.."Jump".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Run");
        press(&mut app, KeyCode::Enter);

        assert_eq!(names(&app), vec!["Jump", "Run"]);
        assert_eq!(
            app.status(),
            Some("warning: Another function with this name already exists.")
        );
    }

    #[test]
    fn escape_leaves_rename_without_changes() {
        let mut app = create_test_app(&["Jump"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('r'));
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(names(&app), vec!["Jump"]);
        assert_eq!(app.session().list().renamed(), None);
    }

    #[test]
    fn delete_asks_then_removes_on_yes() {
        let mut app = create_test_app(&["Jump", "Run"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.status(), Some("Remove Jump? (y/n)"));

        press(&mut app, KeyCode::Char('x'));
        assert!(app.session().host().pending_delete().is_some(), "still waiting");

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(names(&app), vec!["Run"]);
        assert_eq!(app.status(), Some("Removed"));
    }

    #[test]
    fn delete_answered_no_keeps_the_function() {
        let mut app = create_test_app(&["Jump"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(names(&app), vec!["Jump"]);
        assert_eq!(app.status(), Some("Kept"));
    }

    #[test]
    fn search_filters_live_and_escape_clears() {
        let mut app = create_test_app(&["Jump", "Run", "JumpHigh"], 40, 12);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "ru");
        let text = screen(&mut app);
        assert!(text.contains("ru_"));
        assert!(text.contains("Run"));
        assert!(!text.contains("Jump"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session().list().search_text(), "");
        assert!(screen(&mut app).contains("JumpHigh"));
    }

    #[test]
    fn shift_moves_the_function_under_the_cursor() {
        let mut app = create_test_app(&["Jump", "Run", "Fall"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(names(&app), vec!["Run", "Jump", "Fall"]);

        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
        assert_eq!(names(&app), vec!["Run", "Fall", "Jump"]);
        assert_eq!(app.cursor(), Some(2), "cursor follows the moved function");
    }

    #[test]
    fn menu_runs_remove_through_confirmation() {
        let mut app = create_test_app(&["Jump"], 40, 12);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('m'));
        let text = screen(&mut app);
        assert!(text.contains("Rename"));
        assert!(text.contains("Remove"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('y'));
        assert!(names(&app).is_empty());
    }

    #[test]
    fn options_and_save_report_in_status() {
        let mut app = create_test_app(&[], 40, 12);
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(
            app.status(),
            Some("Extension options cannot be edited from the terminal.")
        );
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status(), Some("No project file to save to"));
    }

    #[test]
    fn long_lists_scroll_with_the_cursor() {
        let names: Vec<String> = (0..30).map(|i| format!("Fn{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut app = create_test_app(&refs, 30, 12);

        for _ in 0..25 {
            press(&mut app, KeyCode::Down);
        }
        let text = screen(&mut app);
        assert!(text.contains("> Fn24"));
        assert!(!text.contains("Fn00"), "top rows scrolled out");
        assert!(app.session().list().widget().offset() > 0);
    }
}
