//! # jobconnect
//!
//! A terminal front end for a job marketplace: demo sign-in, a registration
//! wizard, role dashboards, a searchable job board with postings and
//! applications, and skill assessments that unlock one another.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jobconnect::{Portal, PortalError};
//! use jobconnect::data::load_builtin_catalog;
//! use jobconnect::session::{FileSessionStore, Session};
//!
//! fn main() -> Result<(), PortalError> {
//!     let catalog = load_builtin_catalog()?;
//!     let session = Session::restore(FileSessionStore::new("session.json"))?;
//!
//!     Portal::new(catalog, session).run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod assessment;
pub mod config;
pub mod data;
pub mod error;
mod form;
pub mod jobs;
pub mod models;
pub mod profile;
pub mod progress;
pub mod registration;
pub mod router;
pub mod session;
pub mod terminal;
mod ui;
mod validation;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;
use tracing::{debug, info};

pub use app::{
    App, ApplicationScreen, AssessmentScreen, LoginField, LoginForm, RegistrationScreen,
    ResultScreen, Screen,
};
pub use form::{Form, FormInput, FormState};
pub use config::Config;
pub use data::Catalog;
pub use error::{LoadError, SessionError};

use crate::data::{load_builtin_catalog, load_catalog_from_json};
use crate::models::Role;
use crate::session::{FileSessionStore, Session};

/// Error type for running the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("failed to load catalog: {0}")]
    Load(#[from] LoadError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A portal instance that can be run in the terminal.
pub struct Portal {
    app: App,
}

impl Portal {
    pub fn new(catalog: Catalog, session: Session) -> Self {
        Self {
            app: App::new(catalog, session),
        }
    }

    /// Builds the portal from command-line configuration: the catalog file
    /// (or the built-in one), the persisted session and an optional role to
    /// open straight away.
    pub fn from_config(config: &Config) -> Result<Self, PortalError> {
        let catalog = match &config.catalog {
            Some(path) => load_catalog_from_json(path)?,
            None => load_builtin_catalog()?,
        };
        let session = Session::restore(FileSessionStore::new(&config.session_file))?;

        let mut portal = Self::new(catalog, session);
        if let Some(role) = &config.role {
            portal.app.open_dashboard(role);
        }
        Ok(portal)
    }

    /// Run the portal in the terminal.
    ///
    /// This will take over the terminal, display the portal UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), PortalError> {
        let mut term = terminal::init()?;
        info!("portal started");
        let result = run_event_loop(&mut term, &mut self.app);
        term.restore()?;
        info!("portal stopped");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::PortalTerminal,
    app: &mut App,
) -> Result<(), PortalError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

/// Applies one key press to the current screen. Returns true if the
/// portal should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    debug!(key = ?key.code, "key pressed");
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key.code),
        Screen::Login(_) => handle_login_input(app, key.code),
        Screen::Registration(_) => handle_registration_input(app, key.code),
        Screen::RoleSelection { .. } => handle_role_selection_input(app, key.code),
        Screen::Dashboard(_) => handle_dashboard_input(app, key.code),
        Screen::Assessment(_) => handle_assessment_input(app, key.code),
        Screen::Result(_) => handle_result_input(app, key.code),
        Screen::Jobs { searching: true } => handle_job_search_input(app, key.code),
        Screen::Jobs { searching: false } => handle_jobs_input(app, key.code),
        Screen::JobPosting(_) | Screen::JobApplication(_) | Screen::Profile(_) => {
            handle_form_input(app, key.code)
        }
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('l') | KeyCode::Char('L') => app.open_login(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.open_registration(),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => app.open_role_selection(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

// Text screens take every printable key, so only Esc leaves them.
fn handle_login_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.login_input(c),
        KeyCode::Backspace => app.login_backspace(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.login_switch_field(),
        KeyCode::Enter => {
            app.submit_login();
        }
        KeyCode::Esc => app.go_welcome(),
        _ => {}
    }
    false
}

fn handle_registration_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.registration_input(c),
        KeyCode::Backspace => app.registration_backspace(),
        KeyCode::Left => app.registration_cycle(false),
        KeyCode::Right => app.registration_cycle(true),
        KeyCode::Tab | KeyCode::Down => app.registration_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.registration_focus_previous(),
        KeyCode::Enter => app.registration_next(),
        KeyCode::Esc => app.registration_previous(),
        _ => {}
    }
    false
}

fn handle_role_selection_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.role_selection_move(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.role_selection_move(true),
        KeyCode::Enter => app.confirm_role(),
        KeyCode::Esc => app.go_welcome(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) -> bool {
    let role = match app.screen {
        Screen::Dashboard(router::View::Dashboard(role)) => Some(role),
        _ => None,
    };

    match (role, key) {
        (Some(Role::JobSeeker), KeyCode::Down | KeyCode::Char('j')) => app.select_next_module(),
        (Some(Role::JobSeeker), KeyCode::Up | KeyCode::Char('k')) => {
            app.select_previous_module()
        }
        (Some(Role::JobSeeker), KeyCode::Enter) => app.open_selected_module(),
        (Some(Role::Employer), KeyCode::Down | KeyCode::Char('j')) => app.select_next_posting(),
        (Some(Role::Employer), KeyCode::Up | KeyCode::Char('k')) => {
            app.select_previous_posting()
        }
        (Some(Role::Employer), KeyCode::Char('p') | KeyCode::Char('P')) => app.open_posting(),
        (Some(Role::Employer), KeyCode::Char(' ')) => app.toggle_selected_posting(),
        (Some(_), KeyCode::Char('b') | KeyCode::Char('B')) => app.open_jobs(),
        (Some(_), KeyCode::Char('e') | KeyCode::Char('E')) => app.open_profile(),
        (_, KeyCode::Char('o') | KeyCode::Char('O')) => app.sign_out(),
        (_, KeyCode::Esc) => app.go_welcome(),
        (_, KeyCode::Char('q') | KeyCode::Char('Q')) => return true,
        _ => {}
    }
    false
}

fn handle_assessment_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_option_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_option_cursor(true),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.jump_to_question(digit as usize - 1);
            }
        }
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit_assessment(),
        KeyCode::Esc => app.leave_assessment(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_jobs_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_job(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_job(),
        KeyCode::Char('/') => app.set_job_searching(true),
        KeyCode::Char('l') | KeyCode::Char('L') => app.cycle_job_city(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.toggle_remote_only(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.clear_job_filter(),
        KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A') => app.open_application(),
        KeyCode::Esc => app.return_to_dashboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_job_search_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.job_search_input(c),
        KeyCode::Backspace => app.job_search_backspace(),
        KeyCode::Enter | KeyCode::Esc => app.set_job_searching(false),
        _ => {}
    }
    false
}

fn handle_form_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        key => {
            if let Some(form) = app.form_mut() {
                match key {
                    KeyCode::Char(c) => form.input(c),
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Left => form.cycle(false),
                    KeyCode::Right => form.cycle(true),
                    KeyCode::Tab | KeyCode::Down => form.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
                    _ => {}
                }
            }
        }
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Enter | KeyCode::Esc => app.finish_result(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn app() -> App {
        let session = Session::restore(MemorySessionStore::new()).unwrap();
        App::new(load_builtin_catalog().unwrap(), session)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn q_quits_from_welcome_but_types_on_login() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert!(matches!(app.screen, Screen::Login(_)));

        assert!(!press(&mut app, KeyCode::Char('q')));
        let Screen::Login(form) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(form.email, "q");

        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_input(&mut app, key));
    }

    #[test]
    fn role_selection_confirms_employer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.screen,
            Screen::Dashboard(router::View::Dashboard(Role::Employer))
        ));
    }

    #[test]
    fn enter_on_employer_dashboard_does_not_start_a_module() {
        let mut app = app();
        app.open_dashboard("employer");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Dashboard(_)));
    }

    #[test]
    fn search_mode_captures_letters() {
        let mut app = app();
        app.open_dashboard("job-seeker");
        press(&mut app, KeyCode::Char('b'));
        assert!(matches!(app.screen, Screen::Jobs { searching: false }));

        press(&mut app, KeyCode::Char('/'));
        for c in "rq".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        assert_eq!(app.job_filter().query, "rq");

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Jobs { searching: false }));
        press(&mut app, KeyCode::Esc);
        assert!(matches!(
            app.screen,
            Screen::Dashboard(router::View::Dashboard(Role::JobSeeker))
        ));
    }

    #[test]
    fn space_toggles_choice_fields_in_forms() {
        let mut app = app();
        app.open_dashboard("employer");
        press(&mut app, KeyCode::Char('p'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Char(' '));

        let Screen::JobPosting(state) = &app.screen else {
            panic!("expected posting form");
        };
        assert!(state.form.remote);

        press(&mut app, KeyCode::Esc);
        assert!(matches!(
            app.screen,
            Screen::Dashboard(router::View::Dashboard(Role::Employer))
        ));
    }
}
