mod common;

use common::{press, signed_out_app, type_text};
use crossterm::event::KeyCode;
use jobconnect::models::{ModuleStatus, Role};
use jobconnect::router::View;
use jobconnect::session::{FileSessionStore, Session};
use jobconnect::{App, Config, Portal, Screen, data::load_builtin_catalog};
use tempfile::TempDir;

// React Development answer key.
const REACT_KEY: [usize; 5] = [1, 1, 1, 0, 1];

fn sign_in(app: &mut App, email: &str, password: &str) {
    press(app, KeyCode::Char('l'));
    type_text(app, email);
    press(app, KeyCode::Tab);
    type_text(app, password);
    press(app, KeyCode::Enter);
}

#[test]
fn job_seeker_completes_react_and_unlocks_system_design() {
    let mut app = signed_out_app();
    sign_in(&mut app, "jobseeker@demo.com", "password123");
    assert!(matches!(
        app.screen,
        Screen::Dashboard(View::Dashboard(Role::JobSeeker))
    ));

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.screen, Screen::Assessment(_)));

    for (position, correct) in REACT_KEY.iter().enumerate() {
        for _ in 0..*correct {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Char(' '));
        if position + 1 < REACT_KEY.len() {
            press(&mut app, KeyCode::Char('n'));
        }
    }
    press(&mut app, KeyCode::Char('s'));

    let Screen::Result(result) = &app.screen else {
        panic!("expected the result screen");
    };
    assert_eq!(result.report.percent, 100);
    assert_eq!(result.unlocked, vec!["System Design".to_string()]);

    press(&mut app, KeyCode::Enter);
    let module = app.track().get(3).unwrap();
    assert_eq!(module.status, ModuleStatus::Available);
    assert_eq!(app.track().get(2).unwrap().score, Some(100));
}

#[test]
fn wrong_password_stays_on_login() {
    let mut app = signed_out_app();
    sign_in(&mut app, "jobseeker@demo.com", "wrong");

    let Screen::Login(form) = &app.screen else {
        panic!("expected the login screen");
    };
    assert!(form.error.is_some());
    assert!(app.user().is_none());
}

#[test]
fn session_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let session = Session::restore(FileSessionStore::new(&path)).unwrap();
    let mut app = App::new(load_builtin_catalog().unwrap(), session);
    sign_in(&mut app, "employer@demo.com", "password123");
    assert!(path.exists());

    let session = Session::restore(FileSessionStore::new(&path)).unwrap();
    let app = App::new(load_builtin_catalog().unwrap(), session);
    assert_eq!(app.user().map(|u| u.role), Some(Role::Employer));
    assert!(matches!(
        app.screen,
        Screen::Dashboard(View::Dashboard(Role::Employer))
    ));
}

#[test]
fn unknown_role_from_config_shows_invalid_role() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        catalog: None,
        session_file: dir.path().join("session.json"),
        log_file: dir.path().join("portal.log"),
        role: Some("astronaut".to_string()),
    };

    let portal = Portal::from_config(&config).unwrap();
    assert!(matches!(
        &portal.app().screen,
        Screen::Dashboard(View::InvalidRole(token)) if token == "astronaut"
    ));
}

#[test]
fn missing_catalog_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        catalog: Some(dir.path().join("nope.json")),
        session_file: dir.path().join("session.json"),
        log_file: dir.path().join("portal.log"),
        role: None,
    };

    assert!(matches!(
        Portal::from_config(&config),
        Err(jobconnect::PortalError::Load(_))
    ));
}
