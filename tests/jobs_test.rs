mod common;

use common::{press, signed_out_app, type_text};
use crossterm::event::KeyCode;
use jobconnect::models::{ApplicationStatus, PostingStatus, Role};
use jobconnect::router::View;
use jobconnect::{App, Screen};

fn sign_in(app: &mut App, email: &str) {
    press(app, KeyCode::Char('l'));
    type_text(app, email);
    press(app, KeyCode::Tab);
    type_text(app, "password123");
    press(app, KeyCode::Enter);
}

fn tab(app: &mut App, times: usize) {
    for _ in 0..times {
        press(app, KeyCode::Tab);
    }
}

#[test]
fn posted_job_can_be_found_and_applied_to() {
    let mut app = signed_out_app();
    sign_in(&mut app, "employer@demo.com");
    press(&mut app, KeyCode::Char('p'));
    assert!(matches!(app.screen, Screen::JobPosting(_)));

    type_text(&mut app, "Site Electrician");
    tab(&mut app, 1);
    type_text(&mut app, "Metro Construction");
    tab(&mut app, 3);
    type_text(&mut app, "Thane, Maharashtra");
    tab(&mut app, 3);
    type_text(&mut app, "300000");
    tab(&mut app, 1);
    type_text(&mut app, "420000");
    tab(&mut app, 1);
    type_text(&mut app, "2099-06-30");
    tab(&mut app, 1);
    type_text(&mut app, "Wiring for residential towers.");
    tab(&mut app, 1);
    type_text(&mut app, "ITI certificate");
    tab(&mut app, 2);
    type_text(&mut app, "Wiring, Panel Upgrades");
    press(&mut app, KeyCode::Enter);

    assert!(matches!(
        app.screen,
        Screen::Dashboard(View::Dashboard(Role::Employer))
    ));
    assert_eq!(app.notice(), Some("Posted Site Electrician"));
    let posted = app.my_postings().last().map(|job| job.id).unwrap();

    press(&mut app, KeyCode::Char('o'));
    sign_in(&mut app, "jobseeker@demo.com");
    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "site elec");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selected_job().map(|job| job.id), Some(posted));

    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.screen, Screen::JobApplication(_)));
    tab(&mut app, 2);
    type_text(&mut app, "98765 43210");
    tab(&mut app, 2);
    type_text(&mut app, "3,60,000");
    tab(&mut app, 2);
    type_text(&mut app, "Eight years of site wiring.");
    press(&mut app, KeyCode::Enter);

    assert!(matches!(app.screen, Screen::Jobs { searching: false }));
    assert_eq!(app.notice(), Some("Application sent to Metro Construction"));
    assert_eq!(app.board().job(posted).unwrap().applicants, 1);

    let newest = app.my_applications()[0];
    assert_eq!(newest.job_id, posted);
    assert_eq!(newest.status, ApplicationStatus::UnderReview);
    assert_eq!(newest.expected_salary, Some(360_000));
    assert_eq!(app.my_applications().len(), 4);
}

#[test]
fn incomplete_posting_reports_errors() {
    let mut app = signed_out_app();
    sign_in(&mut app, "employer@demo.com");
    press(&mut app, KeyCode::Char('p'));
    type_text(&mut app, "Welder");
    press(&mut app, KeyCode::Enter);

    let Screen::JobPosting(state) = &app.screen else {
        panic!("expected the posting form");
    };
    assert_eq!(state.errors.get("title"), None);
    assert_eq!(state.errors.get("company"), Some("Company name is required"));
    assert_eq!(state.errors.get("location"), Some("Location is required"));
    assert_eq!(state.focus, 1);
    assert_eq!(app.my_postings().len(), 3);
}

#[test]
fn resuming_a_paused_posting_lists_it_again() {
    let mut app = signed_out_app();
    sign_in(&mut app, "employer@demo.com");
    let paused = app.my_postings()[2].id;
    assert_eq!(app.board().job(paused).unwrap().status, PostingStatus::Paused);

    press(&mut app, KeyCode::Char('b'));
    assert!(app.job_results().iter().all(|job| job.id != paused));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.notice(), Some("Posting is now active"));

    press(&mut app, KeyCode::Char('b'));
    assert!(app.job_results().iter().any(|job| job.id == paused));
}

#[test]
fn job_seeker_sees_application_tracker() {
    let mut app = signed_out_app();
    sign_in(&mut app, "jobseeker@demo.com");

    let tracked: Vec<(String, ApplicationStatus)> = app
        .my_applications()
        .iter()
        .map(|a| (app.board().job(a.job_id).unwrap().title.clone(), a.status))
        .collect();
    assert_eq!(
        tracked,
        vec![
            ("Senior Electrician".to_string(), ApplicationStatus::Interview),
            ("Electrical Technician".to_string(), ApplicationStatus::UnderReview),
            ("Maintenance Electrician".to_string(), ApplicationStatus::Rejected),
        ]
    );
}

#[test]
fn guest_can_browse_but_not_edit_profile() {
    let mut app = signed_out_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.notice(), Some("Sign in to edit your profile."));

    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.job_results().iter().all(|job| job.remote));
    assert!(app.my_applications().is_empty());
}
