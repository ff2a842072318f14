#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobconnect::models::{Assessment, Question};
use jobconnect::session::{MemorySessionStore, Session};
use jobconnect::{App, data::load_builtin_catalog, handle_input};

/// Five questions with three options each, answered correctly by `key`.
pub fn assessment_with_key(key: &[usize]) -> Assessment {
    let questions = key
        .iter()
        .enumerate()
        .map(|(i, correct)| {
            Question::new(
                i as u32 + 1,
                format!("Question {}", i + 1),
                ["first", "second", "third"],
                *correct,
            )
        })
        .collect();
    Assessment::new(7, "Sample", "Sample assessment", 10, questions)
        .expect("valid sample assessment")
}

pub fn signed_out_app() -> App {
    let session = Session::restore(MemorySessionStore::new()).expect("memory store never fails");
    App::new(load_builtin_catalog().expect("builtin catalog parses"), session)
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
