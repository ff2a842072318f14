mod assessment;
mod dashboard;
mod form;
mod jobs;
mod login;
mod registration;
mod result;
mod role_selection;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Welcome => welcome::render(frame, area, app.notice()),
        Screen::Login(form) => login::render(frame, area, form),
        Screen::Registration(screen) => registration::render(frame, area, screen),
        Screen::RoleSelection { cursor } => role_selection::render(frame, area, *cursor),
        Screen::Dashboard(view) => dashboard::render(frame, area, app, view),
        Screen::Assessment(screen) => assessment::render(frame, area, screen, app.notice()),
        Screen::Result(screen) => result::render(frame, area, screen),
        Screen::Jobs { searching } => jobs::render(frame, area, app, *searching),
        Screen::JobPosting(state) => form::render(
            frame,
            area,
            "POST A NEW JOB",
            "Find the perfect candidate for your team",
            state,
            app.notice(),
        ),
        Screen::JobApplication(screen) => {
            let job = app.board().job(screen.job_id);
            let heading = job.map_or_else(|| "APPLY".to_string(), |j| format!("APPLY · {}", j.title));
            let company = job.map_or("", |j| j.company.as_str());
            form::render(frame, area, &heading, company, &screen.state, app.notice())
        }
        Screen::Profile(state) => form::render(
            frame,
            area,
            "EDIT PROFILE",
            "Keep your details current so employers can reach you",
            state,
            app.notice(),
        ),
    }
}

/// Bottom line: the current notice if there is one, otherwise key hints.
fn render_footer(frame: &mut Frame, area: Rect, notice: Option<&str>, controls: &str) {
    let widget = match notice {
        Some(notice) => Paragraph::new(notice).fg(Color::Yellow),
        None => Paragraph::new(controls).fg(Color::DarkGray),
    };
    frame.render_widget(widget.alignment(Alignment::Center), area);
}

fn title_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Cyan).bold()))
}
