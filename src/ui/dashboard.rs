use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;
use crate::models::{Application, ApplicationStatus, Job, Module, ModuleStatus, Role};
use crate::router::View;

use super::{render_footer, role_selection, title_line};

pub fn render(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    match view {
        View::Dashboard(role) => render_dashboard(frame, area, app, *role),
        View::InvalidRole(token) => render_problem(
            frame,
            area,
            "Invalid Role",
            &format!("'{}' is not a role. Please select a valid role to continue.", token),
        ),
        View::NotFound(path) => render_problem(
            frame,
            area,
            "Page Not Found",
            &format!("Nothing lives at {}", path),
        ),
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, role: Role) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let greeting = match app.user() {
        Some(user) => format!("Signed in as {} <{}>", user.name, user.email),
        None => "Browsing as guest".to_string(),
    };
    frame.render_widget(
        Paragraph::new(vec![
            title_line(&format!("{} DASHBOARD", role.title().to_uppercase())),
            Line::from(Span::styled(greeting, Style::default().fg(Color::DarkGray))),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray)),
        chunks[0],
    );

    let controls = match role {
        Role::JobSeeker => {
            "j/k select module  ·  enter open  ·  b browse jobs  ·  e profile  ·  o sign out  ·  q quit"
        }
        Role::Employer => {
            "p post job  ·  j/k select  ·  space pause/resume  ·  b jobs  ·  e profile  ·  o sign out"
        }
        _ => "b browse jobs  ·  e profile  ·  o sign out  ·  esc home  ·  q quit",
    };

    match role {
        Role::JobSeeker => {
            let body = Layout::vertical([Constraint::Fill(3), Constraint::Fill(2)]).split(chunks[1]);
            render_modules(frame, body[0], app);
            render_applications(frame, body[1], app);
        }
        Role::Employer => render_postings(frame, chunks[1], app),
        Role::Admin => render_admin(frame, chunks[1], app),
        Role::Franchise => {
            let body = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(chunks[1]);
            render_features(frame, body[0], role);
            render_openings_by_city(frame, body[1], app);
        }
    }
    render_footer(frame, chunks[2], app.notice(), controls);
}

fn render_modules(frame: &mut Frame, area: Rect, app: &App) {
    let track = app.track();
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area);

    let gauge = Gauge::default()
        .block(Block::default().title(format!(
            " Skill Assessments · {} of {} completed ",
            track.completed_count(),
            track.modules().len()
        )))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(u16::from(track.overall_percent()));
    frame.render_widget(gauge, chunks[0]);

    let mut lines: Vec<Line> = Vec::with_capacity(track.modules().len() * 2 + 1);
    lines.push(Line::from(
        "Complete modules progressively to unlock advanced skills".fg(Color::DarkGray),
    ));
    lines.push(Line::from(""));
    for (index, module) in track.modules().iter().enumerate() {
        lines.push(module_line(module, index == app.module_cursor()));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, chunks[1]);
}

fn module_line(module: &Module, selected: bool) -> Line<'_> {
    let status_color = match module.status {
        ModuleStatus::Locked => Color::DarkGray,
        ModuleStatus::Available => Color::White,
        ModuleStatus::InProgress => Color::Cyan,
        ModuleStatus::Completed => Color::Green,
    };
    let marker = if selected { ">" } else { " " };
    let title_style = if selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(status_color)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", marker), title_style),
        Span::styled(format!("{:<28}", module.title), title_style),
        Span::styled(
            format!("{:<12}", module.status.label()),
            Style::default().fg(status_color),
        ),
        Span::styled(
            format!("{:>3}%", module.progress_percent),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(score) = module.score {
        spans.push(Span::styled(
            format!("   score {}", score),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(action) = module.status.action() {
        spans.push(Span::styled(
            format!("   [{}]", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn render_applications(frame: &mut Frame, area: Rect, app: &App) {
    let applications = app.my_applications();
    let mut lines: Vec<Line> = Vec::with_capacity(applications.len() + 1);
    if app.user().is_none() {
        lines.push(Line::from("Sign in to track your applications.".fg(Color::DarkGray)));
    } else if applications.is_empty() {
        lines.push(Line::from(
            "No applications yet. Press b to browse jobs.".fg(Color::DarkGray),
        ));
    }
    for application in applications {
        if let Some(job) = app.board().job(application.job_id) {
            lines.push(application_line(application, job));
        }
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" My Applications ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn application_line<'a>(application: &'a Application, job: &'a Job) -> Line<'a> {
    let status_color = match application.status {
        ApplicationStatus::Interview => Color::Green,
        ApplicationStatus::UnderReview => Color::Yellow,
        ApplicationStatus::Rejected => Color::Red,
    };
    Line::from(vec![
        Span::styled(format!("{:<26}", job.title), Style::default().fg(Color::White)),
        Span::styled(format!("{:<22}", job.company), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:<22}", application.status.label()),
            Style::default().fg(status_color),
        ),
        Span::styled(
            format!("applied {}", application.applied_on),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn render_postings(frame: &mut Frame, area: Rect, app: &App) {
    let postings = app.my_postings();
    let total: u32 = postings.iter().map(|job| job.applicants).sum();
    let active = postings.iter().filter(|job| job.is_open()).count();

    let mut lines = vec![
        stat_line("Active postings", active),
        stat_line("Total applicants", total as usize),
        Line::from(""),
    ];
    if postings.is_empty() {
        lines.push(Line::from("No postings yet. Press p to post a job.".fg(Color::DarkGray)));
    }
    for (index, job) in postings.iter().enumerate() {
        let selected = index == app.posting_cursor();
        let style = if selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let status_color = if job.is_open() { Color::Green } else { Color::DarkGray };
        lines.push(Line::from(vec![
            Span::styled(if selected { " > " } else { "   " }, style),
            Span::styled(format!("{:<30}", job.title), style),
            Span::styled(
                format!("{:>4} applicants   ", job.applicants),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(job.status.label(), Style::default().fg(status_color)),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Job Postings ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_openings_by_city(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled("Open positions", Style::default().fg(Color::White).bold())),
        Line::from(""),
    ];
    for (city, count) in app.board().openings_by_city() {
        lines.push(stat_line(&city, count));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_admin(frame: &mut Frame, area: Rect, app: &App) {
    let catalog = app.catalog();
    let question_count: usize = catalog.assessments.iter().map(|a| a.len()).sum();

    let mut lines = vec![
        Line::from(Span::styled("Platform", Style::default().fg(Color::White).bold())),
        Line::from(""),
        stat_line("Assessments", catalog.assessments.len()),
        stat_line("Questions", question_count),
        stat_line("Skill modules", catalog.modules.len()),
        stat_line("Demo accounts", catalog.accounts.len()),
        stat_line("Job postings", app.board().jobs().len()),
        stat_line("Applications", app.board().applications().len()),
        Line::from(""),
        Line::from(Span::styled("Accounts by role", Style::default().fg(Color::White).bold())),
        Line::from(""),
    ];
    for role in Role::ALL {
        let count = catalog.accounts.iter().filter(|a| a.role == role).count();
        lines.push(stat_line(role.title(), count));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn stat_line(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<20}", label), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::Cyan).bold()),
    ])
}

fn render_features(frame: &mut Frame, area: Rect, role: Role) {
    let mut lines = vec![
        Line::from(Span::styled("Your tools", Style::default().fg(Color::White).bold())),
        Line::from(""),
    ];
    lines.extend(role_selection::features(role).into_iter().map(|feature| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::raw(feature),
        ])
    }));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_problem(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::Red).bold())),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] home  ·  [Q] quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
