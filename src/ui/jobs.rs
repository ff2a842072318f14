use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Job;

use super::{render_footer, title_line};

pub fn render(frame: &mut Frame, area: Rect, app: &App, searching: bool) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let jobs = app.job_results();
    frame.render_widget(
        Paragraph::new(vec![
            title_line(&format!("FIND YOUR NEXT JOB · {} open", jobs.len())),
            filter_line(app, searching),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray)),
        chunks[0],
    );

    let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    render_list(frame, body[0], &jobs, app.job_cursor());
    match jobs.get(app.job_cursor()) {
        Some(job) => render_detail(frame, body[1], app, job),
        None => frame.render_widget(
            Paragraph::new("No jobs match these filters. Press x to clear them.")
                .fg(Color::DarkGray)
                .block(panel()),
            body[1],
        ),
    }

    let controls = if searching {
        "type to search  ·  enter/esc done"
    } else {
        "j/k select  ·  / search  ·  l city  ·  r remote  ·  x clear  ·  enter apply  ·  esc back"
    };
    render_footer(frame, chunks[2], app.notice(), controls);
}

fn filter_line(app: &App, searching: bool) -> Line<'static> {
    let filter = app.job_filter();
    let query = if searching {
        format!("{}_", filter.query)
    } else if filter.query.is_empty() {
        "jobs, companies, skills".to_string()
    } else {
        filter.query.clone()
    };
    let query_style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(query, query_style),
        Span::styled("   City: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            filter.city.clone().unwrap_or_else(|| "All".to_string()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("   Remote only: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            if filter.remote_only { "yes" } else { "no" },
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn panel() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1))
}

fn render_list(frame: &mut Frame, area: Rect, jobs: &[&Job], cursor: usize) {
    let lines: Vec<Line> = jobs
        .iter()
        .enumerate()
        .map(|(index, job)| {
            let selected = index == cursor;
            let style = if selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, style),
                Span::styled(job.title.clone(), style),
                Span::styled(format!("  {}", job.company), Style::default().fg(Color::Gray)),
            ];
            if job.urgent {
                spans.push(Span::styled("  urgent", Style::default().fg(Color::Red)));
            }
            Line::from(spans)
        })
        .collect();

    // One line per job; keep the cursor in view.
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let scroll = u16::try_from(cursor.saturating_sub(visible - 1)).unwrap_or(0);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)).block(panel()), area);
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App, job: &Job) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut heading = vec![Span::styled(
        job.title.clone(),
        Style::default().fg(Color::White).bold(),
    )];
    if job.verified {
        heading.push(Span::styled("  ✓ verified", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![
        Line::from(heading),
        Line::from(Span::styled(job.company.clone(), Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(vec![label("Location    "), Span::raw(job.place().to_string())]),
        Line::from(vec![label("Type        "), Span::raw(job.job_type.label())]),
        Line::from(vec![label("Salary      "), Span::raw(job.salary.to_string())]),
    ];
    if job.remote {
        lines.push(Line::from(vec![label("Remote      "), Span::raw("yes")]));
    }
    if !job.experience.is_empty() {
        lines.push(Line::from(vec![label("Experience  "), Span::raw(job.experience.clone())]));
    }
    lines.push(Line::from(vec![
        label("Posted      "),
        Span::raw(job.posted_on.to_string()),
    ]));
    if let Some(deadline) = job.deadline {
        lines.push(Line::from(vec![label("Apply by    "), Span::raw(deadline.to_string())]));
    }
    if !job.skills.is_empty() {
        lines.push(Line::from(vec![label("Skills      "), Span::raw(job.skills.join(", "))]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(job.description.clone()));
    if !job.requirements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(label("Requirements")));
        lines.push(Line::from(job.requirements.clone()));
    }

    let applied = app
        .user()
        .is_some_and(|user| app.board().has_applied(job.id, &user.email));
    lines.push(Line::from(""));
    lines.push(if applied {
        Line::from(Span::styled("You have applied", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(
            format!("{} applicants · press enter to apply", job.applicants),
            Style::default().fg(Color::DarkGray),
        ))
    });

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(panel()),
        area,
    );
}
