use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{LoginField, LoginForm};

use super::title_line;

pub fn render(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let chunks = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(13),
        Constraint::Percentage(30),
    ])
    .split(area);

    let masked = "*".repeat(form.password.chars().count());
    let mut content = vec![
        Line::from(""),
        title_line("WELCOME BACK"),
        Line::from("Sign in to your account".fg(Color::DarkGray)),
        Line::from(""),
        input_line("Email", &form.email, form.focus == LoginField::Email),
        Line::from(""),
        input_line("Password", &masked, form.focus == LoginField::Password),
        Line::from(""),
    ];

    match &form.error {
        Some(err) => content.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        ))),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[Tab] switch field  ·  [Enter] sign in  ·  [Esc] back",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::White)),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled("_", value_style));
    }
    Line::from(spans)
}
