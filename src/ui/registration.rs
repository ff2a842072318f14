use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::RegistrationScreen;
use crate::registration::Step;

use super::title_line;

pub fn render(frame: &mut Frame, area: Rect, screen: &RegistrationScreen) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            title_line("CREATE ACCOUNT"),
            Line::from("Join thousands of professionals".fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center),
        chunks[0],
    );
    render_steps(frame, chunks[1], screen.wizard.step());

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(screen.wizard.progress_percent()))
        .label("");
    frame.render_widget(gauge, chunks[2]);

    if screen.wizard.step() == Step::Verification {
        render_verification(frame, chunks[3]);
    } else {
        render_fields(frame, chunks[3], screen);
    }

    let controls = if screen.wizard.is_final_step() {
        "tab next field  ·  enter complete registration  ·  esc previous"
    } else {
        "tab next field  ·  ←/→ choose  ·  enter next step  ·  esc previous"
    };
    frame.render_widget(
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        chunks[4],
    );
}

fn render_steps(frame: &mut Frame, area: Rect, current: Step) {
    let spans: Vec<Span> = Step::ALL
        .iter()
        .flat_map(|step| {
            let style = if step.number() <= current.number() {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let marker = if step.number() < current.number() {
                "✓".to_string()
            } else {
                step.number().to_string()
            };
            [
                Span::styled(format!(" ({}) {} ", marker, step.title()), style),
                Span::raw("   "),
            ]
        })
        .collect();

    let description = Line::from(current.description().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(vec![Line::from(spans), description]).alignment(Alignment::Center),
        area,
    );
}

fn render_fields(frame: &mut Frame, area: Rect, screen: &RegistrationScreen) {
    let form = screen.wizard.form();
    let fields = form.fields(screen.wizard.step());
    let errors = screen.wizard.errors();

    let mut lines: Vec<Line> = Vec::with_capacity(fields.len() * 3);
    if fields.is_empty() {
        lines.push(Line::from(
            "Select a role on the first step to fill in your profile.".fg(Color::DarkGray),
        ));
    }

    for (index, field) in fields.iter().enumerate() {
        let focused = index == screen.focus;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { ">" } else { " " };
        let value = form.value(*field);
        let shown = if field.is_choice() {
            format!("< {} >", if value.is_empty() { "select" } else { value })
        } else if focused {
            format!("{}_", value)
        } else {
            value.to_string()
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(
                format!("{:<22}", field.label(form.role)),
                Style::default().fg(Color::White),
            ),
            Span::styled(shown, style),
        ]));

        match errors.get(field.key()) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("      {}", message),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_verification(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Identity documents",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from("Aadhar Card and PAN Card are collected at your first in-person visit."),
        Line::from("Job seekers may also bring certificates."),
        Line::from(""),
        Line::from(
            "Your documents will be reviewed within 24-48 hours. You'll be notified once verification is complete."
                .fg(Color::DarkGray),
        ),
    ];

    let widget = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
