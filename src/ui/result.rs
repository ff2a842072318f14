use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::ResultScreen;
use crate::assessment::Verdict;

pub fn render(frame: &mut Frame, area: Rect, screen: &ResultScreen) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], screen);
    render_question_breakdown(frame, chunks[2], screen);
    render_controls(frame, chunks[3]);
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Strong => Color::Green,
        Verdict::Adequate => Color::Yellow,
        Verdict::NeedsReview => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, screen: &ResultScreen) {
    let report = &screen.report;
    let color = verdict_color(report.verdict);

    let mut content = vec![
        Line::from(Span::styled(
            "ASSESSMENT COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(format!("You have completed the {} assessment", screen.title).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", report.percent),
            Style::default().fg(color).bold(),
        )),
        Line::from(format!("Correct answers: {} / {}", report.correct, report.total).fg(Color::Gray)),
        Line::from(Span::styled(report.verdict.message(), Style::default().fg(color))),
    ];

    if !screen.unlocked.is_empty() {
        content.push(Line::from(Span::styled(
            format!("Unlocked: {}", screen.unlocked.join(", ")),
            Style::default().fg(Color::Green).bold(),
        )));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, screen: &ResultScreen) {
    let lines: Vec<Line> = screen
        .report
        .breakdown
        .iter()
        .map(|outcome| {
            let (symbol, color) = if outcome.is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };
            let detail = match outcome.selected {
                Some(selected) if !outcome.is_correct => format!(
                    "answered {}, correct {}",
                    option_letter(selected),
                    option_letter(outcome.correct_option)
                ),
                Some(selected) => format!("answered {}", option_letter(selected)),
                None => format!("unanswered, correct {}", option_letter(outcome.correct_option)),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", outcome.position + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(detail, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((screen.scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  enter back to dashboard  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
