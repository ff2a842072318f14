use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::AssessmentScreen;

use super::render_footer;

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, screen: &AssessmentScreen, notice: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], screen);
    render_progress(frame, chunks[1], screen);
    render_question_text(frame, chunks[2], &screen.run.current_question().prompt);
    render_options(frame, chunks[3], screen);
    render_navigator(frame, chunks[4], screen);

    let controls = if screen.run.is_last() {
        "j/k move  ·  space answer  ·  p previous  ·  1-9 jump  ·  s submit  ·  esc leave"
    } else {
        "j/k move  ·  space answer  ·  n next  ·  p previous  ·  1-9 jump  ·  esc leave"
    };
    render_footer(frame, chunks[5], notice, controls);
}

fn render_header(frame: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let assessment = screen.run.assessment();
    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(10)]).split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                assessment.title(),
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(assessment.description().fg(Color::DarkGray)),
        ]),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{} min", assessment.duration_minutes()))
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        columns[1],
    );
}

fn render_progress(frame: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let run = &screen.run;
    let label = format!(
        "Question {} of {}",
        run.current_position() + 1,
        run.total_questions()
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(run.progress_percent()))
        .label(format!("{}  ·  {}% complete", label, run.progress_percent()));
    frame.render_widget(gauge, Rect { height: 1, ..area });
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let question = screen.run.current_question();
    let answered = screen.run.current_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == screen.cursor;
        let is_answer = answered == Some(index);
        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else if is_answer {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };
        let radio = if is_answer { "(•)" } else { "( )" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, radio), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

/// One numbered box per question: current, answered or untouched.
fn render_navigator(frame: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let run = &screen.run;
    let spans: Vec<Span> = (0..run.total_questions())
        .map(|position| {
            let style = if position == run.current_position() {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else if run.answers().is_answered(position) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", position + 1), style)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
