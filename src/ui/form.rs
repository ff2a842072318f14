use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::form::{Form, FormState};

use super::{render_footer, title_line};

const CONTROLS: &str = "tab next field  ·  ←/→ or space choose  ·  enter submit  ·  esc cancel";

/// Draws any form with its heading, field errors and footer.
pub fn render<F: Form>(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    subtitle: &str,
    state: &FormState<F>,
    notice: Option<&str>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            title_line(heading),
            Line::from(subtitle.to_string().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center),
        chunks[0],
    );

    render_fields(frame, chunks[1], state);
    render_footer(frame, chunks[2], notice, CONTROLS);
}

fn render_fields<F: Form>(frame: &mut Frame, area: Rect, state: &FormState<F>) {
    let form = &state.form;
    let fields = form.fields();

    let mut lines: Vec<Line> = Vec::with_capacity(fields.len() * 2);
    for (index, field) in fields.iter().enumerate() {
        let focused = index == state.focus;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { ">" } else { " " };
        let value = form.value(*field);
        let shown = if form.is_choice(*field) {
            format!("< {} >", if value.is_empty() { "select" } else { value.as_str() })
        } else if focused {
            format!("{}_", value)
        } else {
            value
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(
                format!("{:<30}", form.label(*field)),
                Style::default().fg(Color::White),
            ),
            Span::styled(shown, style),
        ]));

        match state.error(*field) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("      {}", message),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    // Two lines per field; keep the focused one in view.
    let visible = area.height.saturating_sub(2);
    let focus_line = u16::try_from(state.focus * 2 + 2).unwrap_or(u16::MAX);
    let scroll = focus_line.saturating_sub(visible);

    let widget = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
