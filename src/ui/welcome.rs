use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{render_footer, title_line};

pub fn render(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        title_line("JOBCONNECT"),
        Line::from(""),
        Line::from("Jobs · Skill Assessments · Franchise Network".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        menu_line("L", "sign in"),
        menu_line("R", "create an account"),
        menu_line("C", "choose a role"),
        Line::from(""),
        menu_line("Q", "quit"),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
    render_footer(frame, chunks[3], notice, "");
}

fn menu_line<'a>(key: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Green).bold()),
        Span::styled(format!("  {}", action), Style::default().fg(Color::Gray)),
    ])
}
