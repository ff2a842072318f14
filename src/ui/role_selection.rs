use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Role;

use super::title_line;

struct RoleCard {
    description: &'static str,
    features: [&'static str; 4],
    stats: &'static str,
}

fn card(role: Role) -> RoleCard {
    match role {
        Role::JobSeeker => RoleCard {
            description: "Find your dream job with personalized recommendations",
            features: [
                "AI-powered job matching",
                "Skill assessments & certificates",
                "Interview preparation tools",
                "Career progression tracking",
            ],
            stats: "5,000+ active positions",
        },
        Role::Employer => RoleCard {
            description: "Find the perfect candidates for your organization",
            features: [
                "Advanced candidate filtering",
                "Skill-based assessments",
                "Applicant tracking system",
                "Company branding tools",
            ],
            stats: "2,000+ companies trust us",
        },
        Role::Franchise => RoleCard {
            description: "Expand our network and earn with every placement",
            features: [
                "Territory management",
                "Commission tracking",
                "Local job market insights",
                "Marketing support & tools",
            ],
            stats: "500+ franchise locations",
        },
        Role::Admin => RoleCard {
            description: "Oversee users, content and verification",
            features: [
                "User management",
                "Assessment catalog",
                "Verification queue",
                "Platform health",
            ],
            stats: "Provisioned accounts only",
        },
    }
}

/// Feature list shown for a role, reused by the dashboards.
pub(super) fn features(role: Role) -> [&'static str; 4] {
    card(role).features
}

pub fn render(frame: &mut Frame, area: Rect, cursor: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            title_line("CHOOSE YOUR ROLE"),
            Line::from(
                "Select how you'd like to use JobConnect to get personalized features and content"
                    .fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center),
        chunks[0],
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(chunks[1]);
    for (index, role) in Role::SELF_SERVICE.iter().enumerate() {
        render_card(frame, columns[index], *role, index == cursor);
    }

    let selected = Role::SELF_SERVICE[cursor.min(Role::SELF_SERVICE.len() - 1)];
    let footer = vec![
        Line::from(Span::styled(
            format!("[Enter] Continue as {}", selected.title()),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("←/→ choose  ·  esc back  ·  q quit".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[2]);
}

fn render_card(frame: &mut Frame, area: Rect, role: Role, selected: bool) {
    let info = card(role);
    let border = if selected { Color::Cyan } else { Color::DarkGray };

    let mut lines = vec![
        Line::from(Span::styled(role.title(), Style::default().fg(Color::White).bold())),
        Line::from(info.description.fg(Color::Gray)),
        Line::from(""),
        Line::from(info.stats.fg(Color::Yellow)),
        Line::from(""),
    ];
    lines.extend(
        info.features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("✓ ", Style::default().fg(border)),
                Span::raw(*feature),
            ])
        }),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, area);
}
