use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::util::centered_rect;
use crate::app::App;
use crate::i18n::tr;
use crate::links;

pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 40, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", tr(app.lang, "title")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" GitHub: ", Style::default().fg(Color::Gray)),
            Span::styled(links::REPO_URL, Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {}: ", tr(app.lang, "bugReport")),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(links::ISSUES_URL, Style::default().fg(Color::Blue)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "about")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
