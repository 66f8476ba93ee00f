use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::launch_panel::input_line;
use super::util::{centered_rect, truncate};
use crate::app::App;
use crate::i18n::tr;

pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(80, 70, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, project) in app.temp_projects.iter().enumerate() {
        let selected = i == app.manager_selected;
        let marker = if selected { "▶" } else { " " };

        if selected && app.manager_renaming {
            let mut line = input_line(&project.name, app.cursor);
            line.spans.insert(
                0,
                Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            );
            lines.push(line);
        } else {
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                Span::styled(truncate(&project.name, 24), style),
                Span::styled(
                    format!("  {}", truncate(&project.path, 40)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    if !app.manager_status.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", app.manager_status),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "projectManagement")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
