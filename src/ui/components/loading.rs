use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::i18n::tr;

/// Startup screen shown while the environment probes run. Logs collapse
/// to the latest line unless something went wrong or the user expands
/// them.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let banner = Paragraph::new(Line::from(Span::styled(
        tr(app.lang, "initializing"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let lines: Vec<Line> = if app.show_env_logs {
        app.env_logs
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), log_style(l))))
            .collect()
    } else {
        app.env_logs
            .last()
            .map(|l| vec![Line::from(Span::styled(l.as_str(), log_style(l)))])
            .unwrap_or_default()
    };

    let logs = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(logs, chunks[1]);
}

fn log_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    if lower.contains("not found") || lower.contains("failed") || lower.contains("error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    }
}
