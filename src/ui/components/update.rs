use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::util::centered_rect;
use crate::app::App;
use crate::i18n::tr;

pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];

    match &app.update_result {
        None => lines.push(Line::from(Span::styled(
            format!(" {}", tr(app.lang, "checkingUpdate")),
            Style::default().fg(Color::Gray),
        ))),
        Some(Ok(result)) if result.has_update => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {}", tr(app.lang, "updateAvailable")),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("v{}", result.latest_version),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" ▶ {}", tr(app.lang, "downloadNow")),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Some(Ok(_)) => lines.push(Line::from(Span::styled(
            format!(" {}", tr(app.lang, "noUpdate")),
            Style::default().fg(Color::Gray),
        ))),
        Some(Err(e)) => lines.push(Line::from(Span::styled(
            format!(" {}", e),
            Style::default().fg(Color::Red),
        ))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "checkUpdate")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        popup,
    );
}
