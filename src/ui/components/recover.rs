use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::util::centered_rect;
use crate::app::{App, RecoverState};
use crate::i18n::tr;

pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(80, 70, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();

    match app.recover_state {
        RecoverState::Idle => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" {}", tr(app.lang, "recoverWarning")),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" ▶ {}", tr(app.lang, "startRecover")),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        _ => {
            for log in &app.recover_logs {
                let style = if log.starts_with("Error") {
                    Style::default().fg(Color::Red)
                } else if log == "DONE!" {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(Span::styled(format!(" {}", log), style)));
            }
            if let Some(notice) = &app.recover_notice {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!(" {}", notice),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    }

    let title = match app.recover_state {
        RecoverState::Recovering => tr(app.lang, "recovering"),
        RecoverState::Success => tr(app.lang, "recoverSuccess"),
        _ => tr(app.lang, "recoverTitle"),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        popup,
    );
}
