use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::i18n::tr;

/// The model tab strip. The active model is marked with a dot, the
/// cursor is rendered reversed, and models without a key are dimmed.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    if let Some(config) = &app.config {
        for (i, model) in config.models.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }

            let active = model.model_name == config.current_model;
            let mut style = if model.has_api_key() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if active {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if i == app.model_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let marker = if active { "● " } else { "" };
            spans.push(Span::styled(format!("{}{}", marker, model.model_name), style));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "activeModel")),
            Style::default().fg(Color::Cyan),
        ))
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
