use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::launch_panel::input_line;
use super::util::{centered_rect, truncate};
use crate::app::{App, SettingsField};
use crate::i18n::tr;
use crate::links;

pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(80, 70, area);
    frame.render_widget(Clear, popup);

    let Some(config) = &app.config else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    // Tab strip
    let mut tabs: Vec<Span> = vec![Span::raw(" ")];
    for (i, model) in config.models.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == app.active_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(
            format!(" {} ", truncate(&model.model_name, 12)),
            style,
        ));
    }
    lines.push(Line::from(tabs));
    lines.push(Line::from(""));

    if let Some(model) = config.models.get(app.active_tab) {
        if model.is_custom {
            push_field(
                &mut lines,
                app,
                tr(app.lang, "modelName"),
                &model.model_name,
                SettingsField::Name,
            );
        }
        push_field(
            &mut lines,
            app,
            tr(app.lang, "apiKey"),
            &model.api_key,
            SettingsField::ApiKey,
        );
        if model.is_custom {
            push_field(
                &mut lines,
                app,
                tr(app.lang, "apiEndpoint"),
                &model.model_url,
                SettingsField::Url,
            );
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {}: ", tr(app.lang, "apiEndpoint")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(model.model_url.clone(), Style::default().fg(Color::DarkGray)),
            ]));
        }

        if links::subscription_url(&model.model_name).is_some() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" ^G {}", tr(app.lang, "getKey")),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "modelSettings")),
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

fn push_field(lines: &mut Vec<Line<'static>>, app: &App, label: &str, value: &str, field: SettingsField) {
    let focused = app.settings_field == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    lines.push(Line::from(Span::styled(
        format!(" {}:", label),
        label_style,
    )));

    if focused {
        lines.push(input_line(value, app.cursor));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {}", value),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
}
