use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::util::{centered_rect, truncate};
use crate::app::{App, PROJECT_TAB_WINDOW};
use crate::i18n::tr;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(config) = &app.config else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    // Project tab strip, windowed when there are more than fit.
    let mut tabs: Vec<Span> = vec![Span::raw(" ")];
    let end = (app.project_offset + PROJECT_TAB_WINDOW).min(config.projects.len());
    if app.project_offset > 0 {
        tabs.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
    }
    for (i, project) in config.projects[app.project_offset..end].iter().enumerate() {
        if i > 0 {
            tabs.push(Span::raw("  "));
        }
        let style = if project.id == config.current_project {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {} ", truncate(&project.name, 16)), style));
    }
    if end < config.projects.len() {
        tabs.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::from(tabs));
    lines.push(Line::from(""));

    if let Some(project) = config.current_project() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}: ", tr(app.lang, "projectDir")),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                truncate(&project.path, area.width.saturating_sub(20) as usize),
                Style::default().fg(Color::White),
            ),
        ]));

        let yolo_mark = if project.yolo_mode { "[x]" } else { "[ ]" };
        let yolo_style = if project.yolo_mode {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} {}", yolo_mark, tr(app.lang, "yoloMode")), yolo_style),
            Span::styled(
                format!(" {}", tr(app.lang, "dangerouslySkip")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" ▶ {}", tr(app.lang, "launchBtn")),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "manageProjects")),
            Style::default().fg(Color::Cyan),
        ))
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Inline editor for the active project's directory.
pub fn render_path_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(70, 30, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.push(input_line(&app.path_buffer, app.cursor));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", tr(app.lang, "projectDir")),
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

/// Text with a reversed block cursor at the char index.
pub fn input_line(value: &str, cursor: usize) -> Line<'static> {
    let before: String = value.chars().take(cursor).collect();
    let at: String = value.chars().skip(cursor).take(1).collect();
    let after: String = value.chars().skip(cursor + 1).collect();

    let cursor_span = if at.is_empty() {
        Span::styled(" ".to_string(), Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED))
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled(before, Style::default().fg(Color::White)),
        cursor_span,
        Span::styled(after, Style::default().fg(Color::White)),
    ])
}
