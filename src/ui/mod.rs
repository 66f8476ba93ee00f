pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Modal, RecoverState, Screen, StatusKind};
use crate::i18n::tr;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(3), // Keybindings bar
        ])
        .split(size);

    let main_area = chunks[0];
    let keys_area = chunks[1];

    match app.screen {
        Screen::Loading => components::loading::render(frame, app, main_area),
        Screen::Main => render_main(frame, app, main_area),
    }

    match app.modal {
        Modal::None => {}
        Modal::ModelSettings => components::settings::render_overlay(frame, app, main_area),
        Modal::ProjectManager => components::projects::render_overlay(frame, app, main_area),
        Modal::Recover => components::recover::render_overlay(frame, app, main_area),
        Modal::UpdateCheck => components::update::render_overlay(frame, app, main_area),
        Modal::About => components::about::render_overlay(frame, app, main_area),
        Modal::EditPath => components::launch_panel::render_path_overlay(frame, app, main_area),
    }

    render_keybindings(frame, app, keys_area);
}

fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Model switcher
            Constraint::Min(6),    // Launch panel
            Constraint::Length(1), // Status line
        ])
        .split(area);

    components::header::render(frame, app, rows[0]);
    components::model_switcher::render(frame, app, rows[1]);
    components::launch_panel::render(frame, app, rows[2]);
    render_status(frame, app, rows[3]);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => Color::Yellow,
        StatusKind::Success => Color::Green,
        StatusKind::Error => Color::Red,
    };
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {}", status.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, area);
}

/// Render the keybindings bar at the bottom
fn render_keybindings(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang;
    let keys: Vec<(&str, String)> = match app.modal {
        Modal::ModelSettings => vec![
            ("Tab", tr(lang, "modelName").to_string()),
            ("↑/↓", "Field".to_string()),
            ("^S", tr(lang, "saveChanges").to_string()),
            ("^V", tr(lang, "paste").to_string()),
            ("^G", tr(lang, "getKey").to_string()),
            ("Esc", tr(lang, "close").to_string()),
        ],
        Modal::ProjectManager => {
            if app.manager_renaming {
                vec![
                    ("Enter", tr(lang, "close").to_string()),
                    ("Esc", tr(lang, "close").to_string()),
                ]
            } else {
                vec![
                    ("j/k", "Select".to_string()),
                    ("a", tr(lang, "addNewProject").to_string()),
                    ("d", tr(lang, "delete").to_string()),
                    ("Enter", tr(lang, "projectName").to_string()),
                    ("^S", tr(lang, "saveChanges").to_string()),
                    ("Esc", tr(lang, "close").to_string()),
                ]
            }
        }
        Modal::Recover => match app.recover_state {
            RecoverState::Idle => vec![
                ("Enter", tr(lang, "startRecover").to_string()),
                ("Esc", tr(lang, "close").to_string()),
            ],
            RecoverState::Recovering => vec![("...", tr(lang, "recovering").to_string())],
            _ => vec![("Esc", tr(lang, "close").to_string())],
        },
        Modal::UpdateCheck => vec![
            ("Enter", tr(lang, "downloadNow").to_string()),
            ("Esc", tr(lang, "close").to_string()),
        ],
        Modal::About => vec![
            ("g", "GitHub".to_string()),
            ("b", tr(lang, "bugReport").to_string()),
            ("Esc", tr(lang, "close").to_string()),
        ],
        Modal::EditPath => vec![
            ("Enter", tr(lang, "change").to_string()),
            ("^V", tr(lang, "paste").to_string()),
            ("Esc", tr(lang, "close").to_string()),
        ],
        Modal::None => match app.screen {
            Screen::Loading => vec![
                ("l", "Logs".to_string()),
                ("q", tr(lang, "quit").to_string()),
            ],
            Screen::Main => vec![
                ("h/l", tr(lang, "activeModel").to_string()),
                ("Enter", "Switch".to_string()),
                ("Space", tr(lang, "launchBtn").to_string()),
                ("s", tr(lang, "modelSettings").to_string()),
                ("p", tr(lang, "manageProjects").to_string()),
                ("y", tr(lang, "yoloMode").to_string()),
                ("c", tr(lang, "change").to_string()),
                ("r", tr(lang, "recoverCC").to_string()),
                ("u", tr(lang, "checkUpdate").to_string()),
                ("a", tr(lang, "about").to_string()),
                ("m", tr(lang, "manual").to_string()),
                ("q", tr(lang, "quit").to_string()),
            ],
        },
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, label)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        ratatui::widgets::Block::default()
            .borders(ratatui::widgets::Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(bar, area);
}
