use crossterm::event::KeyCode;

use crate::action::SaveIntent;
use crate::app::{App, ERROR_STATUS_TTL, Modal, RecoverState, StatusKind};
use crate::command::Command;
use crate::i18n::tr;
use crate::links;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Char('s') => {
            let tab = app
                .config
                .as_ref()
                .and_then(|c| c.model_index(&c.current_model))
                .unwrap_or(0);
            app.open_model_settings(tab);
            Vec::new()
        }
        KeyCode::Char('p') => {
            app.open_project_manager();
            Vec::new()
        }
        KeyCode::Char('r') => {
            app.recover_state = RecoverState::Idle;
            app.recover_logs.clear();
            app.recover_notice = None;
            app.modal = Modal::Recover;
            Vec::new()
        }
        KeyCode::Char('u') => {
            app.update_result = None;
            app.modal = Modal::UpdateCheck;
            vec![Command::CheckUpdate {
                current_version: env!("CARGO_PKG_VERSION").to_string(),
            }]
        }
        KeyCode::Char('a') => {
            app.modal = Modal::About;
            Vec::new()
        }
        KeyCode::Char('m') => vec![Command::OpenUrl {
            url: links::manual_url(app.lang).to_string(),
        }],
        KeyCode::Char('b') => vec![Command::OpenUrl {
            url: links::ISSUES_URL.to_string(),
        }],
        KeyCode::Char('h') | KeyCode::Left => {
            app.model_cursor = app.model_cursor.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let last = app.model_count().saturating_sub(1);
            app.model_cursor = (app.model_cursor + 1).min(last);
            Vec::new()
        }
        KeyCode::Enter => switch_model(app),
        KeyCode::Tab => cycle_project(app, 1),
        KeyCode::BackTab => cycle_project(app, -1),
        KeyCode::Char('y') => toggle_yolo(app),
        KeyCode::Char('c') => open_path_editor(app),
        KeyCode::Char(' ') => launch(app),
        _ => Vec::new(),
    }
}

fn switch_model(app: &mut App) -> Vec<Command> {
    let cursor = app.model_cursor;
    match app.switch_model(cursor) {
        Some(config) => {
            app.set_status(tr(app.lang, "syncing").to_string(), StatusKind::Info, None);
            vec![Command::SaveConfig {
                config,
                intent: SaveIntent::Switch,
            }]
        }
        None => {
            // No key yet: park the user on that model's settings tab.
            app.set_status(
                tr(app.lang, "enterKey").to_string(),
                StatusKind::Error,
                Some(ERROR_STATUS_TTL),
            );
            app.open_model_settings(cursor);
            Vec::new()
        }
    }
}

fn cycle_project(app: &mut App, step: isize) -> Vec<Command> {
    let Some(config) = app.config.as_mut() else {
        return Vec::new();
    };
    let len = config.projects.len();
    if len < 2 {
        return Vec::new();
    }
    let index = config
        .projects
        .iter()
        .position(|p| p.id == config.current_project)
        .unwrap_or(0);
    let next = (index as isize + step).rem_euclid(len as isize) as usize;
    config.current_project = config.projects[next].id.clone();
    let saved = config.clone();
    app.ensure_project_visible();
    vec![Command::SaveConfig {
        config: saved,
        intent: SaveIntent::Silent,
    }]
}

fn toggle_yolo(app: &mut App) -> Vec<Command> {
    let Some(config) = app.config.as_mut() else {
        return Vec::new();
    };
    let Some(project) = config.current_project_mut() else {
        return Vec::new();
    };
    project.yolo_mode = !project.yolo_mode;
    vec![Command::SaveConfig {
        config: config.clone(),
        intent: SaveIntent::Silent,
    }]
}

fn open_path_editor(app: &mut App) -> Vec<Command> {
    let Some(path) = app
        .config
        .as_ref()
        .and_then(|c| c.current_project())
        .map(|p| p.path.clone())
    else {
        return Vec::new();
    };
    app.cursor = path.chars().count();
    app.path_buffer = path;
    app.modal = Modal::EditPath;
    Vec::new()
}

fn launch(app: &mut App) -> Vec<Command> {
    let Some(project) = app.config.as_ref().and_then(|c| c.current_project()) else {
        return Vec::new();
    };
    if project.path.trim().is_empty() {
        app.set_status(
            tr(app.lang, "projectDirError").to_string(),
            StatusKind::Error,
            Some(ERROR_STATUS_TTL),
        );
        return Vec::new();
    }
    vec![Command::Launch {
        yolo_mode: project.yolo_mode,
        path: project.path.clone(),
    }]
}
