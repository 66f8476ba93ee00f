use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::SaveIntent;
use crate::app::{App, Modal, byte_index};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if code == KeyCode::Char('v') {
            return vec![Command::ReadClipboard];
        }
        return Vec::new();
    }

    match code {
        KeyCode::Esc => {
            app.modal = Modal::None;
            app.path_buffer.clear();
            Vec::new()
        }
        KeyCode::Enter => commit(app),
        KeyCode::Left => {
            app.cursor = app.cursor.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Right => {
            app.cursor = (app.cursor + 1).min(app.path_buffer.chars().count());
            Vec::new()
        }
        KeyCode::Backspace => {
            if app.cursor > 0 {
                let at = byte_index(&app.path_buffer, app.cursor - 1);
                app.path_buffer.remove(at);
                app.cursor -= 1;
            }
            Vec::new()
        }
        KeyCode::Char(c) => {
            let at = byte_index(&app.path_buffer, app.cursor);
            app.path_buffer.insert(at, c);
            app.cursor += 1;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn commit(app: &mut App) -> Vec<Command> {
    let path = app.path_buffer.trim().to_string();
    app.modal = Modal::None;
    app.path_buffer.clear();

    // An emptied buffer leaves the stored path alone.
    if path.is_empty() {
        return Vec::new();
    }
    let Some(config) = app.config.as_mut() else {
        return Vec::new();
    };
    let Some(project) = config.current_project_mut() else {
        return Vec::new();
    };
    project.path = path;
    vec![Command::SaveConfig {
        config: config.clone(),
        intent: SaveIntent::Silent,
    }]
}
