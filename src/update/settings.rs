use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::SaveIntent;
use crate::app::{App, Modal, StatusKind};
use crate::command::Command;
use crate::i18n::tr;
use crate::links;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => save(app),
            KeyCode::Char('v') => vec![Command::ReadClipboard],
            KeyCode::Char('g') => open_subscription_page(app),
            _ => Vec::new(),
        };
    }

    match code {
        KeyCode::Esc => {
            app.modal = Modal::None;
            app.settings_close_at = None;
            app.clear_status();
            Vec::new()
        }
        KeyCode::Tab => {
            let len = app.model_count();
            if len > 0 {
                app.select_settings_tab((app.active_tab + 1) % len);
            }
            Vec::new()
        }
        KeyCode::BackTab => {
            let len = app.model_count();
            if len > 0 {
                app.select_settings_tab((app.active_tab + len - 1) % len);
            }
            Vec::new()
        }
        KeyCode::Up => {
            move_field(app, -1);
            Vec::new()
        }
        KeyCode::Down => {
            move_field(app, 1);
            Vec::new()
        }
        KeyCode::Left => {
            app.settings_cursor_left();
            Vec::new()
        }
        KeyCode::Right => {
            app.settings_cursor_right();
            Vec::new()
        }
        KeyCode::Backspace => {
            app.settings_backspace();
            Vec::new()
        }
        KeyCode::Char(c) => {
            app.settings_insert(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn move_field(app: &mut App, step: isize) {
    let fields = app.settings_fields();
    let current = fields
        .iter()
        .position(|f| *f == app.settings_field)
        .unwrap_or(0);
    let len = fields.len() as isize;
    let next = (current as isize + step).rem_euclid(len) as usize;
    app.focus_settings_field(fields[next]);
}

fn save(app: &mut App) -> Vec<Command> {
    let Some(config) = app.config.clone() else {
        return Vec::new();
    };
    app.set_status(tr(app.lang, "saving").to_string(), StatusKind::Info, None);
    vec![Command::SaveConfig {
        config,
        intent: SaveIntent::Settings,
    }]
}

fn open_subscription_page(app: &mut App) -> Vec<Command> {
    let Some(url) = app
        .config
        .as_ref()
        .and_then(|c| c.models.get(app.active_tab))
        .and_then(|m| links::subscription_url(&m.model_name))
    else {
        return Vec::new();
    };
    vec![Command::OpenUrl {
        url: url.to_string(),
    }]
}
