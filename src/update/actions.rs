use std::time::Instant;

use crate::action::{Action, SaveIntent};
use crate::app::{
    App, ERROR_STATUS_TTL, Modal, RecoverState, SWITCHED_STATUS_TTL, Screen, SETTINGS_CLOSE_DELAY,
    StatusKind,
};
use crate::command::Command;
use crate::i18n::tr;

/// Backend results and push events. None of these produce follow-up
/// commands today, but the signature matches the input handlers.
pub fn handle(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::ConfigLoaded(Ok(config)) => {
            app.model_cursor = config.model_index(&config.current_model).unwrap_or(0);
            let needs_key = !config.has_any_api_key();
            app.config = Some(config);
            app.ensure_project_visible();
            // First run: drop the user straight into key entry.
            if needs_key && app.modal == Modal::None {
                app.open_model_settings(app.model_cursor);
            }
        }
        Action::ConfigLoaded(Err(e)) => {
            app.set_status(e, StatusKind::Error, None);
        }
        Action::ConfigSaved { intent, result } => handle_saved(app, intent, result),
        Action::ConfigChanged(config) => app.apply_config_push(config),
        Action::EnvLog(line) => {
            let lower = line.to_lowercase();
            if lower.contains("not found") || lower.contains("failed") || lower.contains("error") {
                app.show_env_logs = true;
            }
            app.env_logs.push(line);
        }
        Action::EnvCheckDone => app.screen = Screen::Main,
        Action::RecoverLog(line) => app.recover_logs.push(line),
        Action::RecoverFinished(Ok(())) => {
            app.recover_state = RecoverState::Success;
            app.recover_logs.push("DONE!".to_string());
            app.recover_notice = Some(tr(app.lang, "recoverSuccessAlert").to_string());
        }
        Action::RecoverFinished(Err(e)) => {
            app.recover_state = RecoverState::Error;
            app.recover_logs.push(format!("Error: {}", e));
        }
        Action::UpdateChecked(result) => {
            if app.modal == Modal::UpdateCheck {
                app.update_result = Some(result);
            }
        }
        Action::LaunchFinished(Ok(())) => {
            app.clear_status();
        }
        Action::LaunchFinished(Err(e)) => {
            app.set_status(e, StatusKind::Error, None);
        }
        Action::ClipboardText(Ok(text)) => match app.modal {
            Modal::ModelSettings => {
                app.cursor = text.chars().count();
                app.set_settings_field_value(text);
            }
            Modal::EditPath => {
                app.cursor = text.chars().count();
                app.path_buffer = text;
            }
            _ => {}
        },
        Action::ClipboardText(Err(e)) => {
            app.set_status(e, StatusKind::Error, Some(ERROR_STATUS_TTL));
        }
        Action::Input { .. } | Action::Tick => {}
    }
    Vec::new()
}

fn handle_saved(app: &mut App, intent: SaveIntent, result: Result<(), String>) {
    match result {
        Ok(()) => match intent {
            SaveIntent::Switch => {
                app.set_status(
                    tr(app.lang, "switched").to_string(),
                    StatusKind::Success,
                    Some(SWITCHED_STATUS_TTL),
                );
            }
            SaveIntent::Settings => {
                app.set_status(tr(app.lang, "saved").to_string(), StatusKind::Success, None);
                app.settings_close_at = Some(Instant::now() + SETTINGS_CLOSE_DELAY);
            }
            SaveIntent::Silent => {}
        },
        Err(e) => app.set_status(e, StatusKind::Error, None),
    }
}
