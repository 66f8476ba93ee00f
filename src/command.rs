use std::sync::Arc;

use crate::action::{Action, SaveIntent};
use crate::backend::Backend;
use crate::domain::config::AppConfig;

/// Side effects requested by the update layer. Each command resolves to
/// at most one follow-up action; long-running backend work additionally
/// reports through the push-event channel.
#[derive(Debug)]
pub enum Command {
    LoadConfig,
    SaveConfig { config: AppConfig, intent: SaveIntent },
    CheckEnvironment,
    Launch { yolo_mode: bool, path: String },
    CheckUpdate { current_version: String },
    Recover,
    SetLanguage { tag: String },
    ReadClipboard,
    OpenUrl { url: String },
}

pub async fn execute_command(command: Command, backend: Arc<dyn Backend>) -> Option<Action> {
    match command {
        Command::LoadConfig => {
            let result = backend.load_config().await.map_err(|e| e.to_string());
            Some(Action::ConfigLoaded(result))
        }
        Command::SaveConfig { config, intent } => {
            let result = backend
                .save_config(&config)
                .await
                .map_err(|e| e.to_string());
            Some(Action::ConfigSaved { intent, result })
        }
        Command::CheckEnvironment => {
            backend.check_environment().await;
            None
        }
        Command::Launch { yolo_mode, path } => {
            let result = backend
                .launch(yolo_mode, &path)
                .await
                .map_err(|e| e.to_string());
            Some(Action::LaunchFinished(result))
        }
        Command::CheckUpdate { current_version } => {
            let result = backend
                .check_update(&current_version)
                .await
                .map_err(|e| e.to_string());
            Some(Action::UpdateChecked(result))
        }
        Command::Recover => {
            let result = backend.recover().await.map_err(|e| e.to_string());
            Some(Action::RecoverFinished(result))
        }
        Command::SetLanguage { tag } => {
            backend.set_language(&tag).await;
            None
        }
        Command::ReadClipboard => {
            let result = backend.clipboard_text().await.map_err(|e| e.to_string());
            Some(Action::ClipboardText(result))
        }
        Command::OpenUrl { url } => {
            if let Err(e) = backend.open_url(&url).await {
                tracing::warn!(error = %e, "failed to open url");
            }
            None
        }
    }
}
