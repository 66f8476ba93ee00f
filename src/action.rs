use crossterm::event::{KeyCode, KeyModifiers};

use crate::backend::{BackendEvent, UpdateResult};
use crate::domain::config::AppConfig;

/// Why a whole-document save was issued; decides the follow-up status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIntent {
    /// Model switch: show "switched" transiently.
    Switch,
    /// Settings modal save: show "saved" and auto-close shortly after.
    Settings,
    /// Background persistence (project switch, yolo toggle, path edit,
    /// manager save): no status on success.
    Silent,
}

#[derive(Debug)]
pub enum Action {
    Input { code: KeyCode, modifiers: KeyModifiers },
    Tick,
    ConfigLoaded(Result<AppConfig, String>),
    ConfigSaved {
        intent: SaveIntent,
        result: Result<(), String>,
    },
    ConfigChanged(AppConfig),
    EnvLog(String),
    EnvCheckDone,
    RecoverLog(String),
    RecoverFinished(Result<(), String>),
    UpdateChecked(Result<UpdateResult, String>),
    LaunchFinished(Result<(), String>),
    ClipboardText(Result<String, String>),
}

impl From<BackendEvent> for Action {
    fn from(event: BackendEvent) -> Self {
        match event {
            BackendEvent::EnvLog(line) => Action::EnvLog(line),
            BackendEvent::EnvCheckDone => Action::EnvCheckDone,
            BackendEvent::RecoverLog(line) => Action::RecoverLog(line),
            BackendEvent::ConfigChanged(config) => Action::ConfigChanged(config),
        }
    }
}
