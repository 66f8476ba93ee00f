//! The collaborator that owns persistence, environment probing, process
//! launching and the update check. The UI only ever talks to this trait;
//! long-running operations report progress through [`BackendEvent`]s.

mod local;
mod sync;

pub use local::LocalBackend;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::config::AppConfig;

/// Push notifications from the backend, applied in delivery order.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    EnvLog(String),
    EnvCheckDone,
    RecoverLog(String),
    /// Backend-initiated config sync; overwrites the mirrored document.
    ConfigChanged(AppConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResult {
    pub has_update: bool,
    pub latest_version: String,
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn load_config(&self) -> Result<AppConfig>;
    /// Persist the whole document; emits `ConfigChanged` on success.
    async fn save_config(&self, config: &AppConfig) -> Result<()>;
    /// Kick off the environment probe; progress arrives as `EnvLog`
    /// events followed by `EnvCheckDone`.
    async fn check_environment(&self);
    async fn launch(&self, yolo_mode: bool, project_path: &str) -> Result<()>;
    async fn user_home_dir(&self) -> String;
    async fn check_update(&self, current_version: &str) -> Result<UpdateResult>;
    /// Reset the Claude Code installation, streaming `RecoverLog` events.
    async fn recover(&self) -> Result<()>;
    async fn set_language(&self, tag: &str);
    async fn clipboard_text(&self) -> Result<String>;
    async fn open_url(&self, url: &str) -> Result<()>;
}
