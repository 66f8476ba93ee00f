use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{Backend, BackendEvent, UpdateResult, sync};
use crate::domain::config::AppConfig;
use crate::domain::version;
use crate::links::RELEASES_URL;

const CONFIG_FILE: &str = ".claude_model_config.json";

/// Backend running in-process: JSON config file in the home directory,
/// subprocess probes, releases-page update check.
pub struct LocalBackend {
    config_path: PathBuf,
    home: PathBuf,
    events: UnboundedSender<BackendEvent>,
    language: Mutex<String>,
}

impl LocalBackend {
    pub fn new(config_override: Option<PathBuf>, events: UnboundedSender<BackendEvent>) -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_home(home, config_override, events)
    }

    /// `home` decides where the mirror config and the synced Claude Code
    /// settings land; overridable so tests run against a scratch dir.
    fn with_home(
        home: PathBuf,
        config_override: Option<PathBuf>,
        events: UnboundedSender<BackendEvent>,
    ) -> Self {
        let config_path = config_override.unwrap_or_else(|| home.join(CONFIG_FILE));
        Self {
            config_path,
            home,
            events,
            language: Mutex::new("en".to_string()),
        }
    }

    fn emit(&self, event: BackendEvent) {
        let _ = self.events.send(event);
    }

    fn recover_log(&self, line: impl Into<String>) {
        self.emit(BackendEvent::RecoverLog(line.into()));
    }
}

/// Run `<program> --version` and return the first output line.
async fn probe_version(program: &str) -> Option<String> {
    let output = tokio::process::Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout);
    text.lines().next().map(|l| l.trim().to_string())
}

async fn run_environment_check(events: UnboundedSender<BackendEvent>) {
    let log = |line: String| {
        let _ = events.send(BackendEvent::EnvLog(line));
    };

    log("Checking Node.js installation...".to_string());
    match probe_version("node").await {
        Some(v) => log(format!("Node.js is installed ({}).", v)),
        None => log("Node.js not found. Please install it from nodejs.org.".to_string()),
    }

    log("Checking Git installation...".to_string());
    match probe_version("git").await {
        Some(v) => log(format!("Git is installed ({}).", v)),
        None => log("Git not found. Please install it first.".to_string()),
    }

    log("Checking Claude Code...".to_string());
    match probe_version("claude").await {
        Some(v) => log(format!("Claude Code found ({}).", v)),
        None => log(
            "Claude Code not found. Run 'npm install -g @anthropic-ai/claude-code'.".to_string(),
        ),
    }

    log("Environment check complete.".to_string());
    let _ = events.send(BackendEvent::EnvCheckDone);
}

#[async_trait]
impl Backend for LocalBackend {
    async fn load_config(&self) -> Result<AppConfig> {
        let home = self.home.to_string_lossy().to_string();
        if !self.config_path.exists() {
            let config = AppConfig::default_with_home(&home);
            self.save_config(&config).await?;
            tracing::info!(path = %self.config_path.display(), "created default config");
            return Ok(config);
        }

        let data = tokio::fs::read_to_string(&self.config_path)
            .await
            .with_context(|| format!("failed to read {}", self.config_path.display()))?;
        let mut config: AppConfig =
            serde_json::from_str(&data).context("failed to parse config file")?;
        config.normalize(&home);
        Ok(config)
    }

    async fn save_config(&self, config: &AppConfig) -> Result<()> {
        // Project the selection into the files claude reads. A sync
        // failure does not block persisting the mirror, same as losing
        // the settings file would not lose the user's keys.
        if let Err(e) = sync::write_claude_settings(
            &self.home.join(".claude"),
            &self.home.join(".claude.json"),
            config,
        )
        .await
        {
            tracing::warn!(error = %e, "claude settings sync failed");
        }

        let data = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.config_path, data)
            .await
            .with_context(|| format!("failed to write {}", self.config_path.display()))?;
        tracing::debug!(path = %self.config_path.display(), "config saved");
        self.emit(BackendEvent::ConfigChanged(config.clone()));
        Ok(())
    }

    async fn check_environment(&self) {
        let events = self.events.clone();
        tokio::spawn(run_environment_check(events));
    }

    async fn launch(&self, yolo_mode: bool, project_path: &str) -> Result<()> {
        let dir = Path::new(project_path);
        if !dir.is_dir() {
            bail!("project directory does not exist: {}", project_path);
        }

        let mut command = tokio::process::Command::new("claude");
        if yolo_mode {
            command.arg("--dangerously-skip-permissions");
        }
        command
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command
            .spawn()
            .context("failed to launch claude - is it on PATH?")?;
        tracing::info!(path = project_path, yolo = yolo_mode, pid = child.id(), "launched claude");
        Ok(())
    }

    async fn user_home_dir(&self) -> String {
        self.home.to_string_lossy().to_string()
    }

    async fn check_update(&self, current_version: &str) -> Result<UpdateResult> {
        let client = reqwest::Client::new();
        let body = client
            .get(RELEASES_URL)
            .header("User-Agent", "Claude-Code-Easy-Suite")
            .send()
            .await
            .context("failed to reach the releases page")?
            .text()
            .await
            .context("failed to read the releases page")?;

        let latest = version::extract_highest(&body)
            .ok_or_else(|| anyhow!("no release versions found"))?;
        let current = version::clean(current_version);
        let has_update = version::compare(&latest, &current) == Ordering::Greater;
        tracing::debug!(%latest, %current, has_update, "update check finished");
        Ok(UpdateResult {
            has_update,
            latest_version: latest,
        })
    }

    async fn recover(&self) -> Result<()> {
        self.recover_log("Starting recovery process...");

        let claude_dir = self.home.join(".claude");
        self.recover_log(format!("Checking directory: {}", claude_dir.display()));
        if claude_dir.exists() {
            self.recover_log("Found .claude directory. Removing...");
            tokio::fs::remove_dir_all(&claude_dir)
                .await
                .context("failed to remove the .claude directory")?;
            self.recover_log("Successfully removed .claude directory.");
        } else {
            self.recover_log(".claude directory not found, skipping.");
        }

        let claude_json = self.home.join(".claude.json");
        self.recover_log(format!("Checking file: {}", claude_json.display()));
        if claude_json.exists() {
            self.recover_log("Found .claude.json file. Removing...");
            tokio::fs::remove_file(&claude_json)
                .await
                .context("failed to remove the .claude.json file")?;
            self.recover_log("Successfully removed .claude.json file.");
        } else {
            self.recover_log(".claude.json file not found, skipping.");
        }

        self.recover_log("Recovery process completed successfully.");
        tracing::info!("claude code recovery finished");
        Ok(())
    }

    async fn set_language(&self, tag: &str) {
        if let Ok(mut lang) = self.language.lock() {
            *lang = tag.to_string();
        }
        tracing::debug!(tag, "ui language set");
    }

    async fn clipboard_text(&self) -> Result<String> {
        // arboard can block on the window system, keep it off the runtime
        tokio::task::spawn_blocking(|| {
            let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
            clipboard.get_text().context("clipboard has no text")
        })
        .await?
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("failed to open {}", url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn backend(dir: &Path) -> (LocalBackend, mpsc::UnboundedReceiver<BackendEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = LocalBackend::with_home(dir.to_path_buf(), Some(dir.join("config.json")), tx);
        (backend, rx)
    }

    #[tokio::test]
    async fn load_creates_and_persists_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let (backend, _rx) = backend(dir.path());

        let config = backend.load_config().await.unwrap();
        assert_eq!(config.current_model, "GLM");
        assert!(dir.path().join("config.json").exists());

        // Second load round-trips the same document.
        let again = backend.load_config().await.unwrap();
        assert_eq!(again, config);
    }

    #[tokio::test]
    async fn save_emits_config_changed() {
        let dir = tempfile::tempdir().unwrap();
        let (backend, mut rx) = backend(dir.path());

        let config = AppConfig::default_with_home("/home/user");
        backend.save_config(&config).await.unwrap();

        match rx.recv().await {
            Some(BackendEvent::ConfigChanged(pushed)) => assert_eq!(pushed, config),
            other => panic!("expected ConfigChanged, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn save_syncs_selected_model_into_claude_settings() {
        let dir = tempfile::tempdir().unwrap();
        let (backend, _rx) = backend(dir.path());

        let mut config = AppConfig::default_with_home(&dir.path().to_string_lossy());
        let kimi = config.model_index("kimi").unwrap();
        config.models[kimi].api_key = "sk-kimi".to_string();
        config.current_model = "kimi".to_string();
        backend.save_config(&config).await.unwrap();

        let settings: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(".claude/settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(settings["env"]["ANTHROPIC_AUTH_TOKEN"], "sk-kimi");
        assert_eq!(settings["env"]["ANTHROPIC_BASE_URL"], "https://api.kimi.com/coding");
        assert_eq!(settings["env"]["ANTHROPIC_MODEL"], "kimi-k2-thinking");

        let claude_json: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(".claude.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(claude_json["customApiKeyResponses"]["approved"][0], "sk-kimi");
    }

    #[tokio::test]
    async fn switching_models_rewrites_claude_settings() {
        let dir = tempfile::tempdir().unwrap();
        let (backend, _rx) = backend(dir.path());

        let mut config = AppConfig::default_with_home(&dir.path().to_string_lossy());
        config.models[0].api_key = "sk-glm".to_string();
        backend.save_config(&config).await.unwrap();

        let minimax = config.model_index("MiniMax").unwrap();
        config.models[minimax].api_key = "sk-mm".to_string();
        config.current_model = "MiniMax".to_string();
        backend.save_config(&config).await.unwrap();

        let settings: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(".claude/settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(settings["env"]["ANTHROPIC_AUTH_TOKEN"], "sk-mm");
        assert_eq!(settings["env"]["ANTHROPIC_MODEL"], "MiniMax-M2.1");
    }

    #[tokio::test]
    async fn launch_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let (backend, _rx) = backend(dir.path());

        let err = backend
            .launch(false, "/definitely/not/a/real/path")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
