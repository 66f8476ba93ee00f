use std::time::{Duration, Instant};

use crate::backend::UpdateResult;
use crate::domain::config::{
    AppConfig, ProjectConfig, next_project_name, validate_project_names,
};
use crate::i18n::Lang;

pub const ERROR_STATUS_TTL: Duration = Duration::from_secs(2);
pub const SWITCHED_STATUS_TTL: Duration = Duration::from_millis(1500);
pub const SETTINGS_CLOSE_DELAY: Duration = Duration::from_secs(1);

/// Project tabs shown at once on the launch panel.
pub const PROJECT_TAB_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Environment check in progress.
    Loading,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    ModelSettings,
    ProjectManager,
    Recover,
    UpdateCheck,
    About,
    EditPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverState {
    Idle,
    Recovering,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    ApiKey,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Option<Instant>,
}

/// The main application state: a mirror of the backend-held config plus
/// per-view scratch data. All mutation is plain replacement; persistence
/// happens by re-sending the whole document through a save command.
pub struct App {
    pub lang: Lang,
    pub config: Option<AppConfig>,
    pub home_dir: String,
    pub screen: Screen,
    pub modal: Modal,
    pub status: Option<StatusLine>,
    pub should_quit: bool,

    // Loading screen
    pub env_logs: Vec<String>,
    pub show_env_logs: bool,

    // Launch panel
    pub model_cursor: usize,
    pub project_offset: usize,

    // Model settings modal
    pub active_tab: usize,
    pub settings_field: SettingsField,
    pub cursor: usize,
    pub settings_close_at: Option<Instant>,

    // Path editor modal
    pub path_buffer: String,

    // Project manager modal (scratch copy)
    pub temp_projects: Vec<ProjectConfig>,
    pub manager_selected: usize,
    pub manager_renaming: bool,
    pub manager_status: String,

    // Recover modal
    pub recover_state: RecoverState,
    pub recover_logs: Vec<String>,
    pub recover_notice: Option<String>,

    // Update modal; None while the check is still in flight.
    pub update_result: Option<Result<UpdateResult, String>>,
}

impl App {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            config: None,
            home_dir: String::new(),
            screen: Screen::Loading,
            modal: Modal::None,
            status: None,
            should_quit: false,
            env_logs: vec!["Initializing...".to_string()],
            show_env_logs: false,
            model_cursor: 0,
            project_offset: 0,
            active_tab: 0,
            settings_field: SettingsField::ApiKey,
            cursor: 0,
            settings_close_at: None,
            path_buffer: String::new(),
            temp_projects: Vec::new(),
            manager_selected: 0,
            manager_renaming: false,
            manager_status: String::new(),
            recover_state: RecoverState::Idle,
            recover_logs: Vec::new(),
            recover_notice: None,
            update_result: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind, ttl: Option<Duration>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind,
            expires_at: ttl.map(|d| Instant::now() + d),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Advance time-driven state: transient status expiry and the
    /// delayed auto-close of the settings modal after a save.
    pub fn tick(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if status.expires_at.is_some_and(|at| now >= at) {
                self.status = None;
            }
        }
        if let Some(at) = self.settings_close_at {
            if now >= at {
                self.settings_close_at = None;
                if self.modal == Modal::ModelSettings {
                    self.modal = Modal::None;
                    self.clear_status();
                }
            }
        }
    }

    // ----- model settings -----

    pub fn open_model_settings(&mut self, tab: usize) {
        self.modal = Modal::ModelSettings;
        self.settings_close_at = None;
        let len = self.config.as_ref().map(|c| c.models.len()).unwrap_or(0);
        self.active_tab = tab.min(len.saturating_sub(1));
        self.settings_field = SettingsField::ApiKey;
        self.cursor = char_len(self.settings_field_value());
    }

    /// Fields editable on the active tab; preset models only expose the
    /// key, custom entries also expose name and endpoint.
    pub fn settings_fields(&self) -> &'static [SettingsField] {
        let custom = self
            .config
            .as_ref()
            .and_then(|c| c.models.get(self.active_tab))
            .map(|m| m.is_custom)
            .unwrap_or(false);
        if custom {
            &[SettingsField::Name, SettingsField::ApiKey, SettingsField::Url]
        } else {
            &[SettingsField::ApiKey]
        }
    }

    pub fn select_settings_tab(&mut self, tab: usize) {
        self.active_tab = tab;
        if !self.settings_fields().contains(&self.settings_field) {
            self.settings_field = SettingsField::ApiKey;
        }
        self.cursor = char_len(self.settings_field_value());
    }

    pub fn focus_settings_field(&mut self, field: SettingsField) {
        self.settings_field = field;
        self.cursor = char_len(self.settings_field_value());
    }

    pub fn settings_field_value(&self) -> &str {
        let Some(model) = self
            .config
            .as_ref()
            .and_then(|c| c.models.get(self.active_tab))
        else {
            return "";
        };
        match self.settings_field {
            SettingsField::Name => &model.model_name,
            SettingsField::ApiKey => &model.api_key,
            SettingsField::Url => &model.model_url,
        }
    }

    /// Replace the focused field's value. Renaming the model that is
    /// currently active also moves the current_model pointer so identity
    /// stays consistent.
    pub fn set_settings_field_value(&mut self, value: String) {
        let field = self.settings_field;
        let tab = self.active_tab;
        let Some(config) = self.config.as_mut() else {
            return;
        };
        let Some(model) = config.models.get_mut(tab) else {
            return;
        };
        match field {
            SettingsField::Name => {
                let renaming_active = config.current_model == model.model_name;
                model.model_name = value.clone();
                if renaming_active {
                    config.current_model = value;
                }
            }
            SettingsField::ApiKey => model.api_key = value,
            SettingsField::Url => model.model_url = value,
        }
    }

    pub fn settings_insert(&mut self, c: char) {
        let mut value = self.settings_field_value().to_string();
        let at = byte_index(&value, self.cursor);
        value.insert(at, c);
        self.cursor += 1;
        self.set_settings_field_value(value);
    }

    pub fn settings_backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut value = self.settings_field_value().to_string();
        let at = byte_index(&value, self.cursor - 1);
        value.remove(at);
        self.cursor -= 1;
        self.set_settings_field_value(value);
    }

    pub fn settings_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn settings_cursor_right(&mut self) {
        if self.cursor < char_len(self.settings_field_value()) {
            self.cursor += 1;
        }
    }

    // ----- model switch -----

    /// Attempt to make the model at `index` current. Returns the updated
    /// document to persist, or None when the model has no API key (the
    /// mirrored config is left untouched).
    pub fn switch_model(&mut self, index: usize) -> Option<AppConfig> {
        let config = self.config.as_mut()?;
        let target = config.models.get(index)?;
        if !target.has_api_key() {
            return None;
        }
        config.current_model = target.model_name.clone();
        Some(config.clone())
    }

    // ----- project manager -----

    pub fn open_project_manager(&mut self) {
        let Some(config) = &self.config else {
            return;
        };
        self.temp_projects = config.projects.clone();
        self.manager_selected = 0;
        self.manager_renaming = false;
        self.manager_status.clear();
        self.modal = Modal::ProjectManager;
    }

    pub fn manager_validate(&mut self) {
        self.manager_status = match validate_project_names(&self.temp_projects) {
            Ok(()) => String::new(),
            Err(message) => message,
        };
    }

    pub fn add_temp_project(&mut self) {
        let name = next_project_name(&self.temp_projects);
        self.temp_projects
            .push(ProjectConfig::new(name, self.home_dir.clone()));
        self.manager_selected = self.temp_projects.len() - 1;
        self.manager_validate();
    }

    /// Deleting is a no-op while only one project remains.
    pub fn delete_selected_temp_project(&mut self) {
        if self.temp_projects.len() <= 1 {
            return;
        }
        self.temp_projects.remove(self.manager_selected);
        if self.manager_selected >= self.temp_projects.len() {
            self.manager_selected = self.temp_projects.len() - 1;
        }
        self.manager_validate();
    }

    pub fn manager_insert(&mut self, c: char) {
        if let Some(project) = self.temp_projects.get_mut(self.manager_selected) {
            let at = byte_index(&project.name, self.cursor);
            project.name.insert(at, c);
            self.cursor += 1;
        }
        self.manager_validate();
    }

    pub fn manager_backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some(project) = self.temp_projects.get_mut(self.manager_selected) {
            let at = byte_index(&project.name, self.cursor - 1);
            project.name.remove(at);
            self.cursor -= 1;
        }
        self.manager_validate();
    }

    /// Commit the scratch list into the mirrored config. Returns the
    /// updated document to persist, or None when validation fails or no
    /// config is loaded. A stale active-project pointer falls back to the
    /// first entry of the new list.
    pub fn apply_manager_save(&mut self) -> Option<AppConfig> {
        self.manager_validate();
        if !self.manager_status.is_empty() {
            return None;
        }
        let config = self.config.as_mut()?;
        config.projects = self.temp_projects.clone();
        if !config.projects.iter().any(|p| p.id == config.current_project) {
            config.current_project = config
                .projects
                .first()
                .map(|p| p.id.clone())
                .unwrap_or_default();
        }
        if config.projects.len() <= PROJECT_TAB_WINDOW {
            self.project_offset = 0;
        }
        Some(config.clone())
    }

    // ----- launch panel -----

    pub fn model_count(&self) -> usize {
        self.config.as_ref().map(|c| c.models.len()).unwrap_or(0)
    }

    /// Keep the active project tab inside the visible window.
    pub fn ensure_project_visible(&mut self) {
        let Some(config) = &self.config else {
            return;
        };
        let Some(index) = config
            .projects
            .iter()
            .position(|p| p.id == config.current_project)
        else {
            return;
        };
        if index < self.project_offset {
            self.project_offset = index;
        } else if index >= self.project_offset + PROJECT_TAB_WINDOW {
            self.project_offset = index + 1 - PROJECT_TAB_WINDOW;
        }
    }

    /// Replace the mirrored document from a backend push without
    /// disturbing the open modal or the settings tab.
    pub fn apply_config_push(&mut self, config: AppConfig) {
        let len = config.models.len();
        self.config = Some(config);
        if len > 0 {
            self.active_tab = self.active_tab.min(len - 1);
            self.model_cursor = self.model_cursor.min(len - 1);
        }
        self.ensure_project_visible();
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_config() -> App {
        let mut app = App::new(Lang::En);
        app.home_dir = "/home/user".to_string();
        let mut config = AppConfig::default_with_home("/home/user");
        config.models[0].api_key = "key-glm".to_string();
        app.config = Some(config);
        app
    }

    #[test]
    fn renaming_active_model_moves_current_pointer() {
        let mut app = app_with_config();
        {
            let config = app.config.as_mut().unwrap();
            config.current_model = "Custom".to_string();
        }
        let custom_tab = app.config.as_ref().unwrap().model_index("Custom").unwrap();
        app.open_model_settings(custom_tab);
        app.focus_settings_field(SettingsField::Name);
        app.set_settings_field_value("my-model".to_string());

        let config = app.config.as_ref().unwrap();
        assert_eq!(config.current_model, "my-model");
        assert_eq!(config.models[custom_tab].model_name, "my-model");
    }

    #[test]
    fn renaming_inactive_model_leaves_current_pointer() {
        let mut app = app_with_config();
        let custom_tab = app.config.as_ref().unwrap().model_index("Custom").unwrap();
        app.open_model_settings(custom_tab);
        app.focus_settings_field(SettingsField::Name);
        app.set_settings_field_value("my-model".to_string());

        assert_eq!(app.config.as_ref().unwrap().current_model, "GLM");
    }

    #[test]
    fn switch_refused_without_api_key() {
        let mut app = app_with_config();
        let kimi = app.config.as_ref().unwrap().model_index("kimi").unwrap();
        assert!(app.switch_model(kimi).is_none());
        assert_eq!(app.config.as_ref().unwrap().current_model, "GLM");
    }

    #[test]
    fn switch_succeeds_once_key_is_set() {
        let mut app = app_with_config();
        let kimi = app.config.as_ref().unwrap().model_index("kimi").unwrap();
        app.config.as_mut().unwrap().models[kimi].api_key = "X".to_string();

        let saved = app.switch_model(kimi).expect("switch should succeed");
        assert_eq!(saved.current_model, "kimi");
        assert_eq!(app.config.as_ref().unwrap().current_model, "kimi");
    }

    #[test]
    fn whitespace_key_counts_as_missing() {
        let mut app = app_with_config();
        let kimi = app.config.as_ref().unwrap().model_index("kimi").unwrap();
        app.config.as_mut().unwrap().models[kimi].api_key = "   ".to_string();
        assert!(app.switch_model(kimi).is_none());
    }

    #[test]
    fn added_project_never_collides() {
        let mut app = app_with_config();
        app.open_project_manager();
        app.add_temp_project();
        app.add_temp_project();

        let names: Vec<_> = app.temp_projects.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Project 1", "Project 2", "Project 3"]);
        assert!(app.manager_status.is_empty());
    }

    #[test]
    fn delete_is_noop_with_single_project() {
        let mut app = app_with_config();
        app.open_project_manager();
        assert_eq!(app.temp_projects.len(), 1);
        app.delete_selected_temp_project();
        assert_eq!(app.temp_projects.len(), 1);
    }

    #[test]
    fn manager_save_blocked_by_duplicate_names() {
        let mut app = app_with_config();
        app.open_project_manager();
        app.add_temp_project();
        app.temp_projects[1].name = " Project 1 ".to_string();
        assert!(app.apply_manager_save().is_none());
        assert!(!app.manager_status.is_empty());
    }

    #[test]
    fn manager_save_falls_back_to_first_project_id() {
        let mut app = app_with_config();
        app.open_project_manager();
        app.add_temp_project();
        // Drop the project the config points at.
        app.temp_projects.remove(0);

        let saved = app.apply_manager_save().expect("save should pass");
        assert_eq!(saved.current_project, saved.projects[0].id);
        assert_eq!(saved.projects.len(), 1);
    }

    #[test]
    fn status_expires_on_tick() {
        let mut app = app_with_config();
        app.set_status("oops", StatusKind::Error, Some(Duration::from_millis(1)));
        app.tick(Instant::now() + Duration::from_millis(5));
        assert!(app.status.is_none());

        app.set_status("stays", StatusKind::Info, None);
        app.tick(Instant::now() + Duration::from_secs(60));
        assert!(app.status.is_some());
    }

    #[test]
    fn settings_editing_uses_char_cursor() {
        let mut app = app_with_config();
        app.open_model_settings(0);
        app.focus_settings_field(SettingsField::ApiKey);
        app.settings_insert('界');
        app.settings_insert('!');
        assert_eq!(app.settings_field_value(), "key-glm界!");
        app.settings_backspace();
        app.settings_backspace();
        assert_eq!(app.settings_field_value(), "key-glm");
    }

    #[test]
    fn config_push_keeps_open_tab() {
        let mut app = app_with_config();
        app.open_model_settings(2);
        let pushed = AppConfig::default_with_home("/elsewhere");
        app.apply_config_push(pushed);
        assert_eq!(app.modal, Modal::ModelSettings);
        assert_eq!(app.active_tab, 2);
    }
}
