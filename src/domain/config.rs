use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Preset providers shipped with a fresh config. Keys are empty until the
/// user fills them in.
pub const PRESET_MODELS: &[(&str, &str)] = &[
    ("GLM", "https://open.bigmodel.cn/api/anthropic"),
    ("kimi", "https://api.kimi.com/coding"),
    ("doubao", "https://ark.cn-beijing.volces.com/api/coding"),
    ("MiniMax", "https://api.minimaxi.com/anthropic"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_name: String,
    #[serde(default)]
    pub model_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl ModelConfig {
    /// A model can only be launched against once it has a real key.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub yolo_mode: bool,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            path: path.into(),
            yolo_mode: false,
        }
    }
}

/// The backend-held configuration document, mirrored in memory and
/// overwritten wholesale on every save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub current_model: String,
    /// Single-directory field from old releases, kept for migration.
    #[serde(default)]
    pub project_dir: String,
    #[serde(default)]
    pub models: Vec<ModelConfig>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub current_project: String,
}

impl AppConfig {
    /// Fresh config for a first run: preset providers plus a Custom slot,
    /// one project pointing at the home directory.
    pub fn default_with_home(home: &str) -> Self {
        let mut models: Vec<ModelConfig> = PRESET_MODELS
            .iter()
            .map(|(name, url)| ModelConfig {
                model_name: (*name).to_string(),
                model_url: (*url).to_string(),
                ..Default::default()
            })
            .collect();
        models.push(ModelConfig {
            model_name: "Custom".to_string(),
            is_custom: true,
            ..Default::default()
        });

        Self {
            current_model: models[0].model_name.clone(),
            project_dir: String::new(),
            models,
            projects: vec![ProjectConfig {
                id: "default".to_string(),
                name: "Project 1".to_string(),
                path: home.to_string(),
                yolo_mode: false,
            }],
            current_project: "default".to_string(),
        }
    }

    /// Repair a loaded document so the pointers reference real entries.
    ///
    /// Handles configs written by older releases: missing project list
    /// (migrated from the legacy `project_dir` field), blank preset URLs,
    /// a missing Custom slot, and stale current_model/current_project.
    pub fn normalize(&mut self, home: &str) {
        if self.current_model.is_empty() {
            if let Some(first) = self.models.first() {
                self.current_model = first.model_name.clone();
            }
        }

        if self.projects.is_empty() {
            let path = if self.project_dir.is_empty() {
                home.to_string()
            } else {
                self.project_dir.clone()
            };
            self.projects = vec![ProjectConfig {
                id: "default".to_string(),
                name: "Project 1".to_string(),
                path,
                yolo_mode: false,
            }];
            self.current_project = "default".to_string();
        }

        if !self.projects.iter().any(|p| p.id == self.current_project) {
            self.current_project = self.projects[0].id.clone();
        }

        let mut has_custom = false;
        for model in &mut self.models {
            if model.is_custom || model.model_name == "Custom" {
                model.is_custom = true;
                has_custom = true;
            }
            if model.model_url.is_empty() {
                let lower = model.model_name.to_lowercase();
                if let Some((_, url)) = PRESET_MODELS
                    .iter()
                    .find(|(name, _)| name.to_lowercase() == lower)
                {
                    model.model_url = (*url).to_string();
                }
            }
        }
        if !has_custom {
            self.models.push(ModelConfig {
                model_name: "Custom".to_string(),
                is_custom: true,
                ..Default::default()
            });
        }
    }

    pub fn model_index(&self, name: &str) -> Option<usize> {
        self.models.iter().position(|m| m.model_name == name)
    }

    pub fn active_model(&self) -> Option<&ModelConfig> {
        self.models.iter().find(|m| m.model_name == self.current_model)
    }

    pub fn current_project(&self) -> Option<&ProjectConfig> {
        self.projects
            .iter()
            .find(|p| p.id == self.current_project)
            .or_else(|| self.projects.first())
    }

    pub fn current_project_mut(&mut self) -> Option<&mut ProjectConfig> {
        let id = self.current_project.clone();
        if self.projects.iter().any(|p| p.id == id) {
            self.projects.iter_mut().find(|p| p.id == id)
        } else {
            self.projects.first_mut()
        }
    }

    pub fn has_any_api_key(&self) -> bool {
        self.models.iter().any(|m| m.has_api_key())
    }
}

/// Check a scratch project list before it may replace the persisted one.
/// Returns the manager status message on failure.
pub fn validate_project_names(projects: &[ProjectConfig]) -> Result<(), String> {
    let names: Vec<&str> = projects.iter().map(|p| p.name.trim()).collect();
    if names.iter().any(|n| n.is_empty()) {
        return Err("Error: Project name cannot be empty.".to_string());
    }
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err("Error: Duplicate project names are not allowed.".to_string());
        }
    }
    Ok(())
}

/// Smallest "Project N" not already taken in the scratch list.
pub fn next_project_name(projects: &[ProjectConfig]) -> String {
    let mut i = 1;
    loop {
        let candidate = format!("Project {}", i);
        if !projects.iter().any(|p| p.name == candidate) {
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, name: &str) -> ProjectConfig {
        ProjectConfig {
            id: id.to_string(),
            name: name.to_string(),
            path: "/tmp".to_string(),
            yolo_mode: false,
        }
    }

    #[test]
    fn default_config_points_at_first_model() {
        let config = AppConfig::default_with_home("/home/user");
        assert_eq!(config.current_model, "GLM");
        assert_eq!(config.models.len(), PRESET_MODELS.len() + 1);
        assert!(config.models.last().unwrap().is_custom);
        assert_eq!(config.projects[0].path, "/home/user");
        assert_eq!(config.current_project, "default");
    }

    #[test]
    fn normalize_migrates_legacy_project_dir() {
        let mut config = AppConfig {
            current_model: "GLM".to_string(),
            project_dir: "/work/repo".to_string(),
            models: vec![ModelConfig {
                model_name: "GLM".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        config.normalize("/home/user");
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].path, "/work/repo");
        assert_eq!(config.current_project, "default");
    }

    #[test]
    fn normalize_repairs_stale_current_project() {
        let mut config = AppConfig {
            current_model: "GLM".to_string(),
            models: vec![ModelConfig {
                model_name: "GLM".to_string(),
                ..Default::default()
            }],
            projects: vec![project("a", "One"), project("b", "Two")],
            current_project: "gone".to_string(),
            ..Default::default()
        };
        config.normalize("/home/user");
        assert_eq!(config.current_project, "a");
    }

    #[test]
    fn normalize_fills_preset_urls_and_custom_slot() {
        let mut config = AppConfig {
            models: vec![ModelConfig {
                model_name: "kimi".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        config.normalize("/home/user");
        assert_eq!(config.models[0].model_url, "https://api.kimi.com/coding");
        assert!(config.models.iter().any(|m| m.is_custom));
        assert_eq!(config.current_model, "kimi");
    }

    #[test]
    fn whitespace_api_key_does_not_count() {
        let model = ModelConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(!model.has_api_key());
    }

    #[test]
    fn validation_rejects_empty_and_duplicate_names() {
        let err = validate_project_names(&[project("a", "  ")]).unwrap_err();
        assert!(err.contains("empty"));

        let err =
            validate_project_names(&[project("a", "Web "), project("b", " Web")]).unwrap_err();
        assert!(err.contains("Duplicate"));

        assert!(validate_project_names(&[project("a", "Web"), project("b", "Api")]).is_ok());
    }

    #[test]
    fn next_project_name_skips_taken_numbers() {
        let projects = vec![project("a", "Project 1"), project("b", "Project 3")];
        assert_eq!(next_project_name(&projects), "Project 2");
        assert_eq!(next_project_name(&[]), "Project 1");
    }
}
