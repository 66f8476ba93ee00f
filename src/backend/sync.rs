//! Projection of the selected model into the files the `claude` CLI
//! actually reads: `~/.claude/settings.json` (env block, permissions)
//! and `~/.claude.json` (pre-approved API key). Without this a model
//! switch would only update our own mirror file.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value, json};

use crate::domain::config::{AppConfig, ModelConfig};

fn pin_models(env: &mut Map<String, Value>, base_url: &str, model: &str) {
    env.insert("ANTHROPIC_BASE_URL".to_string(), json!(base_url));
    env.insert("ANTHROPIC_DEFAULT_HAIKU_MODEL".to_string(), json!(model));
    env.insert("ANTHROPIC_DEFAULT_OPUS_MODEL".to_string(), json!(model));
    env.insert("ANTHROPIC_DEFAULT_SONNET_MODEL".to_string(), json!(model));
    env.insert("ANTHROPIC_MODEL".to_string(), json!(model));
}

/// Build the settings.json document for the selected model. Preset
/// providers pin their coding-plan model; custom entries pass the
/// endpoint and name through as-is.
pub fn claude_settings(config: &AppConfig) -> Result<Value> {
    let model: &ModelConfig = config
        .active_model()
        .ok_or_else(|| anyhow!("selected model not found"))?;

    let mut settings = Map::new();
    let mut env = Map::new();
    env.insert("ANTHROPIC_AUTH_TOKEN".to_string(), json!(model.api_key));

    match model.model_name.to_lowercase().as_str() {
        "kimi" => pin_models(&mut env, "https://api.kimi.com/coding", "kimi-k2-thinking"),
        "glm" | "glm-4.7" => {
            pin_models(&mut env, "https://open.bigmodel.cn/api/anthropic", "glm-4.7");
            settings.insert(
                "permissions".to_string(),
                json!({ "defaultMode": "dontAsk" }),
            );
        }
        "doubao" => pin_models(
            &mut env,
            "https://ark.cn-beijing.volces.com/api/coding",
            "doubao-seed-code-preview-latest",
        ),
        "minimax" => {
            pin_models(&mut env, "https://api.minimaxi.com/anthropic", "MiniMax-M2.1");
            env.insert("ANTHROPIC_SMALL_FAST_MODEL".to_string(), json!("MiniMax-M2.1"));
            env.insert("API_TIMEOUT_MS".to_string(), json!("3000000"));
            env.insert(
                "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC".to_string(),
                json!("1"),
            );
        }
        _ => {
            env.insert("ANTHROPIC_BASE_URL".to_string(), json!(model.model_url));
            env.insert("ANTHROPIC_MODEL".to_string(), json!(model.model_name));
        }
    }

    settings.insert("env".to_string(), Value::Object(env));
    Ok(Value::Object(settings))
}

/// Merge the selected key into the approved list of `.claude.json`,
/// preserving whatever else lives in that file. An unreadable or
/// malformed file is replaced rather than failing the save.
pub fn merge_approved_key(existing: Option<&str>, api_key: &str) -> Value {
    let mut doc: Map<String, Value> = existing
        .and_then(|data| serde_json::from_str(data).ok())
        .unwrap_or_default();
    doc.insert(
        "customApiKeyResponses".to_string(),
        json!({ "approved": [api_key], "rejected": [] }),
    );
    Value::Object(doc)
}

/// Write both sync targets under `claude_dir` / `claude_json_path`.
pub async fn write_claude_settings(
    claude_dir: &Path,
    claude_json_path: &Path,
    config: &AppConfig,
) -> Result<()> {
    let settings = claude_settings(config)?;
    tokio::fs::create_dir_all(claude_dir)
        .await
        .with_context(|| format!("failed to create {}", claude_dir.display()))?;
    let settings_path = claude_dir.join("settings.json");
    tokio::fs::write(&settings_path, serde_json::to_string_pretty(&settings)?)
        .await
        .with_context(|| format!("failed to write {}", settings_path.display()))?;

    let api_key = config
        .active_model()
        .map(|m| m.api_key.clone())
        .unwrap_or_default();
    let existing = tokio::fs::read_to_string(claude_json_path).await.ok();
    let merged = merge_approved_key(existing.as_deref(), &api_key);
    tokio::fs::write(claude_json_path, serde_json::to_string_pretty(&merged)?)
        .await
        .with_context(|| format!("failed to write {}", claude_json_path.display()))?;

    tracing::debug!(model = %config.current_model, "claude settings synced");
    Ok(())
}
