//! External URLs opened in the system browser.

use crate::i18n::Lang;

pub const REPO_URL: &str = "https://github.com/RapidAI/cceasy";
pub const ISSUES_URL: &str = "https://github.com/RapidAI/cceasy/issues/new";
pub const RELEASES_URL: &str = "https://github.com/RapidAI/cceasy/releases";

const SUBSCRIPTION_URLS: &[(&str, &str)] = &[
    ("glm", "https://bigmodel.cn/glm-coding"),
    ("kimi", "https://www.kimi.com/membership/pricing"),
    ("doubao", "https://www.volcengine.com/activity/codingplan"),
    ("minimax", "https://platform.minimaxi.com/user-center/payment/coding-plan"),
];

/// Provider signup page for the preset models; custom entries have none.
pub fn subscription_url(model_name: &str) -> Option<&'static str> {
    let lower = model_name.to_lowercase();
    SUBSCRIPTION_URLS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, url)| *url)
}

pub fn manual_url(lang: Lang) -> &'static str {
    if lang.is_chinese() {
        "https://github.com/RapidAI/cceasy/blob/main/UserManual_CN.md"
    } else {
        "https://github.com/RapidAI/cceasy/blob/main/UserManual_EN.md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_lookup_ignores_case() {
        assert!(subscription_url("GLM").is_some());
        assert!(subscription_url("MiniMax").is_some());
        assert!(subscription_url("Custom").is_none());
    }

    #[test]
    fn manual_follows_language() {
        assert!(manual_url(Lang::ZhHant).ends_with("UserManual_CN.md"));
        assert!(manual_url(Lang::Ko).ends_with("UserManual_EN.md"));
    }
}
