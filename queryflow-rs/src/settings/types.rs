//! Settings types

use serde::{Deserialize, Serialize};

/// Process-wide user settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub api_key: String,
    /// UI hint 1-50, not enforced here
    pub max_results: u32,
    /// Hours
    pub cache_expiry: u32,
    pub dark_mode: bool,
    pub notifications: bool,
    /// Record each submission in history
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_results: 10,
            cache_expiry: 24,
            dark_mode: false,
            notifications: true,
            auto_save: true,
        }
    }
}

/// Partial update; every `Some` field replaces the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_expiry: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
}

impl Settings {
    /// Shallow merge of `patch` into `self`
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(api_key) = patch.api_key {
            self.api_key = api_key;
        }
        if let Some(max_results) = patch.max_results {
            self.max_results = max_results;
        }
        if let Some(cache_expiry) = patch.cache_expiry {
            self.cache_expiry = cache_expiry;
        }
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(auto_save) = patch.auto_save {
            self.auto_save = auto_save;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_touches_set_fields() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch {
            dark_mode: Some(true),
            max_results: Some(50),
            ..Default::default()
        });

        assert!(settings.dark_mode);
        assert_eq!(settings.max_results, 50);
        assert_eq!(settings.cache_expiry, 24);
        assert!(settings.auto_save);
    }

    #[test]
    fn test_patch_from_partial_json() {
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"apiKey": "sk-test", "autoSave": false}"#).unwrap();
        assert_eq!(patch.api_key.as_deref(), Some("sk-test"));
        assert_eq!(patch.auto_save, Some(false));
        assert_eq!(patch.notifications, None);
    }
}
