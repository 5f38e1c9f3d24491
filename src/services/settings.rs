use serde::Deserialize;
use std::path::PathBuf;

/// Optional user settings, loaded from `$SCREENFLOW_SETTINGS` when set.
/// Missing or unreadable settings fall back to defaults; a malformed file is
/// reported once via tracing and otherwise ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How long a toast stays on screen.
    pub toast_ttl_ms: u64,
    /// Route deletes through the confirm dialog.
    pub confirm_delete: bool,
    /// Key overrides, e.g. `{ "key": "ctrl+n", "command": "addScreen" }`.
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            toast_ttl_ms: 2500,
            confirm_delete: true,
            keybindings: Vec::new(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    std::env::var_os("SCREENFLOW_SETTINGS").map(PathBuf::from)
}

pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings not readable");
            return Settings::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings not valid JSON");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
