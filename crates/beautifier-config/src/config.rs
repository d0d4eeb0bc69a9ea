/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::SnippetTheme;

/// Slider ranges shared by the UI and the sanitizer.
pub const PADDING_RANGE: (u32, u32) = (0, 150);
pub const ROUNDING_RANGE: (u32, u32) = (0, 50);
pub const SHADOW_RANGE: (u32, u32) = (0, 100);

/// Aspect ratio identifiers accepted in `default_aspect_ratio`.
pub const ASPECT_RATIO_IDS: [&str; 5] = ["auto", "16/9", "4/3", "1/1", "4/5"];

pub const DEFAULT_BACKGROUND: &str = "radial-gradient(at 0% 0%, hsla(253,16%,7%,1) 0, transparent 50%), radial-gradient(at 50% 0%, hsla(225,39%,30%,1) 0, transparent 50%), radial-gradient(at 100% 0%, hsla(339,49%,30%,1) 0, transparent 50%)";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_padding: u32,
    pub default_rounding: u32,
    pub default_shadow: u32,
    pub default_background: String,
    /// One of [`ASPECT_RATIO_IDS`].
    pub default_aspect_ratio: String,
    pub default_language: String,
    /// Folder PNG exports are written to. Empty = downloads folder.
    pub export_folder: String,
    /// Reveal the exported file in the system file manager after writing it.
    pub reveal_after_export: bool,
    /// Whether to remember the last folder used in the upload dialog.
    pub remember_last_folder: bool,
    /// Last folder used in the upload dialog (persisted across sessions).
    pub last_used_folder: String,
    pub snippet_theme: SnippetTheme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_padding: 60,
            default_rounding: 12,
            default_shadow: 40,
            default_background: DEFAULT_BACKGROUND.to_string(),
            default_aspect_ratio: "auto".to_string(),
            default_language: "javascript".to_string(),
            export_folder: String::new(),
            reveal_after_export: false,
            remember_last_folder: true,
            last_used_folder: String::new(),
            snippet_theme: SnippetTheme::default(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `beautifier.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("beautifier.json")))
            .unwrap_or_else(|| PathBuf::from("beautifier.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Returns the folder exports are written to.
    ///
    /// Resolution order:
    /// 1. `export_folder` (if non-empty)
    /// 2. The user's downloads folder
    /// 3. The user's home directory
    /// 4. The current directory
    pub fn resolve_export_folder(&self) -> PathBuf {
        if !self.export_folder.is_empty() {
            return PathBuf::from(&self.export_folder);
        }
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the starting directory for the upload dialog.
    pub fn resolve_upload_folder(&self) -> Option<PathBuf> {
        if self.remember_last_folder && !self.last_used_folder.is_empty() {
            let p = PathBuf::from(&self.last_used_folder);
            if p.is_dir() {
                return Some(p);
            }
        }
        dirs::picture_dir().or_else(dirs::home_dir)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.default_padding = self.default_padding.clamp(PADDING_RANGE.0, PADDING_RANGE.1);
        self.default_rounding = self
            .default_rounding
            .clamp(ROUNDING_RANGE.0, ROUNDING_RANGE.1);
        self.default_shadow = self.default_shadow.clamp(SHADOW_RANGE.0, SHADOW_RANGE.1);

        if !ASPECT_RATIO_IDS.contains(&self.default_aspect_ratio.as_str()) {
            tracing::warn!(
                "Unknown aspect ratio '{}', resetting to auto",
                self.default_aspect_ratio
            );
            self.default_aspect_ratio = "auto".to_string();
        }
        if self.default_language.trim().is_empty() {
            self.default_language = "javascript".to_string();
        }
        if self.default_background.trim().is_empty() {
            self.default_background = DEFAULT_BACKGROUND.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_padding, 60);
        assert_eq!(config.default_rounding, 12);
        assert_eq!(config.default_shadow, 40);
        assert_eq!(config.default_aspect_ratio, "auto");
        assert_eq!(config.default_language, "javascript");
        assert!(!config.reveal_after_export);
    }

    #[test]
    fn test_sanitize_clamps_sliders() {
        let mut config = AppConfig::default();
        config.default_padding = 500;
        config.default_rounding = 51;
        config.default_shadow = 1000;
        config.sanitize();
        assert_eq!(config.default_padding, 150);
        assert_eq!(config.default_rounding, 50);
        assert_eq!(config.default_shadow, 100);
    }

    #[test]
    fn test_sanitize_resets_unknown_aspect_ratio() {
        let mut config = AppConfig::default();
        config.default_aspect_ratio = "21/9".to_string();
        config.sanitize();
        assert_eq!(config.default_aspect_ratio, "auto");
    }

    #[test]
    fn test_sanitize_keeps_known_aspect_ratio() {
        let mut config = AppConfig::default();
        config.default_aspect_ratio = "4/5".to_string();
        config.sanitize();
        assert_eq!(config.default_aspect_ratio, "4/5");
    }

    #[test]
    fn test_sanitize_restores_blank_strings() {
        let mut config = AppConfig::default();
        config.default_language = "  ".to_string();
        config.default_background = String::new();
        config.sanitize();
        assert_eq!(config.default_language, "javascript");
        assert_eq!(config.default_background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_resolve_export_folder_prefers_explicit() {
        let mut config = AppConfig::default();
        config.export_folder = "/tmp/shots".to_string();
        assert_eq!(config.resolve_export_folder(), PathBuf::from("/tmp/shots"));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_background, config.default_background);
        assert_eq!(parsed.snippet_theme, config.snippet_theme);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let json = r#"{"default_padding": 20}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_padding, 20);
        assert_eq!(parsed.default_shadow, 40);
        assert_eq!(parsed.default_language, "javascript");
    }
}
