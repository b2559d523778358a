//! Configuration management for cyberfolio
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/cyberfolio/config.toml

use crate::store::{CursorStyle, ThemeStore};
use crate::types::Route;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme selected at startup
    pub theme: String,
    /// Cursor style attached to the startup theme (empty keeps the theme's own)
    pub cursor_style: String,
    /// Route path opened at startup
    pub start_route: String,
    pub fps: u16,
    pub effects: EffectOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Neon Pink".into(),
            cursor_style: String::new(),
            start_route: "/".into(),
            fps: 30,
            effects: EffectOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("cyberfolio");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Delay between animation frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.clamp(1, 120)))
    }

    /// Resolve the startup route, falling back to Home for unknown paths
    pub fn start_route(&self) -> Route {
        Route::from_path(&self.start_route).unwrap_or_else(|| {
            tracing::warn!(path = %self.start_route, "unknown start route, using /");
            Route::Home
        })
    }

    /// Build a theme store with the configured selections applied.
    ///
    /// Names that do not match a registered entry are skipped.
    pub fn theme_store(&self) -> ThemeStore {
        let mut store = ThemeStore::default();

        if store.themes().any(|t| t.name.eq_ignore_ascii_case(&self.theme)) {
            store.select(&self.theme);
        } else {
            tracing::warn!(theme = %self.theme, "unknown theme in config, using default");
        }

        if !self.cursor_style.is_empty() {
            if CursorStyle::by_name(&self.cursor_style).is_some() {
                store.set_cursor_style(&self.cursor_style);
            } else {
                tracing::warn!(cursor = %self.cursor_style, "unknown cursor style in config");
            }
        }

        store
    }
}

/// Which decorative effects are mounted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectOptions {
    pub grid: bool,
    pub particles: bool,
    pub cursor_trail: bool,
    /// Replace the grid behind content pages with the shooting gallery
    pub interactive_background: bool,
    pub transitions: bool,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            grid: true,
            particles: true,
            cursor_trail: true,
            interactive_background: false,
            transitions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Neon Pink");
        assert_eq!(config.start_route(), Route::Home);
        assert!(config.effects.grid);
        assert!(!config.effects.interactive_background);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
theme = "Quantum Blue"

[effects]
particles = false
"#,
        )
        .unwrap();

        assert_eq!(config.theme, "Quantum Blue");
        assert_eq!(config.fps, 30);
        assert!(!config.effects.particles);
        assert!(config.effects.grid);
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let mut config = Config::default();
        config.cursor_style = "neural".into();
        config.effects.transitions = false;

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_frame_interval_is_clamped() {
        let mut config = Config::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(33));

        config.fps = 0;
        assert_eq!(config.frame_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_theme_store_applies_selection() {
        let config = Config {
            theme: "plasma purple".into(),
            cursor_style: "matrix".into(),
            ..Config::default()
        };

        let store = config.theme_store();
        assert_eq!(store.current().name, "Plasma Purple");
        assert_eq!(store.current().cursor_style.name, "matrix");
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let config = Config {
            theme: "Solarized".into(),
            cursor_style: "sparkles".into(),
            start_route: "/nowhere".into(),
            ..Config::default()
        };

        let store = config.theme_store();
        assert_eq!(store.current().name, "Neon Pink");
        assert_eq!(store.current().cursor_style.name, "hex");
        assert_eq!(config.start_route(), Route::Home);
    }
}
