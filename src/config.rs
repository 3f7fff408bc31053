use crate::errors::should_use_color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_SETTINGS: &str = include_str!("../settings.toml");
const CONFIG_DIR_NAME: &str = "name-viz";
const USER_CONFIG_FILE: &str = "settings.toml";
const LOCAL_CONFIG_FILE: &str = "name-viz.toml";

/// When to colour terminal output.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    /// Colour when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => should_use_color(is_terminal),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EchoSettings {
    pub addr: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    #[serde(default)]
    pub color: ColorChoice,
}

/// Runtime settings for the CLI, the HTTP server and the echo server.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub echo: EchoSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// A settings file where every key is optional.
#[derive(Debug, Default, Deserialize)]
struct SettingsOverride {
    #[serde(default)]
    server: AddrOverride,
    #[serde(default)]
    echo: AddrOverride,
    #[serde(default)]
    display: DisplayOverride,
}

#[derive(Debug, Default, Deserialize)]
struct AddrOverride {
    addr: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayOverride {
    color: Option<ColorChoice>,
}

impl Settings {
    /// Load the built-in settings
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(DEFAULT_SETTINGS)?)
    }

    /// Built-in settings overridden by the file at `path`
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config '{}': {}", path.display(), e))?;
        settings.merge_toml(&content)?;
        Ok(settings)
    }

    /// Load settings with user overrides from standard locations
    /// 1. Start with built-in settings
    /// 2. Override with ~/.config/name-viz/settings.toml if it exists
    /// 3. Override with ./name-viz.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        let user_path = dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILE));
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);

        for path in user_path.iter().chain(std::iter::once(&local_path)) {
            if !path.exists() {
                continue;
            }
            let merged = std::fs::read_to_string(path)
                .map_err(Box::<dyn std::error::Error>::from)
                .and_then(|content| settings.merge_toml(&content));
            match merged {
                Ok(()) => tracing::debug!(path = %path.display(), "loaded settings override"),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load settings override"
                ),
            }
        }

        Ok(settings)
    }

    /// Apply the keys present in a TOML document on top of these settings
    pub fn merge_toml(&mut self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let other: SettingsOverride = toml::from_str(content)?;

        if let Some(addr) = other.server.addr {
            self.server.addr = addr;
        }
        if let Some(addr) = other.echo.addr {
            self.echo.addr = addr;
        }
        if let Some(color) = other.display.color {
            self.display.color = color;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_settings() {
        let settings = Settings::load_default().unwrap();
        assert_eq!(settings.server.addr, "0.0.0.0:8080");
        assert_eq!(settings.echo.addr, "0.0.0.0:9000");
        assert_eq!(settings.display.color, ColorChoice::Auto);
    }

    #[test]
    fn test_merge_only_touches_present_keys() {
        let mut settings = Settings::load_default().unwrap();
        settings
            .merge_toml(
                r#"
[server]
addr = "127.0.0.1:3000"

[display]
color = "never"
"#,
            )
            .unwrap();

        assert_eq!(settings.server.addr, "127.0.0.1:3000");
        assert_eq!(settings.echo.addr, "0.0.0.0:9000");
        assert_eq!(settings.display.color, ColorChoice::Never);
    }

    #[test]
    fn test_merge_rejects_bad_values() {
        let mut settings = Settings::load_default().unwrap();
        assert!(settings.merge_toml("[display]\ncolor = \"sometimes\"\n").is_err());
        assert_eq!(settings.display.color, ColorChoice::Auto);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Settings::load_from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Cannot read config"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("name-viz-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "[echo]\naddr = \"127.0.0.1:7000\"\n").unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.echo.addr, "127.0.0.1:7000");
        assert_eq!(settings.server.addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
    }
}
