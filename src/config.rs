//! Application configuration.
//!
//! Compile-time constants live here directly. Site settings (title, drives,
//! external viewer endpoints) come from `assets/config.toml`, embedded with
//! `include_str!` and parsed once at startup.

use serde::Deserialize;
use thiserror::Error;

use panview_core::ViewerConfig;

// =============================================================================
// Embedded Assets
// =============================================================================

/// Site configuration shipped with the build.
pub const SITE_CONFIG_TOML: &str = include_str!("../assets/config.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Fallback title when neither the manifest nor the config provides one.
pub const APP_NAME: &str = "PanIndex";

// =============================================================================
// Network Configuration
// =============================================================================

/// Default fetch timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key prefix for manifest caches (suffixed with the URL).
    pub const MANIFEST_KEY_PREFIX: &str = "manifest_cache:";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Site Configuration
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config.toml defines no drives")]
    NoDrives,
}

/// One index source ("account") listed by the site.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Drive {
    /// Display name
    pub name: String,
    /// Location of the drive's manifest JSON
    pub manifest_url: String,
}

/// Site settings read from `config.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Header title
    pub title: String,
    /// Footer text (plain text)
    pub footer: String,
    /// Manifest fetch timeout in milliseconds
    pub fetch_timeout_ms: i32,
    /// Endpoints used by click dispatch
    pub viewer: ViewerConfig,
    /// Index sources; the first one is the default drive
    pub drives: Vec<Drive>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            footer: String::new(),
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            viewer: ViewerConfig::default(),
            drives: vec![Drive {
                name: APP_NAME.to_string(),
                manifest_url: "manifest.json".to_string(),
            }],
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(source)?;
        if config.drives.is_empty() {
            return Err(ConfigError::NoDrives);
        }
        config.viewer.office_extensions = config
            .viewer
            .office_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .collect();
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::parse(SITE_CONFIG_TOML) {
            Ok(config) => config,
            Err(e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("{}; using defaults", e).into());
                #[cfg(not(target_arch = "wasm32"))]
                let _ = e;
                Self::default()
            }
        }
    }

    /// Drive by route index, if configured.
    pub fn drive(&self, index: usize) -> Option<&Drive> {
        self.drives.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(SITE_CONFIG_TOML).unwrap();
        assert!(!config.drives.is_empty());
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::parse(
            r#"
            title = "Team Files"

            [[drives]]
            name = "Shared"
            manifest_url = "https://files.example.com/manifest.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Team Files");
        assert_eq!(config.fetch_timeout_ms, FETCH_TIMEOUT_MS);
        assert_eq!(config.viewer.base_host, "https://pan-index.herokuapp.com");
        assert_eq!(config.drive(0).map(|d| d.name.as_str()), Some("Shared"));
        assert!(config.drive(1).is_none());
    }

    #[test]
    fn test_viewer_override() {
        let config = SiteConfig::parse(
            r#"
            [viewer]
            base_host = "https://files.example.com"
            office_extensions = [".DOCX", "odt"]
            "#,
        )
        .unwrap();
        assert_eq!(config.viewer.base_host, "https://files.example.com");
        assert!(config.viewer.is_office("docx"));
        assert!(config.viewer.is_office("odt"));
        assert!(!config.viewer.is_office("xlsx"));
        // Unset viewer keys keep their defaults.
        assert_eq!(
            config.viewer.office_viewer,
            "https://view.officeapps.live.com/op/view.aspx"
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            SiteConfig::parse("title = ["),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::parse("drives = []"),
            Err(ConfigError::NoDrives)
        ));
    }
}
