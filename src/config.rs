//! Overlay configuration (`overlay_config.json`)
//!
//! Serde-backed schema for the per-overlay toggles and rendering defaults:
//!
//! ```json
//! {
//!   "overlays": {
//!     "hud":        { "enabled": true,  "zOrder": 0,   "inputPriority": 0 },
//!     "pause_menu": { "enabled": false, "zOrder": 100, "inputPriority": 100, "pauseGame": true },
//!     "debug":      { "enabled": false, "zOrder": 200, "inputPriority": 10 }
//!   },
//!   "rendering": { "blendMode": "blend", "defaultFont": "builtin-5x7", "defaultFontSize": 2 }
//! }
//! ```
//!
//! Missing fields take defaults, so a minimal file only lists what differs.
//! [`OverlayConfig::apply_to`] pushes the toggles into a manager after the
//! overlays are registered.

use crate::manager::OverlayManager;
use crate::overlay::OverlayError;
use crate::text::BUILTIN_FONT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Per-overlay toggles keyed by registry name
    #[serde(default)]
    pub overlays: BTreeMap<String, OverlayToggle>,

    /// Rendering defaults shared by all overlays
    #[serde(default)]
    pub rendering: RenderingConfig,
}

/// Per-overlay configuration entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayToggle {
    /// Whether the overlay starts active
    pub enabled: bool,

    /// Draw-order key; higher renders on top
    pub z_order: i32,

    /// Input-routing key; higher receives events first
    pub input_priority: i32,

    /// Whether the game pauses while this overlay is active
    pub pause_game: bool,
}

impl Default for OverlayToggle {
    fn default() -> Self {
        OverlayToggle {
            enabled: true,
            z_order: 0,
            input_priority: 0,
            pause_game: false,
        }
    }
}

/// Rendering defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderingConfig {
    /// Canvas blend mode used for the overlay render pass
    pub blend_mode: BlendModeSetting,

    /// Font identifier; the scaffold ships only the built-in bitmap font
    pub default_font: String,

    /// Text scale applied by overlays that honor the default
    pub default_font_size: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        RenderingConfig {
            blend_mode: BlendModeSetting::Blend,
            default_font: BUILTIN_FONT.to_string(),
            default_font_size: 2,
        }
    }
}

/// Serializable stand-in for `sdl2::render::BlendMode`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlendModeSetting {
    None,
    Blend,
    Add,
    Mod,
}

impl BlendModeSetting {
    pub fn to_sdl(self) -> sdl2::render::BlendMode {
        match self {
            BlendModeSetting::None => sdl2::render::BlendMode::None,
            BlendModeSetting::Blend => sdl2::render::BlendMode::Blend,
            BlendModeSetting::Add => sdl2::render::BlendMode::Add,
            BlendModeSetting::Mod => sdl2::render::BlendMode::Mod,
        }
    }
}

/// Error types for configuration load/save
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl OverlayConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Config file not found: {}", path.display()),
            )));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        println!("Overlay config saved to: {}", path.display());
        Ok(())
    }

    /// Default per-user config location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("overlay_engine").join("overlay_config.json"))
    }

    /// Push the toggles and rendering defaults into a manager
    ///
    /// Overlays must be registered first; names the registry does not know
    /// are skipped with a warning. `enabled` activates or deactivates, so an
    /// activation failure (a failing `on_initialize`) surfaces here. The
    /// blend mode and default text scale are installed on the manager; a
    /// `defaultFont` other than the built-in one falls back to it with a
    /// warning.
    pub fn apply_to(&self, manager: &mut OverlayManager) -> Result<(), OverlayError> {
        for (name, toggle) in &self.overlays {
            if !manager.is_registered(name) {
                println!("Warning: config references unknown overlay: {}", name);
                continue;
            }
            manager.set_z_order(name, toggle.z_order)?;
            manager.set_input_priority(name, toggle.input_priority)?;
            manager.set_pause_game(name, toggle.pause_game)?;
            if toggle.enabled {
                manager.activate(name)?;
            } else {
                manager.deactivate(name)?;
            }
        }
        if self.rendering.default_font != BUILTIN_FONT {
            println!(
                "Warning: unknown font '{}', using the built-in bitmap font",
                self.rendering.default_font
            );
        }
        manager.set_blend_mode(self.rendering.blend_mode.to_sdl());
        manager.set_default_text_scale(self.rendering.default_font_size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputResponse;
    use crate::manager::OverlaySettings;
    use crate::overlay::Overlay;
    use sdl2::render::Canvas;
    use sdl2::video::Window;

    struct NullOverlay;

    impl Overlay for NullOverlay {
        fn update(&mut self, _dt: f32) {}
        fn render(&self, _canvas: &mut Canvas<Window>) -> Result<(), String> {
            Ok(())
        }
        fn handle_input(&mut self, _event: &crate::input::InputEvent) -> InputResponse {
            InputResponse::Ignored
        }
    }

    const SAMPLE: &str = r#"{
        "overlays": {
            "hud":        { "enabled": true,  "zOrder": 0,   "inputPriority": 0 },
            "pause_menu": { "enabled": false, "zOrder": 100, "inputPriority": 100, "pauseGame": true },
            "debug":      { "enabled": true,  "zOrder": 200, "inputPriority": 10 }
        },
        "rendering": {
            "blendMode": "add",
            "defaultFont": "builtin-5x7",
            "defaultFontSize": 3
        }
    }"#;

    #[test]
    fn test_parse_sample_config() {
        let config = OverlayConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.overlays.len(), 3);

        let menu = &config.overlays["pause_menu"];
        assert!(!menu.enabled);
        assert_eq!(menu.z_order, 100);
        assert_eq!(menu.input_priority, 100);
        assert!(menu.pause_game);

        assert_eq!(config.rendering.blend_mode, BlendModeSetting::Add);
        assert_eq!(config.rendering.default_font_size, 3);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = OverlayConfig::from_json(r#"{ "overlays": { "hud": {} } }"#).unwrap();
        let hud = &config.overlays["hud"];
        assert!(hud.enabled);
        assert_eq!(hud.z_order, 0);
        assert_eq!(hud.input_priority, 0);
        assert!(!hud.pause_game);
        assert_eq!(config.rendering.blend_mode, BlendModeSetting::Blend);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let config = OverlayConfig::from_json("{}").unwrap();
        assert!(config.overlays.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            OverlayConfig::from_json("{ nope"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = OverlayConfig::load("/definitely/not/here.json").unwrap_err();
        match err {
            ConfigError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_to_manager() {
        let mut manager = OverlayManager::new();
        manager
            .register("hud", Box::new(NullOverlay), OverlaySettings::default())
            .unwrap();
        manager
            .register("pause_menu", Box::new(NullOverlay), OverlaySettings::default())
            .unwrap();
        manager
            .register("debug", Box::new(NullOverlay), OverlaySettings::default())
            .unwrap();
        // Previously active; the config disables it
        manager.activate("pause_menu").unwrap();

        let config = OverlayConfig::from_json(SAMPLE).unwrap();
        config.apply_to(&mut manager).unwrap();

        assert!(manager.is_active("hud"));
        assert!(manager.is_active("debug"));
        assert!(!manager.is_active("pause_menu"));
        // zOrder from the file: hud (0) under debug (200)
        assert_eq!(manager.render_order(), &["hud", "pause_menu", "debug"]);
        // inputPriority: pause_menu (100) first, then debug (10), then hud (0)
        assert_eq!(manager.input_order(), &["pause_menu", "debug", "hud"]);
        // defaultFontSize from the file is installed as the text default
        assert_eq!(manager.default_text_scale(), 3);
    }

    #[test]
    fn test_apply_installs_rendering_defaults() {
        let mut manager = OverlayManager::new();
        let config = OverlayConfig::from_json(
            r#"{ "rendering": { "defaultFont": "comic-sans", "defaultFontSize": 4 } }"#,
        )
        .unwrap();
        // Unknown font falls back to the built-in one; the size still applies
        config.apply_to(&mut manager).unwrap();
        assert_eq!(manager.default_text_scale(), 4);
    }

    #[test]
    fn test_apply_skips_unknown_overlays() {
        let mut manager = OverlayManager::new();
        manager
            .register("hud", Box::new(NullOverlay), OverlaySettings::default())
            .unwrap();

        let config =
            OverlayConfig::from_json(r#"{ "overlays": { "ghost": { "enabled": true } } }"#)
                .unwrap();
        config.apply_to(&mut manager).unwrap();
        assert!(!manager.is_registered("ghost"));
    }

    #[test]
    fn test_blend_mode_wire_names() {
        let config =
            OverlayConfig::from_json(r#"{ "rendering": { "blendMode": "mod" } }"#).unwrap();
        assert_eq!(config.rendering.blend_mode, BlendModeSetting::Mod);
    }
}
