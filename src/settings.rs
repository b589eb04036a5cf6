//! Presentation settings and preferences
//!
//! Only affects how the sandbox is drawn, never the simulation.
//! Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Triangle fan segments per circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Sandbox settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Circle tessellation quality
    pub quality: QualityPreset,
    /// Draw body trails
    pub trails: bool,
    /// Draw velocity arrows
    pub velocity_arrows: bool,
    /// Update the clock readout
    pub show_status: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            trails: true,
            velocity_arrows: true,
            show_status: true,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings from stored JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("Ignoring stored settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Apply a change from a page control, identified by its element id.
    ///
    /// Returns false for unknown controls or values.
    pub fn apply_control(&mut self, id: &str, value: &str) -> bool {
        let enabled = || matches!(value, "true" | "on" | "1");
        match id {
            "quality-select" => match QualityPreset::parse(value) {
                Some(preset) => self.quality = preset,
                None => return false,
            },
            "trails-toggle" => self.trails = enabled(),
            "arrows-toggle" => self.velocity_arrows = enabled(),
            "status-toggle" => self.show_status = enabled(),
            _ => return false,
        }
        true
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "gravity_sandbox_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preset() {
        assert_eq!(QualityPreset::parse("LOW"), Some(QualityPreset::Low));
        assert_eq!(QualityPreset::parse("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"trails": false}"#);
        assert!(!settings.trails);
        assert!(settings.velocity_arrows);
        assert_eq!(settings.quality, QualityPreset::Medium);
    }

    #[test]
    fn test_corrupt_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_apply_control() {
        let mut settings = Settings::default();
        assert!(settings.apply_control("quality-select", "low"));
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(settings.apply_control("trails-toggle", "false"));
        assert!(!settings.trails);
        assert!(settings.apply_control("arrows-toggle", "false"));
        assert!(!settings.velocity_arrows);
        assert!(settings.apply_control("trails-toggle", "true"));
        assert!(settings.trails);
    }

    #[test]
    fn test_apply_control_rejects_unknown() {
        let mut settings = Settings::default();
        assert!(!settings.apply_control("quality-select", "ultra"));
        assert!(!settings.apply_control("volume", "1"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_preset_json() {
        let settings = Settings::from_json(r#"{"quality": "High"}"#);
        assert_eq!(settings, Settings::from_preset(QualityPreset::High));
    }
}
