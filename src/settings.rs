use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::render::Palette;
use crate::shape::{DEFAULT_RADIUS, DEFAULT_SIDES, DEFAULT_VELOCITY};
use crate::PolygramApp;

/// Returns the path to the settings file: `~/.config/polygram-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("polygram-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Shape params (UI-facing values)
    pub side_count: usize,
    pub radius: f32,
    pub velocity: f32,

    // Display
    pub show_circle: bool,
    pub show_polygram: bool,
    pub line_width: f32,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub primary_r: u8,
    pub primary_g: u8,
    pub primary_b: u8,
    pub secondary_r: u8,
    pub secondary_g: u8,
    pub secondary_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            side_count: DEFAULT_SIDES,
            radius: DEFAULT_RADIUS,
            velocity: DEFAULT_VELOCITY,

            show_circle: true,
            show_polygram: true,
            line_width: 1.5,

            primary_r: palette.primary.r(),
            primary_g: palette.primary.g(),
            primary_b: palette.primary.b(),
            secondary_r: palette.secondary.r(),
            secondary_g: palette.secondary.g(),
            secondary_b: palette.secondary.b(),
            background_r: palette.background.r(),
            background_g: palette.background.g(),
            background_b: palette.background.b(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &PolygramApp) -> Self {
        let palette = app.shape.palette;
        Self {
            side_count: app.params.side_count,
            radius: app.params.radius,
            velocity: app.params.velocity,

            show_circle: app.shape.show_circle(),
            show_polygram: app.shape.show_polygram(),
            line_width: app.view.settings.line_width,

            primary_r: palette.primary.r(),
            primary_g: palette.primary.g(),
            primary_b: palette.primary.b(),
            secondary_r: palette.secondary.r(),
            secondary_g: palette.secondary.g(),
            secondary_b: palette.secondary.b(),
            background_r: palette.background.r(),
            background_g: palette.background.g(),
            background_b: palette.background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut PolygramApp) {
        app.params.side_count = self.side_count;
        app.params.radius = self.radius;
        app.params.velocity = self.velocity;

        app.shape.configure(self.side_count, self.radius);
        app.shape.set_velocity(self.velocity);
        app.shape.set_show_circle(self.show_circle);
        app.shape.set_show_polygram(self.show_polygram);

        app.view.settings.line_width = self.line_width;

        app.shape.palette.primary =
            egui::Color32::from_rgb(self.primary_r, self.primary_g, self.primary_b);
        app.shape.palette.secondary =
            egui::Color32::from_rgb(self.secondary_r, self.secondary_g, self.secondary_b);
        app.shape.palette.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_app() {
        let mut app = PolygramApp::with_defaults();
        app.params.side_count = 7;
        app.params.radius = 210.0;
        app.params.velocity = -40.0;
        app.shape.configure(7, 210.0);
        app.shape.set_velocity(-40.0);
        app.shape.set_show_circle(false);

        let settings = AppSettings::from_app(&app);
        let json = serde_json::to_string(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();

        let mut second = PolygramApp::with_defaults();
        restored.apply(&mut second);

        assert_eq!(second.shape.side_count(), 7);
        assert!((second.shape.radius() - 210.0).abs() < 0.001);
        assert!((second.shape.angular_velocity() + 0.4).abs() < 0.001);
        assert!(!second.shape.show_circle());
        assert!(second.shape.show_polygram());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{\"side_count\": 12}").unwrap();
        assert_eq!(settings.side_count, 12);
        assert!((settings.radius - DEFAULT_RADIUS).abs() < 0.001);
        assert!(settings.show_polygram);
    }
}
