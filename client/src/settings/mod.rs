use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, PrimaryWindow, WindowMode, WindowResolution};
use bevy::winit::{UpdateMode, WinitSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const SETTINGS_FILE_PATH: &str = "./settings.yaml";

const RESOLUTION_PRESETS: [ResolutionSetting; 4] = [
    ResolutionSetting {
        width: 1280,
        height: 720,
    },
    ResolutionSetting {
        width: 1600,
        height: 900,
    },
    ResolutionSetting {
        width: 1920,
        height: 1080,
    },
    ResolutionSetting {
        width: 2560,
        height: 1440,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowModeSetting {
    Windowed,
    Fullscreen,
}

impl Default for WindowModeSetting {
    fn default() -> Self {
        Self::Windowed
    }
}

impl WindowModeSetting {
    pub const ALL: [Self; 2] = [Self::Windowed, Self::Fullscreen];

    pub fn to_bevy(self) -> WindowMode {
        match self {
            Self::Windowed => WindowMode::Windowed,
            Self::Fullscreen => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Windowed => "Windowed",
            Self::Fullscreen => "Fullscreen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FpsLimitSetting {
    Default60,
    Monitor,
    Unlimited,
}

impl Default for FpsLimitSetting {
    fn default() -> Self {
        Self::Default60
    }
}

impl FpsLimitSetting {
    pub const ALL: [Self; 3] = [Self::Default60, Self::Monitor, Self::Unlimited];

    pub fn to_update_mode(self) -> UpdateMode {
        match self {
            Self::Default60 => UpdateMode::reactive(Duration::from_secs_f64(1.0 / 60.0)),
            Self::Monitor | Self::Unlimited => UpdateMode::Continuous,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default60 => "60 FPS",
            Self::Monitor => "Monitor",
            Self::Unlimited => "Unlimited",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionSetting {
    pub width: u32,
    pub height: u32,
}

impl Default for ResolutionSetting {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl ResolutionSetting {
    pub fn presets() -> &'static [Self] {
        &RESOLUTION_PRESETS
    }

    pub fn label(self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSettings {
    pub window_mode: WindowModeSetting,
    pub resolution: ResolutionSetting,
    pub vsync: bool,
    pub fps_limit: FpsLimitSetting,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            window_mode: WindowModeSetting::Windowed,
            resolution: ResolutionSetting::default(),
            vsync: true,
            fps_limit: FpsLimitSetting::Default60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub effects_enabled: bool,
    pub effects_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            effects_enabled: true,
            effects_volume: 1.0,
        }
    }
}

/// Tuning of the player camera rig, in world units and seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Pivot height above the tracked character's origin.
    pub height: f32,
    /// Third person distance used when leaving first person.
    pub default_distance: f32,
    /// Closest persistent zoom.
    pub nearest: f32,
    /// Furthest zoom of any kind.
    pub furthest: f32,
    /// Starting offset of the preview and vanity camera.
    pub preview_offset: f32,
    pub vanity_rotation_deg_per_sec: f32,
    /// Idle time before the vanity camera takes over.
    pub vanity_delay_secs: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Distance per wheel line.
    pub zoom_step: f32,
    /// Lowest height above the ground the camera may sink to.
    pub ground_clearance: f32,
    /// How long Tab must be held to enter preview instead of switching view.
    pub preview_hold_secs: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            height: 128.0,
            default_distance: 300.0,
            nearest: 30.0,
            furthest: 800.0,
            preview_offset: 400.0,
            vanity_rotation_deg_per_sec: 3.0,
            vanity_delay_secs: 30.0,
            mouse_sensitivity: 0.0025,
            zoom_step: 30.0,
            ground_clearance: 10.0,
            preview_hold_secs: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct GameSettings {
    pub graphics: GraphicsSettings,
    pub audio: AudioSettings,
    pub camera: CameraSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            graphics: GraphicsSettings::default(),
            audio: AudioSettings::default(),
            camera: CameraSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsIoError {
    #[error("failed to read settings file: {0}")]
    Read(std::io::Error),
    #[error("failed to write settings file: {0}")]
    Write(std::io::Error),
    #[error("failed to decode YAML settings: {0}")]
    Deserialize(serde_yaml::Error),
    #[error("failed to encode YAML settings: {0}")]
    Serialize(serde_yaml::Error),
}

#[derive(Resource, Clone)]
pub struct SettingsResource {
    pub current: GameSettings,
    path: PathBuf,
}

impl SettingsResource {
    pub fn new(current: GameSettings) -> Self {
        Self {
            current,
            path: PathBuf::from(SETTINGS_FILE_PATH),
        }
    }

    pub fn save_to_disk(&self) -> Result<(), SettingsIoError> {
        write_settings_to_path(&self.current, &self.path)
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_runtime_settings);
    }
}

pub fn load_settings_or_default() -> GameSettings {
    let path = Path::new(SETTINGS_FILE_PATH);

    if !path.exists() {
        return GameSettings::default();
    }

    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!(
                "Failed to load settings from '{}': {}. Falling back to defaults.",
                SETTINGS_FILE_PATH, error
            );
            GameSettings::default()
        }
    }
}

pub fn ensure_settings_file_exists(settings: &GameSettings) -> Result<(), SettingsIoError> {
    let path = Path::new(SETTINGS_FILE_PATH);
    if path.exists() {
        return Ok(());
    }

    write_settings_to_path(settings, path)
}

pub fn present_mode_for(graphics: &GraphicsSettings) -> PresentMode {
    if matches!(graphics.fps_limit, FpsLimitSetting::Unlimited) {
        PresentMode::AutoNoVsync
    } else if graphics.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    }
}

fn load_settings_from_path(path: &Path) -> Result<GameSettings, SettingsIoError> {
    let raw = fs::read_to_string(path).map_err(SettingsIoError::Read)?;
    serde_yaml::from_str::<GameSettings>(&raw).map_err(SettingsIoError::Deserialize)
}

fn write_settings_to_path(settings: &GameSettings, path: &Path) -> Result<(), SettingsIoError> {
    let encoded = serde_yaml::to_string(settings).map_err(SettingsIoError::Serialize)?;
    fs::write(path, encoded).map_err(SettingsIoError::Write)
}

fn apply_runtime_settings(
    settings: Res<SettingsResource>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    winit_settings: Option<ResMut<WinitSettings>>,
    mut last_applied: Local<Option<GameSettings>>,
) {
    if last_applied.as_ref() == Some(&settings.current) {
        return;
    }

    if let Ok(mut window) = windows.single_mut() {
        let target_mode = settings.current.graphics.window_mode.to_bevy();
        window.mode = target_mode;

        // In borderless fullscreen, forcing a custom logical resolution can
        // produce a top-left viewport offset. Keep monitor/native size there.
        if matches!(target_mode, WindowMode::Windowed) {
            window.resolution = WindowResolution::new(
                settings.current.graphics.resolution.width,
                settings.current.graphics.resolution.height,
            );
        }

        window.present_mode = present_mode_for(&settings.current.graphics);
    }

    if let Some(mut winit_settings) = winit_settings {
        let update_mode = settings.current.graphics.fps_limit.to_update_mode();
        winit_settings.focused_mode = update_mode;
        winit_settings.unfocused_mode = update_mode;
    }

    *last_applied = Some(settings.current.clone());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_fields() {
        let raw = "camera:\n  furthest: 1200.0\naudio:\n  effects_enabled: false\n";
        let settings: GameSettings = serde_yaml::from_str(raw).unwrap();

        assert_eq!(settings.camera.furthest, 1200.0);
        assert_eq!(settings.camera.nearest, 30.0);
        assert_eq!(settings.camera.height, 128.0);
        assert!(!settings.audio.effects_enabled);
        assert_eq!(settings.graphics, GraphicsSettings::default());
    }

    #[test]
    fn settings_survive_a_yaml_write_and_read() {
        let path = std::env::temp_dir().join(format!(
            "ashlander-settings-test-{}.yaml",
            std::process::id()
        ));
        let mut settings = GameSettings::default();
        settings.camera.vanity_delay_secs = 12.5;
        settings.graphics.fps_limit = FpsLimitSetting::Unlimited;

        write_settings_to_path(&settings, &path).unwrap();
        let loaded = load_settings_from_path(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn unlimited_fps_disables_vsync() {
        let graphics = GraphicsSettings {
            fps_limit: FpsLimitSetting::Unlimited,
            vsync: true,
            ..Default::default()
        };
        assert_eq!(present_mode_for(&graphics), PresentMode::AutoNoVsync);
    }
}
