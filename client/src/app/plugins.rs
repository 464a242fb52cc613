use bevy::app::PluginGroupBuilder;
use bevy::asset::AssetPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::render::pipelined_rendering::PipelinedRenderingPlugin;
use bevy::window::WindowResolution;
use bevy::winit::WinitSettings;

use crate::settings::{self, GameSettings};

const WINDOW_TITLE: &str = "Ashlander";
const LOG_FILTER: &str = "wgpu=error,naga=warn,client=debug";

pub fn build_bevy_plugins(startup_settings: &GameSettings) -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(create_window_settings(startup_settings)),
            ..Default::default()
        })
        .set(AssetPlugin {
            file_path: concat!(env!("CARGO_MANIFEST_DIR"), "/../assets").into(),
            ..Default::default()
        })
        .set(LogPlugin {
            level: Level::INFO,
            filter: LOG_FILTER.into(),
            ..Default::default()
        })
        .disable::<PipelinedRenderingPlugin>()
}

pub fn create_winit_settings(startup_settings: &GameSettings) -> WinitSettings {
    let focused_mode = startup_settings.graphics.fps_limit.to_update_mode();
    WinitSettings {
        focused_mode,
        unfocused_mode: focused_mode,
    }
}

fn create_window_settings(startup_settings: &GameSettings) -> Window {
    let graphics = &startup_settings.graphics;
    Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(graphics.resolution.width, graphics.resolution.height),
        resizable: true,
        mode: graphics.window_mode.to_bevy(),
        present_mode: settings::present_mode_for(graphics),
        ..Default::default()
    }
}
