use bevy::prelude::*;
use bevy::state::app::AppExtStates;
use bevy_egui::EguiPlugin;

use crate::AppState;
use crate::app::plugins::{build_bevy_plugins, create_winit_settings};
use crate::data::GameRecords;
use crate::gameplay::controllers::scene_controller::SceneControllerPlugin;
use crate::gameplay::runtime::registration::register_gameplay_runtime;
use crate::gameplay::scenes::gameplay::GameplayScene;
use crate::gameplay::scenes::loading::LoadingScene;
use crate::settings::{GameSettings, SettingsPlugin, SettingsResource};
use crate::ui::HudPlugin;
use crate::world::WorldPlugin;

pub fn configure_client_app(app: &mut App, startup_settings: &GameSettings, records: GameRecords) {
    app.insert_resource(SettingsResource::new(startup_settings.clone()))
        .insert_resource(records)
        .add_plugins(build_bevy_plugins(startup_settings))
        .insert_resource(create_winit_settings(startup_settings))
        .add_plugins(EguiPlugin::default())
        .add_plugins(WorldPlugin)
        .add_plugins(SettingsPlugin)
        .add_plugins(HudPlugin)
        .init_state::<AppState>()
        .add_plugins(SceneControllerPlugin::<LoadingScene>::default())
        .add_plugins(SceneControllerPlugin::<GameplayScene>::default());

    register_gameplay_runtime(app);
}
