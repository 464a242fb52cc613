use crate::alchemy::AlchemyPlugin;
use crate::camera::CameraRigPlugin;
use crate::character::apply_character_view_mode;
use crate::gameplay::runtime::pipeline::GameplayPipelineSet;
use crate::gui::GuiPlugin;
use crate::sound::SoundPlugin;
use bevy::prelude::*;

fn runtime_state_is_active(state: Res<State<crate::AppState>>) -> bool {
    matches!(state.get(), crate::AppState::Gameplay)
}

/// Gameplay plugins plus the frame order they run in:
/// input, then world simulation, then the camera, then UI sync.
pub fn register_gameplay_runtime(app: &mut App) {
    app.add_plugins((SoundPlugin, GuiPlugin, CameraRigPlugin, AlchemyPlugin))
        .configure_sets(
            Update,
            (
                GameplayPipelineSet::Input,
                GameplayPipelineSet::WorldSimulate,
                GameplayPipelineSet::Camera,
                GameplayPipelineSet::UiSync,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                GameplayPipelineSet::Input.run_if(runtime_state_is_active),
                GameplayPipelineSet::WorldSimulate.run_if(runtime_state_is_active),
                GameplayPipelineSet::Camera.run_if(runtime_state_is_active),
                GameplayPipelineSet::UiSync.run_if(runtime_state_is_active),
            ),
        )
        .add_systems(
            Update,
            apply_character_view_mode.in_set(GameplayPipelineSet::WorldSimulate),
        );
}
