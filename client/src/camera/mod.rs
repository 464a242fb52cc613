//! Third/first person camera rig and the systems that drive it.

pub mod input;
pub mod rig;
pub mod systems;

pub use input::CameraInputState;
pub use rig::{CamState, CameraAttachment, CameraRig, VanityState};
pub use systems::RigCamera;

use crate::gameplay::runtime::pipeline::GameplayPipelineSet;
use crate::settings::SettingsResource;
use bevy::prelude::*;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        let rig = app
            .world()
            .get_resource::<SettingsResource>()
            .map(|settings| CameraRig::new(&settings.current.camera))
            .unwrap_or_default();

        app.insert_resource(rig)
            .init_resource::<CameraInputState>()
            .add_systems(Startup, systems::spawn_rig_camera)
            .add_systems(
                Update,
                (
                    input::track_vanity_idle,
                    input::rotate_rig_with_mouse,
                    input::zoom_rig_with_wheel,
                    input::handle_view_keys,
                )
                    .chain()
                    .in_set(GameplayPipelineSet::Input),
            )
            .add_systems(
                Update,
                (
                    systems::bind_rig_to_player,
                    systems::apply_rig_view_change,
                    systems::update_rig_camera,
                )
                    .chain()
                    .in_set(GameplayPipelineSet::Camera),
            );
    }
}
