use super::rig::{CameraAttachment, CameraRig};
use crate::character::{CharacterViewMode, HEAD_BONE_NAME, find_named_descendant};
use crate::gui::GuiModeStack;
use crate::inventory::Player;
use crate::settings::SettingsResource;
use bevy::audio::SpatialListener;
use bevy::camera::{PerspectiveProjection, Projection};
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

/// The camera driven by the [`CameraRig`].
#[derive(Component)]
pub struct RigCamera;

pub fn spawn_rig_camera(mut commands: Commands) {
    commands.spawn((
        RigCamera,
        Camera3d::default(),
        Tonemapping::None,
        Projection::Perspective(PerspectiveProjection {
            near: 10.0,
            far: 50_000.0,
            ..default()
        }),
        Transform::default(),
        SpatialListener::default(),
    ));
}

/// Tracks a newly spawned player and binds it as the rig's animation.
pub fn bind_rig_to_player(
    players: Query<Entity, Added<Player>>,
    mut rig: ResMut<CameraRig>,
    mut view_modes: Query<&mut CharacterViewMode>,
) {
    for player in &players {
        rig.attach_to(player);
        if let Some(previous) = rig.set_animation(player) {
            if let Ok(mut mode) = view_modes.get_mut(previous) {
                *mode = CharacterViewMode::Normal;
            }
        }
        debug!("Camera rig bound to player {player:?}");
    }
}

/// Pushes a pending view change to the bound character's view mode.
pub fn apply_rig_view_change(
    mut rig: ResMut<CameraRig>,
    mut view_modes: Query<&mut CharacterViewMode>,
) {
    if !rig.take_view_change() {
        return;
    }
    let Some(animation) = rig.animation() else {
        return;
    };
    let Ok(mut mode) = view_modes.get_mut(animation) else {
        return;
    };

    let wanted = if rig.is_first_person() {
        CharacterViewMode::FirstPerson
    } else {
        CharacterViewMode::Normal
    };
    if *mode != wanted {
        *mode = wanted;
    }
}

pub fn update_rig_camera(
    time: Res<Time>,
    modes: Option<Res<GuiModeStack>>,
    settings: Option<Res<SettingsResource>>,
    mut rig: ResMut<CameraRig>,
    bodies: Query<(&Transform, Option<&ChildOf>), Without<RigCamera>>,
    children_query: Query<&Children>,
    names: Query<&Name>,
    mut cameras: Query<&mut Transform, With<RigCamera>>,
) {
    let paused = modes.is_some_and(|modes| modes.is_gui_mode());

    rig.restore_camera_distance();
    rig.update(time.delta_secs(), paused);

    let Some(tracked) = rig.tracking() else {
        return;
    };
    let Ok((body, _)) = bodies.get(tracked) else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let pivot = match rig.attachment() {
        CameraAttachment::HeadBone => {
            let head = rig
                .animation()
                .and_then(|animation| {
                    find_named_descendant(animation, HEAD_BONE_NAME, &children_query, &names)
                })
                .and_then(|bone| position_below(bone, tracked, &bodies));
            match head {
                Some(head) => body.transform_point(head + rig.first_person_offset()),
                None => body.translation + Vec3::Y * rig.height(),
            }
        }
        CameraAttachment::Pivot => body.translation + Vec3::Y * rig.height(),
    };

    if !rig.is_first_person() {
        let clearance = settings
            .as_ref()
            .map_or(10.0, |settings| settings.current.camera.ground_clearance);
        if let Some(distance) = ground_limited_distance(&rig, pivot, body.rotation, clearance) {
            rig.set_camera_distance(distance, false, false);
        }
    }

    *camera = rig.camera_transform(pivot, body.rotation);
}

/// Position of `entity` in the local space of `root`, following the parent
/// chain through local transforms.
fn position_below(
    entity: Entity,
    root: Entity,
    transforms: &Query<(&Transform, Option<&ChildOf>), Without<RigCamera>>,
) -> Option<Vec3> {
    let mut point = Vec3::ZERO;
    let mut current = entity;
    while current != root {
        let (transform, parent) = transforms.get(current).ok()?;
        point = transform.transform_point(point);
        current = parent?.parent();
    }
    Some(point)
}

/// Shorter distance that keeps the camera `clearance` above the ground
/// plane, or `None` when the current offset already does.
fn ground_limited_distance(
    rig: &CameraRig,
    pivot: Vec3,
    body_rotation: Quat,
    clearance: f32,
) -> Option<f32> {
    let back = (body_rotation * rig.orientation()) * Vec3::Z;
    let camera_height = pivot.y + back.y * rig.offset();
    if camera_height >= clearance || back.y >= 0.0 {
        return None;
    }
    Some(((pivot.y - clearance) / -back.y).max(0.0))
}
