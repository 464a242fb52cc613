use super::types::{BodyPartMarker, BodySlot, CharacterRoot, HEAD_BONE_NAME};
use super::view_mode::CharacterViewMode;
use bevy::prelude::*;

/// Mesh and material stores, absent in headless apps.
pub type MeshAssets<'a> = (&'a mut Assets<Mesh>, &'a mut Assets<StandardMaterial>);

pub struct CharacterFactory;

impl CharacterFactory {
    /// Spawns a character root with its body parts and a head bone.
    ///
    /// The head part hangs under the head bone so anything attached to the
    /// bone follows the head.
    pub fn spawn(
        commands: &mut Commands,
        mut assets: Option<MeshAssets<'_>>,
        position: Vec3,
    ) -> Entity {
        let root = commands
            .spawn((
                Transform::from_translation(position),
                Visibility::Visible,
                CharacterRoot,
                CharacterViewMode::Normal,
            ))
            .id();

        let head_height = BodySlot::Head.center_height();
        let head_bone = commands
            .spawn((
                Name::new(HEAD_BONE_NAME),
                Transform::from_xyz(0.0, head_height, 0.0),
                Visibility::Inherited,
                ChildOf(root),
            ))
            .id();

        for slot in BodySlot::ALL {
            let (parent, local_height) = if slot == BodySlot::Head {
                (head_bone, 0.0)
            } else {
                (root, slot.center_height())
            };

            let mut part = commands.spawn((
                BodyPartMarker { slot },
                Transform::from_xyz(0.0, local_height, 0.0),
                Visibility::Inherited,
                ChildOf(parent),
            ));

            if let Some((meshes, materials)) = assets.as_mut() {
                let extents = slot.extents();
                part.insert((
                    Mesh3d(meshes.add(Cuboid::new(extents.x, extents.y, extents.z))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: body_color(slot),
                        perceptual_roughness: 0.9,
                        ..default()
                    })),
                ));
            }
        }

        root
    }
}

fn body_color(slot: BodySlot) -> Color {
    match slot {
        BodySlot::Head | BodySlot::Hands => Color::srgb(0.76, 0.6, 0.48),
        BodySlot::Torso => Color::srgb(0.42, 0.33, 0.22),
        BodySlot::Legs => Color::srgb(0.3, 0.25, 0.2),
        BodySlot::Feet => Color::srgb(0.2, 0.16, 0.12),
    }
}
