use bevy::prelude::*;

/// Name of the skeleton bone carrying the first person camera.
pub const HEAD_BONE_NAME: &str = "Head";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodySlot {
    Head,
    Torso,
    Hands,
    Legs,
    Feet,
}

impl BodySlot {
    pub const ALL: [BodySlot; 5] = [
        BodySlot::Head,
        BodySlot::Torso,
        BodySlot::Hands,
        BodySlot::Legs,
        BodySlot::Feet,
    ];

    /// Part size in world units (width, height, depth).
    pub fn extents(&self) -> Vec3 {
        match self {
            BodySlot::Head => Vec3::new(18.0, 22.0, 18.0),
            BodySlot::Torso => Vec3::new(38.0, 48.0, 20.0),
            BodySlot::Hands => Vec3::new(56.0, 10.0, 10.0),
            BodySlot::Legs => Vec3::new(30.0, 44.0, 16.0),
            BodySlot::Feet => Vec3::new(30.0, 8.0, 26.0),
        }
    }

    /// Centre height of the part above the character origin.
    pub fn center_height(&self) -> f32 {
        match self {
            BodySlot::Head => 118.0,
            BodySlot::Torso => 80.0,
            BodySlot::Hands => 64.0,
            BodySlot::Legs => 30.0,
            BodySlot::Feet => 4.0,
        }
    }
}

/// Marker component for body part entities.
#[derive(Component)]
pub struct BodyPartMarker {
    pub slot: BodySlot,
}

/// Marker for the character root entity.
#[derive(Component)]
pub struct CharacterRoot;
