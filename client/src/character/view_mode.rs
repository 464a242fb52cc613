use super::types::{BodyPartMarker, BodySlot, CharacterRoot};
use bevy::prelude::*;

/// How a character's body is drawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterViewMode {
    #[default]
    Normal,
    /// Seen from inside the head: only the hands are drawn.
    FirstPerson,
}

impl CharacterViewMode {
    pub fn shows(self, slot: BodySlot) -> bool {
        match self {
            CharacterViewMode::Normal => true,
            CharacterViewMode::FirstPerson => slot == BodySlot::Hands,
        }
    }
}

/// Sync body part visibility with each character's view mode.
pub fn apply_character_view_mode(
    characters: Query<(Entity, &CharacterViewMode), (With<CharacterRoot>, Changed<CharacterViewMode>)>,
    children_query: Query<&Children>,
    mut parts: Query<(&BodyPartMarker, &mut Visibility)>,
) {
    for (root, mode) in &characters {
        let mut queue = vec![root];
        while let Some(entity) = queue.pop() {
            if let Ok((part, mut visibility)) = parts.get_mut(entity) {
                *visibility = if mode.shows(part.slot) {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
            if let Ok(children) = children_query.get(entity) {
                queue.extend(children.iter());
            }
        }
    }
}
