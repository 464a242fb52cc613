pub mod factory;
pub mod skeleton;
pub mod types;
pub mod view_mode;

pub use factory::{CharacterFactory, MeshAssets};
pub use skeleton::find_named_descendant;
pub use types::{BodyPartMarker, BodySlot, CharacterRoot, HEAD_BONE_NAME};
pub use view_mode::{CharacterViewMode, apply_character_view_mode};
