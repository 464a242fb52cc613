//! Game data records for the Ashlander client.
//!
//! This crate holds the item and magic effect records the client reads from
//! its data files, plus the pure arithmetic built on them:
//! ingredient effect previews, apparatus selection and inventory display
//! helpers. It has no engine dependency so it can be tested in isolation.

pub mod alchemy;
pub mod effects;
pub mod items;
pub mod paths;

pub use alchemy::{BestApparatus, best_apparatus, common_effects};
pub use effects::{Attribute, EffectKey, Skill, magic_effect_name};
pub use items::{
    ApparatusKind, ApparatusRecord, INGREDIENT_EFFECT_SLOTS, IngredientRecord, ItemRecord,
    MiscRecord, RecordStore,
};
pub use paths::{count_label, inventory_icon_path};
