//! Item records used by the alchemy panel and the inventory.

use crate::effects::EffectKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Effect slots per ingredient record.
pub const INGREDIENT_EFFECT_SLOTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "unused_slots")]
    pub effects: [i32; INGREDIENT_EFFECT_SLOTS],
    #[serde(default = "unused_slots")]
    pub attributes: [i32; INGREDIENT_EFFECT_SLOTS],
    #[serde(default = "unused_slots")]
    pub skills: [i32; INGREDIENT_EFFECT_SLOTS],
}

fn unused_slots() -> [i32; INGREDIENT_EFFECT_SLOTS] {
    [-1; INGREDIENT_EFFECT_SLOTS]
}

impl IngredientRecord {
    /// Effects of the used slots, in slot order.
    pub fn effect_keys(&self) -> impl Iterator<Item = EffectKey> + '_ {
        (0..INGREDIENT_EFFECT_SLOTS)
            .filter(|&i| self.effects[i] >= 0)
            .map(|i| EffectKey::new(self.effects[i], self.attributes[i], self.skills[i]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApparatusKind {
    MortarPestle,
    Alembic,
    Calcinator,
    Retort,
}

impl ApparatusKind {
    /// Slot order of the alchemy panel.
    pub const ALL: [ApparatusKind; 4] = [
        ApparatusKind::MortarPestle,
        ApparatusKind::Alembic,
        ApparatusKind::Calcinator,
        ApparatusKind::Retort,
    ];

    pub fn slot_index(self) -> usize {
        match self {
            ApparatusKind::MortarPestle => 0,
            ApparatusKind::Alembic => 1,
            ApparatusKind::Calcinator => 2,
            ApparatusKind::Retort => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApparatusKind::MortarPestle => "Mortar and Pestle",
            ApparatusKind::Alembic => "Alembic",
            ApparatusKind::Calcinator => "Calcinator",
            ApparatusKind::Retort => "Retort",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApparatusRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub kind: ApparatusKind,
    pub quality: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Borrowed view over any item record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemRecord<'a> {
    Ingredient(&'a IngredientRecord),
    Apparatus(&'a ApparatusRecord),
    Misc(&'a MiscRecord),
}

impl<'a> ItemRecord<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            ItemRecord::Ingredient(record) => &record.id,
            ItemRecord::Apparatus(record) => &record.id,
            ItemRecord::Misc(record) => &record.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            ItemRecord::Ingredient(record) => &record.name,
            ItemRecord::Apparatus(record) => &record.name,
            ItemRecord::Misc(record) => &record.name,
        }
    }

    pub fn icon(&self) -> &'a str {
        match self {
            ItemRecord::Ingredient(record) => &record.icon,
            ItemRecord::Apparatus(record) => &record.icon,
            ItemRecord::Misc(record) => &record.icon,
        }
    }

    /// Sound played when the item is picked up or placed in a slot.
    pub fn up_sound_id(&self) -> &'static str {
        match self {
            ItemRecord::Ingredient(_) => "Item Ingredient Up",
            ItemRecord::Apparatus(_) => "Item Apparatus Up",
            ItemRecord::Misc(_) => "Item Misc Up",
        }
    }
}

/// All item and sound records known to the client, keyed by record id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordStore {
    pub ingredients: Vec<IngredientRecord>,
    pub apparatus: Vec<ApparatusRecord>,
    pub misc: Vec<MiscRecord>,
    /// Sound id to sound file path.
    pub sounds: HashMap<String, String>,
}

impl RecordStore {
    pub fn ingredient(&self, id: &str) -> Option<&IngredientRecord> {
        self.ingredients.iter().find(|record| record.id == id)
    }

    pub fn apparatus(&self, id: &str) -> Option<&ApparatusRecord> {
        self.apparatus.iter().find(|record| record.id == id)
    }

    pub fn item(&self, id: &str) -> Option<ItemRecord<'_>> {
        if let Some(record) = self.ingredient(id) {
            return Some(ItemRecord::Ingredient(record));
        }
        if let Some(record) = self.apparatus(id) {
            return Some(ItemRecord::Apparatus(record));
        }
        self.misc
            .iter()
            .find(|record| record.id == id)
            .map(ItemRecord::Misc)
    }

    pub fn sound_path(&self, sound_id: &str) -> Option<&str> {
        self.sounds.get(sound_id).map(String::as_str)
    }
}
