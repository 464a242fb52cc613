//! Alchemy arithmetic: effect preview and apparatus selection.

use crate::effects::EffectKey;
use crate::items::{ApparatusKind, ApparatusRecord, IngredientRecord};

/// Effects shared by at least two of the given ingredients.
///
/// Each effect is listed once, in the order it first appears across the
/// ingredients' effect slots.
pub fn common_effects<'a, I>(ingredients: I) -> Vec<EffectKey>
where
    I: IntoIterator<Item = &'a IngredientRecord>,
{
    let all: Vec<EffectKey> = ingredients
        .into_iter()
        .flat_map(|ingredient| ingredient.effect_keys())
        .collect();

    let mut shared: Vec<EffectKey> = Vec::new();
    for (index, effect) in all.iter().enumerate() {
        if shared.contains(effect) {
            continue;
        }
        if all[index + 1..].contains(effect) {
            shared.push(*effect);
        }
    }
    shared
}

/// Best apparatus of each kind, indexed by [`ApparatusKind::slot_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestApparatus<T> {
    slots: [Option<(T, f32)>; 4],
}

impl<T> Default for BestApparatus<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<T> BestApparatus<T> {
    pub fn get(&self, kind: ApparatusKind) -> Option<&T> {
        self.slots[kind.slot_index()]
            .as_ref()
            .map(|(handle, _)| handle)
    }

    pub fn quality(&self, kind: ApparatusKind) -> Option<f32> {
        self.slots[kind.slot_index()]
            .as_ref()
            .map(|(_, quality)| *quality)
    }

    pub fn into_slots(self) -> [Option<T>; 4] {
        self.slots.map(|slot| slot.map(|(handle, _)| handle))
    }
}

/// Picks the highest quality apparatus of every kind.
///
/// `T` is whatever handle the caller uses for an item. Only a strictly
/// higher quality replaces the current pick, so the earlier candidate wins
/// a tie.
pub fn best_apparatus<'a, T, I>(candidates: I) -> BestApparatus<T>
where
    I: IntoIterator<Item = (T, &'a ApparatusRecord)>,
{
    let mut best = BestApparatus::default();
    for (handle, record) in candidates {
        let slot = &mut best.slots[record.kind.slot_index()];
        let replace = match slot {
            Some((_, quality)) => record.quality > *quality,
            None => true,
        };
        if replace {
            *slot = Some((handle, record.quality));
        }
    }
    best
}
