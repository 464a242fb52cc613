//! State of the alchemy panel: chosen ingredients, best apparatus and the
//! resulting effect preview.

use crate::inventory::{ContainerStore, ItemId, ItemKind};
use bevy::prelude::*;
use records::{
    ApparatusKind, EffectKey, ItemRecord, RecordStore, best_apparatus, common_effects,
    count_label, inventory_icon_path,
};

pub const INGREDIENT_SLOTS: usize = 4;

/// Result of offering an item to the ingredient slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Placed in `slot`; `sound` is the item's pick-up sound id.
    Added { slot: usize, sound: String },
    /// An ingredient with the same name already sits in a slot.
    AlreadyAdded,
    /// All slots are taken.
    SlotsFull,
    /// Unknown item or not an ingredient.
    Rejected,
}

/// What a slot widget shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotView {
    pub item: Option<ItemId>,
    pub name: String,
    pub icon_path: String,
    pub count_label: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct AlchemySession {
    ingredients: [Option<ItemId>; INGREDIENT_SLOTS],
    apparatus: [Option<ItemId>; 4],
    effects: Vec<EffectKey>,
}

impl AlchemySession {
    /// Starts a session with empty ingredient slots and the best apparatus
    /// of each kind from the container.
    pub fn open(&mut self, store: &ContainerStore, records: &RecordStore) {
        self.ingredients = [None; INGREDIENT_SLOTS];

        let candidates = store
            .iter_kind(records, ItemKind::Apparatus)
            .filter_map(|(stack, record)| match record {
                ItemRecord::Apparatus(apparatus) => Some((stack.id, apparatus)),
                _ => None,
            });
        self.apparatus = best_apparatus(candidates).into_slots();

        self.update_effects(store, records);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_ingredient(
        &mut self,
        item: ItemId,
        store: &ContainerStore,
        records: &RecordStore,
    ) -> SelectOutcome {
        let Some(record) = store
            .get(item)
            .and_then(|stack| records.item(&stack.record))
        else {
            return SelectOutcome::Rejected;
        };
        if !matches!(record, ItemRecord::Ingredient(_)) {
            return SelectOutcome::Rejected;
        }

        // Equal ingredients may sit in separate stacks (different owners),
        // so compare by name rather than by stack.
        let name = record.name();
        let already_added = self
            .ingredients
            .iter()
            .flatten()
            .filter_map(|id| store.get(*id))
            .filter_map(|stack| records.item(&stack.record))
            .any(|other| other.name() == name);
        if already_added {
            return SelectOutcome::AlreadyAdded;
        }

        let Some(slot) = self.ingredients.iter().position(Option::is_none) else {
            return SelectOutcome::SlotsFull;
        };
        self.ingredients[slot] = Some(item);
        self.update_effects(store, records);

        SelectOutcome::Added {
            slot,
            sound: record.up_sound_id().to_string(),
        }
    }

    /// Empties a slot. Returns the item that was in it.
    pub fn remove_ingredient(
        &mut self,
        slot: usize,
        store: &ContainerStore,
        records: &RecordStore,
    ) -> Option<ItemId> {
        let removed = self.ingredients.get_mut(slot)?.take()?;
        self.update_effects(store, records);
        Some(removed)
    }

    /// Items shown in slots, hidden from the available ingredients list.
    pub fn items_to_ignore(&self) -> Vec<ItemId> {
        self.ingredients.iter().flatten().copied().collect()
    }

    pub fn available_ingredients(
        &self,
        store: &ContainerStore,
        records: &RecordStore,
    ) -> Vec<ItemId> {
        let ignore = self.items_to_ignore();
        store
            .iter_kind(records, ItemKind::Ingredient)
            .map(|(stack, _)| stack.id)
            .filter(|id| !ignore.contains(id))
            .collect()
    }

    pub fn ingredients(&self) -> &[Option<ItemId>; INGREDIENT_SLOTS] {
        &self.ingredients
    }

    pub fn apparatus(&self, kind: ApparatusKind) -> Option<ItemId> {
        self.apparatus[kind.slot_index()]
    }

    pub fn effects(&self) -> &[EffectKey] {
        &self.effects
    }

    /// A potion needs a mortar and pestle, two ingredients and at least one
    /// shared effect.
    pub fn can_create(&self) -> bool {
        self.apparatus(ApparatusKind::MortarPestle).is_some()
            && self.items_to_ignore().len() >= 2
            && !self.effects.is_empty()
    }

    /// Recomputes the effect preview from the occupied slots.
    ///
    /// Slots whose stack left the container are emptied first.
    pub fn update_effects(&mut self, store: &ContainerStore, records: &RecordStore) {
        for slot in &mut self.ingredients {
            if slot.is_some_and(|id| store.get(id).is_none()) {
                *slot = None;
            }
        }

        let ingredients: Vec<_> = self
            .ingredients
            .iter()
            .flatten()
            .filter_map(|id| store.get(*id))
            .filter_map(|stack| records.ingredient(&stack.record))
            .collect();
        self.effects = common_effects(ingredients);
    }

    pub fn ingredient_slot_views(
        &self,
        store: &ContainerStore,
        records: &RecordStore,
    ) -> [SlotView; INGREDIENT_SLOTS] {
        self.ingredients
            .map(|slot| slot_view(slot, store, records, true))
    }

    pub fn apparatus_slot_views(
        &self,
        store: &ContainerStore,
        records: &RecordStore,
    ) -> [SlotView; 4] {
        self.apparatus
            .map(|slot| slot_view(slot, store, records, false))
    }
}

/// View of any stack of the container, with its count label.
pub fn item_view(item: ItemId, store: &ContainerStore, records: &RecordStore) -> SlotView {
    slot_view(Some(item), store, records, true)
}

fn slot_view(
    slot: Option<ItemId>,
    store: &ContainerStore,
    records: &RecordStore,
    with_count: bool,
) -> SlotView {
    let Some((id, stack)) = slot.and_then(|id| store.get(id).map(|stack| (id, stack))) else {
        return SlotView::default();
    };
    let Some(record) = records.item(&stack.record) else {
        return SlotView::default();
    };

    SlotView {
        item: Some(id),
        name: record.name().to_string(),
        icon_path: inventory_icon_path(record.icon()),
        count_label: if with_count {
            count_label(stack.count)
        } else {
            String::new()
        },
    }
}
