//! Player inventory: item stacks referring to records by id.

use bevy::prelude::*;
use records::{ItemRecord, RecordStore};
use serde::Deserialize;

/// Identifies one stack in a container. Never reused within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    pub id: ItemId,
    pub record: String,
    pub count: u32,
    /// Stacks owned by someone else never merge with the player's own.
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Ingredient,
    Apparatus,
    Misc,
}

impl ItemKind {
    pub fn of(record: &ItemRecord<'_>) -> Self {
        match record {
            ItemRecord::Ingredient(_) => ItemKind::Ingredient,
            ItemRecord::Apparatus(_) => ItemKind::Apparatus,
            ItemRecord::Misc(_) => ItemKind::Misc,
        }
    }
}

/// One entry of the starting inventory in the records file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventorySeedEntry {
    pub record: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub owner: Option<String>,
}

fn default_count() -> u32 {
    1
}

/// Marker for the player character.
#[derive(Component)]
pub struct Player;

#[derive(Component, Debug, Clone, Default)]
pub struct ContainerStore {
    stacks: Vec<ItemStack>,
    next_id: u32,
}

impl ContainerStore {
    /// Builds a container from seed entries, skipping unknown records.
    pub fn from_seed(seed: &[InventorySeedEntry], records: &RecordStore) -> Self {
        let mut store = Self::default();
        for entry in seed {
            if records.item(&entry.record).is_none() {
                warn!("Skipping inventory entry with unknown record '{}'", entry.record);
                continue;
            }
            store.add(&entry.record, entry.count, entry.owner.clone());
        }
        store
    }

    /// Adds items, merging into a stack of the same record and owner.
    pub fn add(&mut self, record: &str, count: u32, owner: Option<String>) -> ItemId {
        if let Some(stack) = self
            .stacks
            .iter_mut()
            .find(|stack| stack.record == record && stack.owner == owner)
        {
            stack.count = stack.count.saturating_add(count);
            return stack.id;
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.stacks.push(ItemStack {
            id,
            record: record.to_string(),
            count,
            owner,
        });
        id
    }

    /// Removes up to `count` items; the stack disappears when emptied.
    /// Returns how many were removed.
    pub fn remove(&mut self, id: ItemId, count: u32) -> u32 {
        let Some(index) = self.stacks.iter().position(|stack| stack.id == id) else {
            return 0;
        };
        let stack = &mut self.stacks[index];
        let removed = count.min(stack.count);
        stack.count -= removed;
        if stack.count == 0 {
            self.stacks.remove(index);
        }
        removed
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemStack> {
        self.stacks.iter().find(|stack| stack.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Stacks whose record is of the given kind, with the record resolved.
    pub fn iter_kind<'a>(
        &'a self,
        records: &'a RecordStore,
        kind: ItemKind,
    ) -> impl Iterator<Item = (&'a ItemStack, ItemRecord<'a>)> + 'a {
        self.stacks.iter().filter_map(move |stack| {
            records
                .item(&stack.record)
                .filter(|record| ItemKind::of(record) == kind)
                .map(|record| (stack, record))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
