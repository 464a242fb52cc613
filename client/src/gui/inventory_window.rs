use super::{GuiMode, GuiModeStack, IconCache, item_slot};
use crate::data::GameRecords;
use crate::inventory::{ContainerStore, ItemKind, Player};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use records::{count_label, inventory_icon_path};

const SLOT_SIZE: f32 = 48.0;

struct InventoryEntry {
    name: String,
    count_label: String,
    kind: ItemKind,
    texture: Option<egui::TextureId>,
}

pub fn draw_inventory_window(
    mut contexts: EguiContexts,
    mut modes: ResMut<GuiModeStack>,
    records: Res<GameRecords>,
    player: Query<&ContainerStore, With<Player>>,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconCache>,
) {
    if !modes.contains(GuiMode::Inventory) {
        return;
    }
    let Ok(store) = player.single() else {
        return;
    };

    let entries: Vec<InventoryEntry> = store
        .iter()
        .filter_map(|stack| {
            let record = records.item(&stack.record)?;
            Some(InventoryEntry {
                name: record.name().to_string(),
                count_label: count_label(stack.count),
                kind: ItemKind::of(&record),
                texture: icons.texture(
                    &inventory_icon_path(record.icon()),
                    &mut contexts,
                    &asset_server,
                ),
            })
        })
        .collect();

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut open_alchemy = false;
    egui::Window::new("Inventory")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            if entries.is_empty() {
                ui.weak("Empty");
            }
            ui.horizontal_wrapped(|ui| {
                for entry in &entries {
                    let response =
                        item_slot(ui, entry.texture, &entry.name, &entry.count_label, SLOT_SIZE);
                    if response.clicked() && entry.kind == ItemKind::Apparatus {
                        open_alchemy = true;
                    }
                }
            });
            ui.add_space(4.0);
            ui.weak("Use an apparatus to brew potions.");
        });

    if open_alchemy {
        modes.push(GuiMode::Alchemy);
    }
}
