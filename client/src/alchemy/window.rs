use super::{AlchemyRequest, AlchemySession, SlotView, item_view};
use crate::data::GameRecords;
use crate::gui::{GuiMode, GuiModeStack, IconCache, item_slot};
use crate::inventory::{ContainerStore, ItemId, Player};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use records::ApparatusKind;

const SLOT_SIZE: f32 = 44.0;

struct DrawnSlot {
    view: SlotView,
    texture: Option<egui::TextureId>,
}

pub(super) fn draw_alchemy_window(
    mut contexts: EguiContexts,
    modes: Res<GuiModeStack>,
    session: Res<AlchemySession>,
    records: Res<GameRecords>,
    player: Query<&ContainerStore, With<Player>>,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconCache>,
    mut requests: MessageWriter<AlchemyRequest>,
) {
    if !modes.contains(GuiMode::Alchemy) {
        return;
    }
    let Ok(store) = player.single() else {
        return;
    };

    // Icons are registered before the context is borrowed.
    let mut resolve = |view: SlotView| DrawnSlot {
        texture: icons.texture(&view.icon_path, &mut contexts, &asset_server),
        view,
    };
    let apparatus: Vec<DrawnSlot> = session
        .apparatus_slot_views(store, &records)
        .into_iter()
        .map(&mut resolve)
        .collect();
    let ingredients: Vec<DrawnSlot> = session
        .ingredient_slot_views(store, &records)
        .into_iter()
        .map(&mut resolve)
        .collect();
    let available: Vec<(ItemId, DrawnSlot)> = session
        .available_ingredients(store, &records)
        .into_iter()
        .map(|item| (item, resolve(item_view(item, store, &records))))
        .collect();
    let effects: Vec<String> = session
        .effects()
        .iter()
        .map(|effect| effect.display_name())
        .collect();
    let can_create = session.can_create();

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Alchemy")
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (kind, slot) in ApparatusKind::ALL.iter().zip(&apparatus) {
                    let name = if slot.view.name.is_empty() {
                        kind.label()
                    } else {
                        slot.view.name.as_str()
                    };
                    item_slot(ui, slot.texture, name, "", SLOT_SIZE);
                }
            });

            ui.separator();
            ui.label("Ingredients");
            ui.horizontal(|ui| {
                for (index, slot) in ingredients.iter().enumerate() {
                    let response = item_slot(
                        ui,
                        slot.texture,
                        &slot.view.name,
                        &slot.view.count_label,
                        SLOT_SIZE,
                    );
                    if response.clicked() && slot.view.item.is_some() {
                        requests.write(AlchemyRequest::RemoveIngredient(index));
                    }
                }
            });

            ui.separator();
            ui.label("Created effects");
            if effects.is_empty() {
                ui.weak("None");
            }
            for effect in &effects {
                ui.label(effect);
            }

            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(160.0)
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (item, slot) in &available {
                            let response = item_slot(
                                ui,
                                slot.texture,
                                &slot.view.name,
                                &slot.view.count_label,
                                SLOT_SIZE,
                            );
                            if response.clicked() {
                                requests.write(AlchemyRequest::SelectIngredient(*item));
                            }
                        }
                    });
                });

            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    requests.write(AlchemyRequest::Cancel);
                }
                if ui
                    .add_enabled(can_create, egui::Button::new("Create"))
                    .clicked()
                {
                    requests.write(AlchemyRequest::Create);
                }
            });
        });
}
