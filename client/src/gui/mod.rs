//! GUI mode stack, HUD crosshair and the inventory window.

mod crosshair;
mod icons;
mod inventory_window;
mod modes;

pub use icons::{IconCache, item_slot};
pub use modes::{GuiMode, GuiModeStack, handle_gui_hotkeys};

use crate::AppState;
use crate::gameplay::runtime::pipeline::GameplayPipelineSet;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct GuiPlugin;

impl Plugin for GuiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GuiModeStack>()
            .init_resource::<IconCache>()
            .add_systems(
                Update,
                handle_gui_hotkeys.in_set(GameplayPipelineSet::Input),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    crosshair::draw_crosshair,
                    inventory_window::draw_inventory_window,
                )
                    .run_if(in_state(AppState::Gameplay)),
            );
    }
}
