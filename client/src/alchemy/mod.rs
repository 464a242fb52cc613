//! Alchemy panel: session state, request handling and the egui window.

mod session;
mod window;

pub use session::{AlchemySession, INGREDIENT_SLOTS, SelectOutcome, SlotView, item_view};

use crate::AppState;
use crate::data::GameRecords;
use crate::gameplay::runtime::pipeline::GameplayPipelineSet;
use crate::gui::{GuiMode, GuiModeStack};
use crate::inventory::{ContainerStore, ItemId, Player};
use crate::sound::PlaySound;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use records::EffectKey;

/// Input from the alchemy window.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AlchemyRequest {
    SelectIngredient(ItemId),
    RemoveIngredient(usize),
    Create,
    Cancel,
}

/// Emitted when the player asks to brew the previewed potion.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct BrewRequest {
    pub ingredients: Vec<ItemId>,
    pub effects: Vec<EffectKey>,
}

pub struct AlchemyPlugin;

impl Plugin for AlchemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AlchemySession>()
            .add_message::<AlchemyRequest>()
            .add_message::<BrewRequest>()
            .add_systems(
                Update,
                (open_session_when_alchemy_shown, handle_alchemy_requests)
                    .chain()
                    .in_set(GameplayPipelineSet::UiSync),
            )
            .add_systems(
                EguiPrimaryContextPass,
                window::draw_alchemy_window.run_if(in_state(AppState::Gameplay)),
            );
    }
}

pub fn open_session_when_alchemy_shown(
    modes: Res<GuiModeStack>,
    records: Res<GameRecords>,
    player: Query<&ContainerStore, With<Player>>,
    mut session: ResMut<AlchemySession>,
    mut was_shown: Local<bool>,
) {
    let shown = modes.contains(GuiMode::Alchemy);
    if shown && !*was_shown {
        if let Ok(store) = player.single() {
            session.open(store, &records);
            debug!(
                "Alchemy opened with {} ingredient stacks available",
                session.available_ingredients(store, &records).len()
            );
        }
    }
    *was_shown = shown;
}

pub fn handle_alchemy_requests(
    mut requests: MessageReader<AlchemyRequest>,
    mut brews: MessageWriter<BrewRequest>,
    mut sounds: MessageWriter<PlaySound>,
    mut modes: ResMut<GuiModeStack>,
    mut session: ResMut<AlchemySession>,
    records: Res<GameRecords>,
    player: Query<&ContainerStore, With<Player>>,
) {
    let Ok(store) = player.single() else {
        requests.clear();
        return;
    };

    for request in requests.read() {
        match request {
            AlchemyRequest::SelectIngredient(item) => {
                match session.select_ingredient(*item, store, &records) {
                    SelectOutcome::Added { sound, .. } => {
                        sounds.write(PlaySound::new(sound));
                    }
                    SelectOutcome::AlreadyAdded => {
                        debug!("Ingredient {item:?} already in a slot");
                    }
                    SelectOutcome::SlotsFull => {
                        debug!("No free ingredient slot for {item:?}");
                    }
                    SelectOutcome::Rejected => {
                        warn!("Item {item:?} cannot be used as an ingredient");
                    }
                }
            }
            AlchemyRequest::RemoveIngredient(slot) => {
                session.remove_ingredient(*slot, store, &records);
            }
            AlchemyRequest::Create => {
                if !session.can_create() {
                    debug!("Create requested without a valid recipe");
                    continue;
                }
                let brew = BrewRequest {
                    ingredients: session.items_to_ignore(),
                    effects: session.effects().to_vec(),
                };
                info!(
                    "Brew requested: {} ingredients, effects [{}]",
                    brew.ingredients.len(),
                    brew.effects
                        .iter()
                        .map(EffectKey::display_name)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                brews.write(brew);
            }
            AlchemyRequest::Cancel => {
                modes.pop();
                modes.pop();
                session.reset();
            }
        }
    }
}
