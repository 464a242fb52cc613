//! Loading scene: waits for the game records, then enters gameplay.

use crate::AppState;
use crate::data::GameRecords;
use crate::gameplay::controllers::scene_controller::{SceneController, transition_to};
use bevy::prelude::*;

pub struct LoadingScene;

impl SceneController for LoadingScene {
    const STATE: AppState = AppState::Loading;

    fn register(app: &mut App) {
        app.add_systems(Update, finish_loading.run_if(in_state(Self::STATE)));
    }
}

fn finish_loading(records: Option<Res<GameRecords>>, mut next_state: ResMut<NextState<AppState>>) {
    let Some(records) = records else {
        return;
    };
    info!(
        "Records ready: {} ingredients, {} apparatus, {} misc items",
        records.ingredients.len(),
        records.apparatus.len(),
        records.misc.len()
    );
    transition_to(&mut next_state, AppState::Gameplay);
}
