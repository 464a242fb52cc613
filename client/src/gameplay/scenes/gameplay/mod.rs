//! Gameplay scene: world, player character with inventory, camera target.

use crate::AppState;
use crate::alchemy::AlchemySession;
use crate::camera::CameraRig;
use crate::character::{CharacterFactory, MeshAssets};
use crate::data::GameRecords;
use crate::gameplay::controllers::scene_controller::SceneController;
use crate::gui::GuiModeStack;
use crate::inventory::{ContainerStore, Player};
use crate::world::spawn_world;
use bevy::prelude::*;
use bevy::state::prelude::{OnEnter, OnExit};

pub struct GameplayScene;

impl SceneController for GameplayScene {
    const STATE: AppState = AppState::Gameplay;

    fn register(app: &mut App) {
        app.add_systems(OnEnter(Self::STATE), setup_gameplay_scene)
            .add_systems(OnExit(Self::STATE), cleanup_gameplay_scene);
    }
}

/// Everything spawned by the gameplay scene.
#[derive(Component)]
pub struct GameplaySceneEntity;

fn mesh_assets<'a>(
    meshes: &'a mut Option<ResMut<Assets<Mesh>>>,
    materials: &'a mut Option<ResMut<Assets<StandardMaterial>>>,
) -> Option<MeshAssets<'a>> {
    Some((meshes.as_deref_mut()?, materials.as_deref_mut()?))
}

fn setup_gameplay_scene(
    mut commands: Commands,
    records: Option<Res<GameRecords>>,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    info!("Setting up gameplay scene");

    let world = spawn_world(&mut commands, mesh_assets(&mut meshes, &mut materials));
    commands.entity(world).insert(GameplaySceneEntity);

    let inventory = match records.as_deref() {
        Some(records) => ContainerStore::from_seed(&records.player_inventory, records),
        None => {
            warn!("No records loaded; the player starts with an empty inventory");
            ContainerStore::default()
        }
    };

    let player = CharacterFactory::spawn(
        &mut commands,
        mesh_assets(&mut meshes, &mut materials),
        Vec3::ZERO,
    );
    commands
        .entity(player)
        .insert((Name::new("Player"), Player, inventory, GameplaySceneEntity));
}

fn cleanup_gameplay_scene(
    mut commands: Commands,
    query: Query<Entity, With<GameplaySceneEntity>>,
    modes: Option<ResMut<GuiModeStack>>,
    session: Option<ResMut<AlchemySession>>,
    rig: Option<ResMut<CameraRig>>,
) {
    info!("Cleaning up gameplay scene");

    for entity in &query {
        commands.entity(entity).try_despawn();
    }

    if let Some(mut modes) = modes {
        modes.clear();
    }
    if let Some(mut session) = session {
        session.reset();
    }
    if let Some(mut rig) = rig {
        rig.reset();
    }
}
