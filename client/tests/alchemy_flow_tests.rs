use bevy::prelude::*;

use client::alchemy::{AlchemyPlugin, AlchemyRequest, AlchemySession, BrewRequest};
use client::data::{GameRecords, RECORDS_FILE_PATH};
use client::gui::{GuiMode, GuiModeStack};
use client::inventory::{ContainerStore, ItemId, Player};
use client::sound::{PlaySound, SoundPlugin};
use records::{ApparatusKind, EffectKey};
use std::path::Path;

#[derive(Resource, Default)]
struct Collected {
    sounds: Vec<String>,
    brews: Vec<BrewRequest>,
}

fn collect_messages(
    mut sounds: MessageReader<PlaySound>,
    mut brews: MessageReader<BrewRequest>,
    mut collected: ResMut<Collected>,
) {
    collected
        .sounds
        .extend(sounds.read().map(|sound| sound.id.clone()));
    collected.brews.extend(brews.read().cloned());
}

fn alchemy_app() -> App {
    let records = GameRecords::load_from_path(Path::new(RECORDS_FILE_PATH)).unwrap();
    let store = ContainerStore::from_seed(&records.player_inventory, &records);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<GuiModeStack>()
        .init_resource::<Collected>()
        .insert_resource(records)
        .add_plugins((SoundPlugin, AlchemyPlugin))
        .add_systems(Last, collect_messages);
    app.world_mut().spawn((Player, store));
    app
}

fn stack_of(app: &mut App, record: &str, owner: Option<&str>) -> ItemId {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&ContainerStore, With<Player>>();
    let store = query.single(world).unwrap();
    store
        .iter()
        .find(|stack| stack.record == record && stack.owner.as_deref() == owner)
        .map(|stack| stack.id)
        .unwrap()
}

fn request(app: &mut App, requests: impl IntoIterator<Item = AlchemyRequest>) {
    for request in requests {
        app.world_mut().write_message(request);
    }
    app.update();
}

fn open_alchemy(app: &mut App) {
    let mut modes = app.world_mut().resource_mut::<GuiModeStack>();
    modes.push(GuiMode::Inventory);
    modes.push(GuiMode::Alchemy);
    app.update();
}

#[test]
fn opening_alchemy_picks_the_best_apparatus() {
    let mut app = alchemy_app();
    open_alchemy(&mut app);

    let journeyman_mortar = stack_of(&mut app, "apparatus_j_mortar_01", None);
    let journeyman_retort = stack_of(&mut app, "apparatus_j_retort_01", None);
    let session = app.world().resource::<AlchemySession>();

    assert_eq!(
        session.apparatus(ApparatusKind::MortarPestle),
        Some(journeyman_mortar)
    );
    assert_eq!(
        session.apparatus(ApparatusKind::Retort),
        Some(journeyman_retort)
    );
    assert!(session.apparatus(ApparatusKind::Alembic).is_some());
    assert!(session.items_to_ignore().is_empty());
}

#[test]
fn selecting_ingredients_previews_effects_and_creates() {
    let mut app = alchemy_app();
    open_alchemy(&mut app);

    let saltrice = stack_of(&mut app, "ingred_saltrice_01", None);
    let owned_saltrice = stack_of(&mut app, "ingred_saltrice_01", Some("arrille"));
    let wickwheat = stack_of(&mut app, "ingred_wickwheat_01", None);

    request(
        &mut app,
        [
            AlchemyRequest::SelectIngredient(saltrice),
            AlchemyRequest::SelectIngredient(owned_saltrice),
            AlchemyRequest::SelectIngredient(wickwheat),
        ],
    );

    let session = app.world().resource::<AlchemySession>();
    assert_eq!(session.items_to_ignore(), vec![saltrice, wickwheat]);
    assert_eq!(session.effects(), &[EffectKey::new(75, -1, -1)]);
    assert!(session.can_create());
    assert_eq!(
        app.world().resource::<Collected>().sounds,
        vec!["Item Ingredient Up".to_string(); 2]
    );

    request(&mut app, [AlchemyRequest::Create]);

    let brews = &app.world().resource::<Collected>().brews;
    assert_eq!(brews.len(), 1);
    assert_eq!(brews[0].ingredients, vec![saltrice, wickwheat]);
    assert_eq!(brews[0].effects, vec![EffectKey::new(75, -1, -1)]);
}

#[test]
fn slots_fill_up_and_removal_frees_one() {
    let mut app = alchemy_app();
    open_alchemy(&mut app);

    let ingredients: Vec<ItemId> = [
        "ingred_saltrice_01",
        "ingred_wickwheat_01",
        "ingred_marshmerrow_01",
        "ingred_comberry_01",
        "ingred_kwama_cuttle_01",
    ]
    .into_iter()
    .map(|record| stack_of(&mut app, record, None))
    .collect();

    request(
        &mut app,
        ingredients
            .iter()
            .map(|item| AlchemyRequest::SelectIngredient(*item)),
    );
    assert_eq!(
        app.world().resource::<AlchemySession>().items_to_ignore(),
        ingredients[..4].to_vec()
    );

    request(
        &mut app,
        [
            AlchemyRequest::RemoveIngredient(1),
            AlchemyRequest::SelectIngredient(ingredients[4]),
        ],
    );
    let slots = *app.world().resource::<AlchemySession>().ingredients();
    assert_eq!(slots[1], Some(ingredients[4]));
}

#[test]
fn cancel_closes_alchemy_and_the_inventory_below_it() {
    let mut app = alchemy_app();
    open_alchemy(&mut app);
    let saltrice = stack_of(&mut app, "ingred_saltrice_01", None);
    request(&mut app, [AlchemyRequest::SelectIngredient(saltrice)]);

    request(&mut app, [AlchemyRequest::Cancel]);

    assert!(!app.world().resource::<GuiModeStack>().is_gui_mode());
    assert!(
        app.world()
            .resource::<AlchemySession>()
            .items_to_ignore()
            .is_empty()
    );
}

#[test]
fn settings_opened_over_alchemy_keep_the_chosen_ingredients() {
    let mut app = alchemy_app();
    open_alchemy(&mut app);
    let saltrice = stack_of(&mut app, "ingred_saltrice_01", None);
    request(&mut app, [AlchemyRequest::SelectIngredient(saltrice)]);

    app.world_mut()
        .resource_mut::<GuiModeStack>()
        .push(GuiMode::Settings);
    app.update();
    app.world_mut().resource_mut::<GuiModeStack>().pop();
    app.update();

    assert_eq!(
        app.world().resource::<AlchemySession>().items_to_ignore(),
        vec![saltrice]
    );
}
