use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::f32::consts::FRAC_PI_6;
use std::time::Duration;

use client::camera::{CameraRig, CameraRigPlugin, RigCamera};
use client::character::{CharacterFactory, CharacterRoot, CharacterViewMode};
use client::gui::{GuiMode, GuiModeStack};
use client::inventory::Player;
use client::settings::{CameraSettings, GameSettings, SettingsResource};

const FRAME: Duration = Duration::from_millis(100);

fn finish_camera_app(
    mut app: App,
    spawn_player: impl FnOnce(&mut World) -> Entity,
) -> (App, Entity) {
    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<GuiModeStack>()
        .add_message::<MouseMotion>()
        .add_message::<MouseWheel>()
        .add_plugins(CameraRigPlugin);

    let player = spawn_player(app.world_mut());
    app.update();
    (app, player)
}

fn spawn_plain_player(world: &mut World) -> Entity {
    world
        .spawn((
            Player,
            CharacterRoot,
            CharacterViewMode::Normal,
            Transform::default(),
        ))
        .id()
}

fn camera_app() -> (App, Entity) {
    finish_camera_app(App::new(), spawn_plain_player)
}

/// Fixed 100 ms frames and the given camera tuning.
fn timed_camera_app(camera: CameraSettings) -> (App, Entity) {
    let mut app = App::new();
    app.insert_resource(SettingsResource::new(GameSettings {
        camera,
        ..default()
    }))
    .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    finish_camera_app(app, spawn_plain_player)
}

fn character_camera_app(position: Vec3) -> (App, Entity) {
    finish_camera_app(App::new(), |world| {
        let player = {
            let mut commands = world.commands();
            CharacterFactory::spawn(&mut commands, None, position)
        };
        world.flush();
        world.entity_mut(player).insert(Player);
        player
    })
}

fn keys(app: &mut App) -> Mut<'_, ButtonInput<KeyCode>> {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
}

fn camera_transform(app: &mut App) -> Transform {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<RigCamera>>();
    *query.single(world).unwrap()
}

fn tap_tab(app: &mut App) {
    keys(app).press(KeyCode::Tab);
    app.update();

    let mut input = keys(app);
    input.clear();
    input.release(KeyCode::Tab);
    app.update();
    keys(app).clear();
}

#[test]
fn rig_binds_player_in_first_person() {
    let (mut app, player) = camera_app();

    let rig = app.world().resource::<CameraRig>();
    assert_eq!(rig.tracking(), Some(player));
    assert_eq!(rig.animation(), Some(player));
    assert_eq!(
        app.world().get::<CharacterViewMode>(player),
        Some(&CharacterViewMode::FirstPerson)
    );

    let transform = camera_transform(&mut app);
    assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 128.0, 0.0), 1e-3));
}

#[test]
fn tab_tap_switches_to_third_person_behind_the_player() {
    let (mut app, player) = camera_app();

    tap_tab(&mut app);

    assert!(!app.world().resource::<CameraRig>().is_first_person());
    assert_eq!(
        app.world().get::<CharacterViewMode>(player),
        Some(&CharacterViewMode::Normal)
    );
    let transform = camera_transform(&mut app);
    assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 128.0, 300.0), 1e-3));
}

#[test]
fn mouse_turns_the_player_and_wheel_zooms() {
    let (mut app, player) = camera_app();
    tap_tab(&mut app);

    app.world_mut().write_message(MouseMotion {
        delta: Vec2::new(100.0, 0.0),
    });
    app.world_mut().write_message(MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y: 2.0,
        window: Entity::PLACEHOLDER,
    });
    app.update();

    let body = app.world().get::<Transform>(player).unwrap();
    assert!(body.rotation.abs_diff_eq(Quat::from_rotation_y(-0.25), 1e-4));
    assert!((app.world().resource::<CameraRig>().camera_distance() - 240.0).abs() < 1e-3);
}

#[test]
fn gui_mode_ignores_mouse_look() {
    let (mut app, player) = camera_app();
    app.world_mut()
        .resource_mut::<GuiModeStack>()
        .push(GuiMode::Inventory);

    app.world_mut().write_message(MouseMotion {
        delta: Vec2::new(100.0, -40.0),
    });
    app.update();

    let body = app.world().get::<Transform>(player).unwrap();
    assert_eq!(body.rotation, Quat::IDENTITY);
    assert_eq!(app.world().resource::<CameraRig>().pitch(), 0.0);
}

#[test]
fn first_person_camera_sits_on_the_head_bone() {
    let (mut app, _) = character_camera_app(Vec3::new(10.0, 0.0, -20.0));

    let transform = camera_transform(&mut app);
    assert!(transform.translation.abs_diff_eq(Vec3::new(10.0, 118.0, -20.0), 1e-3));
}

#[test]
fn sneaking_lowers_the_head_camera() {
    let (mut app, _) = character_camera_app(Vec3::ZERO);

    keys(&mut app).press(KeyCode::ControlLeft);
    app.update();
    keys(&mut app).clear();

    let transform = camera_transform(&mut app);
    assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 108.2, 0.0), 1e-3));
}

#[test]
fn releasing_sneak_inside_a_gui_restores_the_eye() {
    let (mut app, _) = character_camera_app(Vec3::ZERO);
    keys(&mut app).press(KeyCode::ControlLeft);
    app.update();
    keys(&mut app).clear();

    app.world_mut()
        .resource_mut::<GuiModeStack>()
        .push(GuiMode::Inventory);
    keys(&mut app).release(KeyCode::ControlLeft);
    app.update();
    keys(&mut app).clear();
    app.world_mut().resource_mut::<GuiModeStack>().pop();
    app.update();

    assert_eq!(
        app.world().resource::<CameraRig>().first_person_offset(),
        Vec3::ZERO
    );
    let transform = camera_transform(&mut app);
    assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 118.0, 0.0), 1e-3));
}

#[test]
fn holding_tab_shows_the_preview_until_release() {
    let (mut app, _) = timed_camera_app(CameraSettings::default());

    keys(&mut app).press(KeyCode::Tab);
    app.update();
    keys(&mut app).clear();
    for _ in 0..5 {
        app.update();
    }

    let rig = app.world().resource::<CameraRig>();
    assert!(rig.is_preview_mode());
    assert!((rig.offset() - 400.0).abs() < 1e-3);

    keys(&mut app).release(KeyCode::Tab);
    app.update();
    keys(&mut app).clear();

    let rig = app.world().resource::<CameraRig>();
    assert!(!rig.is_preview_mode());
    assert!(rig.is_first_person());
}

#[test]
fn idle_time_enters_vanity_and_a_key_tap_leaves_it() {
    let (mut app, _) = timed_camera_app(CameraSettings {
        vanity_delay_secs: 1.0,
        ..default()
    });

    for _ in 0..15 {
        app.update();
    }
    let rig = app.world().resource::<CameraRig>();
    assert!(rig.is_vanity_enabled());
    assert!(!rig.is_first_person());

    let mut input = keys(&mut app);
    input.press(KeyCode::KeyW);
    input.release(KeyCode::KeyW);
    app.update();
    keys(&mut app).clear();

    let rig = app.world().resource::<CameraRig>();
    assert!(!rig.is_vanity_enabled());
    assert!(rig.is_first_person());
}

#[test]
fn tab_tap_during_vanity_leaves_it_before_switching_view() {
    let (mut app, _) = timed_camera_app(CameraSettings {
        vanity_delay_secs: 1.0,
        ..default()
    });
    for _ in 0..15 {
        app.update();
    }
    assert!(app.world().resource::<CameraRig>().is_vanity_enabled());

    let mut input = keys(&mut app);
    input.press(KeyCode::Tab);
    input.release(KeyCode::Tab);
    app.update();
    keys(&mut app).clear();

    let rig = app.world().resource::<CameraRig>();
    assert!(!rig.is_vanity_enabled());
    assert!(!rig.is_first_person());
    assert!((rig.offset() - 300.0).abs() < 1e-3);
}

#[test]
fn ground_shortens_the_third_person_distance_for_one_frame() {
    let (mut app, _) = camera_app();
    tap_tab(&mut app);

    app.world_mut()
        .resource_mut::<CameraRig>()
        .rotate(FRAC_PI_6, 0.0, false);
    app.update();

    let transform = camera_transform(&mut app);
    assert!((transform.translation.y - 10.0).abs() < 1e-3);
    let rig = app.world().resource::<CameraRig>();
    assert!((rig.offset() - 236.0).abs() < 1e-3);
    assert!((rig.camera_distance() - 300.0).abs() < 1e-3);
}
