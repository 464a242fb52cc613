use super::rig::CameraRig;
use crate::gui::GuiModeStack;
use crate::inventory::Player;
use crate::settings::{CameraSettings, SettingsResource};
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Keyboard and idle bookkeeping for the rig's input systems.
#[derive(Resource, Debug, Default)]
pub struct CameraInputState {
    /// Seconds Tab has been held, while it is down.
    tab_held_secs: Option<f32>,
    preview_from_tab: bool,
    idle_secs: f32,
}

fn camera_settings(settings: &Option<Res<SettingsResource>>) -> CameraSettings {
    settings
        .as_ref()
        .map(|settings| settings.current.camera.clone())
        .unwrap_or_default()
}

fn in_gui_mode(modes: &Option<Res<GuiModeStack>>) -> bool {
    modes.as_ref().is_some_and(|modes| modes.is_gui_mode())
}

/// Mouse look. In normal mode the character turns and the rig only pitches;
/// in vanity and preview the rig orbits on its own.
pub fn rotate_rig_with_mouse(
    modes: Option<Res<GuiModeStack>>,
    settings: Option<Res<SettingsResource>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut rig: ResMut<CameraRig>,
    mut players: Query<&mut Transform, With<Player>>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }
    if in_gui_mode(&modes) || delta == Vec2::ZERO {
        return;
    }

    let sensitivity = camera_settings(&settings).mouse_sensitivity;
    let yaw = delta.x * sensitivity;
    let pitch = -delta.y * sensitivity;

    if rig.is_vanity_or_preview_mode_enabled() {
        rig.rotate(pitch, yaw, true);
        return;
    }

    rig.rotate(pitch, 0.0, true);
    if rig.free_look() {
        for mut body in &mut players {
            body.rotate_y(-yaw);
        }
    }
}

/// Wheel zoom. Changes made here are remembered.
pub fn zoom_rig_with_wheel(
    modes: Option<Res<GuiModeStack>>,
    settings: Option<Res<SettingsResource>>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut rig: ResMut<CameraRig>,
) {
    let mut zoom_units = 0.0;
    for wheel in mouse_wheel.read() {
        let unit_scale = match wheel.unit {
            MouseScrollUnit::Line => 1.0,
            MouseScrollUnit::Pixel => 0.03,
        };
        zoom_units += wheel.y * unit_scale;
    }
    if in_gui_mode(&modes) || zoom_units.abs() <= f32::EPSILON {
        return;
    }

    let step = camera_settings(&settings).zoom_step;
    rig.set_camera_distance(-zoom_units * step, true, true);
}

/// Tab tapped switches first/third person; Tab held shows the preview
/// camera until it is released. Ctrl lowers the first person eye.
pub fn handle_view_keys(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    modes: Option<Res<GuiModeStack>>,
    settings: Option<Res<SettingsResource>>,
    mut state: ResMut<CameraInputState>,
    mut rig: ResMut<CameraRig>,
) {
    let gui_mode = in_gui_mode(&modes);

    if keys.just_pressed(KeyCode::Tab) && !gui_mode {
        state.tab_held_secs = Some(0.0);
    }

    if let Some(held) = state.tab_held_secs {
        if keys.pressed(KeyCode::Tab) {
            let held = held + time.delta_secs();
            state.tab_held_secs = Some(held);
            if !state.preview_from_tab && held >= camera_settings(&settings).preview_hold_secs {
                rig.toggle_preview_mode(true);
                state.preview_from_tab = true;
            }
        } else {
            state.tab_held_secs = None;
            if state.preview_from_tab {
                rig.toggle_preview_mode(false);
                state.preview_from_tab = false;
            } else if !gui_mode {
                rig.toggle_view_mode();
            }
        }
    }

    // Releases count in GUI mode too, so the eye never stays lowered.
    let sneak_keys = [KeyCode::ControlLeft, KeyCode::ControlRight];
    if keys.any_just_released(sneak_keys) || (!gui_mode && keys.any_just_pressed(sneak_keys)) {
        rig.set_sneak_offset(keys.any_pressed(sneak_keys));
    }
}

/// Any input leaves vanity; enough idle time outside GUI mode enters it.
pub fn track_vanity_idle(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    modes: Option<Res<GuiModeStack>>,
    settings: Option<Res<SettingsResource>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut state: ResMut<CameraInputState>,
    mut rig: ResMut<CameraRig>,
) {
    let moved = mouse_motion.read().count() > 0;
    let scrolled = mouse_wheel.read().count() > 0;
    // Just pressed/released catch taps that start and end within a frame.
    let keyboard = keys.get_pressed().next().is_some()
        || keys.get_just_pressed().next().is_some()
        || keys.get_just_released().next().is_some();
    let buttons = mouse_buttons.get_pressed().next().is_some()
        || mouse_buttons.get_just_pressed().next().is_some()
        || mouse_buttons.get_just_released().next().is_some();
    let active = moved || scrolled || keyboard || buttons;

    if active || in_gui_mode(&modes) {
        state.idle_secs = 0.0;
        if rig.is_vanity_enabled() {
            rig.toggle_vanity_mode(false);
        }
        return;
    }

    state.idle_secs += time.delta_secs();
    if !rig.is_vanity_enabled() && state.idle_secs >= camera_settings(&settings).vanity_delay_secs {
        rig.toggle_vanity_mode(true);
    }
}
