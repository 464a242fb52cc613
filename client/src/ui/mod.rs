use crate::AppState;
use crate::gui::{GuiMode, GuiModeStack};
use crate::settings::{
    self, FpsLimitSetting, GameSettings, ResolutionSetting, SettingsResource, WindowModeSetting,
};
use bevy::prelude::*;
use bevy::state::prelude::OnEnter;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudUiState>()
            .add_systems(OnEnter(AppState::Gameplay), reset_gameplay_hud_state)
            .add_systems(
                EguiPrimaryContextPass,
                draw_hud_egui.run_if(in_state(AppState::Gameplay)),
            );
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum SettingsTab {
    #[default]
    Graphics,
    Audio,
    Camera,
}

#[derive(Resource, Default)]
struct HudUiState {
    settings_tab: SettingsTab,
    draft: GameSettings,
    /// Whether the settings window was shown last frame.
    settings_shown: bool,
}

fn reset_gameplay_hud_state(mut hud_state: ResMut<HudUiState>, settings: Res<SettingsResource>) {
    hud_state.settings_tab = SettingsTab::Graphics;
    hud_state.draft = settings.current.clone();
    hud_state.settings_shown = false;
}

fn draw_hud_egui(
    mut contexts: EguiContexts,
    mut hud_state: ResMut<HudUiState>,
    mut settings_resource: ResMut<SettingsResource>,
    mut modes: ResMut<GuiModeStack>,
    mut theme_initialized: Local<bool>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if !*theme_initialized {
        apply_hud_theme(ctx);
        *theme_initialized = true;
    }

    draw_bottom_bar(ctx, &mut modes);

    let settings_shown = modes.top() == Some(GuiMode::Settings);
    if settings_shown && !hud_state.settings_shown {
        hud_state.draft = settings_resource.current.clone();
        hud_state.settings_tab = SettingsTab::Graphics;
    }
    hud_state.settings_shown = settings_shown;

    if settings_shown {
        draw_settings_modal(&mut hud_state, &mut settings_resource, &mut modes, ctx);
    }
}

fn apply_hud_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(14);
    style.visuals.window_corner_radius = egui::CornerRadius::same(12);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(10);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
    ctx.set_style(style);
}

fn draw_bottom_bar(ctx: &egui::Context, modes: &mut GuiModeStack) {
    egui::TopBottomPanel::bottom("hud_bottom_bar")
        .resizable(false)
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal_centered(|ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128))
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let inventory_open = modes.contains(GuiMode::Inventory);
                            if ui
                                .add_sized(egui::vec2(96.0, 42.0), egui::Button::new("Inventory"))
                                .clicked()
                            {
                                if inventory_open {
                                    modes.clear();
                                } else {
                                    modes.push(GuiMode::Inventory);
                                }
                            }
                            if ui
                                .add_sized(egui::vec2(42.0, 42.0), egui::Button::new("Menu"))
                                .clicked()
                            {
                                modes.push(GuiMode::Settings);
                            }
                        });
                    });
            });
            ui.add_space(8.0);
        });
}

fn draw_settings_modal(
    hud_state: &mut HudUiState,
    settings_resource: &mut SettingsResource,
    modes: &mut GuiModeStack,
    ctx: &egui::Context,
) {
    let mut window_open = true;
    let mut should_apply = false;
    let mut should_close = false;

    egui::Window::new("Settings")
        .open(&mut window_open)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .collapsible(false)
        .resizable(false)
        .movable(false)
        .default_width(600.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut hud_state.settings_tab,
                    SettingsTab::Graphics,
                    "Graphics",
                );
                ui.selectable_value(&mut hud_state.settings_tab, SettingsTab::Audio, "Audio");
                ui.selectable_value(&mut hud_state.settings_tab, SettingsTab::Camera, "Camera");
            });

            ui.separator();

            match hud_state.settings_tab {
                SettingsTab::Graphics => draw_graphics_settings_tab(ui, &mut hud_state.draft),
                SettingsTab::Audio => draw_audio_settings_tab(ui, &mut hud_state.draft),
                SettingsTab::Camera => draw_camera_settings_tab(ui, &mut hud_state.draft),
            }

            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                should_apply = ui.button("Apply").clicked();
                should_close = ui.button("Close").clicked();
            });
        });

    if should_apply {
        settings_resource.current = hud_state.draft.clone();
        if let Err(error) = settings_resource.save_to_disk() {
            warn!(
                "Failed to save settings file '{}': {}",
                settings::SETTINGS_FILE_PATH,
                error
            );
        }
    }

    if should_close || !window_open {
        hud_state.draft = settings_resource.current.clone();
        if modes.top() == Some(GuiMode::Settings) {
            modes.pop();
        }
    }
}

fn draw_graphics_settings_tab(ui: &mut egui::Ui, draft: &mut GameSettings) {
    egui::ComboBox::from_label("Window mode")
        .selected_text(draft.graphics.window_mode.label())
        .show_ui(ui, |ui| {
            for option in WindowModeSetting::ALL {
                ui.selectable_value(&mut draft.graphics.window_mode, option, option.label());
            }
        });

    egui::ComboBox::from_label("Resolution")
        .selected_text(draft.graphics.resolution.label())
        .show_ui(ui, |ui| {
            for option in ResolutionSetting::presets() {
                ui.selectable_value(&mut draft.graphics.resolution, *option, option.label());
            }
        });

    egui::ComboBox::from_label("FPS limit")
        .selected_text(draft.graphics.fps_limit.label())
        .show_ui(ui, |ui| {
            for option in FpsLimitSetting::ALL {
                ui.selectable_value(&mut draft.graphics.fps_limit, option, option.label());
            }
        });

    ui.checkbox(&mut draft.graphics.vsync, "VSync");
}

fn draw_audio_settings_tab(ui: &mut egui::Ui, draft: &mut GameSettings) {
    ui.checkbox(&mut draft.audio.effects_enabled, "Sound effects");
    ui.add_enabled(
        draft.audio.effects_enabled,
        egui::Slider::new(&mut draft.audio.effects_volume, 0.0..=1.0).text("Effects volume"),
    );
}

fn draw_camera_settings_tab(ui: &mut egui::Ui, draft: &mut GameSettings) {
    let camera = &mut draft.camera;
    ui.add(
        egui::Slider::new(&mut camera.mouse_sensitivity, 0.0005..=0.01)
            .logarithmic(true)
            .text("Mouse sensitivity"),
    );
    ui.add(egui::Slider::new(&mut camera.zoom_step, 5.0..=100.0).text("Zoom step"));
    ui.add(
        egui::Slider::new(&mut camera.vanity_delay_secs, 5.0..=120.0)
            .suffix(" s")
            .text("Idle time before vanity camera"),
    );
    ui.add(
        egui::Slider::new(&mut camera.preview_hold_secs, 0.1..=1.0)
            .suffix(" s")
            .text("Hold time for preview"),
    );
    ui.weak("Distances and pivot height apply on next start.");
}
