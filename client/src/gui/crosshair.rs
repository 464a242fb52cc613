use super::GuiModeStack;
use crate::camera::CameraRig;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

const ARM_LENGTH: f32 = 6.0;

pub fn draw_crosshair(mut contexts: EguiContexts, modes: Res<GuiModeStack>, rig: Res<CameraRig>) {
    if !rig.crosshair_visible(modes.is_gui_mode()) {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let center = ctx.screen_rect().center();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("crosshair"),
    ));
    let stroke = egui::Stroke::new(1.5, egui::Color32::from_white_alpha(200));
    painter.line_segment(
        [
            center - egui::vec2(ARM_LENGTH, 0.0),
            center + egui::vec2(ARM_LENGTH, 0.0),
        ],
        stroke,
    );
    painter.line_segment(
        [
            center - egui::vec2(0.0, ARM_LENGTH),
            center + egui::vec2(0.0, ARM_LENGTH),
        ],
        stroke,
    );
}
