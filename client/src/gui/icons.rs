use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiTextureHandle, egui};
use std::collections::HashMap;

/// Item icons registered with egui, keyed by asset path.
#[derive(Resource, Default)]
pub struct IconCache {
    textures: HashMap<String, egui::TextureId>,
}

impl IconCache {
    /// Texture for an icon path, loading and registering it on first use.
    /// An empty path has no icon.
    pub fn texture(
        &mut self,
        path: &str,
        contexts: &mut EguiContexts,
        asset_server: &AssetServer,
    ) -> Option<egui::TextureId> {
        if path.is_empty() {
            return None;
        }
        if let Some(texture_id) = self.textures.get(path) {
            return Some(*texture_id);
        }

        let handle: Handle<Image> = asset_server.load(path.to_string());
        let texture_id = contexts.add_image(EguiTextureHandle::Strong(handle));
        self.textures.insert(path.to_string(), texture_id);
        Some(texture_id)
    }
}

/// Square item slot: icon (or name when there is none) with the count
/// label drawn over the lower right corner.
pub fn item_slot(
    ui: &mut egui::Ui,
    texture: Option<egui::TextureId>,
    name: &str,
    count_label: &str,
    size: f32,
) -> egui::Response {
    let min_size = egui::vec2(size, size);
    let response = match texture {
        Some(texture_id) => {
            let image = egui::Image::new((texture_id, egui::vec2(size - 8.0, size - 8.0)));
            ui.add(egui::Button::image(image).min_size(min_size))
        }
        None => ui.add(egui::Button::new(short_label(name)).min_size(min_size)),
    };

    if !count_label.is_empty() {
        ui.painter().text(
            response.rect.right_bottom() - egui::vec2(4.0, 2.0),
            egui::Align2::RIGHT_BOTTOM,
            count_label,
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }

    if name.is_empty() {
        response
    } else {
        response.on_hover_text(name)
    }
}

fn short_label(name: &str) -> String {
    name.chars().take(6).collect()
}
