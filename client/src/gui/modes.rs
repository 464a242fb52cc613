use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiMode {
    Inventory,
    /// Opened from the inventory, so it always sits above it.
    Alchemy,
    Settings,
}

/// Open GUI windows, innermost last. Any open mode pauses the game.
#[derive(Resource, Debug, Default, Clone)]
pub struct GuiModeStack {
    modes: Vec<GuiMode>,
}

impl GuiModeStack {
    pub fn push(&mut self, mode: GuiMode) {
        if self.top() != Some(mode) {
            self.modes.push(mode);
        }
    }

    pub fn pop(&mut self) -> Option<GuiMode> {
        self.modes.pop()
    }

    pub fn top(&self) -> Option<GuiMode> {
        self.modes.last().copied()
    }

    pub fn contains(&self, mode: GuiMode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn is_gui_mode(&self) -> bool {
        !self.modes.is_empty()
    }

    pub fn clear(&mut self) {
        self.modes.clear();
    }
}

/// `I` opens or closes the inventory; Escape closes the innermost window,
/// or opens the settings when nothing is open.
pub fn handle_gui_hotkeys(keys: Res<ButtonInput<KeyCode>>, mut modes: ResMut<GuiModeStack>) {
    if keys.just_pressed(KeyCode::KeyI) {
        if modes.is_gui_mode() {
            modes.clear();
        } else {
            modes.push(GuiMode::Inventory);
        }
    }

    if keys.just_pressed(KeyCode::Escape) {
        if modes.pop().is_none() {
            modes.push(GuiMode::Settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_ignores_repeat_of_top_mode() {
        let mut modes = GuiModeStack::default();
        modes.push(GuiMode::Inventory);
        modes.push(GuiMode::Inventory);
        modes.push(GuiMode::Alchemy);

        assert_eq!(modes.top(), Some(GuiMode::Alchemy));
        assert_eq!(modes.pop(), Some(GuiMode::Alchemy));
        assert_eq!(modes.pop(), Some(GuiMode::Inventory));
        assert_eq!(modes.pop(), None);
        assert!(!modes.is_gui_mode());
    }

    #[test]
    fn hotkeys_open_and_close_windows() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<GuiModeStack>()
            .add_systems(Update, handle_gui_hotkeys);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        assert_eq!(
            app.world().resource::<GuiModeStack>().top(),
            Some(GuiMode::Settings)
        );

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::Escape);
        keys.clear();
        keys.press(KeyCode::Escape);
        app.update();
        assert!(!app.world().resource::<GuiModeStack>().is_gui_mode());

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::Escape);
        keys.clear();
        keys.press(KeyCode::KeyI);
        app.update();
        assert_eq!(
            app.world().resource::<GuiModeStack>().top(),
            Some(GuiMode::Inventory)
        );
    }
}
