use bevy::prelude::App;

use crate::composition::client_runtime::configure_client_app;
use crate::data::load_records_or_default;
use crate::settings::{self, GameSettings};

pub fn run_client_app() {
    let startup_settings = load_startup_settings();
    let records = load_records_or_default();
    let mut app = App::new();
    configure_client_app(&mut app, &startup_settings, records);
    app.run();
}

fn load_startup_settings() -> GameSettings {
    let startup_settings = settings::load_settings_or_default();
    if let Err(error) = settings::ensure_settings_file_exists(&startup_settings) {
        eprintln!(
            "Failed to ensure startup settings file '{}': {}",
            settings::SETTINGS_FILE_PATH,
            error
        );
    }
    startup_settings
}
