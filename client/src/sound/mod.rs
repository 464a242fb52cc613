//! Sound effect playback by record id.

use crate::data::GameRecords;
use crate::settings::SettingsResource;
use bevy::audio::{AudioPlayer, PlaybackSettings, Volume};
use bevy::prelude::*;

/// Request to play a sound effect once.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct PlaySound {
    pub id: String,
    pub volume: f32,
    pub pitch: f32,
}

impl PlaySound {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume: 1.0,
            pitch: 1.0,
        }
    }
}

/// Marker for one-shot sound effect entities.
#[derive(Component)]
pub struct SoundEffect;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySound>()
            .add_systems(Update, play_sound_effects);
    }
}

fn play_sound_effects(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    records: Option<Res<GameRecords>>,
    settings: Option<Res<SettingsResource>>,
    asset_server: Option<Res<AssetServer>>,
) {
    let audio = settings.as_ref().map(|settings| &settings.current.audio);
    let enabled = audio.is_none_or(|audio| audio.effects_enabled);
    let master_volume = audio.map_or(1.0, |audio| audio.effects_volume);

    for request in requests.read() {
        if !enabled {
            continue;
        }
        let Some(path) = records
            .as_ref()
            .and_then(|records| records.sound_path(&request.id))
        else {
            debug!("No sound record for '{}'", request.id);
            continue;
        };
        let Some(asset_server) = asset_server.as_ref() else {
            continue;
        };

        commands.spawn((
            SoundEffect,
            AudioPlayer::new(asset_server.load(path.to_string())),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::Linear(request.volume * master_volume))
                .with_speed(request.pitch),
        ));
    }
}
