//! Loading of the game data file (item, sound records, starting inventory).

use crate::inventory::InventorySeedEntry;
use bevy::prelude::*;
use records::RecordStore;
use serde::Deserialize;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const RECORDS_FILE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/data/records.yaml");
pub const RECORDS_PATH_ENV: &str = "ASHLANDER_RECORDS";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RecordsFile {
    #[serde(flatten)]
    records: RecordStore,
    player_inventory: Vec<InventorySeedEntry>,
}

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("failed to read records file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode records file '{path}': {source}")]
    Deserialize {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Records available to every system.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameRecords {
    pub records: RecordStore,
    pub player_inventory: Vec<InventorySeedEntry>,
}

impl Deref for GameRecords {
    type Target = RecordStore;

    fn deref(&self) -> &RecordStore {
        &self.records
    }
}

impl GameRecords {
    pub fn from_yaml(raw: &str, path: &Path) -> Result<Self, RecordsError> {
        let file: RecordsFile =
            serde_yaml::from_str(raw).map_err(|source| RecordsError::Deserialize {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            records: file.records,
            player_inventory: file.player_inventory,
        })
    }

    pub fn load_from_path(path: &Path) -> Result<Self, RecordsError> {
        let raw = fs::read_to_string(path).map_err(|source| RecordsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw, path)
    }
}

pub fn records_path() -> PathBuf {
    std::env::var_os(RECORDS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(RECORDS_FILE_PATH))
}

/// Loads the records file, or empty records when it cannot be used.
pub fn load_records_or_default() -> GameRecords {
    let path = records_path();
    match GameRecords::load_from_path(&path) {
        Ok(records) => records,
        Err(error) => {
            eprintln!("{error}. Starting with no item records.");
            GameRecords::default()
        }
    }
}
