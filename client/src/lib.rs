#![allow(clippy::too_many_arguments, clippy::type_complexity)]

pub mod alchemy;
pub mod app;
pub mod camera;
pub mod character;
pub mod composition;
pub mod data;
pub mod gameplay;
pub mod gui;
pub mod inventory;
pub mod settings;
pub mod sound;
pub mod ui;
pub mod world;

pub use app::state::AppState;
