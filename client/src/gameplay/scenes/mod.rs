pub mod gameplay;
pub mod loading;
