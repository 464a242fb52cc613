use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GameplayPipelineSet {
    Input,
    WorldSimulate,
    Camera,
    UiSync,
}
