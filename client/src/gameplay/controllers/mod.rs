pub mod scene_controller;
