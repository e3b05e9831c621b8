pub mod hud;
pub mod input;
pub mod map;
pub mod quiz;
