pub mod dpad;
pub mod hud;
pub mod layout;
pub mod menu;
