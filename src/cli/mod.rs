//! Interactive driver: the numbered menu and the rendering of results.

pub mod commands;
pub mod menu;

pub use menu::Menu;
