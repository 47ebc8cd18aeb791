//! Terminal layer - rendering and raw-mode screen handling
//!
//! `menu_view` is pure and testable; `screen` owns the actual terminal.

pub mod menu_view;
pub mod screen;

pub use menu_view::MenuView;
pub use screen::Screen;
