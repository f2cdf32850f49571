pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_window_keydown;
pub use pointer::{track_window_pointer, wire_hero_parallax, PointerState};
