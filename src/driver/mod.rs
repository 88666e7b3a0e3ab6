//! Window-less simulation driver: input translation, rendering and the
//! per-frame session loop

pub mod input;
pub mod render;
pub mod session;

pub use input::{pixel_to_cell, InputEvent, Key, ScriptStep};
pub use render::Frame;
pub use session::Session;
