//! Bounded Conway's Game of Life simulator
//!
//! The core is [`game_of_life::Grid`]: a fixed-size grid with bounds-checked
//! accessors and a generation step that never observes partially updated
//! state. [`driver`] replays input events against a grid the way an
//! interactive window would.

pub mod config;
pub mod driver;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{GameOfLifeRules, Grid, Pattern};
