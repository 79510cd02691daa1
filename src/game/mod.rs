pub mod board;
pub mod effects;
pub mod icon;
pub mod state;

pub use board::{Board, BoxPos, ConfigError, RevealGrid};
pub use icon::{Icon, IconColor, Shape};
pub use state::{Game, PickOutcome};
