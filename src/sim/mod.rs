//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per frame, integer pixel math only
//! - No randomness
//! - Status changes only through `handle_input` and the tick's win check

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use input::{Direction, InputEvent, handle_input, set_player_direction};
pub use state::{Ball, GameEvent, GameState, GameStatus, Paddle, Score, Side};
pub use tick::{next_y_speed, tick};
