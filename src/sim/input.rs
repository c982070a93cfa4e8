//! Game status machine
//!
//! Routes discrete input events to status changes or paddle intent. The
//! machine has no timers; the only transition it does not own is the
//! win/loss switch, which the tick performs.

use super::state::{GameState, GameStatus, Side};

/// Abstract input events, already mapped from platform keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Move up (arrow up)
    Up,
    /// Move down (arrow down)
    Down,
    /// Start / rematch (enter)
    Confirm,
    /// Pause toggle (escape)
    Cancel,
}

impl InputEvent {
    pub const ALL: [InputEvent; 5] = [
        InputEvent::Quit,
        InputEvent::Up,
        InputEvent::Down,
        InputEvent::Confirm,
        InputEvent::Cancel,
    ];
}

/// Requested direction for the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Apply one input event to the game.
///
/// Events that mean nothing in the current status are ignored.
pub fn handle_input(state: &mut GameState, event: InputEvent) {
    match (state.status, event) {
        (GameStatus::MainMenu, InputEvent::Confirm) => state.set_status(GameStatus::Playing),
        (GameStatus::Playing, InputEvent::Cancel) => state.set_status(GameStatus::Paused),
        (GameStatus::Playing, InputEvent::Up) => set_player_direction(state, Direction::Up),
        (GameStatus::Playing, InputEvent::Down) => set_player_direction(state, Direction::Down),
        (GameStatus::Paused, InputEvent::Cancel) => state.set_status(GameStatus::Playing),
        (GameStatus::GameOver | GameStatus::GameWon, InputEvent::Confirm) => {
            state.set_status(GameStatus::Playing)
        }
        _ => {}
    }
}

/// Point the human paddle up or down.
///
/// Only flips the sign when it disagrees with the request, so repeating
/// a direction never changes the speed.
pub fn set_player_direction(state: &mut GameState, direction: Direction) {
    let paddle = state.paddle_mut(Side::Human);
    match direction {
        Direction::Up if paddle.dy > 0 => paddle.dy = -paddle.dy,
        Direction::Down if paddle.dy < 0 => paddle.dy = -paddle.dy,
        _ => {}
    }
}
