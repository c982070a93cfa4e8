//! Pong - human vs. a reactive AI paddle
//!
//! Core modules:
//! - `sim`: Game rules (entities, collisions, status machine, per-frame tick)
//! - `frame`: Frame driver (input routing, tick, render, frame cap)
//! - `renderer`: Software canvas presented through wgpu
//! - `assets` / `audio`: Startup-loaded images, font and sounds
//! - `settings`: JSON-configurable window title, frame rate and asset paths

pub mod app;
pub mod assets;
pub mod audio;
pub mod error;
pub mod frame;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::InitError;
pub use settings::{AssetPaths, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical window size in pixels
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;
    /// Default frame cap (one simulation tick per frame)
    pub const DEFAULT_FPS: u32 = 120;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 50;
    pub const PADDLE_HUMAN_SPEED: i32 = 2;
    pub const PADDLE_AI_SPEED: i32 = 1;

    /// Ball defaults
    pub const BALL_WIDTH: i32 = 10;
    pub const BALL_HEIGHT: i32 = 10;
    /// Horizontal speed range; every paddle hit adds `BALL_X_SPEED_BONUS`
    pub const BALL_MIN_X_SPEED: i32 = 1;
    pub const BALL_MAX_X_SPEED: i32 = 6;
    pub const BALL_X_SPEED_BONUS: i32 = 1;
    /// Vertical speed after a serve
    pub const BALL_START_Y_SPEED: i32 = 2;
    /// Vertical speeds cycled through on each paddle hit
    pub const BALL_Y_SPEED_CYCLE: [i32; 3] = [1, 2, 3];
    /// Distance the ball is pushed off a paddle after a hit
    pub const BALL_TELEPORT: i32 = PADDLE_WIDTH;

    /// How far past the screen edge the ball must travel before a point counts
    pub const SCORE_GRACE: i32 = PADDLE_WIDTH + BALL_WIDTH;
    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 5;

    /// Scoreboard text
    pub const SCOREBOARD_FONT_SIZE: f32 = 28.0;
    pub const SCOREBOARD_TOP: i32 = 10;
    /// Spacing between dots of the centre net
    pub const NET_DOT_SPACING: usize = 4;
}
