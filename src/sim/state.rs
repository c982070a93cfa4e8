//! Game state and core simulation types
//!
//! A single `GameState` owns every entity of a match: both paddles, the ball,
//! the score pair and the current screen.

use glam::IVec2;

use super::collision::Rect;
use crate::consts::*;

/// Which screen is active; drives both input routing and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Title screen, waiting for confirm
    #[default]
    MainMenu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// AI reached the win score
    GameOver,
    /// Human reached the win score
    GameWon,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Human,
    /// Right paddle, steered by the tick
    Ai,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Human, Side::Ai];

    /// Horizontal direction pointing at this side of the court
    pub fn direction_x(self) -> i32 {
        match self {
            Side::Human => -1,
            Side::Ai => 1,
        }
    }

    /// Paddle speed in pixels per tick
    pub fn paddle_speed(self) -> i32 {
        match self {
            Side::Human => PADDLE_HUMAN_SPEED,
            Side::Ai => PADDLE_AI_SPEED,
        }
    }
}

/// Things that happened during a tick, consumed by audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the given side's paddle
    PaddleHit(Side),
    /// The given side won a point
    Scored(Side),
}

/// A vertical paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Vertical velocity (pixels per tick, negative is up)
    pub dy: i32,
}

impl Paddle {
    /// Paddle at its serve position for the given side.
    ///
    /// Vertically centered on its midpoint: the top edge sits at
    /// `(WINDOW_HEIGHT - PADDLE_HEIGHT) / 2`, not `WINDOW_HEIGHT / 2 - PADDLE_HEIGHT`.
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Human => 0,
            Side::Ai => WINDOW_WIDTH - PADDLE_WIDTH,
        };
        Self {
            pos: IVec2::new(x, (WINDOW_HEIGHT - PADDLE_HEIGHT) / 2),
            size: IVec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            dy: side.paddle_speed(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Apply velocity and keep the paddle fully on screen
    pub fn advance(&mut self) {
        self.pos.y += self.dy;
        if self.pos.y <= 0 {
            self.pos.y = 0;
        } else if self.pos.y + self.size.y > WINDOW_HEIGHT {
            self.pos.y = WINDOW_HEIGHT - self.size.y;
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Velocity in pixels per tick
    pub vel: IVec2,
}

impl Ball {
    /// Centered ball heading toward `toward`
    pub fn served(toward: Side) -> Self {
        Self {
            pos: IVec2::new(
                (WINDOW_WIDTH - BALL_WIDTH) / 2,
                (WINDOW_HEIGHT - BALL_HEIGHT) / 2,
            ),
            size: IVec2::new(BALL_WIDTH, BALL_HEIGHT),
            vel: IVec2::new(toward.direction_x() * BALL_MIN_X_SPEED, BALL_START_Y_SPEED),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Points won by each side in the current match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub human: u32,
    pub ai: u32,
}

impl Score {
    pub const fn new(human: u32, ai: u32) -> Self {
        Self { human, ai }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Ai => self.ai,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// Side that has reached the win score, human first
    pub fn winner(&self) -> Option<Side> {
        if self.human == WIN_SCORE {
            Some(Side::Human)
        } else if self.ai == WIN_SCORE {
            Some(Side::Ai)
        } else {
            None
        }
    }

    /// Side that receives the next serve.
    ///
    /// The ball is sent toward the AI only while the human is ahead.
    pub fn serve_target(&self) -> Side {
        if self.human > self.ai {
            Side::Ai
        } else {
            Side::Human
        }
    }
}

/// Complete state of one running game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current screen
    pub status: GameStatus,
    /// Left, keyboard-driven paddle
    pub human: Paddle,
    /// Right, computer-driven paddle
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter (ticks only advance while playing)
    pub time_ticks: u64,
    /// Events raised since the last drain
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game on the main menu with everything at its serve position
    pub fn new() -> Self {
        let score = Score::default();
        Self {
            status: GameStatus::MainMenu,
            human: Paddle::new(Side::Human),
            ai: Paddle::new(Side::Ai),
            ball: Ball::served(score.serve_target()),
            score,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        }
    }

    /// Re-center paddles and ball and serve according to the current score
    pub fn reset_positions(&mut self) {
        self.human = Paddle::new(Side::Human);
        self.ai = Paddle::new(Side::Ai);
        self.ball = Ball::served(self.score.serve_target());
    }

    pub fn reset_scores(&mut self) {
        self.score = Score::default();
    }

    /// Switch screens, logging the transition
    pub fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            log::info!("Status {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised by ticks since the previous call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
