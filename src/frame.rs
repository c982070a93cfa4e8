//! Frame driver
//!
//! One iteration = drain input, tick (when playing), forward gameplay events
//! to audio, render. The platform layer owns the actual waiting; this module
//! only says how long a frame may take.

use std::time::{Duration, Instant};

use crate::audio::SoundEffect;
use crate::sim::{GameState, InputEvent, handle_input, tick};

/// How often average FPS is logged
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Anything that can play sound effects
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Start time of the current frame
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    start: Instant,
}

impl FrameTimer {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(start: Instant) -> Self {
        Self { start }
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Time left in `budget` as of `now`, zero once the budget is spent
    pub fn remaining_at(&self, budget: Duration, now: Instant) -> Duration {
        budget.saturating_sub(self.elapsed_at(now))
    }

    /// Earliest start of the next frame
    pub fn deadline(&self, budget: Duration) -> Instant {
        self.start + budget
    }
}

/// Average frames per second since start
#[derive(Debug, Clone)]
pub struct FpsCounter {
    started: Instant,
    last_report: Instant,
    frames: u64,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            last_report: now,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average FPS as of `now`, or zero before any time has passed
    pub fn average(&self, now: Instant) -> f32 {
        let secs = now.saturating_duration_since(self.started).as_secs_f32();
        if secs > 0.0 {
            self.frames as f32 / secs
        } else {
            0.0
        }
    }

    /// Count a frame; returns the average when a report is due
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        if now.saturating_duration_since(self.last_report) >= FPS_REPORT_INTERVAL {
            self.last_report = now;
            Some(self.average(now))
        } else {
            None
        }
    }
}

/// Drives the game one frame at a time
#[derive(Debug, Clone)]
pub struct FrameDriver {
    budget: Duration,
    fps: FpsCounter,
}

impl FrameDriver {
    pub fn new(target_fps: u32) -> Self {
        Self {
            budget: frame_budget(target_fps),
            fps: FpsCounter::new(Instant::now()),
        }
    }

    /// Maximum duration of one frame
    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Run one frame.
    ///
    /// Returns `Exit` without rendering if a quit event was seen; events
    /// after the quit are dropped.
    pub fn run_frame<A, R>(
        &mut self,
        state: &mut GameState,
        events: impl IntoIterator<Item = InputEvent>,
        audio: &mut A,
        render: R,
    ) -> LoopControl
    where
        A: AudioSink,
        R: FnOnce(&GameState),
    {
        if route_input(state, events) == LoopControl::Exit {
            return LoopControl::Exit;
        }

        update(state, audio);
        render(state);

        if let Some(avg) = self.fps.record(Instant::now()) {
            log::debug!("Average FPS: {:.1}", avg);
        }
        LoopControl::Continue
    }
}

/// Frame budget in whole milliseconds (`1000 / fps`)
pub fn frame_budget(target_fps: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(target_fps.max(1)))
}

/// Route each event to the status machine, stopping at a quit
pub fn route_input(
    state: &mut GameState,
    events: impl IntoIterator<Item = InputEvent>,
) -> LoopControl {
    for event in events {
        if event == InputEvent::Quit {
            log::info!("Quit requested");
            return LoopControl::Exit;
        }
        handle_input(state, event);
    }
    LoopControl::Continue
}

/// Tick the game and play sounds for whatever happened
pub fn update<A: AudioSink>(state: &mut GameState, audio: &mut A) {
    tick(state);
    for event in state.drain_events() {
        audio.play(SoundEffect::from(event));
    }
}
