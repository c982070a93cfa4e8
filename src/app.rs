//! Native window and event loop
//!
//! Assets and audio are loaded before the event loop starts; the window and
//! GPU surface are created on the first `resumed`. Frames run from
//! `about_to_wait` and the loop sleeps with `ControlFlow::WaitUntil` until
//! the next frame is due.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::assets::{ScreenImages, load_font};
use crate::audio::AudioManager;
use crate::consts::*;
use crate::error::InitError;
use crate::frame::{FrameDriver, FrameTimer, LoopControl};
use crate::renderer::{Canvas, GpuSurface, ScoreText, scene};
use crate::settings::Settings;
use crate::sim::{GameState, InputEvent};

const SCORE_COLOR: [u8; 3] = [255, 255, 255];

/// Map a physical key to a game input
pub fn map_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::ArrowUp => Some(InputEvent::Up),
        KeyCode::ArrowDown => Some(InputEvent::Down),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(InputEvent::Confirm),
        KeyCode::Escape => Some(InputEvent::Cancel),
        _ => None,
    }
}

/// Load everything, open the window and run until the player quits
pub fn run(settings: Settings) -> Result<(), InitError> {
    let images = ScreenImages::load(&settings)?;
    let font = load_font(&settings.asset_path(&settings.assets.font))?;
    let glyphs = ScoreText::new(font, SCOREBOARD_FONT_SIZE, SCORE_COLOR);
    let audio = AudioManager::load(&settings)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, images, glyphs, audio);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => {
            log::info!("Exited after {} frames", app.driver.fps().frames());
            Ok(())
        }
    }
}

/// Application state driven by winit
struct App {
    settings: Settings,
    driver: FrameDriver,
    state: GameState,
    /// Inputs received since the last frame, in arrival order
    pending: Vec<InputEvent>,
    canvas: Canvas,
    images: ScreenImages,
    glyphs: ScoreText,
    audio: AudioManager,
    window: Option<Arc<Window>>,
    gpu: Option<GpuSurface>,
    next_frame: Instant,
    /// Set when startup fails inside the event loop
    error: Option<InitError>,
}

impl App {
    fn new(
        settings: Settings,
        images: ScreenImages,
        glyphs: ScoreText,
        audio: AudioManager,
    ) -> Self {
        Self {
            driver: FrameDriver::new(settings.target_fps),
            settings,
            state: GameState::new(),
            pending: Vec::new(),
            canvas: Canvas::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32),
            images,
            glyphs,
            audio,
            window: None,
            gpu: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: InitError) {
        self.error = Some(err);
        event_loop.exit();
    }

    /// Run one frame and schedule the next
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let timer = FrameTimer::start();
        let events = std::mem::take(&mut self.pending);

        let control = self.driver.run_frame(&mut self.state, events, &mut self.audio, |state| {
            scene::draw(&mut self.canvas, state, &self.images, &mut self.glyphs)
        });
        if control == LoopControl::Exit {
            event_loop.exit();
            return;
        }

        if let Some(gpu) = self.gpu.as_mut() {
            if !gpu.present_or_recover(&self.canvas) {
                event_loop.exit();
                return;
            }
        }

        let budget = self.driver.budget();
        if timer.remaining_at(budget, Instant::now()).is_zero() {
            log::debug!("Frame took longer than {:?}", budget);
        }
        self.next_frame = timer.deadline(budget);
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32))
            .with_resizable(false);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let canvas_size = (self.canvas.width(), self.canvas.height());
        match pollster::block_on(GpuSurface::new(window.clone(), canvas_size)) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(err) => return self.fail(event_loop, err.into()),
        }
        self.window = Some(window);

        self.audio.start_music();
        self.next_frame = Instant::now();
        log::info!(
            "Window ready, running at up to {} fps",
            self.settings.target_fps
        );
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.pending.push(InputEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(input) = map_key(code) {
                    self.pending.push(input);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_none() {
            return;
        }
        // Woken early by input: keep it queued until the frame is due
        if Instant::now() < self.next_frame {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            return;
        }
        self.frame(event_loop);
    }
}
