//! Per-status scene drawing

use crate::assets::{Screen, ScreenImages};
use crate::consts::*;
use crate::sim::{GameState, GameStatus, Side};

use super::canvas::Canvas;
use super::text::ScoreGlyphs;

pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// Draw the whole frame for the current status
pub fn draw<G: ScoreGlyphs>(
    canvas: &mut Canvas,
    state: &GameState,
    images: &ScreenImages,
    glyphs: &mut G,
) {
    canvas.clear(BACKGROUND);

    let screen = match state.status {
        GameStatus::MainMenu => Screen::MainMenu,
        GameStatus::Paused => Screen::Pause,
        GameStatus::GameOver => Screen::GameOver,
        GameStatus::GameWon => Screen::GameWon,
        GameStatus::Playing => {
            draw_court(canvas, state, glyphs);
            return;
        }
    };
    canvas.draw_fullscreen_image(images.get(screen));
}

fn draw_court<G: ScoreGlyphs>(canvas: &mut Canvas, state: &GameState, glyphs: &mut G) {
    for y in (0..WINDOW_HEIGHT).step_by(NET_DOT_SPACING) {
        canvas.draw_point(WINDOW_WIDTH / 2, y, FOREGROUND);
    }

    for side in Side::ALL {
        canvas.fill_rect(state.paddle(side).rect(), FOREGROUND);
    }
    canvas.fill_rect(state.ball.rect(), FOREGROUND);

    for side in Side::ALL {
        let x = match side {
            Side::Human => WINDOW_WIDTH / 4,
            Side::Ai => WINDOW_WIDTH * 3 / 4,
        };
        draw_score(canvas, glyphs, state.score.get(side), x);
    }
}

fn draw_score<G: ScoreGlyphs>(canvas: &mut Canvas, glyphs: &mut G, value: u32, x: i32) {
    match glyphs.score(value) {
        Some(image) => canvas.draw_image(image, x, SCOREBOARD_TOP),
        None => log::debug!("No glyphs rendered for score {}", value),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use image::Rgba;

    use crate::assets::Image;
    use crate::sim::InputEvent;

    /// Draws each score as a solid block `value + 1` pixels wide
    #[derive(Default)]
    struct BlockGlyphs {
        cache: HashMap<u32, Image>,
    }

    impl ScoreGlyphs for BlockGlyphs {
        fn score(&mut self, value: u32) -> Option<&Image> {
            Some(
                &*self
                    .cache
                    .entry(value)
                    .or_insert_with(|| Image::from_pixel(value + 1, 4, Rgba(FOREGROUND))),
            )
        }
    }

    struct NoGlyphs;

    impl ScoreGlyphs for NoGlyphs {
        fn score(&mut self, _value: u32) -> Option<&Image> {
            None
        }
    }

    fn images() -> ScreenImages {
        ScreenImages {
            main_menu: Image::from_pixel(2, 2, Rgba([255, 0, 0, 255])),
            pause: Image::from_pixel(2, 2, Rgba([0, 255, 0, 255])),
            game_over: Image::from_pixel(2, 2, Rgba([0, 0, 255, 255])),
            game_won: Image::from_pixel(2, 2, Rgba([255, 255, 0, 255])),
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
    }

    #[test]
    fn test_menu_statuses_show_their_image() {
        let cases = [
            (GameStatus::MainMenu, [255, 0, 0, 255]),
            (GameStatus::Paused, [0, 255, 0, 255]),
            (GameStatus::GameOver, [0, 0, 255, 255]),
            (GameStatus::GameWon, [255, 255, 0, 255]),
        ];
        for (status, color) in cases {
            let mut state = GameState::new();
            state.status = status;
            let mut canvas = canvas();
            draw(&mut canvas, &state, &images(), &mut BlockGlyphs::default());

            assert_eq!(canvas.pixel(0, 0), color, "{:?}", status);
            // Outside the image stays background; no court is drawn
            assert_eq!(canvas.pixel(400, 300), BACKGROUND);
        }
    }

    #[test]
    fn test_court_draws_paddles_ball_and_net() {
        let mut state = GameState::new();
        state.status = GameStatus::Playing;
        let mut canvas = canvas();
        draw(&mut canvas, &state, &images(), &mut BlockGlyphs::default());

        let human = state.human.rect();
        let ai = state.ai.rect();
        let ball = state.ball.rect();
        assert_eq!(canvas.pixel(human.x as u32, human.y as u32), FOREGROUND);
        assert_eq!(canvas.pixel(ai.right() as u32 - 1, ai.bottom() as u32 - 1), FOREGROUND);
        assert_eq!(canvas.pixel(ball.x as u32 + 1, ball.y as u32 + 1), FOREGROUND);

        // Net: every 4th row at the centre column
        assert_eq!(canvas.pixel(400, 0), FOREGROUND);
        assert_eq!(canvas.pixel(400, 4), FOREGROUND);
        assert_eq!(canvas.pixel(400, 2), BACKGROUND);
        assert_eq!(canvas.pixel(400, 596), FOREGROUND);

        // Open court away from everything
        assert_eq!(canvas.pixel(100, 500), BACKGROUND);
    }

    #[test]
    fn test_scores_drawn_at_quarter_points() {
        let mut state = GameState::new();
        handle_confirm(&mut state);
        state.score.human = 2;
        state.score.ai = 4;
        let mut canvas = canvas();
        let mut glyphs = BlockGlyphs::default();
        draw(&mut canvas, &state, &images(), &mut glyphs);

        let top = SCOREBOARD_TOP as u32;
        // Human: 3 px wide block at x = 200
        assert_eq!(canvas.pixel(200, top), FOREGROUND);
        assert_eq!(canvas.pixel(202, top), FOREGROUND);
        assert_eq!(canvas.pixel(203, top), BACKGROUND);
        // AI: 5 px wide block at x = 600
        assert_eq!(canvas.pixel(604, top), FOREGROUND);
        assert_eq!(canvas.pixel(605, top), BACKGROUND);
        assert_eq!(glyphs.cache.len(), 2);
    }

    #[test]
    fn test_missing_glyphs_still_draws_court() {
        let mut state = GameState::new();
        handle_confirm(&mut state);
        let mut canvas = canvas();
        draw(&mut canvas, &state, &images(), &mut NoGlyphs);

        let human = state.human.rect();
        assert_eq!(canvas.pixel(human.x as u32, human.y as u32), FOREGROUND);
        assert_eq!(canvas.pixel(200, SCOREBOARD_TOP as u32), BACKGROUND);
    }

    fn handle_confirm(state: &mut GameState) {
        crate::sim::handle_input(state, InputEvent::Confirm);
        assert_eq!(state.status, GameStatus::Playing);
    }
}
