//! Per-frame simulation tick
//!
//! Advances a playing game by exactly one step. The order of the phases is
//! part of the rules: paddle hits are resolved first, then movement, then
//! scoring, the win check and finally the wall bounce.

use super::state::{GameEvent, GameState, GameStatus, Side};
use crate::consts::*;

/// Advance the game by one tick. Does nothing unless the game is playing.
pub fn tick(state: &mut GameState) {
    if state.status != GameStatus::Playing {
        return;
    }
    state.time_ticks += 1;

    // Paddle hits
    for side in Side::ALL {
        if state.ball.rect().overlaps(&state.paddle(side).rect()) {
            bounce_off_paddle(state, side);
        }
    }

    // Paddle movement
    for side in Side::ALL {
        state.paddle_mut(side).advance();
    }

    // AI steering (reactive, takes effect next tick)
    state.ai.dy = if state.ball.pos.y < state.ai.pos.y {
        -PADDLE_AI_SPEED
    } else {
        PADDLE_AI_SPEED
    };

    state.ball.pos += state.ball.vel;

    if let Some(side) = point_winner(state) {
        state.score.increment(side);
        log::debug!(
            "{:?} scored ({} - {})",
            side,
            state.score.human,
            state.score.ai
        );
        state.reset_positions();
        state.push_event(GameEvent::Scored(side));
    }

    check_win_condition(state);

    // Top/bottom walls; only reflect a ball still heading outward
    let ball = &mut state.ball;
    let above = ball.pos.y < 0 && ball.vel.y < 0;
    let below = ball.pos.y > WINDOW_HEIGHT - ball.size.y && ball.vel.y > 0;
    if above || below {
        ball.vel.y = -ball.vel.y;
    }
}

/// Reflect the ball off a paddle, speeding it up and pushing it clear
fn bounce_off_paddle(state: &mut GameState, side: Side) {
    let ball = &mut state.ball;

    let direction = -ball.vel.x.signum();
    let speed = (ball.vel.x.abs() + BALL_X_SPEED_BONUS).clamp(BALL_MIN_X_SPEED, BALL_MAX_X_SPEED);
    ball.vel.x = direction * speed;

    // Without the push the ball can still overlap next tick and flip back
    ball.pos.x += direction * BALL_TELEPORT;

    ball.vel.y = next_y_speed(ball.vel.y);

    state.push_event(GameEvent::PaddleHit(side));
}

/// Next vertical speed in the cycle, keeping the current direction
pub fn next_y_speed(dy: i32) -> i32 {
    let sign = if dy < 0 { -1 } else { 1 };
    let next = BALL_Y_SPEED_CYCLE
        .iter()
        .position(|&speed| speed == dy.abs())
        .map(|i| BALL_Y_SPEED_CYCLE[(i + 1) % BALL_Y_SPEED_CYCLE.len()])
        .unwrap_or(BALL_Y_SPEED_CYCLE[0]);
    sign * next
}

/// Side that wins the point if the ball has left the court
fn point_winner(state: &GameState) -> Option<Side> {
    let ball = &state.ball;
    if ball.pos.x < -SCORE_GRACE {
        Some(Side::Ai)
    } else if ball.pos.x + ball.size.x > WINDOW_WIDTH + SCORE_GRACE {
        Some(Side::Human)
    } else {
        None
    }
}

/// End the match once either side reaches the win score
fn check_win_condition(state: &mut GameState) {
    let Some(winner) = state.score.winner() else {
        return;
    };
    let status = match winner {
        Side::Human => GameStatus::GameWon,
        Side::Ai => GameStatus::GameOver,
    };
    state.set_status(status);
    state.reset_scores();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Score;
    use glam::IVec2;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.status = GameStatus::Playing;
        state
    }

    /// Ball placed so it overlaps the human paddle this tick
    fn ball_on_human_paddle(state: &mut GameState, vel: IVec2) {
        state.ball.pos = IVec2::new(PADDLE_WIDTH - 2, state.human.pos.y + 10);
        state.ball.vel = vel;
    }

    /// Ball placed so it has just left the court on the AI's side
    fn ball_past_ai_edge(state: &mut GameState) {
        state.ball.pos = IVec2::new(WINDOW_WIDTH + SCORE_GRACE, 300);
        state.ball.vel = IVec2::new(1, 0);
    }

    /// Ball placed so it has just left the court on the human's side
    fn ball_past_human_edge(state: &mut GameState) {
        state.ball.pos = IVec2::new(-SCORE_GRACE, 300);
        state.ball.vel = IVec2::new(-1, 0);
    }

    #[test]
    fn test_tick_ignored_unless_playing() {
        for status in [
            GameStatus::MainMenu,
            GameStatus::Paused,
            GameStatus::GameOver,
            GameStatus::GameWon,
        ] {
            let mut state = GameState::new();
            state.status = status;
            let before = state.clone();
            tick(&mut state);
            assert_eq!(state.ball, before.ball);
            assert_eq!(state.human, before.human);
            assert_eq!(state.time_ticks, 0);
        }
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = playing_state();
        let start = state.ball.pos;
        let vel = state.ball.vel;
        tick(&mut state);
        assert_eq!(state.ball.pos, start + vel);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_hit_reverses_and_speeds_up() {
        let mut state = playing_state();
        ball_on_human_paddle(&mut state, IVec2::new(-2, 2));
        let start_x = state.ball.pos.x;

        tick(&mut state);

        assert_eq!(state.ball.vel.x, 3);
        assert_eq!(state.ball.vel.y, 3);
        // Teleport plus this tick's movement
        assert_eq!(state.ball.pos.x, start_x + BALL_TELEPORT + 3);
        assert_eq!(state.drain_events(), vec![GameEvent::PaddleHit(Side::Human)]);
    }

    #[test]
    fn test_paddle_hit_does_not_retrigger() {
        let mut state = playing_state();
        ball_on_human_paddle(&mut state, IVec2::new(-1, 1));

        tick(&mut state);
        let dx_after_hit = state.ball.vel.x;
        assert!(dx_after_hit > 0);

        tick(&mut state);
        assert_eq!(state.ball.vel.x, dx_after_hit);
        let hits = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit(_)))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_ai_paddle_hit_sends_ball_left() {
        let mut state = playing_state();
        state.ball.pos = IVec2::new(WINDOW_WIDTH - PADDLE_WIDTH - 2, state.ai.pos.y + 10);
        state.ball.vel = IVec2::new(4, -1);

        tick(&mut state);

        assert_eq!(state.ball.vel.x, -5);
        assert_eq!(state.ball.vel.y, -2);
        assert!(state.ball.pos.x + BALL_WIDTH <= state.ai.pos.x);
        assert_eq!(state.drain_events(), vec![GameEvent::PaddleHit(Side::Ai)]);
    }

    #[test]
    fn test_horizontal_speed_is_capped() {
        let mut state = playing_state();
        ball_on_human_paddle(&mut state, IVec2::new(-BALL_MAX_X_SPEED, 1));
        tick(&mut state);
        assert_eq!(state.ball.vel.x, BALL_MAX_X_SPEED);
    }

    #[test]
    fn test_vertical_speed_cycles() {
        assert_eq!(next_y_speed(1), 2);
        assert_eq!(next_y_speed(2), 3);
        assert_eq!(next_y_speed(3), 1);
        assert_eq!(next_y_speed(-3), -1);
        assert_eq!(next_y_speed(-1), -2);
        // Out-of-cycle speeds restart the cycle
        assert_eq!(next_y_speed(0), 1);
    }

    #[test]
    fn test_consecutive_hits_follow_cycle() {
        let mut state = playing_state();
        let mut dy = BALL_START_Y_SPEED;
        for n in 1..=7 {
            ball_on_human_paddle(&mut state, IVec2::new(-1, dy));
            state.human.pos.y = 200;
            state.ball.pos.y = 220;
            tick(&mut state);
            let start = BALL_Y_SPEED_CYCLE
                .iter()
                .position(|&s| s == BALL_START_Y_SPEED)
                .unwrap_or(0);
            let expected = BALL_Y_SPEED_CYCLE[(start + n) % BALL_Y_SPEED_CYCLE.len()];
            assert_eq!(state.ball.vel.y.abs(), expected, "after {} hits", n);
            dy = state.ball.vel.y;
        }
    }

    #[test]
    fn test_ai_tracks_ball() {
        let mut state = playing_state();
        state.ai.pos.y = 300;
        state.ball.pos = IVec2::new(400, 100);
        state.ball.vel = IVec2::new(1, 0);
        tick(&mut state);
        assert_eq!(state.ai.dy, -PADDLE_AI_SPEED);

        state.ball.pos = IVec2::new(400, 500);
        tick(&mut state);
        assert_eq!(state.ai.dy, PADDLE_AI_SPEED);
    }

    #[test]
    fn test_ai_scores_past_left_edge() {
        let mut state = playing_state();
        ball_past_human_edge(&mut state);

        tick(&mut state);

        assert_eq!(state.score, Score::new(0, 1));
        assert_eq!(state.ball.pos.x, (WINDOW_WIDTH - BALL_WIDTH) / 2);
        assert!(state.drain_events().contains(&GameEvent::Scored(Side::Ai)));
    }

    #[test]
    fn test_human_scores_past_right_edge() {
        let mut state = playing_state();
        ball_past_ai_edge(&mut state);

        tick(&mut state);

        assert_eq!(state.score, Score::new(1, 0));
        // Human now leads, so the serve goes to the AI
        assert!(state.ball.vel.x > 0);
        assert!(state.drain_events().contains(&GameEvent::Scored(Side::Human)));
    }

    #[test]
    fn test_grace_offset_delays_point() {
        let mut state = playing_state();
        // Fully off screen but still inside the grace margin
        state.ball.pos = IVec2::new(-BALL_WIDTH - 1, 300);
        state.ball.vel = IVec2::new(-1, 0);
        tick(&mut state);
        assert_eq!(state.score, Score::new(0, 0));
    }

    #[test]
    fn test_serve_direction_after_point_with_human_ahead() {
        let mut state = playing_state();
        state.score = Score::new(3, 1);
        ball_past_human_edge(&mut state);

        tick(&mut state);

        assert_eq!(state.score, Score::new(3, 2));
        assert!(state.ball.vel.x > 0, "human still ahead, serve goes to AI");
    }

    #[test]
    fn test_human_reaching_win_score_wins() {
        let mut state = playing_state();
        state.score = Score::new(WIN_SCORE - 1, 2);
        ball_past_ai_edge(&mut state);

        tick(&mut state);

        assert_eq!(state.status, GameStatus::GameWon);
        assert_eq!(state.score, Score::new(0, 0));
    }

    #[test]
    fn test_ai_reaching_win_score_ends_game() {
        let mut state = playing_state();
        for _ in 0..WIN_SCORE {
            assert_eq!(state.status, GameStatus::Playing);
            ball_past_human_edge(&mut state);
            tick(&mut state);
        }
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.score, Score::new(0, 0));
    }

    #[test]
    fn test_wall_bounce_flips_vertical_velocity() {
        let mut state = playing_state();
        state.ball.pos = IVec2::new(400, 1);
        state.ball.vel = IVec2::new(1, -2);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, 2);

        state.ball.pos = IVec2::new(400, WINDOW_HEIGHT - BALL_HEIGHT);
        state.ball.vel = IVec2::new(1, 3);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, -3);
    }

    #[test]
    fn test_ball_outside_wall_heading_back_is_not_flipped() {
        // Paddle hit next to the top wall slows dy from 3 to 1
        let mut state = playing_state();
        state.human.pos.y = 0;
        state.human.dy = -PADDLE_HUMAN_SPEED;
        state.ball.pos = IVec2::new(PADDLE_WIDTH - 2, -2);
        state.ball.vel = IVec2::new(-2, 3);

        tick(&mut state);
        assert_eq!(state.ball.pos.y, -1);
        assert_eq!(state.ball.vel.y, 1);

        tick(&mut state);
        assert_eq!(state.ball.pos.y, 0);
        assert_eq!(state.ball.vel.y, 1);

        for _ in 0..10 {
            tick(&mut state);
            assert!(state.ball.pos.y >= 0);
        }
    }

    #[test]
    fn test_ball_below_floor_heading_up_is_not_flipped() {
        let mut state = playing_state();
        state.ball.pos = IVec2::new(400, WINDOW_HEIGHT - BALL_HEIGHT + 3);
        state.ball.vel = IVec2::new(1, -1);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, -1);
        assert_eq!(state.ball.pos.y, WINDOW_HEIGHT - BALL_HEIGHT + 2);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_on_screen(
            human_y in -100i32..700,
            ai_y in -100i32..700,
            human_up in any::<bool>(),
            ticks in 1usize..400,
        ) {
            let mut state = playing_state();
            state.human.pos.y = human_y;
            state.ai.pos.y = ai_y;
            if human_up {
                state.human.dy = -state.human.dy;
            }
            for _ in 0..ticks {
                tick(&mut state);
                for side in Side::ALL {
                    let paddle = state.paddle(side);
                    prop_assert!(paddle.pos.y >= 0);
                    prop_assert!(paddle.pos.y <= WINDOW_HEIGHT - paddle.size.y);
                }
            }
        }

        #[test]
        fn prop_speed_stays_in_range(start_speed in BALL_MIN_X_SPEED..=BALL_MAX_X_SPEED, hits in 1usize..32) {
            let mut state = playing_state();
            let mut dx = -start_speed;
            for _ in 0..hits {
                // Alternate sides so every hit is a fresh approach
                if dx < 0 {
                    state.human.pos.y = 200;
                    state.ball.pos = IVec2::new(PADDLE_WIDTH - 1, 220);
                } else {
                    state.ai.pos.y = 200;
                    state.ball.pos = IVec2::new(WINDOW_WIDTH - PADDLE_WIDTH - 1, 220);
                }
                state.ball.vel = IVec2::new(dx, 1);
                tick(&mut state);
                let speed = state.ball.vel.x.abs();
                prop_assert!(speed >= BALL_MIN_X_SPEED);
                prop_assert!(speed <= BALL_MAX_X_SPEED);
                dx = state.ball.vel.x;
            }
        }
    }
}
