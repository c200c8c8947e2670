//! Fixed timestep simulation tick
//!
//! One call advances the match by one ~16 ms tick and reports what happened.

use glam::Vec2;

use super::collision::{Rect, ball_hits_paddle, ball_missed, reflect_off_walls};
use super::state::{Brick, GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal drag accumulated since the last tick (pixels)
    pub drag_dx: f32,
    /// Pause toggle
    pub pause: bool,
    /// Start over after game over
    pub restart: bool,
}

/// Advance the match by one tick and return the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Nothing to simulate until the host has a canvas
    if !state.has_canvas() {
        return events;
    }

    // Drag applies even while paused
    if input.drag_dx != 0.0 {
        state.paddle.drag(input.drag_dx, state.screen.x);
    }

    if input.restart && state.is_game_over() {
        state.restart();
        events.push(GameEvent::LevelStarted {
            level: state.level,
            rows: state.tuning.rows_for_level(state.level),
        });
        return events;
    }

    if input.pause && !state.is_game_over() {
        state.paused = !state.paused;
        log::debug!("Paused: {}", state.paused);
    }

    if state.paused {
        return events;
    }

    match state.phase {
        GamePhase::GameOver => return events,
        GamePhase::LevelUp { ticks_remaining } => {
            state.time_ticks += 1;
            let remaining = ticks_remaining.saturating_sub(1);
            if remaining == 0 {
                begin_next_level(state, &mut events);
            } else {
                state.phase = GamePhase::LevelUp {
                    ticks_remaining: remaining,
                };
            }
            return events;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Motion and walls
    state.ball.advance();
    if reflect_off_walls(&mut state.ball, state.screen.x) {
        events.push(GameEvent::WallBounce);
    }

    // Paddle: always send the ball upward. The band test uses the ball's whole
    // vertical extent, so a ball up to one radius past the paddle still bounces.
    if ball_hits_paddle(&state.ball, &state.paddle) {
        state.ball.vel.y = -state.ball.vel.y.abs();
        events.push(GameEvent::PaddleBounce);
    }

    // Bricks: first visible brick under the ball center wins
    let ball_pos = state.ball.pos;
    if let Some((index, brick)) = state
        .bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.visible && b.rect.contains(ball_pos))
    {
        brick.visible = false;
        state.ball.vel.y = -state.ball.vel.y;
        state.score += state.tuning.brick_score;
        events.push(GameEvent::BrickDestroyed {
            index,
            score: state.score,
        });
    }

    // Level clear
    if state.bricks.iter().all(|b| !b.visible) {
        let cleared = state.level;
        log::info!("Level {} cleared with score {}", cleared, state.score);
        events.push(GameEvent::LevelCleared { level: cleared });
        state.level += 1;

        let pause_ticks = state.tuning.level_up_ticks();
        if pause_ticks == 0 {
            begin_next_level(state, &mut events);
        } else {
            state.phase = GamePhase::LevelUp {
                ticks_remaining: pause_ticks,
            };
        }
        return events;
    }

    // Missed the ball
    if ball_missed(&state.ball, state.screen.y) {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            let rank = state.high_scores.record(state.score);
            log::info!(
                "Game over at level {} with score {} (rank {:?})",
                state.level,
                state.score,
                rank
            );
            events.push(GameEvent::GameOver {
                score: state.score,
                rank,
            });
        } else {
            // Velocity is kept; only the position resets
            state.ball.pos = state.screen_center();
            log::debug!("Life lost, {} left", state.lives);
            events.push(GameEvent::LifeLost {
                lives_left: state.lives,
            });
        }
    }

    events
}

fn begin_next_level(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.start_level(state.level);
    events.push(GameEvent::LevelStarted {
        level: state.level,
        rows: state.tuning.rows_for_level(state.level),
    });
}

/// Lay out a fresh brick grid for `state.level`.
///
/// Rows grow by one per level; columns, spacing and brick height are fixed by
/// tuning, and brick width stretches so the grid spans the screen.
pub fn generate_level(state: &mut GameState) {
    let tuning = &state.tuning;
    let rows = tuning.rows_for_level(state.level);
    let cols = tuning.brick_columns;

    let bricks: Vec<Brick> = (0..rows * cols)
        .map(|index| Brick::new(brick_rect(tuning, state.screen.x, index)))
        .collect();

    log::info!(
        "Level {}: {} rows x {} columns, brick width {}",
        state.level,
        rows,
        cols,
        tuning.brick_width(state.screen.x)
    );
    state.bricks = bricks;
}

/// Rectangle of the row-major brick `index` on a screen `screen_width` wide
pub fn brick_rect(tuning: &Tuning, screen_width: f32, index: u32) -> Rect {
    let cols = tuning.brick_columns.max(1);
    let spacing = tuning.brick_spacing;
    let size = Vec2::new(tuning.brick_width(screen_width), tuning.brick_height);
    let row = (index / cols) as f32;
    let col = (index % cols) as f32;
    let min = Vec2::new(
        spacing + col * (size.x + spacing),
        tuning.brick_top + row * (size.y + spacing),
    );
    Rect::new(min, size)
}
