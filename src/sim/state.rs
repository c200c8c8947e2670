//! Match state and core simulation types
//!
//! Everything the step function reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::tick::{brick_rect, generate_level};
use crate::highscores::HighScores;
use crate::tuning::Tuning;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in motion
    Playing,
    /// Celebratory pause after a level is cleared; the next level starts at zero
    LevelUp { ticks_remaining: u32 },
    /// Lives exhausted
    GameOver,
}

/// The ball. Velocity is in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered horizontally for the given screen
    pub fn centered(tuning: &Tuning, screen: Vec2) -> Self {
        let width = tuning.paddle_width(screen.x);
        Self {
            x: screen.x / 2.0 - width / 2.0,
            y: screen.y - tuning.paddle_bottom_offset,
            width,
            height: tuning.paddle_height,
        }
    }

    /// Shift by a drag delta, clamped to `[0, screen_width - width]`
    pub fn drag(&mut self, dx: f32, screen_width: f32) {
        let max_x = (screen_width - self.width).max(0.0);
        self.x = (self.x + dx).clamp(0.0, max_x);
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// A brick. Once hidden it stays hidden until the next level is generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub visible: bool,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self { rect, visible: true }
    }
}

/// Simulation event, consumed by sound/haptics/persistence collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side or the top of the screen
    WallBounce,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Brick at `index` (row-major) was destroyed; `score` is the new total
    BrickDestroyed { index: usize, score: u64 },
    /// Ball missed the paddle with lives to spare
    LifeLost { lives_left: u32 },
    /// Every brick of `level` is gone
    LevelCleared { level: u32 },
    /// A fresh brick grid is in play
    LevelStarted { level: u32, rows: u32 },
    /// Last life lost; `rank` is the 1-based leaderboard position, if any
    GameOver { score: u64, rank: Option<usize> },
}

/// Seed plus a stream counter so each serve draws from a fresh PCG stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out the next generator and advance the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    /// Canvas size in pixels; zero until the host lays out
    pub screen: Vec2,
    pub rng_state: RngState,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub paused: bool,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid
    pub bricks: Vec<Brick>,
    /// Velocity chosen on level 1 and reused by every later level
    pub serve_vel: Vec2,
    pub high_scores: HighScores,
}

impl GameState {
    /// Create a level-1 match. A zero-sized screen leaves the grid empty until
    /// [`GameState::resize`] supplies real dimensions.
    pub fn new(seed: u64, tuning: Tuning, width: f32, height: f32) -> Self {
        let screen = Vec2::new(width, height);
        let mut state = Self {
            screen,
            rng_state: RngState::new(seed),
            level: 1,
            lives: tuning.start_lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            paused: false,
            paddle: Paddle::centered(&tuning, screen),
            ball: Ball::new(tuning.ball_radius),
            bricks: Vec::new(),
            serve_vel: Vec2::ZERO,
            high_scores: HighScores::new(),
            tuning,
        };

        if state.has_canvas() {
            state.start_level(1);
        }

        state
    }

    /// True once the host has given us a canvas wide enough for the grid
    #[inline]
    pub fn has_canvas(&self) -> bool {
        self.screen.x >= self.tuning.min_screen_width() && self.screen.y > 0.0
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[inline]
    pub fn screen_center(&self) -> Vec2 {
        self.screen / 2.0
    }

    /// Lay out `level` from scratch. Level 1 also resets score and lives and
    /// draws a new serve velocity; later levels carry all three over.
    pub fn start_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.paddle = Paddle::centered(&self.tuning, self.screen);
        self.ball = Ball::new(self.tuning.ball_radius);
        self.ball.pos = self.screen_center();

        if self.level == 1 {
            self.serve_vel = self.roll_serve_velocity();
            self.score = 0;
            self.lives = self.tuning.start_lives;
        }
        self.ball.vel = self.serve_vel;

        generate_level(self);
        self.phase = GamePhase::Playing;
    }

    /// "Try again" after game over. High scores survive.
    pub fn restart(&mut self) {
        log::info!("Restarting match (previous score {})", self.score);
        self.paused = false;
        self.start_level(1);
    }

    /// Record a new canvas size.
    ///
    /// The first usable size lays out level 1. After that the match carries
    /// on: score, lives, phase and destroyed bricks are kept, and only the
    /// geometry is refitted to the new screen.
    pub fn resize(&mut self, width: f32, height: f32) {
        let screen = Vec2::new(width, height);
        if screen == self.screen {
            return;
        }
        log::debug!("Canvas resized to {}x{}", width, height);
        self.screen = screen;
        if !self.has_canvas() {
            return;
        }

        if self.bricks.is_empty() {
            self.start_level(self.level);
        } else {
            self.refit_to_screen();
        }
    }

    /// Move bricks, paddle and ball onto the current screen without touching
    /// visibility or match progress
    fn refit_to_screen(&mut self) {
        let width = self.screen.x;
        for (index, brick) in self.bricks.iter_mut().enumerate() {
            brick.rect = brick_rect(&self.tuning, width, index as u32);
        }

        let x = self.paddle.x;
        self.paddle = Paddle::centered(&self.tuning, self.screen);
        self.paddle.x = x;
        self.paddle.drag(0.0, width);

        self.ball.pos.x = self.ball.pos.x.clamp(0.0, width);
        self.ball.pos.y = self.ball.pos.y.min(self.screen.y);
    }

    fn roll_serve_velocity(&mut self) -> Vec2 {
        let spread = self.tuning.ball_serve_spread.abs();
        let jitter = self.rng_state.next_rng().random_range(-spread..=spread);
        let speed = self.tuning.ball_base_speed;
        Vec2::new(speed + jitter as f32, -speed)
    }

    /// Number of bricks still standing
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }
}
