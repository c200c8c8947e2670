//! Brick Breaker - a Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `session`: Frame driver that feeds input to the simulation and routes events
//! - `platform`: Fixed-timestep clock and logging setup
//! - `persistence`: Opaque key-value storage for settings and high scores
//! - `feedback`: Sound/vibration commands derived from simulation events
//! - `tuning`: Data-driven game balance

pub mod feedback;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: u32 = 16;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Brick grid
    pub const BASE_ROWS: u32 = 2;
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_SPACING: f32 = 10.0;
    pub const BRICK_HEIGHT: f32 = 50.0;
    pub const BRICK_TOP: f32 = 100.0;

    /// Ball defaults (velocities are pixels per tick)
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_BASE_SPEED: f32 = 12.0;
    /// Horizontal serve jitter, in whole pixels per tick either way
    pub const BALL_SERVE_SPREAD: i32 = 6;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.25;
    pub const PADDLE_MIN_WIDTH: f32 = 60.0;
    /// Distance from the bottom of the screen to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;

    /// Match rules
    pub const START_LIVES: u32 = 3;
    pub const BRICK_SCORE: u64 = 10;
    /// Celebratory pause after a level is cleared
    pub const LEVEL_UP_PAUSE_MS: u32 = 1200;
}
