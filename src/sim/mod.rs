//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_hits_paddle, ball_missed, reflect_off_walls};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, RngState};
pub use tick::{TickInput, generate_level, tick};
