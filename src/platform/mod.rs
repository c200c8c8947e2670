//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Frame timing (fixed-timestep accumulator)

use crate::consts::{MAX_SUBSTEPS, TICK_MS};

/// Longest frame delta fed into the accumulator
pub const MAX_FRAME_MS: f64 = 100.0;

/// Turns irregular frame timestamps into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: f64,
    accumulator: f64,
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            tick_ms: TICK_MS as f64,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed a frame timestamp (ms) and get the number of ticks to run.
    ///
    /// The first call only sets the reference time. Deltas are capped at
    /// [`MAX_FRAME_MS`] and at most [`MAX_SUBSTEPS`] ticks run per frame.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };

        let dt = (now_ms - last).clamp(0.0, MAX_FRAME_MS);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.tick_ms && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_ms;
            substeps += 1;
        }
        substeps
    }

    /// Forget the reference time (after the app was backgrounded)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

/// Install the logger for this platform
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
}

/// Install the logger for this platform
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // Honors RUST_LOG; defaults to info
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_sets_reference() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 0);
        assert_eq!(clock.advance(1016.0), 1);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(10.0), 0);
        assert_eq!(clock.advance(20.0), 1);
        assert_eq!(clock.advance(32.0), 1);
        assert_eq!(clock.advance(80.0), 3);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        // 5 s stall counts as 100 ms: six ticks, remainder 4 ms
        assert_eq!(clock.advance(5000.0), 6);
        assert_eq!(clock.advance(5012.0), 1);
    }

    #[test]
    fn test_backwards_time_runs_nothing() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0);
    }

    #[test]
    fn test_reset_forgets_reference() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        clock.reset();
        assert_eq!(clock.advance(90.0), 0);
        assert_eq!(clock.advance(106.0), 1);
    }
}
