//! Data-driven game balance
//!
//! Every field defaults to the value in [`crate::consts`]; a JSON document only
//! needs to name the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Brick rows on level 1; each later level adds one
    pub base_rows: u32,
    pub brick_columns: u32,
    pub brick_spacing: f32,
    pub brick_height: f32,
    /// Y coordinate of the first brick row
    pub brick_top: f32,

    pub ball_radius: f32,
    /// Serve speed, pixels per tick on each axis
    pub ball_base_speed: f32,
    pub ball_serve_spread: i32,

    pub paddle_height: f32,
    pub paddle_width_fraction: f32,
    pub paddle_min_width: f32,
    pub paddle_bottom_offset: f32,

    pub start_lives: u32,
    pub brick_score: u64,
    pub level_up_pause_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_rows: BASE_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_spacing: BRICK_SPACING,
            brick_height: BRICK_HEIGHT,
            brick_top: BRICK_TOP,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_serve_spread: BALL_SERVE_SPREAD,

            paddle_height: PADDLE_HEIGHT,
            paddle_width_fraction: PADDLE_WIDTH_FRACTION,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            start_lives: START_LIVES,
            brick_score: BRICK_SCORE,
            level_up_pause_ms: LEVEL_UP_PAUSE_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON, rejecting values that would leave a
    /// level without bricks or with degenerate geometry
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        log::info!(
            "Loaded tuning: {} base rows x {} columns, {} lives",
            tuning.base_rows,
            tuning.brick_columns,
            tuning.start_lives
        );
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), String> {
        if self.base_rows == 0 {
            return Err("base_rows must be at least 1".into());
        }
        if self.brick_columns == 0 {
            return Err("brick_columns must be at least 1".into());
        }
        if self.start_lives == 0 {
            return Err("start_lives must be at least 1".into());
        }
        let positive = [
            ("brick_height", self.brick_height),
            ("ball_radius", self.ball_radius),
            ("paddle_height", self.paddle_height),
            ("paddle_width_fraction", self.paddle_width_fraction),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| !v.is_finite() || *v <= 0.0) {
            return Err(format!("{name} must be positive"));
        }
        let non_negative = [
            ("brick_spacing", self.brick_spacing),
            ("brick_top", self.brick_top),
            ("paddle_min_width", self.paddle_min_width),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
        ];
        if let Some((name, _)) = non_negative.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(format!("{name} must not be negative"));
        }
        Ok(())
    }

    /// Narrowest canvas that still fits every column at least one pixel wide
    pub fn min_screen_width(&self) -> f32 {
        let cols = self.brick_columns.max(1) as f32;
        (cols + 1.0) * self.brick_spacing + cols
    }

    /// Number of brick rows for a 1-based level
    pub fn rows_for_level(&self, level: u32) -> u32 {
        self.base_rows + level.saturating_sub(1)
    }

    /// Length of the level-up pause in whole ticks
    pub fn level_up_ticks(&self) -> u32 {
        self.level_up_pause_ms.div_ceil(TICK_MS)
    }

    /// Paddle width for a given screen width
    pub fn paddle_width(&self, screen_width: f32) -> f32 {
        (screen_width * self.paddle_width_fraction).max(self.paddle_min_width)
    }

    /// Brick width so that `brick_columns` bricks and their gaps span the screen
    pub fn brick_width(&self, screen_width: f32) -> f32 {
        let cols = self.brick_columns.max(1) as f32;
        (screen_width - (cols + 1.0) * self.brick_spacing) / cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_rows": 4, "start_lives": 5 }"#).unwrap();
        assert_eq!(tuning.base_rows, 4);
        assert_eq!(tuning.start_lives, 5);
        assert_eq!(tuning.brick_columns, BRICK_COLUMNS);
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_rows_grow_per_level() {
        let tuning = Tuning::default();
        assert_eq!(tuning.rows_for_level(1), 2);
        assert_eq!(tuning.rows_for_level(2), 3);
        assert_eq!(tuning.rows_for_level(5), 6);
    }

    #[test]
    fn test_level_up_ticks() {
        // 1200 ms at 16 ms per tick
        assert_eq!(Tuning::default().level_up_ticks(), 75);
    }

    #[test]
    fn test_paddle_width_has_floor() {
        let tuning = Tuning::default();
        assert_eq!(tuning.paddle_width(400.0), 100.0);
        assert_eq!(tuning.paddle_width(100.0), 60.0);
    }

    #[test]
    fn test_brick_width_fills_screen() {
        let tuning = Tuning::default();
        // 400 - 6 * 10 = 340, / 5 = 68
        assert_eq!(tuning.brick_width(400.0), 68.0);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(Tuning::from_json(r#"{ "brick_columns": 0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "base_rows": 0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "start_lives": 0 }"#).is_err());
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        assert!(Tuning::from_json(r#"{ "brick_height": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "ball_radius": -3.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "brick_spacing": -1.0 }"#).is_err());
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_min_screen_width() {
        // 6 gaps of 10 plus 1 px per column
        assert_eq!(Tuning::default().min_screen_width(), 65.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
