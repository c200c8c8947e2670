//! Sound and vibration feedback
//!
//! Maps simulation events to platform commands. Actual playback belongs to the
//! host; it implements [`FeedbackSink`].

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle or breaks a brick
    BrickHit,
    /// Life lost or match over
    GameOver,
}

/// Short buzz when a life is lost
pub const LIFE_LOST_VIBRATION_MS: u32 = 150;
/// Long buzz on game over
pub const GAME_OVER_VIBRATION_MS: u32 = 400;

/// A single command for the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    PlaySound(SoundEffect),
    Vibrate { duration_ms: u32 },
}

/// Host-side playback of feedback commands
pub trait FeedbackSink {
    fn play_sound(&mut self, effect: SoundEffect);
    fn vibrate(&mut self, duration_ms: u32);

    fn apply(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::PlaySound(effect) => self.play_sound(effect),
            Feedback::Vibrate { duration_ms } => self.vibrate(duration_ms),
        }
    }
}

/// Commands for one event, filtered by the player's settings
pub fn feedback_for(event: &GameEvent, settings: &Settings) -> Vec<Feedback> {
    let (sound, vibration) = match event {
        GameEvent::PaddleBounce | GameEvent::BrickDestroyed { .. } => {
            (Some(SoundEffect::BrickHit), None)
        }
        GameEvent::LifeLost { .. } => (Some(SoundEffect::GameOver), Some(LIFE_LOST_VIBRATION_MS)),
        GameEvent::GameOver { .. } => (Some(SoundEffect::GameOver), Some(GAME_OVER_VIBRATION_MS)),
        GameEvent::WallBounce | GameEvent::LevelCleared { .. } | GameEvent::LevelStarted { .. } => {
            (None, None)
        }
    };

    let mut out = Vec::with_capacity(2);
    if let Some(effect) = sound.filter(|_| settings.sound_on) {
        out.push(Feedback::PlaySound(effect));
    }
    if let Some(duration_ms) = vibration.filter(|_| settings.vibration_on) {
        out.push(Feedback::Vibrate { duration_ms });
    }
    out
}

/// Sink that only logs; used by the headless binary
#[derive(Debug, Default)]
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn play_sound(&mut self, effect: SoundEffect) {
        log::debug!("sound: {:?}", effect);
    }

    fn vibrate(&mut self, duration_ms: u32) {
        log::debug!("vibrate: {}ms", duration_ms);
    }
}
