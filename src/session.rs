//! Frame driver between the host UI and the simulation
//!
//! The host forwards canvas size, drag deltas, button presses and frame
//! timestamps; the session turns them into fixed ticks, plays feedback and
//! persists what needs persisting. Rendering reads [`Session::state`].

use crate::feedback::{FeedbackSink, feedback_for};
use crate::highscores::HighScores;
use crate::persistence::KeyValueStore;
use crate::platform::FrameClock;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct Session<S: KeyValueStore, F: FeedbackSink> {
    state: GameState,
    settings: Settings,
    store: S,
    sink: F,
    clock: FrameClock,
    /// Input gathered since the last tick
    input: TickInput,
}

impl<S: KeyValueStore, F: FeedbackSink> Session<S, F> {
    /// Start a session with stored settings and high scores. The match waits
    /// for [`Session::resize`] before anything moves.
    pub fn new(seed: u64, tuning: Tuning, store: S, sink: F) -> Self {
        let settings = Settings::load(&store);
        let mut state = GameState::new(seed, tuning, 0.0, 0.0);
        state.high_scores = HighScores::load(&store);
        log::info!(
            "Session started (seed {}, {} stored high scores)",
            seed,
            state.high_scores.len()
        );

        Self {
            state,
            settings,
            store,
            sink,
            clock: FrameClock::new(),
            input: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &F {
        &self.sink
    }

    /// Canvas laid out or resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Horizontal drag in pixels; applied on the next tick
    pub fn drag(&mut self, dx: f32) {
        self.input.drag_dx += dx;
    }

    /// Pause button
    pub fn toggle_pause(&mut self) {
        self.input.pause = !self.input.pause;
    }

    /// "Try again" button; ignored unless the match is over
    pub fn restart(&mut self) {
        self.input.restart = true;
    }

    /// App moved to the background: pause and drop the stale frame time
    pub fn on_background(&mut self) {
        if !self.state.is_game_over() {
            self.state.paused = true;
        }
        self.input.pause = false;
        self.clock.reset();
    }

    pub fn set_sound_on(&mut self, on: bool) {
        self.settings.sound_on = on;
        self.persist_settings();
    }

    pub fn set_vibration_on(&mut self, on: bool) {
        self.settings.vibration_on = on;
        self.persist_settings();
    }

    /// Run however many ticks have elapsed by `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let ticks = self.clock.advance(now_ms);
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(self.step());
        }
        events
    }

    /// Run exactly one tick with the pending input
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = std::mem::take(&mut self.input);
        let events = tick(&mut self.state, &input);
        for event in &events {
            self.dispatch(event);
        }
        events
    }

    fn dispatch(&mut self, event: &GameEvent) {
        for feedback in feedback_for(event, &self.settings) {
            self.sink.apply(feedback);
        }

        if let GameEvent::GameOver { .. } = event {
            if let Err(e) = self.state.high_scores.save(&mut self.store) {
                log::warn!("Failed to save high scores: {}", e);
            }
        }
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.settings.save(&mut self.store) {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}
