//! Brick Breaker entry point
//!
//! Native builds run a headless autoplay match and log what happens. The
//! browser build drives `Session` from its own host page.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::consts::TICK_MS;
    use brick_breaker::feedback::LogSink;
    use brick_breaker::persistence::FileStore;
    use brick_breaker::sim::GameEvent;
    use brick_breaker::{Session, Tuning, platform};

    /// Pixels the autopilot may drag per tick; slow enough to miss sometimes
    const AUTOPILOT_MAX_DRAG: f32 = 9.0;
    const MAX_TICKS: u64 = 60 * 60 * 10;

    platform::init_logging();
    log::info!("Brick Breaker (native, headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB10C);

    let tuning = match std::env::var("BRICK_BREAKER_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let store_dir = std::env::temp_dir().join("brick-breaker");
    let store = match FileStore::new(&store_dir) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Cannot open storage at {}: {}", store_dir.display(), e);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(seed, tuning, store, LogSink);
    session.resize(480.0, 800.0);

    let mut now = 0.0;
    session.frame(now);
    for _ in 0..MAX_TICKS {
        let state = session.state();
        let target = state.ball.pos.x - state.paddle.center_x();
        session.drag(target.clamp(-AUTOPILOT_MAX_DRAG, AUTOPILOT_MAX_DRAG));

        now += TICK_MS as f64;
        for event in session.frame(now) {
            match event {
                GameEvent::WallBounce | GameEvent::PaddleBounce => {}
                GameEvent::BrickDestroyed { index, score } => {
                    log::debug!("Brick {} destroyed, score {}", index, score)
                }
                GameEvent::LifeLost { lives_left } => log::info!("Life lost, {} left", lives_left),
                GameEvent::LevelCleared { level } => log::info!("Level {} cleared!", level),
                GameEvent::LevelStarted { level, rows } => {
                    log::info!("Level {} begins with {} rows", level, rows)
                }
                GameEvent::GameOver { score, rank } => {
                    log::info!("Game over: score {} (rank {:?})", score, rank)
                }
            }
        }

        if session.state().is_game_over() {
            break;
        }
    }

    let state = session.state();
    println!(
        "Final: level {}, score {}, lives {}",
        state.level, state.score, state.lives
    );
    println!("High scores: {:?}", state.high_scores.scores());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page owns the frame loop on the web
}
