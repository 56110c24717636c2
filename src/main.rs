//! Beach Survival headless runner
//!
//! Plays the configured number of simulated seconds with a simple autopilot
//! at the nominal frame rate and logs what happens. Drawing belongs to the
//! host; this binary only exercises the game loop.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use beach_survival::consts::*;
    use beach_survival::platform::KeyboardState;
    use beach_survival::sim::GameEvent;
    use beach_survival::{GameLoop, Settings};

    env_logger::init();
    log::info!("Beach Survival (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let frames = (settings.session_seconds.max(0.0) / FRAME_DT).ceil() as u64;
    log::info!("Seed {:#x}, simulating {} frames", seed, frames);

    let mut game = GameLoop::new(settings, seed);
    let mut footprints = 0u64;
    let mut attacks = 0u64;
    let mut catches = 0u64;

    for _ in 0..frames {
        game.keyboard = autopilot(&game);
        for event in game.advance(FRAME_DT) {
            match event {
                GameEvent::FootprintLeft { .. } => footprints += 1,
                GameEvent::AttackStarted { .. } => attacks += 1,
                GameEvent::PlayerCaught { zombie } => {
                    catches += 1;
                    log::info!("Caught by zombie {} (session {})", zombie, game.session());
                }
                GameEvent::Blocked { .. } | GameEvent::AttackFinished { .. } => {}
            }
        }
    }

    log::info!(
        "Done: {} session(s), {} catch(es), {} attack(s), {} footprint(s), {} fps",
        game.session(),
        catches,
        attacks,
        footprints,
        game.fps()
    );

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&game.view()) {
            Ok(json) => log::debug!("Final view: {}", json),
            Err(e) => log::warn!("Could not serialize view: {}", e),
        }
    }

    /// Run from the nearest zombie; swing when it gets close
    fn autopilot(game: &GameLoop) -> KeyboardState {
        let state = &game.state;
        let me = state.player.center();
        let Some(nearest) = state
            .zombies
            .iter()
            .map(|z| z.center())
            .min_by(|a, b| a.distance(me).total_cmp(&b.distance(me)))
        else {
            return KeyboardState::default();
        };

        let away = me - nearest;
        KeyboardState {
            left: away.x < 0.0,
            right: away.x > 0.0,
            up: away.y < 0.0,
            down: away.y > 0.0,
            attack: away.length() < CONTACT_RADIUS + PLAYER_VELOCITY_CAP * 2.0,
        }
    }

    fn clock_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `GameLoop` directly
}
