//! Game loop driver
//!
//! The host calls `advance` once per rendered frame with the elapsed time.
//! Control ticks run on a fixed 10 Hz clock through an accumulator; physics
//! runs exactly once per frame. A caught player restarts the whole session.

use crate::consts::*;
use crate::platform::KeyboardState;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, control_tick, frame_tick};
use crate::view::SceneView;

/// Frames kept for the FPS estimate
const FPS_WINDOW: usize = 60;

pub struct GameLoop {
    settings: Settings,
    pub state: GameState,
    pub keyboard: KeyboardState,
    accumulator: f32,
    /// 1-based session counter
    session: u32,
    /// Host clock in seconds
    clock: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl GameLoop {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let state = GameState::new(seed, &settings);
        Self {
            settings,
            state,
            keyboard: KeyboardState::default(),
            accumulator: 0.0,
            session: 1,
            clock: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn key_down(&mut self, key: &str) {
        self.keyboard.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keyboard.key_up(key);
    }

    /// Run one rendered frame. `dt` is the host frame time in seconds.
    /// Returns the events produced during the frame.
    pub fn advance(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = dt.clamp(0.0, 0.5);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= CONTROL_DT && substeps < MAX_CONTROL_SUBSTEPS {
            control_tick(&mut self.state, &self.keyboard);
            self.accumulator -= CONTROL_DT;
            substeps += 1;
        }
        if substeps == MAX_CONTROL_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(CONTROL_DT);
        }

        frame_tick(&mut self.state);
        self.track_fps(dt);

        let events = self.state.drain_events();
        for event in &events {
            log::debug!("{:?}", event);
        }

        if self.state.phase == GamePhase::Caught {
            self.restart();
        }
        events
    }

    /// Replace the session with a fresh one (new terrain, new spawns)
    pub fn restart(&mut self) {
        let seed = self.state.next_session_seed();
        self.session += 1;
        log::info!("Restarting: session {} with seed {:#x}", self.session, seed);
        self.state = GameState::new(seed, &self.settings);
        self.accumulator = 0.0;
    }

    fn track_fps(&mut self, dt: f32) {
        self.clock += dt as f64;
        self.frame_times[self.frame_index] = self.clock;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest entry is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = self.clock - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }

    /// Read-only projection of the current frame
    pub fn view(&self) -> SceneView {
        SceneView::capture(&self.state, &self.settings, self.session, self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameLoop {
        GameLoop::new(Settings::default(), 31337)
    }

    #[test]
    fn test_control_clock_runs_at_ten_hz() {
        let mut game = seeded();
        game.state.zombies.clear();
        for _ in 0..60 {
            game.advance(FRAME_DT);
        }
        assert_eq!(game.state.frame_ticks, 60);
        assert!((9..=10).contains(&game.state.control_ticks));
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game = seeded();
        game.state.zombies.clear();
        game.advance(5.0);
        assert_eq!(game.state.control_ticks, MAX_CONTROL_SUBSTEPS as u64);
        assert_eq!(game.state.frame_ticks, 1);
    }

    #[test]
    fn test_keyboard_moves_player() {
        let mut game = seeded();
        game.state.zombies.clear();
        game.state.terrain.props = Default::default();
        let start = game.state.player.body.pos;

        // Move toward the far side of the world from wherever we spawned
        let key = if start.x < WORLD_WIDTH / 2.0 { "d" } else { "a" };
        game.key_down(key);
        for _ in 0..30 {
            game.advance(FRAME_DT);
        }
        game.key_up(key);
        assert_ne!(game.state.player.body.pos.x, start.x);
    }

    #[test]
    fn test_caught_player_restarts_session() {
        let mut game = seeded();
        let first_seed = game.state.seed;
        let player_pos = game.state.player.body.pos;
        game.state.zombies[0].body.pos = player_pos;

        let events = game.advance(FRAME_DT);
        assert!(events.iter().any(|e| matches!(e, GameEvent::PlayerCaught { .. })));
        assert_eq!(game.session(), 2);
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert_ne!(game.state.seed, first_seed);
        assert_eq!(game.state.frame_ticks, 0);
    }

    #[test]
    fn test_fps_estimate() {
        let mut game = seeded();
        game.state.zombies.clear();
        for _ in 0..120 {
            game.advance(FRAME_DT);
        }
        assert!((59..=61).contains(&game.fps()));
    }
}
