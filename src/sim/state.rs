//! Game state and core simulation types
//!
//! `GameState` is the single authoritative copy of a session. Everything the
//! presentation layer shows is projected from it (see `crate::view`).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorProfile};
use super::collision::probe;
use super::controller::Controller;
use super::terrain::{GridPoint, Terrain, TerrainConfig};
use crate::consts::*;
use crate::settings::{Settings, ZombieAi};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A zombie reached the player; the session must restart
    Caught,
}

/// Notable things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FootprintLeft { actor: u32, pos: Vec2 },
    Blocked { actor: u32 },
    AttackStarted { actor: u32 },
    AttackFinished { actor: u32 },
    PlayerCaught { zombie: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub terrain: Terrain,
    pub player: Actor,
    /// Sorted by id
    pub zombies: Vec<Actor>,
    pub phase: GamePhase,
    pub control_ticks: u64,
    pub frame_ticks: u64,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

/// Random land spot whose cell is clear of props. When every spot is
/// covered, the free cell nearest to a random spot; the spot itself if the
/// whole grid is covered.
fn pick_player_spawn(terrain: &Terrain, rng: &mut Pcg32) -> Vec2 {
    let size = ActorProfile::player().kinematics.size;
    let world = terrain.world_size();
    let free = |pos: Vec2| {
        !probe(pos, size, PLAYER_RADIUS, world, terrain.props.as_slice()).blocked()
    };

    let spots: Vec<Vec2> = terrain.land_spots.iter().map(|s| s.to_world()).collect();
    let open: Vec<Vec2> = spots.iter().copied().filter(|&pos| free(pos)).collect();
    if !open.is_empty() {
        return open[rng.random_range(0..open.len())];
    }
    if spots.is_empty() {
        return Vec2::ZERO;
    }

    let spot = spots[rng.random_range(0..spots.len())];
    log::warn!("Every land spot is covered, spawning near ({}, {})", spot.x, spot.y);
    terrain
        .tiles
        .iter()
        .map(|t| t.point().to_world())
        .filter(|&pos| free(pos))
        .min_by(|a, b| a.distance(spot).total_cmp(&b.distance(spot)))
        .unwrap_or(spot)
}

impl GameState {
    /// Generate terrain and spawn actors. Fully synchronous; the state is
    /// ready to tick on return.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let terrain = Terrain::generate(&TerrainConfig::default(), &mut rng);
        Self::with_terrain(seed, rng, terrain, settings)
    }

    /// Build a session on prepared terrain
    pub fn with_terrain(seed: u64, mut rng: Pcg32, terrain: Terrain, settings: &Settings) -> Self {
        let player_pos = pick_player_spawn(&terrain, &mut rng);

        let mut state = Self {
            seed,
            rng,
            player: Actor::new(1, ActorProfile::player(), Controller::Keyboard, player_pos),
            terrain,
            zombies: Vec::new(),
            phase: GamePhase::Playing,
            control_ticks: 0,
            frame_ticks: 0,
            events: Vec::new(),
            next_id: 2,
        };

        let controller = match settings.zombie_ai {
            ZombieAi::Chase => Controller::Chase,
            ZombieAi::Drift => Controller::Drift(Vec2::new(-1.0, 0.0)),
        };
        for _ in 0..settings.effective_zombie_count() {
            let pos = state.pick_zombie_spawn();
            state.spawn_zombie(pos, controller);
        }

        log::info!(
            "Session {:#x}: player at ({}, {}), {} zombie(s)",
            seed,
            player_pos.x,
            player_pos.y,
            state.zombies.len()
        );
        state
    }

    /// Allocate a new actor ID
    pub fn next_actor_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_zombie(&mut self, pos: Vec2, controller: Controller) -> u32 {
        let id = self.next_actor_id();
        self.zombies
            .push(Actor::new(id, ActorProfile::zombie(), controller, pos));
        id
    }

    /// Random collision-free cell far enough from the player. Falls back to
    /// the farthest free cell, then the farthest cell overall.
    fn pick_zombie_spawn(&mut self) -> Vec2 {
        const ATTEMPTS: usize = 64;

        let size = ActorProfile::zombie().kinematics.size;
        let world = self.terrain.world_size();
        let player_center = self.player.center();
        let free = |terrain: &Terrain, pos: Vec2| {
            !probe(pos, size, ZOMBIE_RADIUS, world, terrain.props.as_slice()).blocked()
        };

        for _ in 0..ATTEMPTS {
            let cell = GridPoint::new(
                self.rng.random_range(0..self.terrain.width),
                self.rng.random_range(0..self.terrain.height),
            );
            let pos = cell.to_world();
            let far = crate::center_of(pos, size).distance(player_center) >= ZOMBIE_SAFE_SPAWN;
            if far && free(&self.terrain, pos) {
                return pos;
            }
        }

        log::warn!("No random zombie spawn found, using farthest cell");
        let distance = |pos: Vec2| crate::center_of(pos, size).distance(player_center);
        let cells = self
            .terrain
            .tiles
            .iter()
            .map(|t| t.point().to_world());
        let farthest = |best: Option<Vec2>, pos: Vec2| match best {
            Some(b) if distance(b) >= distance(pos) => Some(b),
            _ => Some(pos),
        };
        cells
            .clone()
            .filter(|&pos| free(&self.terrain, pos))
            .fold(None, farthest)
            .or_else(|| cells.fold(None, farthest))
            .unwrap_or(Vec2::ZERO)
    }

    /// Take and clear pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seed for the session that replaces this one
    pub fn next_session_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Iterate every actor, player first
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        std::iter::once(&self.player).chain(self.zombies.iter())
    }
}
