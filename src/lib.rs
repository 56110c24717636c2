//! Beach Survival - A top-down zombie dodging game on a procedural beach
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, movement, collisions, animation state)
//! - `driver`: Two-clock game loop (10 Hz control, per-frame physics)
//! - `view`: Read-only projection consumed by whatever draws the game
//! - `platform`: Keyboard input state
//! - `settings`: Data-driven session configuration

pub mod driver;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod view;

pub use driver::GameLoop;
pub use settings::{Settings, SettingsError, ZombieAi};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Terrain grid dimensions (tiles)
    pub const X_TILES: u32 = 12;
    pub const Y_TILES: u32 = 12;

    /// Tile size in world pixels
    pub const TILE_WIDTH: f32 = 70.0;
    pub const TILE_HEIGHT: f32 = 70.0;

    /// World bounds
    pub const WORLD_WIDTH: f32 = X_TILES as f32 * TILE_WIDTH;
    pub const WORLD_HEIGHT: f32 = Y_TILES as f32 * TILE_HEIGHT;

    /// Ambient animation speed for water and props
    pub const ANIMATION_SPEED: f32 = 0.03;

    /// Control ticks per second (input sampling, drag, AI, animation selection)
    pub const CONTROL_RATE_HZ: f32 = 10.0;
    pub const CONTROL_DT: f32 = 1.0 / CONTROL_RATE_HZ;
    /// Maximum control ticks caught up per rendered frame
    pub const MAX_CONTROL_SUBSTEPS: u32 = 4;
    /// Nominal render frame time, used when no real clock is available
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Player defaults
    pub const PLAYER_W: f32 = 70.0;
    pub const PLAYER_H: f32 = 70.0;
    pub const PLAYER_ANIMATION_SPEED_IDLE: f32 = 0.05;
    pub const PLAYER_ANIMATION_SPEED_RUN: f32 = 0.2;
    pub const PLAYER_ANIMATION_SPEED_ATTACK: f32 = 0.3;
    pub const PLAYER_ATTACK_FRAMES: u32 = 8;
    pub const PLAYER_DRAG_CONSTANT: f32 = 1.4;
    pub const PLAYER_VELOCITY_CAP: f32 = 4.0;
    pub const PLAYER_ACCELERATION: f32 = 2.8;
    pub const PLAYER_RADIUS: f32 = 20.0;

    /// Zombie defaults
    pub const ZOMBIE_W: f32 = 70.0;
    pub const ZOMBIE_H: f32 = 70.0;
    pub const ZOMBIE_ANIMATION_SPEED_IDLE: f32 = 0.7;
    pub const ZOMBIE_ANIMATION_SPEED_RUN: f32 = 0.2;
    pub const ZOMBIE_DRAG_CONSTANT: f32 = 1.4;
    pub const ZOMBIE_VELOCITY_CAP: f32 = 4.0;
    pub const ZOMBIE_ACCELERATION: f32 = 1.2;
    pub const ZOMBIE_RADIUS: f32 = 20.0;
    /// Minimum spawn distance between a zombie and the player
    pub const ZOMBIE_SAFE_SPAWN: f32 = 4.0 * TILE_WIDTH;
    pub const MAX_ZOMBIES: u32 = 16;

    /// Terrain generation
    pub const RANDOM_LAND_SPOTS_COUNT: usize = 4;
    pub const MAX_TILE_SCORE_TO_BE_LAND: u32 = 30;
    pub const PROP_SPAWN_CHANCE: f64 = 0.1;
    pub const PROPS_RADIUS: f32 = 30.0;

    /// Player-zombie contact distance.
    /// NOTE: reuses the prop radius rather than the player radius; kept as-is.
    pub const CONTACT_RADIUS: f32 = ZOMBIE_RADIUS + PROPS_RADIUS;

    /// Footprints
    pub const FOOTPRINT_CHANCE: f32 = 0.1;
    pub const FOOTPRINT_TRAIL_LENGTH: usize = 20;
}

/// Center of an axis-aligned box given its top-left corner and size
#[inline]
pub fn center_of(pos: Vec2, size: Vec2) -> Vec2 {
    pos + size * Vec2::splat(0.5)
}

/// Strict circle overlap test (touching circles do not overlap)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}
