//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed control rate, one integration step per rendered frame
//! - Seeded RNG only
//! - Stable iteration order (player first, then zombies by ID)
//! - No rendering or platform dependencies

pub mod actor;
pub mod anim;
pub mod body;
pub mod collision;
pub mod controller;
pub mod footprints;
pub mod props;
pub mod state;
pub mod terrain;
pub mod tick;

pub use actor::{Actor, ActorKind, ActorProfile, FrameReport};
pub use anim::{Animator, Clip, ClipSet, ClipSpec, select_clip};
pub use body::{Body, Kinematics, Step};
pub use collision::{CollisionProbe, probe};
pub use controller::{Command, Controller};
pub use footprints::FootprintTrail;
pub use props::{PropKind, PropRegistry, StaticProp};
pub use state::{GameEvent, GamePhase, GameState};
pub use terrain::{GridPoint, Terrain, TerrainConfig, TileCell, TileKind, is_land, tile_score};
pub use tick::{control_tick, frame_tick, player_caught};
