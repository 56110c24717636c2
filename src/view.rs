//! Read-only scene projection
//!
//! Whatever draws the game (canvas, window, terminal, test) receives a
//! `SceneView` built from the authoritative `GameState`. Nothing in here can
//! mutate the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Actor, ActorKind, Clip, GamePhase, GameState, PropKind, TileKind};

/// Debug color for anything that blocked a move
pub const DEBUG_HIT_COLOR: u32 = 0xff0000;
/// Debug color for everything else
pub const DEBUG_CLEAR_COLOR: u32 = 0xffffff;

#[derive(Debug, Clone, Serialize)]
pub struct TileSprite {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: TileKind,
    /// Water animates, sand does not
    pub animation_speed: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropSprite {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PropKind,
    pub mirrored: bool,
    pub animation_speed: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorSprite {
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub clip: Clip,
    pub frame: u32,
    pub animation_speed: f32,
    pub looping: bool,
    pub shadow_pos: Vec2,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FootprintSprite {
    pub actor: u32,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugCircle {
    pub center: Vec2,
    pub radius: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DebugOverlay {
    pub circles: Vec<DebugCircle>,
    pub lines: Vec<DebugLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    pub fps: Option<u32>,
    pub session: u32,
    pub control_ticks: u64,
    pub phase: GamePhase,
}

/// Everything needed to draw one frame, back to front
#[derive(Debug, Clone, Serialize)]
pub struct SceneView {
    pub world: Vec2,
    pub tiles: Vec<TileSprite>,
    pub props: Vec<PropSprite>,
    pub footprints: Vec<FootprintSprite>,
    pub actors: Vec<ActorSprite>,
    pub hud: Hud,
    pub debug: Option<DebugOverlay>,
}

/// Shadow sits under the feet: quarter width in, 65% down
pub fn shadow_pos(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(pos.x + size.x / 4.0, pos.y + size.y * 0.65)
}

fn actor_sprite(actor: &Actor) -> ActorSprite {
    let pos = actor.body.pos;
    let size = actor.body.size();
    ActorSprite {
        id: actor.id,
        kind: actor.kind(),
        pos,
        size,
        clip: actor.anim.clip(),
        frame: actor.anim.current_frame(),
        animation_speed: actor.anim.speed(),
        looping: actor.anim.looping(),
        shadow_pos: shadow_pos(pos, size),
    }
}

fn color(hit: bool) -> u32 {
    if hit { DEBUG_HIT_COLOR } else { DEBUG_CLEAR_COLOR }
}

/// Collision shapes for every prop and actor
fn debug_overlay(state: &GameState) -> DebugOverlay {
    let mut overlay = DebugOverlay::default();

    for prop in state.terrain.props.iter() {
        overlay.circles.push(DebugCircle {
            center: prop.center,
            radius: prop.radius(),
            color: DEBUG_HIT_COLOR,
        });
    }

    for actor in state.actors() {
        let Some(step) = &actor.last_step else {
            continue;
        };
        let size = actor.body.size();
        let radius = actor.profile.kinematics.radius;
        let blocked = step.probe.blocked();

        let from_center = crate::center_of(step.prev_pos, size);

        overlay.circles.push(DebugCircle {
            center: from_center,
            radius,
            color: color(blocked),
        });
        overlay.circles.push(DebugCircle {
            center: crate::center_of(step.next_pos, size),
            radius,
            color: color(blocked),
        });

        for (prop, &hit) in state.terrain.props.iter().zip(&step.probe.prop_hits) {
            overlay.lines.push(DebugLine {
                from: from_center,
                to: prop.center,
                color: color(hit),
            });
        }
    }

    overlay
}

impl SceneView {
    pub fn capture(state: &GameState, settings: &Settings, session: u32, fps: u32) -> Self {
        let tile_size = Vec2::new(TILE_WIDTH, TILE_HEIGHT);
        let tiles = state
            .terrain
            .tiles
            .iter()
            .map(|tile| TileSprite {
                pos: tile.point().to_world(),
                size: tile_size,
                kind: tile.kind(),
                animation_speed: (!tile.is_land).then_some(ANIMATION_SPEED),
            })
            .collect();

        let props = state
            .terrain
            .props
            .iter()
            .map(|prop| PropSprite {
                pos: prop.center - tile_size * 0.5,
                size: tile_size,
                kind: prop.kind,
                mirrored: prop.mirrored,
                animation_speed: ANIMATION_SPEED,
            })
            .collect();

        let footprints = state
            .actors()
            .flat_map(|actor| {
                actor.footprints.iter().map(move |&pos| FootprintSprite {
                    actor: actor.id,
                    pos,
                })
            })
            .collect();

        // Zombies under the player
        let mut actors: Vec<ActorSprite> = state.zombies.iter().map(actor_sprite).collect();
        actors.push(actor_sprite(&state.player));

        Self {
            world: state.terrain.world_size(),
            tiles,
            props,
            footprints,
            actors,
            hud: Hud {
                fps: settings.show_fps.then_some(fps),
                session,
                control_ticks: state.control_ticks,
                phase: state.phase,
            },
            debug: settings.debug_overlay.then(|| debug_overlay(state)),
        }
    }
}
