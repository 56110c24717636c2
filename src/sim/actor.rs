//! Actors: one moving entity type, configured per role
//!
//! Player and zombie share all movement, collision, animation and footprint
//! logic; they differ only in their `ActorProfile` and `Controller`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::anim::{Animator, ClipSet, ClipSpec};
use super::body::{Body, Kinematics, Step};
use super::controller::{Command, Controller};
use super::footprints::FootprintTrail;
use super::props::StaticProp;
use crate::consts::*;

/// Actor role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Zombie,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Zombie => "zombie",
        }
    }
}

/// Static configuration of a role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub kind: ActorKind,
    pub kinematics: Kinematics,
    pub clips: ClipSet,
    /// Chance per moving frame to leave a footprint
    pub footprint_chance: f32,
}

impl ActorProfile {
    pub fn player() -> Self {
        Self {
            kind: ActorKind::Player,
            kinematics: Kinematics {
                size: Vec2::new(PLAYER_W, PLAYER_H),
                radius: PLAYER_RADIUS,
                velocity_cap: PLAYER_VELOCITY_CAP,
                drag: PLAYER_DRAG_CONSTANT,
                acceleration: PLAYER_ACCELERATION,
            },
            clips: ClipSet {
                idle: ClipSpec {
                    speed: PLAYER_ANIMATION_SPEED_IDLE,
                    frames: 4,
                },
                run: ClipSpec {
                    speed: PLAYER_ANIMATION_SPEED_RUN,
                    frames: 8,
                },
                attack: Some(ClipSpec {
                    speed: PLAYER_ANIMATION_SPEED_ATTACK,
                    frames: PLAYER_ATTACK_FRAMES,
                }),
            },
            footprint_chance: FOOTPRINT_CHANCE,
        }
    }

    pub fn zombie() -> Self {
        Self {
            kind: ActorKind::Zombie,
            kinematics: Kinematics {
                size: Vec2::new(ZOMBIE_W, ZOMBIE_H),
                radius: ZOMBIE_RADIUS,
                velocity_cap: ZOMBIE_VELOCITY_CAP,
                drag: ZOMBIE_DRAG_CONSTANT,
                acceleration: ZOMBIE_ACCELERATION,
            },
            clips: ClipSet {
                idle: ClipSpec {
                    speed: ZOMBIE_ANIMATION_SPEED_IDLE,
                    frames: 4,
                },
                run: ClipSpec {
                    speed: ZOMBIE_ANIMATION_SPEED_RUN,
                    frames: 8,
                },
                attack: None,
            },
            footprint_chance: FOOTPRINT_CHANCE,
        }
    }
}

/// What happened to an actor during one rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub step: Step,
    /// Footprint left this frame
    pub footprint: Option<Vec2>,
    /// Blocked this frame after moving freely the frame before
    pub newly_blocked: bool,
    pub attack_finished: bool,
}

/// A moving entity in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub profile: ActorProfile,
    pub controller: Controller,
    pub body: Body,
    pub anim: Animator,
    pub footprints: FootprintTrail,
    /// Most recent integration result (debug overlay)
    #[serde(skip)]
    pub last_step: Option<Step>,
}

impl Actor {
    pub fn new(id: u32, profile: ActorProfile, controller: Controller, pos: Vec2) -> Self {
        Self {
            id,
            profile,
            controller,
            body: Body::new(pos, profile.kinematics),
            anim: Animator::new(profile.clips),
            footprints: FootprintTrail::default(),
            last_step: None,
        }
    }

    pub fn kind(&self) -> ActorKind {
        self.profile.kind
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn is_attacking(&self) -> bool {
        self.anim.is_attacking()
    }

    /// Apply one control tick: input, drag, then animation selection.
    /// Returns true if an attack started.
    ///
    /// Commands are dropped entirely while an attack plays.
    pub fn control(&mut self, cmd: Command) -> bool {
        let mut attack_started = false;
        if !self.is_attacking() {
            let accel = self.profile.kinematics.acceleration;
            if cmd.thrust.y != 0.0 {
                self.body.move_by(Vec2::new(0.0, cmd.thrust.y * accel));
            }
            if cmd.thrust.x != 0.0 {
                self.body.move_by(Vec2::new(cmd.thrust.x * accel, 0.0));
            }
            if cmd.attack {
                attack_started = self.anim.start_attack();
            }
        }

        self.body.apply_drag();
        self.anim.follow_velocity(self.body.vel());
        attack_started
    }

    /// Integrate one rendered frame against the world
    pub fn update<R: Rng>(&mut self, world: Vec2, props: &[StaticProp], rng: &mut R) -> FrameReport {
        let center_before = self.center();
        let was_blocked = self.last_step.as_ref().is_some_and(|s| !s.moved);

        let step = self.body.integrate(world, props);

        let mut footprint = None;
        if step.moved && self.body.is_moving() && rng.random::<f32>() < self.profile.footprint_chance {
            self.footprints.push(center_before);
            footprint = Some(center_before);
        }

        let attack_finished = self.anim.advance();
        let newly_blocked = !step.moved && !was_blocked;
        self.last_step = Some(step.clone());

        FrameReport {
            step,
            footprint,
            newly_blocked,
            attack_finished,
        }
    }
}
