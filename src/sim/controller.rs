//! Input sources for actors
//!
//! Every actor is driven by a `Controller` that turns the world into a
//! `Command` once per control tick. The player reads the keyboard; zombies
//! chase the player (or drift in a fixed direction).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::platform::KeyboardState;

/// What an actor wants to do this control tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Per-axis direction, each component in {-1, 0, 1}
    pub thrust: Vec2,
    pub attack: bool,
}

impl Command {
    pub fn idle() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    /// Live keyboard state
    Keyboard,
    /// Step toward the target on each axis independently
    Chase,
    /// Constant push in one direction, ignoring the target
    Drift(Vec2),
}

/// -1, 0 or 1 depending on which side of `from` the `to` coordinate is
#[inline]
fn toward(from: f32, to: f32) -> f32 {
    if from > to {
        -1.0
    } else if from < to {
        1.0
    } else {
        0.0
    }
}

impl Controller {
    /// Decide this tick's command. `me` and `target` are top-left positions.
    pub fn command(&self, me: Vec2, target: Option<Vec2>, keyboard: &KeyboardState) -> Command {
        match *self {
            Controller::Keyboard => {
                let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
                Command {
                    thrust: Vec2::new(
                        axis(keyboard.left, keyboard.right),
                        axis(keyboard.up, keyboard.down),
                    ),
                    attack: keyboard.attack,
                }
            }
            Controller::Chase => match target {
                Some(target) => Command {
                    thrust: Vec2::new(toward(me.x, target.x), toward(me.y, target.y)),
                    attack: false,
                },
                None => Command::idle(),
            },
            Controller::Drift(dir) => Command {
                thrust: Vec2::new(toward(0.0, dir.x), toward(0.0, dir.y)),
                attack: false,
            },
        }
    }
}
