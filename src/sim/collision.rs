//! Collision detection against world bounds and static props
//!
//! Entities are axis-aligned boxes for the bounds test and circles (centered
//! in their box) for the prop test. Tests always run against the *proposed*
//! next position, never the current one.

use glam::Vec2;

use super::props::StaticProp;
use crate::{center_of, circles_overlap};

/// Result of probing one proposed position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionProbe {
    /// Box left the world rectangle
    pub out_of_bounds: bool,
    /// Per-prop verdicts, parallel to the prop slice. Empty when the bounds
    /// test already failed (props are not evaluated then).
    pub prop_hits: Vec<bool>,
}

impl CollisionProbe {
    /// Whether anything blocks the move
    pub fn blocked(&self) -> bool {
        self.out_of_bounds || self.prop_hits.iter().any(|&hit| hit)
    }

    /// Indices of props that blocked
    pub fn blocking_props(&self) -> impl Iterator<Item = usize> + '_ {
        self.prop_hits
            .iter()
            .enumerate()
            .filter_map(|(i, &hit)| hit.then_some(i))
    }
}

/// Box at `pos` with `size` leaves `[0, world.x] x [0, world.y]`
pub fn out_of_bounds(pos: Vec2, size: Vec2, world: Vec2) -> bool {
    pos.x < 0.0 || pos.x + size.x > world.x || pos.y < 0.0 || pos.y + size.y > world.y
}

/// Circle centered in the box at `pos` overlaps the prop
pub fn hits_prop(pos: Vec2, size: Vec2, radius: f32, prop: &StaticProp) -> bool {
    circles_overlap(center_of(pos, size), radius, prop.center, prop.radius())
}

/// Full probe of a proposed position. Every prop is evaluated so the debug
/// overlay can color each one.
pub fn probe(
    next_pos: Vec2,
    size: Vec2,
    radius: f32,
    world: Vec2,
    props: &[StaticProp],
) -> CollisionProbe {
    if out_of_bounds(next_pos, size, world) {
        return CollisionProbe {
            out_of_bounds: true,
            prop_hits: Vec::new(),
        };
    }

    CollisionProbe {
        out_of_bounds: false,
        prop_hits: props
            .iter()
            .map(|prop| hits_prop(next_pos, size, radius, prop))
            .collect(),
    }
}
