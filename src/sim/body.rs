//! Kinematic body shared by every moving actor
//!
//! Velocity is in pixels per rendered frame. Acceleration and drag happen on
//! control ticks; integration and collision happen once per rendered frame.

use glam::{BVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::{CollisionProbe, probe};
use super::props::StaticProp;
use crate::center_of;

/// Movement tuning for one kind of actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub size: Vec2,
    /// Collision circle radius (circle centered in the box)
    pub radius: f32,
    /// Per-axis velocity limit
    pub velocity_cap: f32,
    /// Per-tick decay toward zero
    pub drag: f32,
    /// Per-tick input step
    pub acceleration: f32,
}

/// Outcome of one integration step
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Position before the step
    pub prev_pos: Vec2,
    /// Position the body tried to reach
    pub next_pos: Vec2,
    /// Whether the position was committed
    pub moved: bool,
    pub probe: CollisionProbe,
}

/// Position/velocity state of one actor.
///
/// Invariant: `|vel.x| <= velocity_cap` and `|vel.y| <= velocity_cap` after
/// every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner in world space
    pub pos: Vec2,
    vel: Vec2,
    pub kin: Kinematics,
    /// Axes that received acceleration since the last drag tick
    #[serde(skip)]
    pushed: [bool; 2],
}

/// Move one velocity component toward zero by `drag`, snapping when it would cross
#[inline]
pub fn drag_axis(v: f32, drag: f32) -> f32 {
    if v.abs() < drag {
        0.0
    } else {
        v - drag * v.signum()
    }
}

impl Body {
    pub fn new(pos: Vec2, kin: Kinematics) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            kin,
            pushed: [false; 2],
        }
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.kin.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        center_of(self.pos, self.kin.size)
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Overwrite velocity (clamped)
    pub fn set_vel(&mut self, vel: Vec2) {
        let cap = self.kin.velocity_cap;
        self.vel = vel.clamp(Vec2::splat(-cap), Vec2::splat(cap));
    }

    /// Accelerate by `delta`, clamping each axis independently
    pub fn move_by(&mut self, delta: Vec2) {
        self.set_vel(self.vel + delta);
        let pushed = delta.cmpne(Vec2::ZERO);
        self.pushed[0] |= pushed.x;
        self.pushed[1] |= pushed.y;
    }

    /// Natural slow-down for one control tick. Axes accelerated during this
    /// tick keep their speed.
    pub fn apply_drag(&mut self) {
        let drag = self.kin.drag;
        let keep = BVec2::new(self.pushed[0], self.pushed[1]);
        let dragged = Vec2::new(drag_axis(self.vel.x, drag), drag_axis(self.vel.y, drag));
        self.vel = Vec2::select(keep, self.vel, dragged);
        self.pushed = [false; 2];
    }

    /// Integrate one rendered frame. The position only changes if the
    /// proposed one is clear; velocity is never touched here.
    pub fn integrate(&mut self, world: Vec2, props: &[StaticProp]) -> Step {
        let prev_pos = self.pos;
        let next_pos = prev_pos + self.vel;
        let probe = probe(next_pos, self.kin.size, self.kin.radius, world, props);
        let moved = !probe.blocked();
        if moved {
            self.pos = next_pos;
        }
        Step {
            prev_pos,
            next_pos,
            moved,
            probe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::props::PropKind;
    use proptest::prelude::*;

    fn kin(size: f32) -> Kinematics {
        Kinematics {
            size: Vec2::splat(size),
            radius: 20.0,
            velocity_cap: 4.0,
            drag: 1.4,
            acceleration: 2.8,
        }
    }

    #[test]
    fn test_move_by_clamps_each_axis() {
        let mut body = Body::new(Vec2::ZERO, kin(10.0));
        body.move_by(Vec2::new(3.0, -3.0));
        body.move_by(Vec2::new(3.0, -3.0));
        assert_eq!(body.vel(), Vec2::new(4.0, -4.0));
        body.move_by(Vec2::new(-100.0, 0.0));
        assert_eq!(body.vel(), Vec2::new(-4.0, -4.0));
    }

    #[test]
    fn test_drag_snaps_below_constant() {
        assert_eq!(drag_axis(1.0, 1.4), 0.0);
        assert_eq!(drag_axis(-1.0, 1.4), 0.0);
        assert!((drag_axis(4.0, 1.4) - 2.6).abs() < 1e-6);
        assert!((drag_axis(-4.0, 1.4) + 2.6).abs() < 1e-6);
        assert_eq!(drag_axis(0.0, 1.4), 0.0);
    }

    #[test]
    fn test_drag_skips_accelerated_axis() {
        let mut body = Body::new(Vec2::ZERO, kin(10.0));
        body.set_vel(Vec2::new(4.0, 4.0));
        body.move_by(Vec2::new(2.8, 0.0));
        body.apply_drag();
        assert_eq!(body.vel().x, 4.0);
        assert!((body.vel().y - 2.6).abs() < 1e-6);

        // Pushed flags reset after each drag tick
        body.apply_drag();
        assert!((body.vel().x - 2.6).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_rejects_move_and_keeps_velocity() {
        let mut body = Body::new(Vec2::ZERO, kin(10.0));
        body.set_vel(Vec2::new(-1.0, -1.0));
        let step = body.integrate(Vec2::new(100.0, 100.0), &[]);
        assert!(!step.moved);
        assert!(step.probe.out_of_bounds);
        assert_eq!(step.next_pos, Vec2::new(-1.0, -1.0));
        assert_eq!(body.pos, Vec2::ZERO);
        assert_eq!(body.vel(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_integrate_commits_clear_move() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), kin(10.0));
        body.set_vel(Vec2::new(2.0, -1.0));
        let step = body.integrate(Vec2::new(100.0, 100.0), &[]);
        assert!(step.moved);
        assert_eq!(body.pos, Vec2::new(12.0, 9.0));
    }

    #[test]
    fn test_prop_freezes_position() {
        let props = [StaticProp::new(Vec2::new(50.0, 50.0), PropKind::Umbrella, false)];
        let mut body = Body::new(Vec2::new(0.0, 45.0), kin(10.0));
        body.set_vel(Vec2::new(4.0, 0.0));
        // Center starts at (5, 50): 45 units away, already inside 50
        let step = body.integrate(Vec2::new(1000.0, 1000.0), &props);
        assert!(!step.moved);
        assert_eq!(body.pos, Vec2::new(0.0, 45.0));
    }

    proptest! {
        #[test]
        fn prop_velocity_never_exceeds_cap(
            deltas in prop::collection::vec((-50.0f32..50.0, -50.0f32..50.0), 1..40),
        ) {
            let mut body = Body::new(Vec2::ZERO, kin(10.0));
            for (dx, dy) in deltas {
                body.move_by(Vec2::new(dx, dy));
                prop_assert!(body.vel().x.abs() <= 4.0);
                prop_assert!(body.vel().y.abs() <= 4.0);
                body.apply_drag();
                prop_assert!(body.vel().x.abs() <= 4.0);
                prop_assert!(body.vel().y.abs() <= 4.0);
            }
        }

        #[test]
        fn prop_drag_settles_at_zero(vx in -4.0f32..4.0, vy in -4.0f32..4.0) {
            let mut body = Body::new(Vec2::ZERO, kin(10.0));
            body.set_vel(Vec2::new(vx, vy));
            // cap / drag rounds up to 3 ticks
            for _ in 0..3 {
                body.apply_drag();
            }
            prop_assert_eq!(body.vel(), Vec2::ZERO);
            body.apply_drag();
            prop_assert_eq!(body.vel(), Vec2::ZERO);
        }
    }
}
