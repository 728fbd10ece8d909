//! Rigid-body motion state
//!
//! A [`Body`] owns three transforms: its pose (local frame to world frame),
//! a velocity transform (per-tick displacement), and an angular-velocity
//! transform (per-tick rotation). Stepping is pure transform arithmetic; no
//! forces, no integration beyond the first-order per-tick delta.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::topology::{self, Topology};
use super::transform::Transform;

/// Motion state shared by every object in the universe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Placement in the world frame
    pub pose: Transform,
    /// Per-tick displacement (pure translation)
    pub velocity: Transform,
    /// Per-tick rotation (pure linear)
    pub angular_velocity: Transform,
}

impl Body {
    /// A body at `pos` moving by `vel` per tick, not spinning
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pose: Transform::translation(pos.x, pos.y),
            velocity: Transform::translation(vel.x, vel.y),
            angular_velocity: Transform::IDENTITY,
        }
    }

    /// Current world position (the pose applied to the local origin)
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pose.apply(Vec2::ZERO)
    }

    /// Current facing: the linear part of the pose
    #[inline]
    pub fn orientation(&self) -> Transform {
        self.pose.linear_part()
    }

    /// Magnitude of the per-tick displacement
    pub fn speed(&self) -> f32 {
        self.velocity.apply(Vec2::ZERO).length()
    }

    /// Advance one tick, then re-map across the arena boundary if needed.
    ///
    /// The linear part composes orientation first, angular velocity second,
    /// and the new translation never passes through the linear part. Any
    /// other grouping would let a nonzero spin continuously redirect the
    /// translational velocity, bending straight-line motion.
    pub fn step(&mut self, topology: Topology) {
        let linear = self.orientation().compose(self.angular_velocity);
        let translate = self.pose.translate_part().compose(self.velocity);
        self.pose = linear.compose(translate);
        topology::adjust(self, topology);
    }

    /// Thrust by `(vx, vy)` along the body's current heading.
    ///
    /// The local-frame thrust is conjugated through the orientation to get a
    /// world-frame velocity delta, then composed into the velocity so that
    /// repeated thrust accumulates.
    pub fn accelerate(&mut self, vx: f32, vy: f32) {
        let relative = Transform::translation(vx, vy).conjugate(self.orientation());
        self.velocity = self.velocity.compose(relative);
    }

    /// Add `radians` per tick of spin, expressed in the body's own frame
    pub fn angular_accelerate(&mut self, radians: f32) {
        let relative = Transform::rotation(radians).conjugate(self.orientation());
        self.angular_velocity = self.angular_velocity.compose(relative);
    }

    /// A world-frame rigid event (boundary reflection or rotation) happened
    /// to this body: compose `r` into the pose and re-express velocity and
    /// angular velocity in the new frame via conjugation by `r`'s linear
    /// part, so they stay consistent with the repositioned pose.
    pub fn apply_transform(&mut self, r: Transform) {
        self.pose = self.pose.compose(r);
        let orientation = r.linear_part();
        self.velocity = self.velocity.conjugate(orientation);
        self.angular_velocity = self.angular_velocity.conjugate(orientation);
    }
}
