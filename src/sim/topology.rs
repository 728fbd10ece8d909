//! Arena boundary topologies
//!
//! The arena is a 500×500 square whose edges can be glued five different
//! ways. Each topology is an ordered list of boundary checks run after a
//! body steps; a check either reflects/rotates the body through
//! [`Body::apply_transform`] (which also re-expresses its velocities) or,
//! for the plain torus wrap, composes a translation straight into the pose.
//!
//! The check lists nest: the projective plane runs its own reflection plus
//! everything the Klein bottle runs, which in turn includes the torus wrap.
//! The sphere stands alone.

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::body::Body;
use super::transform::Transform;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// How the arena's edges are glued together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// No gluing; bodies drift off the edge
    Plane,
    /// Opposite edges glued with a flip on both axes
    ProjPlane,
    /// Left/right flipped, top/bottom wrapped
    Klein,
    /// Opposite edges wrapped
    #[default]
    Torus,
    /// Edge crossings rotate the world a quarter turn
    Sphere,
}

impl Topology {
    pub const ALL: [Topology; 5] = [
        Topology::Plane,
        Topology::ProjPlane,
        Topology::Klein,
        Topology::Torus,
        Topology::Sphere,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Plane => "plane",
            Topology::ProjPlane => "proj_plane",
            Topology::Klein => "klein",
            Topology::Torus => "torus",
            Topology::Sphere => "sphere",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plane" => Some(Topology::Plane),
            "proj_plane" | "projective" => Some(Topology::ProjPlane),
            "klein" => Some(Topology::Klein),
            "torus" => Some(Topology::Torus),
            "sphere" => Some(Topology::Sphere),
            _ => None,
        }
    }
}

/// One boundary check: receives the position sampled before any correction
type BoundaryCheck = fn(&mut Body, Vec2);

/// Ordered correction chain per topology
fn checks(topology: Topology) -> &'static [BoundaryCheck] {
    match topology {
        Topology::Plane => &[],
        Topology::ProjPlane => &[reflect_x_boundary, reflect_y_boundary, wrap_boundary],
        Topology::Klein => &[reflect_y_boundary, wrap_boundary],
        Topology::Torus => &[wrap_boundary],
        Topology::Sphere => &[sphere_boundary],
    }
}

/// Re-map a body that crossed the arena boundary under the given topology.
///
/// The position is sampled once; every check in the chain sees the same
/// pre-correction coordinates, so a corner crossing can fire several checks
/// in one tick.
pub fn adjust(body: &mut Body, topology: Topology) {
    let pos = body.position();
    for check in checks(topology) {
        check(body, pos);
    }
}

/// Frame centered on the middle of the arena
fn arena_center() -> Transform {
    Transform::translation(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}

/// Crossing a vertical edge reflects the world across x, about the center
fn reflect_x_boundary(body: &mut Body, pos: Vec2) {
    if pos.x < 0.0 || pos.x > ARENA_WIDTH {
        body.apply_transform(Transform::REFLECT_X.conjugate(arena_center()));
    }
}

/// Crossing a horizontal edge reflects the world across y, about the center
fn reflect_y_boundary(body: &mut Body, pos: Vec2) {
    if pos.y < 0.0 || pos.y > ARENA_HEIGHT {
        body.apply_transform(Transform::REFLECT_Y.conjugate(arena_center()));
    }
}

/// Torus wrap: a pure positional shift, so it composes straight into the
/// pose; velocity and angular velocity are untouched. Each axis wraps
/// independently (a corner crossing wraps both).
fn wrap_boundary(body: &mut Body, pos: Vec2) {
    if pos.x < 0.0 {
        body.pose = body.pose.compose(Transform::translation(ARENA_WIDTH, 0.0));
    }
    if pos.x > ARENA_WIDTH {
        body.pose = body.pose.compose(Transform::translation(-ARENA_WIDTH, 0.0));
    }
    if pos.y < 0.0 {
        body.pose = body.pose.compose(Transform::translation(0.0, ARENA_HEIGHT));
    }
    if pos.y > ARENA_HEIGHT {
        body.pose = body.pose.compose(Transform::translation(0.0, -ARENA_HEIGHT));
    }
}

/// Sphere gluing: each edge crossing is a world-frame quarter turn, about
/// the origin for the near edges and about the far corner for the others.
/// The y > height crossing applies the same correction as x > width.
fn sphere_boundary(body: &mut Body, pos: Vec2) {
    if pos.x < 0.0 {
        body.apply_transform(Transform::rotation(-FRAC_PI_2));
    }
    if pos.y < 0.0 {
        body.apply_transform(Transform::rotation(FRAC_PI_2));
    }
    let far_corner =
        Transform::rotation(-FRAC_PI_2).conjugate(Transform::translation(ARENA_WIDTH, ARENA_HEIGHT));
    if pos.x > ARENA_WIDTH {
        body.apply_transform(far_corner);
    }
    if pos.y > ARENA_HEIGHT {
        body.apply_transform(far_corner);
    }
}
