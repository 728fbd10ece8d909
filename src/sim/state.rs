//! Universe state and the objects living in it
//!
//! A [`Universe`] owns a fixed set of balls and exactly one player ship.
//! The set never changes during a run; switching topology or resetting
//! replaces the whole universe.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::topology::Topology;
use crate::consts::*;

/// A ball, drawn as a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel),
            radius,
        }
    }

    /// World-space circle for rendering: center and on-screen radius.
    ///
    /// The radius is the length of the linear part applied to `(radius, 0)`.
    /// With a skew transform the ball would really be an oval, but only
    /// rotations and reflections ever reach a pose, so this is exact.
    pub fn screen_circle(&self) -> (Vec2, f32) {
        let center = self.body.position();
        let radius = self
            .body
            .orientation()
            .apply(Vec2::new(self.radius, 0.0))
            .length();
        (center, radius)
    }
}

/// The player's ship, an arrow-like hull pointing along local +x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
}

/// Local-frame hull vertices: two stacked rectangles plus a nose tip
const HULL: [Vec2; 7] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, -SHIP_WIDTH / 2.0),
    Vec2::new(SHIP_LENGTH, -SHIP_WIDTH / 2.0),
    Vec2::new(SHIP_LENGTH, 0.0),
    Vec2::new(SHIP_LENGTH, SHIP_WIDTH / 2.0),
    Vec2::new(0.0, SHIP_WIDTH / 2.0),
    // Nose: an equilateral-ish triangle tip past the hull front
    Vec2::new(SHIP_LENGTH + SHIP_WIDTH / 2.0 * 1.732_050_8, 0.0),
];

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO),
        }
    }

    /// Hull vertices mapped to world space through the current pose
    pub fn hull_points(&self) -> [Vec2; 7] {
        HULL.map(|p| self.body.pose.apply(p))
    }

    pub fn left(&mut self) {
        self.body.angular_accelerate(-ANGULAR_ACCELERATION);
    }

    pub fn right(&mut self) {
        self.body.angular_accelerate(ANGULAR_ACCELERATION);
    }

    pub fn forward(&mut self) {
        self.body.accelerate(ACCELERATION, 0.0);
    }

    pub fn reverse(&mut self) {
        self.body.accelerate(-ACCELERATION, 0.0);
    }
}

/// The complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub topology: Topology,
    /// Balls step in this order, before the player
    pub balls: Vec<Ball>,
    pub player: Player,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Universe {
    /// The fixed starting world: the player at the arena center and one
    /// ball drifting up-right.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            balls: vec![Ball::new(
                Vec2::new(BALL_START_X, BALL_START_Y),
                Vec2::new(BALL_START_VX, BALL_START_VY),
                BALL_RADIUS,
            )],
            player: Player::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y)),
            time_ticks: 0,
        }
    }

    /// A universe with `count` deterministically scattered balls (seeded,
    /// reproducible). Used by the demo binary.
    pub fn scatter(topology: Topology, seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(50.0..ARENA_WIDTH - 50.0),
                    rng.random_range(50.0..ARENA_HEIGHT - 50.0),
                );
                let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                let radius = rng.random_range(4.0..16.0);
                Ball::new(pos, vel, radius)
            })
            .collect();
        Self {
            topology,
            balls,
            player: Player::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y)),
            time_ticks: 0,
        }
    }

    /// Advance every object one tick, balls first, then the player.
    ///
    /// `dt` is accepted for interface symmetry with the driving loop but
    /// does not scale the motion: velocities are per-tick deltas and the
    /// loop runs at a fixed cadence.
    pub fn step(&mut self, _dt: f32) {
        for ball in &mut self.balls {
            ball.body.step(self.topology);
        }
        self.player.body.step(self.topology);
        self.time_ticks += 1;
    }
}
