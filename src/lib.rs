//! Topo Roids - an asteroids-like rigid-body toy on configurable topologies
//!
//! Core modules:
//! - `sim`: Deterministic simulation (affine transforms, motion, topology)
//! - `renderer`: World-space geometry description for external renderers
//! - `runner`: Single-threaded fixed-interval game loop
//! - `settings`: JSON-backed runtime configuration

pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Ball, Body, Player, Topology, Transform, Universe};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval in milliseconds
    pub const TICK_MS: u64 = 50;
    /// Fixed simulation timestep in seconds (20 Hz)
    pub const SIM_DT: f32 = TICK_MS as f32 / 1000.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Ship hull dimensions
    pub const SHIP_LENGTH: f32 = 30.0;
    pub const SHIP_WIDTH: f32 = 14.0;

    /// Per-keypress thrust along the ship's heading (per-tick velocity delta)
    pub const ACCELERATION: f32 = 0.5;
    /// Per-keypress turn rate delta (radians per tick)
    pub const ANGULAR_ACCELERATION: f32 = 0.02;

    /// Default ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 300.0;
    pub const BALL_START_VX: f32 = 0.2;
    pub const BALL_START_VY: f32 = 0.3;

    /// Player spawn (arena center)
    pub const PLAYER_START_X: f32 = ARENA_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = ARENA_HEIGHT / 2.0;
}
