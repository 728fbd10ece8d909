//! Geometry description for external renderers
//!
//! The simulation never draws. This module turns universe state into
//! world-space circles and polygons that any backend (canvas, GPU, the
//! ASCII demo in `main`) can consume.

pub mod shapes;

pub use shapes::{Frame, Shape, frame};
