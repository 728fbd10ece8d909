//! Shape generation for 2D primitives
//!
//! Each frame lists shapes in draw order over a cleared background: balls
//! first, then the three sections of the player's hull.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Ball, Player, Universe};

/// RGBA color, components in 0..1
pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];

/// A filled world-space primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
}

/// One frame's worth of drawing: clear, then fill shapes in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub clear_color: Color,
    pub shapes: Vec<Shape>,
}

/// A ball as a filled circle at its on-screen radius
pub fn ball_shape(ball: &Ball) -> Shape {
    let (center, radius) = ball.screen_circle();
    Shape::Circle {
        center,
        radius,
        color: BLUE,
    }
}

/// The ship's hull as three filled polygons: the starboard and port halves
/// of the fuselage, then the nose triangle.
pub fn ship_shapes(player: &Player) -> [Shape; 3] {
    let p = player.hull_points();
    [
        Shape::Polygon {
            points: vec![p[0], p[1], p[2], p[3]],
            color: RED,
        },
        Shape::Polygon {
            points: vec![p[0], p[3], p[4], p[5]],
            color: BLUE,
        },
        Shape::Polygon {
            points: vec![p[2], p[4], p[6]],
            color: YELLOW,
        },
    ]
}

/// Describe the whole universe for one frame
pub fn frame(universe: &Universe) -> Frame {
    let mut shapes: Vec<Shape> = universe.balls.iter().map(ball_shape).collect();
    shapes.extend(ship_shapes(&universe.player));
    Frame {
        clear_color: BLACK,
        shapes,
    }
}
