//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in playfield space (pixels). The origin is the top-left
/// corner, x grows right, y grows down. Positions name entity centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in playfield space (px/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Bounding size of an entity (pixels). The bounding box is centered
/// on the entity's position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle used for collision tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Heading toward another position in radians
    /// (0 = +x, counting toward +y, i.e. screen-down).
    pub fn heading_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity along a fixed heading at the given speed (px/s).
    pub fn from_heading(heading: f64, speed: f64) -> Self {
        Self {
            x: heading.cos() * speed,
            y: heading.sin() * speed,
        }
    }

    /// Speed magnitude (px/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Rect {
    /// Rectangle centered on `pos` with the given extent.
    pub fn centered(pos: &Position, extent: &Extent) -> Self {
        Self {
            left: pos.x - extent.width / 2.0,
            top: pos.y - extent.height / 2.0,
            right: pos.x + extent.width / 2.0,
            bottom: pos.y + extent.height / 2.0,
        }
    }

    /// AABB overlap test with strict inequalities: rectangles that merely
    /// share an edge do not collide. Symmetric in its arguments.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
