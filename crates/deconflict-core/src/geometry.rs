//! Geometry primitives for the mission model.

use serde::{Deserialize, Serialize};

/// A point in local Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point3D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2) + (other.z - self.z).powi(2))
            .sqrt()
    }

    /// Halfway point between `self` and `other`.
    pub fn midpoint(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Linear blend towards `other`; `u = 0` yields `self`, `u = 1` yields `other`.
    pub fn lerp(&self, other: &Point3D, u: f64) -> Point3D {
        Point3D {
            x: self.x + u * (other.x - self.x),
            y: self.y + u * (other.y - self.y),
            z: self.z + u * (other.z - self.z),
        }
    }
}
