//! Fundamental geometric and simulation types.
//!
//! World axes follow the renderer: x = right, y = up, z = toward the viewer.
//! A camera with yaw 0 looks down -Z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space position (units are meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space velocity (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of active frames simulated so far.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

/// A half-line used for hit scanning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Distance on the ground plane, ignoring height.
    pub fn horizontal_distance_to(&self, other: &Position) -> f32 {
        let dx = other.0.x - self.0.x;
        let dz = other.0.z - self.0.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

impl Ray {
    /// Build a ray, normalizing the direction. Returns `None` for a zero direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest non-negative intersection distance with a sphere, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_d;
        (far >= 0.0).then_some(far)
    }
}
