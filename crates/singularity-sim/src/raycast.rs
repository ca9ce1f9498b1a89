//! Hit-scan queries against the scene.
//!
//! `SceneQuery` is the seam to the renderer's ray intersection. `HitboxScene`
//! answers it from the ECS world alone by testing enemy hit spheres.

use glam::Vec3;
use hecs::{Entity, World};

use singularity_core::components::{Enemy, EnemyBrain, Hitbox};
use singularity_core::enums::EnemyState;
use singularity_core::types::{Position, Ray};

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    /// Unit surface normal at `point`, facing back toward the shooter's side.
    pub normal: Vec3,
    pub distance: f32,
}

pub trait SceneQuery {
    /// Nearest targetable hit within `max_distance`, if any.
    fn cast_ray(&self, ray: &Ray, max_distance: f32) -> Option<RayHit>;
}

/// Ray test against the spherical hitboxes of live enemies.
pub struct HitboxScene<'w> {
    world: &'w World,
}

impl<'w> HitboxScene<'w> {
    pub fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl SceneQuery for HitboxScene<'_> {
    fn cast_ray(&self, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        let mut query = self
            .world
            .query::<(&Enemy, &Position, &Hitbox, &EnemyBrain)>();

        let mut nearest: Option<RayHit> = None;
        for (entity, (_enemy, pos, hitbox, brain)) in query.iter() {
            // Dead enemies are never targetable, even before cleanup.
            if brain.state == EnemyState::Dead {
                continue;
            }
            let Some(distance) = ray.intersect_sphere(pos.0, hitbox.radius) else {
                continue;
            };
            if distance > max_distance {
                continue;
            }
            if nearest.is_some_and(|n| n.distance <= distance) {
                continue;
            }

            let point = ray.at(distance);
            let normal = (point - pos.0).try_normalize().unwrap_or(-ray.direction);
            nearest = Some(RayHit {
                entity,
                point,
                normal,
                distance,
            });
        }
        nearest
    }
}
