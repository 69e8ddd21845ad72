//! Pre-spawned projectile pool.
//!
//! Inactive projectiles stay in the world with empty collision filters: they
//! collide with nothing and generate no contact messages, and activation is
//! pure component writes with no archetype churn.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

use super::components::{PooledProjectile, ProjectileAge, ProjectileState};

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    free: Vec<Entity>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots right now.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    pub fn pop_free(&mut self) -> Option<Entity> {
        self.free.pop()
    }

    pub fn push_free(&mut self, projectile: Entity) {
        self.free.push(projectile);
    }
}

/// Active projectiles contact targets and nothing else.
#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::Target])
}

/// "Disabled" without structural changes: empty filters collide with nothing.
#[inline]
pub fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

/// Pre-spawn the whole pool, inactive.
pub fn init_projectile_pool(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
) {
    for _ in 0..pool.capacity {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                ProjectileState::Inactive,
                ProjectileAge::default(),
                Transform::default(),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::sphere(tunables.projectile_radius),
                inactive_projectile_layers(),
                LinearVelocity(Vec3::ZERO),
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(e);
    }
}
