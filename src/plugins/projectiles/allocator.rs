//! Fire consumer: activate projectiles from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list contains only valid pooled projectile entities.
//! - Therefore, a pooled entity must match the projectile query.
//!
//! If this is violated, we `expect()` and crash loudly. An exhausted pool is
//! different: that is a capacity decision, and the request is dropped.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{PooledProjectile, ProjectileAge, ProjectileState};
use super::messages::SpawnProjectileRequest;
use super::pool::{ProjectilePool, active_projectile_layers};

pub fn allocate_projectiles_from_pool(
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q: Query<
        (
            &mut ProjectileState,
            &mut ProjectileAge,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for req in reader.read() {
        let Some(e) = pool.pop_free() else {
            debug!("projectile pool exhausted, dropping fire request");
            continue;
        };

        let (mut state, mut age, mut tf, mut vel, mut vis, mut layers) = q
            .get_mut(e)
            .expect("ProjectilePool contained an entity missing pooled projectile components");

        *state = ProjectileState::Active;
        age.0 = 0.0;
        tf.translation = req.position;
        vel.0 = req.velocity;
        *vis = Visibility::Visible;
        *layers = active_projectile_layers();
    }
}
