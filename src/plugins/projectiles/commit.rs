//! Return commit: recycle spent projectiles back into the pool.
//!
//! This system owns the *Inactive invariants*: hidden, velocity zero,
//! filters empty. Centralizing these writes here prevents inconsistencies.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledProjectile, ProjectileState};
use super::pool::{ProjectilePool, inactive_projectile_layers};

pub fn return_to_pool_commit(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<
        (
            Entity,
            &mut ProjectileState,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != ProjectileState::PendingReturn {
            continue;
        }

        *state = ProjectileState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec3::ZERO;
        *layers = inactive_projectile_layers();

        pool.push_free(e);
    }
}
