//! Projectile lifetime bound.
//!
//! A shot that misses everything keeps its velocity forever under zero
//! gravity. Aging active projectiles out reclaims them through the normal
//! return path.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{PooledProjectile, ProjectileAge, ProjectileState};

pub fn expire_projectiles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut ProjectileState, &mut ProjectileAge), With<PooledProjectile>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut age) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }

        age.0 += dt;
        if age.0 > tunables.projectile_max_age {
            *state = ProjectileState::PendingReturn;
            debug!("projectile expired without contact");
        }
    }
}
