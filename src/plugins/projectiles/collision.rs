//! Hit resolution.
//!
//! The physics layers guarantee the only pairing ever reported here is
//! projectile ↔ target, so identification is just "which side is the pooled
//! projectile". Scoring counts spent projectiles: a second projectile
//! connecting with an already-dying target still scores, but the target's
//! `Alive → Dying` transition happens exactly once and a contact against a
//! target that is already gone is a no-op.

use avian3d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;
use crate::plugins::core::Score;
use crate::plugins::targets::TargetLifeState;

use super::components::{PooledProjectile, ProjectileState};

#[derive(Clone, Copy, Debug)]
struct ContactSide {
    collider: Entity,
    body: Option<Entity>,
}

impl ContactSide {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn sides(ev: &CollisionStart) -> (ContactSide, ContactSide) {
    (
        ContactSide {
            collider: ev.collider1,
            body: ev.body1,
        },
        ContactSide {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

pub fn process_projectile_contacts(
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a pooled projectile?" check
    q_is_projectile: Query<(), With<PooledProjectile>>,
    mut q_projectiles: Query<&mut ProjectileState, With<PooledProjectile>>,
    // Read layers from collider entities
    q_layers: Query<&CollisionLayers>,
    // Gameplay state
    mut q_life: Query<&mut TargetLifeState>,
    tunables: Res<Tunables>,
    mut score: ResMut<Score>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (s1, s2) = sides(ev);

        // Identify the projectile side without get_mut probing.
        let p1 = q_is_projectile.contains(s1.collider);
        let p2 = q_is_projectile.contains(s2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile_side, target_side) = if p1 { (s1, s2) } else { (s2, s1) };

        // One gameplay reaction per projectile per frame.
        if !seen.insert(projectile_side.collider) {
            continue;
        }

        let Ok(target_layers) = q_layers.get(target_side.collider) else {
            continue;
        };
        if !is_in_layer(target_layers, Layer::Target) {
            continue;
        }

        let Ok(mut state) = q_projectiles.get_mut(projectile_side.collider) else {
            continue;
        };
        if *state != ProjectileState::Active {
            continue;
        }

        // The projectile is spent either way, and each spent projectile scores.
        *state = ProjectileState::PendingReturn;
        score.0 += 1;

        // Alive -> Dying exactly once. A stale contact (target already dying
        // or despawned) falls through silently.
        let target = target_side.gameplay_owner();
        if let Ok(mut life) = q_life.get_mut(target)
            && matches!(*life, TargetLifeState::Alive)
        {
            *life = TargetLifeState::Dying {
                timer: Timer::from_seconds(tunables.removal_delay, TimerMode::Once),
            };
        }
    }
}
