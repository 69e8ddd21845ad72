//! Projectiles plugin: **message-based producer → consumer** firing + pooling.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt)
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  (A) Producer: fire_on_tap                                       │
//! │      - reads: MouseButton input, MainCamera GlobalTransform      │
//! │      - writes: SpawnProjectileRequest message                    │
//! │                                                                  │
//! │  (B) Consumer: allocate_projectiles_from_pool                    │
//! │      - reads: SpawnProjectileRequest messages                    │
//! │      - mutates: ProjectilePool free list + projectile components │
//! │                                                                  │
//! │  (C) expire_projectiles: ages out shots that never connect       │
//! └──────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate (fixed dt)
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  (D) Physics emits CollisionStart messages (Avian)               │
//! │                                                                  │
//! │  (E) process_projectile_contacts                                 │
//! │      - spends the projectile, scores, flips the target to Dying  │
//! │                                                                  │
//! │  (F) return_to_pool_commit                                       │
//! │      - writes the Inactive invariants, refills the free list     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow the pool; the allocator is its single writer. The
//! only real-world branches are a missing camera (no request) and an empty
//! pool (request dropped); everything else is treated as an invariant.

pub mod age;
pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod messages;
pub mod pool;
pub mod request;

use avian3d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub struct ProjectilesPlugin;

/// Maintain fire request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_fire_messages(mut msgs: ResMut<Messages<messages::SpawnProjectileRequest>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app.world().resource::<Tunables>().pool_capacity;

        // Pool + pre-spawn
        app.insert_resource(pool::ProjectilePool::new(capacity))
            .add_systems(Startup, pool::init_projectile_pool);

        // Message storage for fire requests.
        app.init_resource::<Messages<messages::SpawnProjectileRequest>>();
        app.add_systems(PostUpdate, update_fire_messages);

        // Update-phase pipeline: tap -> request -> allocate; plus lifetime bound.
        app.add_systems(
            Update,
            (
                request::fire_on_tap,
                allocator::allocate_projectiles_from_pool.after(request::fire_on_tap),
                age::expire_projectiles,
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline
        app.add_systems(
            FixedPostUpdate,
            collision::process_projectile_contacts
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            commit::return_to_pool_commit
                .after(collision::process_projectile_contacts)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
