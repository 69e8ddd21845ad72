//! Buffered fire requests.
//!
//! The tap handler only records *intent*; the allocator is the single writer
//! that touches the pool. Producer and consumer stay decoupled through a
//! message queue, the same producer → queue → consumer pipeline used for
//! every structural mutation in this crate.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    /// Muzzle position: the camera's world-space translation.
    pub position: Vec3,
    /// Instantaneous impulse; projectiles have unit mass, so this is the
    /// initial velocity.
    pub velocity: Vec3,
}
