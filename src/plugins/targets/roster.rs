//! Spawn-ordered roster of live targets.
//!
//! The roster is the single authority on which targets are live: a target is
//! pushed when it enters the world and removed exactly once when it leaves,
//! whatever the reason. Systems never touch the backing list directly.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct TargetRoster {
    live: Vec<Entity>,
}

impl TargetRoster {
    /// Append a newly spawned target. Order of insertion is spawn order.
    pub fn push(&mut self, target: Entity) {
        debug_assert!(!self.live.contains(&target));
        self.live.push(target);
    }

    /// Remove a target, returning whether it was still listed.
    ///
    /// Removing an absent target is a no-op: two projectiles can connect with
    /// the same target in one physics step, and only the first removal may
    /// find it.
    pub fn remove(&mut self, target: Entity) -> bool {
        match self.live.iter().position(|&t| t == target) {
            Some(i) => {
                self.live.remove(i);
                true
            }
            None => false,
        }
    }

    /// The earliest-spawned live target, if any.
    pub fn front(&self) -> Option<Entity> {
        self.live.first().copied()
    }

    pub fn contains(&self, target: Entity) -> bool {
        self.live.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Live targets in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.live.iter().copied()
    }
}
