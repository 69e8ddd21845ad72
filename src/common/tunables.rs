//! Tunable gameplay constants.
//!
//! Two controller generations of this game existed with hard-coded constants
//! sprinkled through them; everything that differed between them lives here
//! instead. Defaults are the newer tuning. `basic()` reproduces the older one
//! for comparison play-testing.

use bevy::prelude::*;

/// Inclusive per-axis sampling range for spawn positions.
///
/// A degenerate range (`lo == hi`) pins the axis.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRange {
    pub lo: f32,
    pub hi: f32,
}

impl SpawnRange {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub const fn fixed(v: f32) -> Self {
        Self { lo: v, hi: v }
    }

    pub fn contains(&self, v: f32) -> bool {
        (self.lo..=self.hi).contains(&v)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Per-frame (not per-second) nudge applied to each target coordinate
    /// outside the rest band.
    pub homing_step: f32,
    /// Half-width of the rest band around the origin, per axis (meters).
    pub rest_tolerance: f32,
    /// When true, a target that reaches the rest band counts as a miss and is
    /// removed. The newer controller shipped with this off.
    pub miss_on_rest: bool,

    /// Impulse magnitude applied to a fired projectile. Projectiles have unit
    /// mass, so this is also the muzzle speed in m/s.
    pub projectile_impulse: f32,
    /// Collider radius of a projectile (meters).
    pub projectile_radius: f32,
    /// Seconds an in-flight projectile may live before it is reclaimed.
    pub projectile_max_age: f32,
    /// Pre-spawned projectile pool size.
    pub pool_capacity: usize,

    /// Target collider edge length (meters).
    pub target_extent: f32,
    pub spawn_x: SpawnRange,
    pub spawn_y: SpawnRange,
    pub spawn_z: SpawnRange,

    /// First inter-spawn interval of the ramp (seconds).
    pub spawn_cooldown_initial: f32,
    /// Amount the interval shrinks after each spawn.
    pub spawn_cooldown_step: f32,
    /// The interval never shrinks below this.
    pub spawn_cooldown_floor: f32,

    /// Seconds a hit target lingers (playing its destruction effect) before
    /// it is removed from the world.
    pub removal_delay: f32,
    /// When true, a destroyed target is immediately replaced by a fresh
    /// spawn, independent of the ramp. Older-controller behaviour.
    pub respawn_on_kill: bool,

    /// Throttle the off-screen indicator to `indicator_interval` instead of
    /// recomputing it every frame.
    pub indicator_debounce: bool,
    pub indicator_interval: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            homing_step: 0.01,
            rest_tolerance: 0.1,
            miss_on_rest: false,
            projectile_impulse: 15.0,
            projectile_radius: 0.05,
            projectile_max_age: 10.0,
            pool_capacity: 64,
            target_extent: 0.5,
            spawn_x: SpawnRange::new(-10.0, 10.0),
            spawn_y: SpawnRange::new(0.0, 10.0),
            spawn_z: SpawnRange::fixed(-10.0),
            spawn_cooldown_initial: 10.0,
            spawn_cooldown_step: 0.5,
            spawn_cooldown_floor: 2.0,
            removal_delay: 0.1,
            respawn_on_kill: false,
            indicator_debounce: true,
            indicator_interval: 0.5,
        }
    }
}

impl Tunables {
    /// First-generation tuning: slow drift, unit impulse, ground-level
    /// spawns, instant replacement on kill.
    pub fn basic() -> Self {
        Self {
            homing_step: 0.001,
            miss_on_rest: true,
            projectile_impulse: 1.0,
            spawn_y: SpawnRange::fixed(0.0),
            removal_delay: 0.5,
            respawn_on_kill: true,
            indicator_debounce: false,
            ..Self::default()
        }
    }
}
