use bevy::prelude::*;

/// Marker: a pool-owned projectile. Pooled projectiles exist for the whole
/// run; only their state toggles.
#[derive(Component)]
pub struct PooledProjectile;

/// Projectile lifecycle.
///
/// Inactive projectiles keep all their physics components but collide with
/// nothing (empty collision filters), so flipping this state never moves the
/// entity between archetypes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// Seconds since this projectile was fired.
///
/// A shot that never connects would otherwise fly forever; once the age
/// passes the configured bound the projectile is reclaimed.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ProjectileAge(pub f32);
