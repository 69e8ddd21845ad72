//! Collision layers.
//!
//! Targets and projectiles are the only categories that ever report contacts:
//! a projectile's filter contains only `Target` and a target's filter only
//! `Projectile`, so the narrow phase can never hand the gameplay code any
//! other pairing.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug)]
pub enum Layer {
    #[default]
    Default,
    Projectile,
    Target,
}
