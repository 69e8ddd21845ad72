//! Physics host setup.
//!
//! Avian owns motion integration and contact reporting; the gameplay plugins
//! only configure bodies and react to `CollisionStart` messages. Gravity is
//! zeroed globally: targets float and drift under their own homing rule, and
//! projectiles fly straight.

use avian3d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec3::ZERO));
}
