//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// The player's score: one point per projectile that connects.
///
/// Non-negative and monotonically non-decreasing for the lifetime of a
/// session; it is zeroed only when a new session begins.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(Score::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}
