//! Camera plugin (render-only).
//!
//! The camera is the player: shots leave from its pose, and targets home
//! toward the origin it starts at. On a handset the pose would come from the
//! device's tracking; on a desk the arrow keys turn and WASD strafes.
//!
//! `MainCamera` lives here but is deliberately dependency-free so gameplay
//! systems (fire, indicator) can query it without pulling in any render
//! infrastructure.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

/// Marker for the single gameplay camera.
#[derive(Component)]
pub struct MainCamera;

/// Radians per second of arrow-key turn.
const TURN_RATE: f32 = 1.6;
/// Meters per second of WASD movement.
const MOVE_RATE: f32 = 3.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(Update, look_controls.run_if(in_state(GameState::InGame)));
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 0.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn look_controls(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut q_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut tf) = q_camera.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    let mut yaw = 0.0_f32;
    let mut pitch = 0.0_f32;
    if keys.pressed(KeyCode::ArrowLeft) {
        yaw += 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        yaw -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        pitch += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        pitch -= 1.0;
    }

    if yaw != 0.0 {
        tf.rotate_y(yaw * TURN_RATE * dt);
    }
    if pitch != 0.0 {
        tf.rotate_local_x(pitch * TURN_RATE * dt);
    }

    let mut step = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        step.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        step.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        step.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        step.x += 1.0;
    }
    if step != Vec3::ZERO {
        let step = tf.rotation * step.normalize() * MOVE_RATE * dt;
        tf.translation += step;
    }
}
