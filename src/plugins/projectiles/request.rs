use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;

use super::messages::SpawnProjectileRequest;

/// Producer: turn a tap into a fire request.
///
/// The shot leaves from the camera's world position along its facing
/// direction: the camera looks down its local -Z axis, so the negated third
/// basis column of the world transform is the muzzle direction.
///
/// This system intentionally does **not** access the pool.
pub fn fire_on_tap(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    tunables: Res<Tunables>,
    q_camera: Query<&GlobalTransform, With<MainCamera>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let cam_tf = match q_camera.single() {
        Ok(tf) => tf,
        Err(e) => {
            debug!("No single MainCamera: {e:?}");
            return;
        }
    };

    let tf = cam_tf.compute_transform();
    let direction = tf.rotation * -Vec3::Z;

    writer.write(SpawnProjectileRequest {
        position: tf.translation,
        velocity: direction * tunables.projectile_impulse,
    });
}
