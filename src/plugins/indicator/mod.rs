//! Off-screen direction indicator.
//!
//! Tracks the oldest live target: if its projected position falls outside the
//! viewport, one of two flags tells the UI which way to turn. The angle is
//! the 2D heading of the camera→target vector on the X/Y plane; negative
//! means "look left". The check is throttled to a fixed cadence; the player
//! cannot notice a half-second-stale arrow.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::targets::{Target, TargetRoster};

/// Which edge arrow the UI should show. Both flags off means the tracked
/// target is on screen (or there is nothing to track).
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub left: bool,
    pub right: bool,
}

impl IndicatorState {
    pub const NONE: Self = Self { left: false, right: false };
    pub const LEFT: Self = Self { left: true, right: false };
    pub const RIGHT: Self = Self { left: false, right: true };
}

/// Throttle for the projection test.
#[derive(Resource, Debug)]
struct IndicatorClock {
    timer: Timer,
}

/// Classify a heading angle for an off-screen target.
#[inline]
pub fn classify(angle: f32, on_screen: bool) -> IndicatorState {
    if on_screen {
        IndicatorState::NONE
    } else if angle < 0.0 {
        IndicatorState::LEFT
    } else {
        IndicatorState::RIGHT
    }
}

/// Heading of `target` as seen from `camera`, on the X/Y plane.
#[inline]
pub fn heading_angle(camera: Vec3, target: Vec3) -> f32 {
    let delta = target - camera;
    delta.y.atan2(delta.x)
}

pub fn plugin(app: &mut App) {
    let interval = app.world().resource::<Tunables>().indicator_interval;

    app.insert_resource(IndicatorState::default());
    app.insert_resource(IndicatorClock {
        timer: Timer::from_seconds(interval, TimerMode::Repeating),
    });

    app.add_systems(
        Update,
        update_indicator.run_if(in_state(GameState::InGame)),
    );
}

fn update_indicator(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut clock: ResMut<IndicatorClock>,
    roster: Res<TargetRoster>,
    q_targets: Query<&Transform, With<Target>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut state: ResMut<IndicatorState>,
) {
    if tunables.indicator_debounce {
        clock.timer.tick(time.delta());
        if !clock.timer.just_finished() {
            return;
        }
    }

    // Nothing to point at.
    let Some(tracked) = roster.front() else {
        *state = IndicatorState::NONE;
        return;
    };
    let Ok(target_tf) = q_targets.get(tracked) else {
        *state = IndicatorState::NONE;
        return;
    };

    let Ok((camera, cam_tf)) = q_camera.single() else {
        return;
    };

    let world_pos = target_tf.translation;
    let angle = heading_angle(cam_tf.translation(), world_pos);

    // A projection failure (e.g. the target is behind the camera) counts as
    // off screen.
    let on_screen = camera
        .world_to_viewport(cam_tf, world_pos)
        .ok()
        .zip(camera.logical_viewport_size())
        .is_some_and(|(p, size)| p.x >= 0.0 && p.x <= size.x && p.y >= 0.0 && p.y <= size.y);

    *state = classify(angle, on_screen);
}
