//! Session plugin: tracking-tier selection and session diagnostics.
//!
//! The tracking tier is configuration detection, not simulation: devices with
//! a new enough chip get full six-degree-of-freedom world tracking, everything
//! else degrades to orientation-only tracking. That is a capability fallback,
//! never an error. Desktop builds read the model identifier from the
//! `DEVICE_MODEL` environment variable and assume full tracking when unset.
//!
//! Losing window focus is the closest desktop analog of a tracking
//! interruption; the policy for both is the same: report it and carry on.

use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::common::state::GameState;

/// Model identifiers with at least the chip generation required for world
/// tracking (A9 or newer).
const WORLD_TRACKING_MODELS: &[&str] = &[
    "iPhone8,1", "iPhone8,2", "iPhone8,4", "iPhone9,1", "iPhone9,2", "iPhone9,3", "iPhone9,4",
    "iPad6,7", "iPad6,8", "iPad6,3", "iPad6,4", "iPad6,11", "iPad6,12",
];

/// Tracking quality tier the host engine runs the session with.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingTier {
    /// Full 6-DOF world tracking.
    WorldTracking,
    /// Rotation-only fallback for older hardware.
    OrientationOnly,
}

impl TrackingTier {
    /// Tier for a device-model identifier string.
    pub fn for_device_model(model: &str) -> Self {
        if WORLD_TRACKING_MODELS.contains(&model) {
            Self::WorldTracking
        } else {
            Self::OrientationOnly
        }
    }

    /// Tier for the machine we are running on.
    pub fn detect() -> Self {
        match std::env::var("DEVICE_MODEL") {
            Ok(model) => Self::for_device_model(&model),
            // Not a constrained handheld: no reason to degrade.
            Err(_) => Self::WorldTracking,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(TrackingTier::detect());
    app.add_message::<WindowFocused>();
    app.add_systems(Startup, report_tracking_tier);
    app.add_systems(
        Update,
        report_session_interruptions.run_if(in_state(GameState::InGame)),
    );
}

fn report_tracking_tier(tier: Res<TrackingTier>) {
    info!("session configured with {:?}", *tier);
}

fn report_session_interruptions(mut focus: MessageReader<WindowFocused>) {
    for ev in focus.read() {
        if ev.focused {
            info!("session interruption ended");
        } else {
            warn!("session interrupted");
        }
    }
}
