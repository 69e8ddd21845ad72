//! Targets plugin: the invaders the player has to shoot down.
//!
//! A target spawns somewhere in front of the player and drifts toward the
//! origin (the player's position) a fixed step per rendered frame. Reaching
//! the origin band means it got through; being hit puts it into a short
//! `Dying` window so the destruction effect can play, after which it leaves
//! the roster and the world in the same frame.
//!
//! Lifecycle rules live here; the hit detection that triggers `Dying` lives
//! in the projectiles plugin. Despawning is deferred to `PostUpdate` via the
//! `PendingDespawn` marker so no system ever observes a half-removed target.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::core::Score;

pub mod roster;

pub use roster::TargetRoster;

/// Marker: a destructible invader.
#[derive(Component)]
pub struct Target;

/// Target lifecycle state machine.
///
/// - `Alive`: drifting toward the player, collidable.
/// - `Dying`: hit; lingers for the removal delay while shrinking away.
/// - `Dead`: terminal marker so nothing transitions twice.
#[derive(Component, Debug, Clone)]
pub enum TargetLifeState {
    Alive,
    Dying { timer: Timer },
    Dead,
}

/// Marker: target should be removed from the world.
///
/// Despawning happens in one `PostUpdate` system instead of wherever a rule
/// fires, which keeps structural changes out of the fixed step.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// The accelerating spawn schedule.
///
/// Each spawn books the next one `cooldown` seconds out and shrinks the
/// cooldown, floored at `spawn_cooldown_floor`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnSchedule {
    /// Simulated time after which the next spawn is permitted.
    pub deadline: f64,
    /// Interval booked by the next spawn.
    pub cooldown: f32,
}

impl SpawnSchedule {
    /// A schedule whose first spawn is permitted immediately.
    pub fn immediate(now: f64, cooldown: f32) -> Self {
        Self { deadline: now, cooldown }
    }

    /// If `now` has passed the deadline, book the next spawn and advance the
    /// ramp. Returns whether a spawn is due.
    pub fn try_advance(&mut self, now: f64, step: f32, floor: f32) -> bool {
        if now <= self.deadline {
            return false;
        }
        if self.cooldown >= floor {
            self.deadline = now + f64::from(self.cooldown);
            self.cooldown -= step;
        } else {
            self.deadline = now + f64::from(floor);
        }
        true
    }
}

/// One homing step for a single coordinate.
///
/// Coordinates inside the rest band stay put; everything else moves a fixed
/// `step` toward zero. Linear convergence: a coordinate at distance `d`
/// enters the band after `ceil((|d| - tolerance) / step)` frames and cannot
/// jump across it.
#[inline]
pub fn home_axis(value: f32, step: f32, tolerance: f32) -> f32 {
    if value > tolerance {
        value - step
    } else if value < -tolerance {
        value + step
    } else {
        value
    }
}

/// Whether all three coordinates sit inside the rest band.
#[inline]
pub fn at_rest(position: Vec3, tolerance: f32) -> bool {
    position.x.abs() <= tolerance && position.y.abs() <= tolerance && position.z.abs() <= tolerance
}

/// Sample a spawn position, each axis uniform and inclusive.
pub fn sample_spawn_position(tunables: &Tunables, rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(tunables.spawn_x.lo..=tunables.spawn_x.hi),
        rng.random_range(tunables.spawn_y.lo..=tunables.spawn_y.hi),
        rng.random_range(tunables.spawn_z.lo..=tunables.spawn_z.hi),
    )
}

/// Spawn one target at `position` and list it on the roster.
pub fn spawn_target(
    commands: &mut Commands,
    roster: &mut TargetRoster,
    tunables: &Tunables,
    position: Vec3,
) -> Entity {
    let extent = tunables.target_extent;
    let target = commands
        .spawn((
            Name::new("Target"),
            Target,
            TargetLifeState::Alive,
            Transform::from_translation(position),
            RigidBody::Kinematic,
            Collider::cuboid(extent, extent, extent),
            CollisionLayers::new(Layer::Target, [Layer::Projectile]),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    roster.push(target);
    debug!("spawned target {target} at {position}");
    target
}

pub fn plugin(app: &mut App) {
    let cooldown = app.world().resource::<Tunables>().spawn_cooldown_initial;

    app.insert_resource(TargetRoster::default());
    app.insert_resource(SpawnSchedule::immediate(0.0, cooldown));

    app.add_systems(OnEnter(GameState::InGame), begin_session);

    // Per rendered frame: drift, then see whether the ramp owes us a spawn.
    app.add_systems(
        Update,
        (home_targets, run_spawn_ramp).run_if(in_state(GameState::InGame)),
    );

    // Fixed-step: death progress runs after hit resolution so it sees fresh
    // Dying timers.
    app.add_systems(
        FixedPostUpdate,
        target_death_progress
            .after(crate::plugins::projectiles::collision::process_projectile_contacts)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_targets.run_if(in_state(GameState::InGame)),
    );
}

/// Reset session state and seed the world with the first target.
fn begin_session(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut score: ResMut<Score>,
    mut roster: ResMut<TargetRoster>,
    mut schedule: ResMut<SpawnSchedule>,
) {
    score.0 = 0;
    roster.clear();
    *schedule = SpawnSchedule::immediate(time.elapsed_secs_f64(), tunables.spawn_cooldown_initial);

    let position = sample_spawn_position(&tunables, &mut rand::rng());
    spawn_target(&mut commands, &mut roster, &tunables, position);
}

/// Drift every live target toward the player, one fixed step per frame.
///
/// A target with all three coordinates inside the rest band has reached the
/// player undetected; whether that counts as a miss is a tuning decision.
fn home_targets(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut roster: ResMut<TargetRoster>,
    mut q: Query<(Entity, &mut Transform, &TargetLifeState), (With<Target>, Without<PendingDespawn>)>,
) {
    let step = tunables.homing_step;
    let tolerance = tunables.rest_tolerance;

    for (target, mut tf, life) in &mut q {
        if !matches!(life, TargetLifeState::Alive) {
            continue;
        }

        let p = tf.translation;
        tf.translation = Vec3::new(
            home_axis(p.x, step, tolerance),
            home_axis(p.y, step, tolerance),
            home_axis(p.z, step, tolerance),
        );

        if tunables.miss_on_rest && at_rest(tf.translation, tolerance) {
            info!("target {target} reached the player");
            roster.remove(target);
            commands.entity(target).insert(PendingDespawn);
        }
    }
}

/// Spawn new targets on the accelerating schedule.
fn run_spawn_ramp(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut schedule: ResMut<SpawnSchedule>,
    mut roster: ResMut<TargetRoster>,
) {
    let now = time.elapsed_secs_f64();
    if !schedule.try_advance(now, tunables.spawn_cooldown_step, tunables.spawn_cooldown_floor) {
        return;
    }

    let position = sample_spawn_position(&tunables, &mut rand::rng());
    spawn_target(&mut commands, &mut roster, &tunables, position);
    debug!("next spawn in {:.1}s", schedule.deadline - now);
}

/// Animate `Dying` targets and retire them when the removal delay elapses.
///
/// Retirement delists the target (idempotently) and marks it for despawn in
/// one place, so the roster and the scene can never disagree for longer than
/// the current frame.
fn target_death_progress(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut commands: Commands,
    mut roster: ResMut<TargetRoster>,
    mut q: Query<(Entity, &mut TargetLifeState, &mut Transform), (With<Target>, Without<PendingDespawn>)>,
) {
    for (target, mut life, mut tf) in &mut q {
        let TargetLifeState::Dying { timer } = &mut *life else {
            continue;
        };

        timer.tick(time.delta());

        // Shrink away while the destruction effect plays.
        let dur = timer.duration().as_secs_f32().max(0.0001);
        let t = (timer.elapsed_secs() / dur).clamp(0.0, 1.0);
        tf.scale = Vec3::splat(1.0 - t);

        if timer.is_finished() {
            *life = TargetLifeState::Dead;
            roster.remove(target);
            commands.entity(target).insert(PendingDespawn);
            debug!("target {target} destroyed");

            if tunables.respawn_on_kill {
                let position = sample_spawn_position(&tunables, &mut rand::rng());
                spawn_target(&mut commands, &mut roster, &tunables, position);
            }
        }
    }
}

/// Despawn targets marked for removal.
fn despawn_marked_targets(mut commands: Commands, q: Query<Entity, (With<Target>, With<PendingDespawn>)>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
