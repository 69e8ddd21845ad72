#![cfg(test)]

//! Projectile pipeline tests, fully deterministic.
//!
//! Nothing here relies on the full physics pipeline to generate collisions:
//! tests **inject `CollisionStart` messages directly** and run the resolver
//! once, exactly the way the scheduler would after Avian's narrow phase.

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::{run_system_once, time_with_delta};
use crate::common::tunables::Tunables;
use crate::plugins::core::Score;
use crate::plugins::targets::TargetLifeState;

use super::{age, allocator, collision, commit, components, messages, pool, request};

// --------------------------------------------------------------------------------------
// Helpers
// --------------------------------------------------------------------------------------

fn write_collision_start(world: &mut World, collider1: Entity, collider2: Entity) {
    if world.get_resource::<Messages<CollisionStart>>().is_none() {
        world.init_resource::<Messages<CollisionStart>>();
    }
    world.write_message(CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    });
}

fn world_with_combat_resources() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(Score::default());
    world
}

/// An active pooled projectile, as the allocator would leave it.
fn spawn_active_projectile(world: &mut World) -> Entity {
    world
        .spawn((
            components::PooledProjectile,
            components::ProjectileState::Active,
            components::ProjectileAge::default(),
            pool::active_projectile_layers(),
        ))
        .id()
}

/// A live target, as the targets plugin would spawn it.
fn spawn_live_target(world: &mut World) -> Entity {
    world
        .spawn((
            TargetLifeState::Alive,
            CollisionLayers::new(Layer::Target, [Layer::Projectile]),
        ))
        .id()
}

// --------------------------------------------------------------------------------------
// Pool
// --------------------------------------------------------------------------------------

#[test]
fn init_pool_spawns_capacity_projectiles_inactive() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(pool::ProjectilePool::new(8));

    run_system_once(&mut world, pool::init_projectile_pool);

    assert_eq!(world.resource::<pool::ProjectilePool>().available(), 8);

    let mut q = world.query::<(
        &components::PooledProjectile,
        &components::ProjectileState,
        &Visibility,
        &CollisionLayers,
        &components::ProjectileAge,
    )>();

    let mut count = 0;
    for (_marker, state, vis, layers, age) in q.iter(&world) {
        count += 1;
        assert_eq!(*state, components::ProjectileState::Inactive);
        assert_eq!(*vis, Visibility::Hidden);
        assert_eq!(age.0, 0.0);

        // Membership is Projectile, filters are empty: collides with nothing.
        assert!(layers.memberships.has_all(Layer::Projectile));
        assert!(!layers.filters.has_all(Layer::Target));
    }
    assert_eq!(count, 8);
}

// --------------------------------------------------------------------------------------
// Fire request producer
// --------------------------------------------------------------------------------------

fn press_fire(world: &mut World) {
    let mut input = ButtonInput::<MouseButton>::default();
    input.press(MouseButton::Left);
    world.insert_resource(input);
}

fn drain_fire_requests(world: &mut World) -> Vec<messages::SpawnProjectileRequest> {
    world
        .resource_mut::<Messages<messages::SpawnProjectileRequest>>()
        .drain()
        .collect()
}

#[test]
fn fire_from_identity_camera_shoots_down_negative_z() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    press_fire(&mut world);

    world.spawn((crate::plugins::camera::MainCamera, GlobalTransform::IDENTITY));

    run_system_once(&mut world, request::fire_on_tap);

    let requests = drain_fire_requests(&mut world);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].position, Vec3::ZERO);

    let impulse = Tunables::default().projectile_impulse;
    assert!((requests[0].velocity - Vec3::new(0.0, 0.0, -impulse)).length() < 1e-5);
}

#[test]
fn fire_follows_camera_orientation() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    press_fire(&mut world);

    // Looking along +X from (1, 2, 3).
    let tf = Transform::from_xyz(1.0, 2.0, 3.0)
        .looking_at(Vec3::new(10.0, 2.0, 3.0), Vec3::Y);
    world.spawn((crate::plugins::camera::MainCamera, GlobalTransform::from(tf)));

    run_system_once(&mut world, request::fire_on_tap);

    let requests = drain_fire_requests(&mut world);
    assert_eq!(requests.len(), 1);
    assert!((requests[0].position - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);

    let impulse = Tunables::default().projectile_impulse;
    assert!((requests[0].velocity - Vec3::new(impulse, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn no_request_without_tap_or_camera() {
    // Tap but no camera.
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    press_fire(&mut world);

    run_system_once(&mut world, request::fire_on_tap);
    assert!(drain_fire_requests(&mut world).is_empty());

    // Camera but no tap.
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    world.insert_resource(ButtonInput::<MouseButton>::default());
    world.spawn((crate::plugins::camera::MainCamera, GlobalTransform::IDENTITY));

    run_system_once(&mut world, request::fire_on_tap);
    assert!(drain_fire_requests(&mut world).is_empty());
}

// --------------------------------------------------------------------------------------
// Allocator
// --------------------------------------------------------------------------------------

#[test]
fn allocator_activates_a_pooled_projectile() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(pool::ProjectilePool::new(1));
    run_system_once(&mut world, pool::init_projectile_pool);

    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    world.write_message(messages::SpawnProjectileRequest {
        position: Vec3::new(0.0, 1.5, 0.0),
        velocity: Vec3::new(0.0, 0.0, -15.0),
    });

    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    assert_eq!(world.resource::<pool::ProjectilePool>().available(), 0);

    let mut q = world.query::<(
        &components::ProjectileState,
        &Transform,
        &LinearVelocity,
        &Visibility,
        &CollisionLayers,
    )>();
    let (state, tf, vel, vis, layers) = q.iter(&world).next().unwrap();

    assert_eq!(*state, components::ProjectileState::Active);
    assert_eq!(tf.translation, Vec3::new(0.0, 1.5, 0.0));
    assert_eq!(vel.0, Vec3::new(0.0, 0.0, -15.0));
    assert_eq!(*vis, Visibility::Visible);
    assert!(layers.filters.has_all(Layer::Target));
}

#[test]
fn allocator_drops_requests_when_pool_is_empty() {
    let mut world = World::new();
    world.insert_resource(pool::ProjectilePool::new(0));

    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    world.write_message(messages::SpawnProjectileRequest {
        position: Vec3::ZERO,
        velocity: Vec3::ZERO,
    });

    // Must not panic; the request is just dropped.
    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);
}

// --------------------------------------------------------------------------------------
// Collision resolution
// --------------------------------------------------------------------------------------

#[test]
fn hit_scores_and_starts_target_dying() {
    let mut world = world_with_combat_resources();

    let projectile = spawn_active_projectile(&mut world);
    let target = spawn_live_target(&mut world);

    write_collision_start(&mut world, projectile, target);
    run_system_once(&mut world, collision::process_projectile_contacts);

    assert_eq!(world.resource::<Score>().0, 1);
    assert_eq!(
        *world.get::<components::ProjectileState>(projectile).unwrap(),
        components::ProjectileState::PendingReturn
    );

    match world.get::<TargetLifeState>(target).unwrap() {
        TargetLifeState::Dying { timer } => {
            let expected = Tunables::default().removal_delay;
            assert!((timer.duration().as_secs_f32() - expected).abs() < 1e-6);
        }
        other => panic!("expected target to be Dying, got {other:?}"),
    }
}

#[test]
fn double_hit_scores_twice_but_transitions_once() {
    let mut world = world_with_combat_resources();

    let first = spawn_active_projectile(&mut world);
    let second = spawn_active_projectile(&mut world);
    let target = spawn_live_target(&mut world);

    // Both contacts arrive in the same physics step.
    write_collision_start(&mut world, first, target);
    write_collision_start(&mut world, target, second);

    run_system_once(&mut world, collision::process_projectile_contacts);

    // Both projectiles are spent and both score...
    assert_eq!(world.resource::<Score>().0, 2);
    for p in [first, second] {
        assert_eq!(
            *world.get::<components::ProjectileState>(p).unwrap(),
            components::ProjectileState::PendingReturn
        );
    }

    // ...but the target entered Dying exactly once, with one fresh timer.
    assert!(matches!(
        world.get::<TargetLifeState>(target).unwrap(),
        TargetLifeState::Dying { .. }
    ));
}

#[test]
fn contact_with_despawned_target_is_a_benign_noop() {
    let mut world = world_with_combat_resources();

    let projectile = spawn_active_projectile(&mut world);
    let target = spawn_live_target(&mut world);

    write_collision_start(&mut world, projectile, target);

    // The target vanished between the physics step and resolution.
    world.entity_mut(target).remove::<TargetLifeState>();

    run_system_once(&mut world, collision::process_projectile_contacts);

    // The projectile is still consumed and scored; nothing panics.
    assert_eq!(world.resource::<Score>().0, 1);
    assert_eq!(
        *world.get::<components::ProjectileState>(projectile).unwrap(),
        components::ProjectileState::PendingReturn
    );
}

#[test]
fn inactive_projectile_contacts_are_ignored() {
    let mut world = world_with_combat_resources();

    let projectile = world
        .spawn((
            components::PooledProjectile,
            components::ProjectileState::Inactive,
            pool::inactive_projectile_layers(),
        ))
        .id();
    let target = spawn_live_target(&mut world);

    write_collision_start(&mut world, projectile, target);
    run_system_once(&mut world, collision::process_projectile_contacts);

    assert_eq!(world.resource::<Score>().0, 0);
    assert!(matches!(
        world.get::<TargetLifeState>(target).unwrap(),
        TargetLifeState::Alive
    ));
}

#[test]
fn duplicate_contacts_for_one_projectile_resolve_once() {
    let mut world = world_with_combat_resources();

    let projectile = spawn_active_projectile(&mut world);
    let target = spawn_live_target(&mut world);

    write_collision_start(&mut world, projectile, target);
    write_collision_start(&mut world, projectile, target);

    run_system_once(&mut world, collision::process_projectile_contacts);

    assert_eq!(world.resource::<Score>().0, 1);
}

// --------------------------------------------------------------------------------------
// Return commit + lifetime bound
// --------------------------------------------------------------------------------------

#[test]
fn return_commit_restores_inactive_invariants() {
    let mut world = World::new();
    world.insert_resource(pool::ProjectilePool::new(1));

    let e = world
        .spawn((
            components::PooledProjectile,
            components::ProjectileState::PendingReturn,
            Visibility::Visible,
            LinearVelocity(Vec3::new(0.0, 0.0, -15.0)),
            pool::active_projectile_layers(),
        ))
        .id();

    run_system_once(&mut world, commit::return_to_pool_commit);

    assert_eq!(
        *world.get::<components::ProjectileState>(e).unwrap(),
        components::ProjectileState::Inactive
    );
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec3::ZERO);
    assert!(!world.get::<CollisionLayers>(e).unwrap().filters.has_all(Layer::Target));
    assert_eq!(world.resource::<pool::ProjectilePool>().available(), 1);
}

#[test]
fn projectiles_age_out_after_the_configured_bound() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(time_with_delta(4.0));

    let flying = world
        .spawn((
            components::PooledProjectile,
            components::ProjectileState::Active,
            components::ProjectileAge(8.0),
        ))
        .id();
    let fresh = world
        .spawn((
            components::PooledProjectile,
            components::ProjectileState::Active,
            components::ProjectileAge(0.0),
        ))
        .id();
    let idle = world
        .spawn((
            components::PooledProjectile,
            components::ProjectileState::Inactive,
            components::ProjectileAge(0.0),
        ))
        .id();

    run_system_once(&mut world, age::expire_projectiles);

    // 8.0 + 4.0 > 10.0: reclaimed.
    assert_eq!(
        *world.get::<components::ProjectileState>(flying).unwrap(),
        components::ProjectileState::PendingReturn
    );
    // 0.0 + 4.0: still flying.
    assert_eq!(
        *world.get::<components::ProjectileState>(fresh).unwrap(),
        components::ProjectileState::Active
    );
    // Inactive projectiles do not age.
    assert_eq!(world.get::<components::ProjectileAge>(idle).unwrap().0, 0.0);
}
