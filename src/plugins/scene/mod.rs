//! Scene presentation (render-only).
//!
//! Gameplay spawns bare logic entities so headless tests never touch assets;
//! this plugin dresses them with meshes and puts some light on them. The
//! project is intentionally asset-free: primitive shapes and flat materials.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::PooledProjectile;
use crate::plugins::targets::Target;

/// Shared handles so every target/projectile reuses one mesh and material.
#[derive(Resource)]
struct SceneAssets {
    target_mesh: Handle<Mesh>,
    target_material: Handle<StandardMaterial>,
    projectile_mesh: Handle<Mesh>,
    projectile_material: Handle<StandardMaterial>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_assets);
    app.add_systems(OnEnter(GameState::InGame), setup_lights);
    app.add_systems(Update, (dress_targets, dress_projectiles));
}

fn setup_assets(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(SceneAssets {
        target_mesh: meshes.add(Cuboid::from_length(tunables.target_extent)),
        target_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.35, 0.95),
            ..default()
        }),
        projectile_mesh: meshes.add(Sphere::new(tunables.projectile_radius)),
        projectile_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.85, 0.3),
            unlit: true,
            ..default()
        }),
    });
}

fn setup_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });

    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 12.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}

fn dress_targets(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    q_new: Query<Entity, Added<Target>>,
) {
    for e in &q_new {
        commands.entity(e).insert((
            Mesh3d(assets.target_mesh.clone()),
            MeshMaterial3d(assets.target_material.clone()),
        ));
    }
}

fn dress_projectiles(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    q_new: Query<Entity, Added<PooledProjectile>>,
) {
    for e in &q_new {
        commands.entity(e).insert((
            Mesh3d(assets.projectile_mesh.clone()),
            MeshMaterial3d(assets.projectile_material.clone()),
        ));
    }
}
