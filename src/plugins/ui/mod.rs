//! HUD (render-only).
//!
//! Renders the three values the simulation exposes: score, live-target
//! count, and the two off-screen direction flags. All of them are plain
//! resources, so the HUD is a pure reader and nothing in here feeds back
//! into gameplay.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::core::Score;
use crate::plugins::indicator::IndicatorState;
use crate::plugins::targets::TargetRoster;

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct TargetCountText;

#[derive(Component)]
struct LeftArrow;

#[derive(Component)]
struct RightArrow;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud);
    app.add_systems(
        Update,
        (update_score_text, update_count_text, update_arrows)
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new("Score: 0"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                TargetCountText,
                Text::new("Targets: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });

    commands.spawn((
        Name::new("LeftArrow"),
        LeftArrow,
        Text::new("<"),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.4, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Percent(46.0),
            ..default()
        },
        Visibility::Hidden,
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("RightArrow"),
        RightArrow,
        Text::new(">"),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.4, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Percent(46.0),
            ..default()
        },
        Visibility::Hidden,
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_score_text(score: Res<Score>, mut q: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    text.0 = format!("Score: {}", score.0);
}

fn update_count_text(roster: Res<TargetRoster>, mut q: Query<&mut Text, With<TargetCountText>>) {
    if !roster.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    text.0 = format!("Targets: {}", roster.len());
}

fn update_arrows(
    indicator: Res<IndicatorState>,
    mut q_left: Query<&mut Visibility, (With<LeftArrow>, Without<RightArrow>)>,
    mut q_right: Query<&mut Visibility, (With<RightArrow>, Without<LeftArrow>)>,
) {
    if !indicator.is_changed() {
        return;
    }

    if let Ok(mut vis) = q_left.single_mut() {
        *vis = if indicator.left { Visibility::Visible } else { Visibility::Hidden };
    }
    if let Ok(mut vis) = q_right.single_mut() {
        *vis = if indicator.right { Visibility::Visible } else { Visibility::Hidden };
    }
}
