//! Global state machine.
//!
//! A single in-game state is enough for now; everything spawned for a run
//! carries `DespawnOnExit(GameState::InGame)`, so leaving the state tears the
//! whole session down (and cancels any pending timers with it).

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
