//! Global state machine.
//!
//! ```text
//! Starting -> LevelTransition -> Spawning -> Playing -> LevelTransition -> ...
//!                                              |
//!                                              v
//!                                          GameOver -> Starting | NameEntry | exit
//! ```

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    /// Counters reset, player respawned, first `next_level` issued.
    #[default]
    Starting,
    /// "Level N" banner on screen, input suspended, waiting on the delay queue.
    LevelTransition,
    /// Enemy grid being placed; lasts one frame.
    Spawning,
    Playing,
    /// Continue prompt is open.
    GameOver,
    /// High-score name prompt is open.
    NameEntry,
}

impl GameState {
    /// States in which the world simulates and collisions count.
    pub fn is_in_play(self) -> bool {
        matches!(
            self,
            GameState::LevelTransition | GameState::Spawning | GameState::Playing
        )
    }
}

/// Run condition: gameplay rules are live.
pub fn in_play(state: Option<Res<State<GameState>>>) -> bool {
    state.is_some_and(|s| s.get().is_in_play())
}
