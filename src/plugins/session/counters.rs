//! Session counters and the rules that move them.
//!
//! Only the methods here mutate the counters, so the invariants hold by
//! construction:
//! - `score` only grows, by exactly `POINTS_PER_KILL` per kill;
//! - `lives` starts at `STARTING_LIVES`, loses one per hit and stops at zero;
//! - `enemies_destroyed` counts every kill;
//! - every `KILLS_PER_LEVEL`-th kill reports `LevelCleared`.

use bevy::prelude::*;

pub const STARTING_LIVES: u32 = 3;
pub const POINTS_PER_KILL: u32 = 200;
pub const KILLS_PER_LEVEL: u32 = 40;

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    lives: u32,
    level: u32,
    enemies_destroyed: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 0,
            enemies_destroyed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    Counted,
    /// This kill completed a wave of `KILLS_PER_LEVEL`.
    LevelCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Survived { lives_left: u32 },
    /// The hit that took the last life.
    Depleted,
    /// Lives were already zero; nothing changed.
    AlreadyDown,
}

impl Session {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn enemies_destroyed(&self) -> u32 {
        self.enemies_destroyed
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the new level number.
    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    pub fn record_kill(&mut self) -> KillOutcome {
        self.enemies_destroyed += 1;
        self.score = self.score.saturating_add(POINTS_PER_KILL);

        if self.enemies_destroyed % KILLS_PER_LEVEL == 0 {
            KillOutcome::LevelCleared
        } else {
            KillOutcome::Counted
        }
    }

    pub fn record_player_hit(&mut self) -> HitOutcome {
        if self.lives == 0 {
            return HitOutcome::AlreadyDown;
        }

        self.lives -= 1;
        if self.lives == 0 {
            HitOutcome::Depleted
        } else {
            HitOutcome::Survived {
                lives_left: self.lives,
            }
        }
    }
}
