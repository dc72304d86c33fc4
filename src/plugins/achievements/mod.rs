//! Achievements, re-evaluated whenever the session counters change.
//!
//! Unlocks are latched for the lifetime of the process: restarting a game
//! does not lock them again.

use bevy::prelude::*;

use crate::plugins::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    Hitman,
    MasterScorer,
}

impl Achievement {
    pub const ALL: [Achievement; 2] = [Achievement::Hitman, Achievement::MasterScorer];

    pub fn name(self) -> &'static str {
        match self {
            Achievement::Hitman => "Hitman",
            Achievement::MasterScorer => "Master Scorer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::Hitman => "Destroy 5 enemies",
            Achievement::MasterScorer => "Score 10000+ points",
        }
    }

    pub fn is_met(self, session: &Session) -> bool {
        match self {
            Achievement::Hitman => session.enemies_destroyed() >= 5,
            Achievement::MasterScorer => session.score() >= 10_000,
        }
    }
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementUnlocked(pub Achievement);

#[derive(Resource, Debug, Default)]
pub struct Achievements {
    unlocked: Vec<Achievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, a: Achievement) -> bool {
        self.unlocked.contains(&a)
    }

    /// Newly met achievements, latched in `ALL` order.
    pub fn update(&mut self, session: &Session) -> Vec<Achievement> {
        let fresh: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| !self.is_unlocked(*a) && a.is_met(session))
            .collect();
        self.unlocked.extend(&fresh);
        fresh
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Achievements>()
        .add_message::<AchievementUnlocked>()
        .add_systems(
            PostUpdate,
            evaluate_achievements.run_if(resource_changed::<Session>),
        );
}

pub fn evaluate_achievements(
    session: Res<Session>,
    mut achievements: ResMut<Achievements>,
    mut writer: MessageWriter<AchievementUnlocked>,
) {
    for a in achievements.update(&session) {
        info!("Achievement unlocked: {} ({})", a.name(), a.description());
        writer.write(AchievementUnlocked(a));
    }
}
