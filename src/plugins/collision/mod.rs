//! Collision policy: begin-contact rules keyed by entity-type pair.
//!
//! Avian reports `CollisionStart` for every pair the layers allow. Each pair
//! is classified by `EntityKind`, order-independent:
//! - player bullet x enemy: both removed, one kill counted;
//! - enemy bullet x player: bullet removed, one life lost.
//!
//! Anything else is ignored. An entity takes part in at most one rule per
//! frame, so a bullet overlapping two enemies kills only one.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::kind::EntityKind;
use crate::common::state::{GameState, in_play};
use crate::plugins::session::{HitOutcome, KillOutcome, LevelCleared, PlayerHit, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRule {
    EnemyDestroyed { bullet: Entity, enemy: Entity },
    PlayerStruck { bullet: Entity, player: Entity },
}

impl ContactRule {
    pub fn participants(self) -> [Entity; 2] {
        match self {
            ContactRule::EnemyDestroyed { bullet, enemy } => [bullet, enemy],
            ContactRule::PlayerStruck { bullet, player } => [bullet, player],
        }
    }
}

pub fn classify(a: (Entity, EntityKind), b: (Entity, EntityKind)) -> Option<ContactRule> {
    use EntityKind::*;

    match (a.1, b.1) {
        (PlayerBullet, Enemy) => Some(ContactRule::EnemyDestroyed { bullet: a.0, enemy: b.0 }),
        (Enemy, PlayerBullet) => Some(ContactRule::EnemyDestroyed { bullet: b.0, enemy: a.0 }),
        (EnemyBullet, Player) => Some(ContactRule::PlayerStruck { bullet: a.0, player: b.0 }),
        (Player, EnemyBullet) => Some(ContactRule::PlayerStruck { bullet: b.0, player: a.0 }),
        _ => None,
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(PostUpdate, resolve_contacts.run_if(in_play));
}

#[inline]
fn gameplay_owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

pub fn resolve_contacts(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_kind: Query<&EntityKind>,
    mut session: ResMut<Session>,
    mut hits: MessageWriter<PlayerHit>,
    mut cleared: MessageWriter<LevelCleared>,
    mut next_state: ResMut<NextState<GameState>>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let a = gameplay_owner(ev.collider1, ev.body1);
        let b = gameplay_owner(ev.collider2, ev.body2);

        let (Ok(ka), Ok(kb)) = (q_kind.get(a), q_kind.get(b)) else {
            continue;
        };
        let Some(rule) = classify((a, *ka), (b, *kb)) else {
            continue;
        };

        let parts = rule.participants();
        if parts.iter().any(|e| seen.contains(e)) {
            continue;
        }
        seen.extend(parts);

        match rule {
            ContactRule::EnemyDestroyed { bullet, enemy } => {
                commands.entity(bullet).try_despawn();
                commands.entity(enemy).try_despawn();

                if session.record_kill() == KillOutcome::LevelCleared {
                    debug!("Wave cleared after {} kills", session.enemies_destroyed());
                    cleared.write(LevelCleared);
                }
            }
            ContactRule::PlayerStruck { bullet, .. } => {
                commands.entity(bullet).try_despawn();

                match session.record_player_hit() {
                    HitOutcome::Survived { lives_left } => {
                        hits.write(PlayerHit { lives_left });
                    }
                    HitOutcome::Depleted => {
                        hits.write(PlayerHit { lives_left: 0 });
                        info!("Out of lives, score {}", session.score());
                        next_state.set(GameState::GameOver);
                    }
                    HitOutcome::AlreadyDown => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
