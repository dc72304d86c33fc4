//! Enemy behaviour: horizontal sway around the spawn column and random fire.
//!
//! Each enemy owns an `EnemyBrain`:
//! - `home_x` is the world-space centre it was spawned at; the sway offset is
//!   `(1 - cos(t * speed)) * amplitude / 2`, so the ship drifts right of its
//!   column and back, never left of it;
//! - `attack` is a one-shot timer seeded with a random 1-5 s delay. When it
//!   finishes the enemy fires with probability `enemy_fire_chance`, then the
//!   timer is re-armed with a fresh random delay.
//!
//! Bullets are requested through `SpawnBulletRequest`, the same pipeline the
//! player uses.

use bevy::prelude::*;
use rand::Rng;

use crate::common::kind::BodySize;
use crate::common::playfield::Playfield;
use crate::common::rng::GameRng;
use crate::common::state::in_play;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::{BULLET_SIZE, BulletKind, BulletSpawnSet, SpawnBulletRequest};

#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    pub home_x: f32,
    elapsed: f32,
    attack: Timer,
}

impl EnemyBrain {
    pub fn new(home_x: f32, first_attack_secs: f32) -> Self {
        Self {
            home_x,
            elapsed: 0.0,
            attack: Timer::from_seconds(first_attack_secs, TimerMode::Once),
        }
    }

    pub fn attack_remaining_secs(&self) -> f32 {
        self.attack.remaining_secs()
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (sway_enemies, enemy_fire.before(BulletSpawnSet)).run_if(in_play),
    );
}

#[inline]
pub fn sway_offset(elapsed: f32, amplitude: f32, speed: f32) -> f32 {
    (1.0 - (elapsed * speed).cos()) * amplitude * 0.5
}

/// Next attack delay in `[min, max)`, or `min` for a degenerate range.
pub fn roll_attack_delay(rng: &mut GameRng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

fn sway_enemies(
    time: Res<Time>,
    tunables: Res<Tunables>,
    playfield: Res<Playfield>,
    mut q: Query<(&mut EnemyBrain, &mut Transform, &BodySize)>,
) {
    let dt = time.delta_secs();
    let max_x = playfield.width * 0.5;

    for (mut brain, mut tf, size) in &mut q {
        brain.elapsed += dt;
        let x = brain.home_x
            + sway_offset(brain.elapsed, tunables.enemy_sway_amplitude, tunables.enemy_sway_speed);
        tf.translation.x = x.clamp(-max_x + size.x * 0.5, max_x - size.x * 0.5);
    }
}

pub fn enemy_fire(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    mut q: Query<(&mut EnemyBrain, &Transform, &BodySize)>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let chance = tunables.enemy_fire_chance.clamp(0.0, 1.0);

    for (mut brain, tf, size) in &mut q {
        brain.attack.tick(time.delta());
        if !brain.attack.is_finished() {
            continue;
        }

        if rng.random_bool(chance) {
            let muzzle = tf.translation.truncate()
                - Vec2::new(0.0, size.y * 0.5 + BULLET_SIZE.y * 0.5);
            writer.write(SpawnBulletRequest {
                kind: BulletKind::Enemy,
                pos: muzzle,
                vel: Vec2::NEG_Y * tunables.enemy_bullet_speed,
            });
        }

        let next = roll_attack_delay(
            &mut rng,
            tunables.enemy_attack_secs_min,
            tunables.enemy_attack_secs_max,
        );
        brain.attack = Timer::from_seconds(next, TimerMode::Once);
    }
}
