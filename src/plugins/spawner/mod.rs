//! Spawn director: player placement and the per-level enemy grid.
//!
//! Layout is expressed in screen space (see `Playfield`):
//! - player: 40x40 at top-left `(W/2 - 20, H - 40)`, i.e. bottom centre;
//! - enemies: 8 columns x 5 rows of 40x40, 60 px pitch, first cell at `(0, 100)`.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::common::kind::{BodySize, EntityKind};
use crate::common::layers::{enemy_layers, player_layers};
use crate::common::playfield::Playfield;
use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::EnemyBrain;
use crate::plugins::player::Player;

pub const PLAYER_SIZE: Vec2 = Vec2::splat(40.0);
pub const ENEMY_SIZE: Vec2 = Vec2::splat(40.0);

pub const GRID_COLUMNS: u32 = 8;
pub const GRID_ROWS: u32 = 5;
/// Cell size plus gap.
pub const GRID_PITCH: f32 = 40.0 + 20.0;
pub const GRID_ORIGIN: Vec2 = Vec2::new(0.0, 100.0);

/// Screen-space top-left of the player at spawn.
pub fn player_spawn_point(playfield: &Playfield) -> Vec2 {
    Vec2::new(
        playfield.width * 0.5 - PLAYER_SIZE.x * 0.5,
        playfield.height - PLAYER_SIZE.y,
    )
}

/// Screen-space top-left of every grid cell, row by row.
pub fn grid_cells() -> impl Iterator<Item = Vec2> {
    (0..GRID_ROWS).flat_map(|row| {
        (0..GRID_COLUMNS).map(move |col| {
            GRID_ORIGIN + Vec2::new(col as f32 * GRID_PITCH, row as f32 * GRID_PITCH)
        })
    })
}

pub fn spawn_player(commands: &mut Commands, playfield: &Playfield) -> Entity {
    let center = playfield.world_center(player_spawn_point(playfield), PLAYER_SIZE);

    commands
        .spawn((
            Name::new("Player"),
            Player,
            EntityKind::Player,
            BodySize(PLAYER_SIZE),
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(center.extend(1.0)),
            RigidBody::Kinematic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            player_layers(),
        ))
        .id()
}

pub fn spawn_enemy(
    commands: &mut Commands,
    playfield: &Playfield,
    top_left: Vec2,
    first_attack_secs: f32,
) -> Entity {
    let center = playfield.world_center(top_left, ENEMY_SIZE);

    commands
        .spawn((
            Name::new("Enemy"),
            EnemyBrain::new(center.x, first_attack_secs),
            EntityKind::Enemy,
            BodySize(ENEMY_SIZE),
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform::from_translation(center.extend(1.0)),
            RigidBody::Kinematic,
            Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            enemy_layers(),
        ))
        .id()
}

/// Populate the grid for a new level. Returns how many enemies were placed.
pub fn init_level(
    commands: &mut Commands,
    playfield: &Playfield,
    tunables: &Tunables,
    rng: &mut GameRng,
) -> usize {
    let (lo, hi) = (tunables.enemy_attack_secs_min, tunables.enemy_attack_secs_max);

    grid_cells()
        .map(|cell| {
            let first_attack = if hi > lo { rng.random_range(lo..hi) } else { lo };
            spawn_enemy(commands, playfield, cell, first_attack)
        })
        .count()
}
