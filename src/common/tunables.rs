//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Player translation per frame while a move action is held.
    pub player_step: f32,
    pub bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    /// Chance an enemy actually fires when its attack timer elapses.
    pub enemy_fire_chance: f64,
    pub enemy_attack_secs_min: f32,
    pub enemy_attack_secs_max: f32,
    pub enemy_sway_amplitude: f32,
    pub enemy_sway_speed: f32,
    pub level_banner_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_step: 5.0,
            bullet_speed: 600.0,
            enemy_bullet_speed: 300.0,
            enemy_fire_chance: 0.8,
            enemy_attack_secs_min: 1.0,
            enemy_attack_secs_max: 5.0,
            enemy_sway_amplitude: 100.0,
            enemy_sway_speed: 0.8,
            level_banner_secs: 3.0,
        }
    }
}

impl Tunables {
    /// Quiet enemies: nothing fires. Used by headless scenarios that need
    /// deterministic lives.
    pub fn without_enemy_fire() -> Self {
        Self {
            enemy_fire_chance: 0.0,
            ..Self::default()
        }
    }
}
