//! Buffered spawn requests.
//!
//! Producers (player shoot, enemy fire) only describe the bullet they want;
//! `spawn_bullets` is the single consumer that builds the entity.

use bevy::prelude::*;

use crate::common::kind::EntityKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletKind {
    Player,
    Enemy,
}

impl BulletKind {
    pub fn entity_kind(self) -> EntityKind {
        match self {
            BulletKind::Player => EntityKind::PlayerBullet,
            BulletKind::Enemy => EntityKind::EnemyBullet,
        }
    }
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub kind: BulletKind,
    /// World-space centre.
    pub pos: Vec2,
    pub vel: Vec2,
}
