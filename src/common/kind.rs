//! Entity type tags.
//!
//! Every gameplay entity carries exactly one `EntityKind`. Rules that differ by
//! type (collision pairs, off-screen sweeping, restart cleanup) match on the tag
//! instead of on marker-component combinations.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
    LevelInfo,
}

impl EntityKind {
    #[inline]
    pub fn is_bullet(self) -> bool {
        matches!(self, EntityKind::PlayerBullet | EntityKind::EnemyBullet)
    }
}

/// Axis-aligned extent of an entity in pixels (width, height).
#[derive(Component, Debug, Clone, Copy, PartialEq, Deref)]
pub struct BodySize(pub Vec2);
