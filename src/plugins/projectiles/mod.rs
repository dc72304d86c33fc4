//! Projectiles plugin: message-based producer -> consumer spawning.
//!
//! ```text
//!   Update (after ActionDispatchSet / enemy fire)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ producers: player::shoot, enemies::enemy_fire                │
//!   │   - write SpawnBulletRequest { kind, pos, vel }              │
//!   │                                                              │
//!   │ consumer: spawn_bullets                                      │
//!   │   - one Dynamic sensor body per request, layers by kind      │
//!   │                                                              │
//!   │ sweep_offscreen_bullets                                      │
//!   │   - despawn bullets whose bounds left the playfield          │
//!   └──────────────────────────────────────────────────────────────┘
//!   PostUpdate: collision::resolve_contacts despawns bullets that hit.
//! ```
//!
//! Producers never touch bullet entities directly, so neither side needs to
//! know how a bullet is built.

pub mod components;
pub mod messages;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::kind::{BodySize, EntityKind};
use crate::common::layers::{enemy_bullet_layers, player_bullet_layers};
use crate::common::playfield::Playfield;
use crate::common::state::in_play;

pub use components::Bullet;
pub use messages::{BulletKind, SpawnBulletRequest};

pub const BULLET_SIZE: Vec2 = Vec2::new(16.0, 20.0);

/// Ordering anchor: every producer runs before this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BulletSpawnSet;

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnBulletRequest>().add_systems(
        Update,
        (
            spawn_bullets.in_set(BulletSpawnSet),
            sweep_offscreen_bullets.after(BulletSpawnSet),
        )
            .run_if(in_play),
    );
}

/// Off-screen bullets are removed; nothing else is swept.
pub fn is_swept(kind: EntityKind, center: Vec2, size: Vec2, playfield: &Playfield) -> bool {
    kind.is_bullet() && playfield.is_outside(center, size)
}

/// Consumer: turn each request into a moving bullet.
pub fn spawn_bullets(mut commands: Commands, mut reader: MessageReader<SpawnBulletRequest>) {
    for req in reader.read() {
        let (color, layers) = match req.kind {
            BulletKind::Player => (Color::srgb(1.0, 0.85, 0.3), player_bullet_layers()),
            BulletKind::Enemy => (Color::srgb(1.0, 0.35, 0.85), enemy_bullet_layers()),
        };

        commands.spawn((
            Name::new("Bullet"),
            Bullet,
            req.kind.entity_kind(),
            BodySize(BULLET_SIZE),
            Sprite {
                color,
                custom_size: Some(BULLET_SIZE),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::rectangle(BULLET_SIZE.x, BULLET_SIZE.y),
            Sensor,
            layers,
            LinearVelocity(req.vel),
            CollisionEventsEnabled,
        ));
    }
}

pub fn sweep_offscreen_bullets(
    mut commands: Commands,
    playfield: Res<Playfield>,
    q: Query<(Entity, &EntityKind, &Transform, &BodySize), With<Bullet>>,
) {
    for (e, kind, tf, size) in &q {
        if is_swept(*kind, tf.translation.truncate(), size.0, &playfield) {
            commands.entity(e).try_despawn();
        }
    }
}
