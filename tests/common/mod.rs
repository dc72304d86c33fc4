//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `space_invaders::game::configure_headless` to install gameplay plugins.
//! - time advances a fixed 100 ms per `update()` so the 3 s level banner is
//!   about 30 frames.

#![allow(dead_code)]

use std::time::Duration;

use avian2d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use space_invaders::common::kind::EntityKind;
use space_invaders::common::rng::GameRng;
use space_invaders::common::state::GameState;
use space_invaders::common::tunables::Tunables;
use space_invaders::plugins::session::Session;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_headless_with(|_| {})
}

/// Headless app with quiet enemies and a fixed seed; `setup` runs before the
/// game plugins so it can pre-insert resources (e.g. a `SaveSlot`).
pub fn app_headless_with(setup: impl FnOnce(&mut App)) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(Tunables::without_enemy_fire());
    app.insert_resource(GameRng::seeded(1));
    setup(&mut app);

    space_invaders::game::configure_headless(&mut app);
    app
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn session(app: &App) -> Session {
    app.world().resource::<Session>().clone()
}

/// Tick until `want` is the current state. Panics after `max_frames`.
pub fn run_until(app: &mut App, want: GameState, max_frames: usize) {
    for _ in 0..max_frames {
        if state(app) == want {
            return;
        }
        app.update();
    }
    assert_eq!(state(app), want, "state not reached in {max_frames} frames");
}

pub fn entities_of(app: &mut App, kind: EntityKind) -> Vec<Entity> {
    app.world_mut()
        .query::<(Entity, &EntityKind)>()
        .iter(app.world())
        .filter(|(_, k)| **k == kind)
        .map(|(e, _)| e)
        .collect()
}

/// Report a contact between a fresh collider-less bullet of `bullet_kind`
/// and `target`, as the physics step would.
pub fn hit(app: &mut App, bullet_kind: EntityKind, target: Entity) {
    let bullet = app.world_mut().spawn(bullet_kind).id();
    app.world_mut().write_message(CollisionStart {
        collider1: bullet,
        collider2: target,
        body1: None,
        body2: None,
    });
}

/// Shoot down every enemy currently on screen, in one frame.
pub fn kill_all_enemies(app: &mut App) -> usize {
    let enemies = entities_of(app, EntityKind::Enemy);
    for &enemy in &enemies {
        hit(app, EntityKind::PlayerBullet, enemy);
    }
    app.update();
    enemies.len()
}

/// One enemy bullet into the player, then one frame.
pub fn hit_player(app: &mut App) {
    let player = entities_of(app, EntityKind::Player)[0];
    hit(app, EntityKind::EnemyBullet, player);
    app.update();
}
