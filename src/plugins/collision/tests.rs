//! Collision policy tests: inject `CollisionStart` messages directly and run
//! the resolver once, no physics step involved.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::kind::EntityKind;
use crate::common::state::GameState;
use crate::common::test_utils::{collect_messages, ensure_messages, run_system_once};
use crate::plugins::session::{LevelCleared, PlayerHit, Session};

use super::*;

fn world() -> World {
    let mut world = World::new();
    world.init_resource::<Session>();
    world.init_resource::<NextState<GameState>>();
    ensure_messages::<CollisionStart>(&mut world);
    ensure_messages::<PlayerHit>(&mut world);
    ensure_messages::<LevelCleared>(&mut world);
    world
}

fn touch(world: &mut World, a: Entity, b: Entity) {
    world.write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

fn resolve(world: &mut World) {
    run_system_once(world, resolve_contacts);
    world.resource_mut::<Messages<CollisionStart>>().clear();
}

fn pending_state(world: &World) -> Option<GameState> {
    match world.resource::<NextState<GameState>>() {
        NextState::Pending(s) => Some(*s),
        _ => None,
    }
}

#[test]
fn classify_is_order_independent() {
    let mut world = World::new();
    let bullet = world.spawn_empty().id();
    let enemy = world.spawn_empty().id();

    let expected = Some(ContactRule::EnemyDestroyed { bullet, enemy });
    assert_eq!(classify((bullet, EntityKind::PlayerBullet), (enemy, EntityKind::Enemy)), expected);
    assert_eq!(classify((enemy, EntityKind::Enemy), (bullet, EntityKind::PlayerBullet)), expected);
}

#[test]
fn unrelated_pairs_are_ignored() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    for (ka, kb) in [
        (EntityKind::PlayerBullet, EntityKind::Player),
        (EntityKind::EnemyBullet, EntityKind::Enemy),
        (EntityKind::PlayerBullet, EntityKind::EnemyBullet),
        (EntityKind::Enemy, EntityKind::Player),
        (EntityKind::LevelInfo, EntityKind::Player),
    ] {
        assert_eq!(classify((a, ka), (b, kb)), None, "{ka:?} x {kb:?}");
    }
}

#[test]
fn player_bullet_kills_enemy_and_scores() {
    let mut world = world();
    let bullet = world.spawn(EntityKind::PlayerBullet).id();
    let enemy = world.spawn(EntityKind::Enemy).id();

    touch(&mut world, enemy, bullet);
    resolve(&mut world);

    assert!(world.get_entity(bullet).is_err());
    assert!(world.get_entity(enemy).is_err());

    let session = world.resource::<Session>();
    assert_eq!(session.enemies_destroyed(), 1);
    assert_eq!(session.score(), 200);
    assert!(collect_messages::<LevelCleared>(&mut world).is_empty());
}

#[test]
fn one_bullet_kills_at_most_one_enemy_per_frame() {
    let mut world = world();
    let bullet = world.spawn(EntityKind::PlayerBullet).id();
    let e1 = world.spawn(EntityKind::Enemy).id();
    let e2 = world.spawn(EntityKind::Enemy).id();

    touch(&mut world, bullet, e1);
    touch(&mut world, bullet, e2);
    resolve(&mut world);

    assert!(world.get_entity(e1).is_err());
    assert!(world.get_entity(e2).is_ok());
    assert_eq!(world.resource::<Session>().enemies_destroyed(), 1);
}

#[test]
fn fortieth_kill_reports_level_cleared() {
    let mut world = world();

    for _ in 0..40 {
        let bullet = world.spawn(EntityKind::PlayerBullet).id();
        let enemy = world.spawn(EntityKind::Enemy).id();
        touch(&mut world, bullet, enemy);
    }
    resolve(&mut world);

    assert_eq!(world.resource::<Session>().score(), 8000);
    assert_eq!(collect_messages::<LevelCleared>(&mut world).len(), 1);
}

#[test]
fn enemy_bullet_costs_a_life_and_keeps_the_player() {
    let mut world = world();
    let player = world.spawn(EntityKind::Player).id();
    let bullet = world.spawn(EntityKind::EnemyBullet).id();

    touch(&mut world, bullet, player);
    resolve(&mut world);

    assert!(world.get_entity(bullet).is_err());
    assert!(world.get_entity(player).is_ok());
    assert_eq!(world.resource::<Session>().lives(), 2);
    assert_eq!(
        collect_messages::<PlayerHit>(&mut world),
        vec![PlayerHit { lives_left: 2 }]
    );
    assert_eq!(pending_state(&world), None);
}

#[test]
fn last_life_requests_game_over_once() {
    let mut world = world();
    let player = world.spawn(EntityKind::Player).id();

    for _ in 0..3 {
        let bullet = world.spawn(EntityKind::EnemyBullet).id();
        touch(&mut world, bullet, player);
        resolve(&mut world);
    }

    assert_eq!(world.resource::<Session>().lives(), 0);
    assert_eq!(pending_state(&world), Some(GameState::GameOver));

    // A straggler after game over changes nothing.
    world.resource_mut::<NextState<GameState>>().reset();
    let late = world.spawn(EntityKind::EnemyBullet).id();
    touch(&mut world, late, player);
    resolve(&mut world);

    assert_eq!(world.resource::<Session>().lives(), 0);
    assert_eq!(pending_state(&world), None);
    assert!(world.get_entity(late).is_err());
}

#[test]
fn entities_without_kind_are_skipped() {
    let mut world = world();
    let bullet = world.spawn(EntityKind::PlayerBullet).id();
    let wall = world.spawn_empty().id();

    touch(&mut world, bullet, wall);
    resolve(&mut world);

    assert!(world.get_entity(bullet).is_ok());
    assert_eq!(*world.resource::<Session>(), Session::default());
}
