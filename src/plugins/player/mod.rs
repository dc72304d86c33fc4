//! Player plugin: consumes action messages.
//!
//! Pipeline (Update, after `ActionDispatchSet`):
//! - `MoveLeft`/`MoveRight` while active: step the ship horizontally, clamped
//!   5 px inside the playfield edges;
//! - `MoveRight` begin/end: debug log lines;
//! - `Shoot` on begin: request one player bullet from the top-centre.

use bevy::prelude::*;

use crate::common::kind::BodySize;
use crate::common::playfield::Playfield;
use crate::common::tunables::Tunables;
use crate::plugins::input::{Action, ActionDispatchSet, ActionEvent, ActionPhase};
use crate::plugins::projectiles::{BULLET_SIZE, BulletKind, BulletSpawnSet, SpawnBulletRequest};

/// The one and only player ship.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Distance kept from either edge.
pub const EDGE_MARGIN: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (move_player, log_move_right, shoot.before(BulletSpawnSet)).after(ActionDispatchSet),
    );
}

/// New screen-space left edge after one step, or the same value when the
/// step would cross the margin.
pub fn step_left_edge(left_x: f32, heading: Heading, width: f32, field_width: f32, step: f32) -> f32 {
    match heading {
        Heading::Left if left_x >= EDGE_MARGIN => left_x - step,
        Heading::Right if left_x <= field_width - width - EDGE_MARGIN => left_x + step,
        _ => left_x,
    }
}

/// Screen-space top-left of a player bullet: horizontally centred on the
/// ship, vertically at the ship's top edge.
pub fn muzzle_top_left(ship_top_left: Vec2, ship_size: Vec2) -> Vec2 {
    Vec2::new(
        ship_top_left.x + ship_size.x * 0.5 - BULLET_SIZE.x * 0.5,
        ship_top_left.y,
    )
}

fn move_player(
    mut actions: MessageReader<ActionEvent>,
    playfield: Res<Playfield>,
    tunables: Res<Tunables>,
    mut q_player: Query<(&mut Transform, &BodySize), With<Player>>,
) {
    let Ok((mut tf, size)) = q_player.single_mut() else {
        actions.clear();
        return;
    };

    for ev in actions.read() {
        if ev.phase != ActionPhase::Active {
            continue;
        }
        let heading = match ev.action {
            Action::MoveLeft => Heading::Left,
            Action::MoveRight => Heading::Right,
            Action::Shoot => continue,
        };

        let center = tf.translation.truncate();
        let tl = playfield.screen_top_left(center, size.0);
        let new_left = step_left_edge(tl.x, heading, size.x, playfield.width, tunables.player_step);
        tf.translation.x += new_left - tl.x;
    }
}

fn log_move_right(mut actions: MessageReader<ActionEvent>) {
    for ev in actions.read() {
        match (ev.action, ev.phase) {
            (Action::MoveRight, ActionPhase::Begin) => debug!("Starting move right"),
            (Action::MoveRight, ActionPhase::End) => debug!("Stopping move right"),
            _ => {}
        }
    }
}

fn shoot(
    mut actions: MessageReader<ActionEvent>,
    playfield: Res<Playfield>,
    tunables: Res<Tunables>,
    q_player: Query<(&Transform, &BodySize), With<Player>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let fired = actions
        .read()
        .filter(|ev| ev.action == Action::Shoot && ev.phase == ActionPhase::Begin)
        .count();
    if fired == 0 {
        return;
    }

    let (player_tf, size) = match q_player.single() {
        Ok(v) => v,
        Err(e) => {
            debug!("Shoot without a single Player: {e:?}");
            return;
        }
    };

    let ship_tl = playfield.screen_top_left(player_tf.translation.truncate(), size.0);
    let pos = playfield.world_center(muzzle_top_left(ship_tl, size.0), BULLET_SIZE);

    for _ in 0..fired {
        writer.write(SpawnBulletRequest {
            kind: BulletKind::Player,
            pos,
            vel: Vec2::Y * tunables.bullet_speed,
        });
    }
}
