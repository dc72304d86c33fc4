//! World plugin: dark backdrop and a fixed starfield behind the playfield.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::common::playfield::Playfield;

pub const STAR_COUNT: usize = 120;
/// Same sky on every run.
const STAR_SEED: u64 = 0x5EED_57A2;

#[derive(Component)]
pub struct Backdrop;

#[derive(Component)]
pub struct Star;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_backdrop, spawn_starfield));
}

fn spawn_backdrop(mut commands: Commands, playfield: Res<Playfield>) {
    commands.spawn((
        Name::new("Backdrop"),
        Backdrop,
        Sprite::from_color(
            Color::srgb(0.03, 0.03, 0.08),
            Vec2::new(playfield.width, playfield.height),
        ),
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));
}

fn spawn_starfield(mut commands: Commands, playfield: Res<Playfield>) {
    let mut rng = Pcg32::seed_from_u64(STAR_SEED);
    let half = Vec2::new(playfield.width, playfield.height) * 0.5;

    for _ in 0..STAR_COUNT {
        let pos = Vec2::new(
            rng.random_range(-half.x..half.x),
            rng.random_range(-half.y..half.y),
        );
        let size = rng.random_range(1.0..3.0f32);
        let glow = rng.random_range(0.35..0.9f32);

        commands.spawn((
            Star,
            Sprite::from_color(Color::srgb(glow, glow, glow + 0.1), Vec2::splat(size)),
            Transform::from_translation(pos.extend(-5.0)),
        ));
    }
}
