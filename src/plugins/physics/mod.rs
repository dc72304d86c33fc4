//! Physics: Avian with a pixel length unit and no gravity.
//!
//! Bodies are only used to report contacts; movement is driven by
//! `LinearVelocity` (bullets) or written transforms (kinematic ships).
//! The simulation is paused while the game-over prompts are open.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));

    app.add_systems(OnEnter(GameState::GameOver), pause_physics)
        .add_systems(OnEnter(GameState::Starting), resume_physics);
}

fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}
