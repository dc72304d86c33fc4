//! Core plugin: shared resources and global settings.
//!
//! Resources already present (tests pre-insert quiet `Tunables` or a fixed
//! seed) are left alone.

use bevy::prelude::*;

use crate::common::lifetime::expire_lifetimes;
use crate::common::playfield::Playfield;
use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>()
        .init_resource::<Playfield>()
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)));

    if !app.world().contains_resource::<GameRng>() {
        app.insert_resource(GameRng::from_config());
    }

    app.add_systems(Update, expire_lifetimes);
}

#[cfg(test)]
mod tests;
