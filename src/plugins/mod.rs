//! Feature plugins.

use bevy::prelude::*;

pub mod achievements;
pub mod collision;
pub mod core;
pub mod dialog;
pub mod enemies;
pub mod game_over;
pub mod hud;
pub mod input;
pub mod persistence;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod session;
pub mod spawner;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    persistence::plugin(app);
    world::plugin(app);
    input::plugin(app);
    session::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    projectiles::plugin(app);
    collision::plugin(app);
    dialog::plugin(app);
    game_over::plugin(app);
    achievements::plugin(app);
    hud::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
