use bevy::prelude::*;

/// Marker for live bullets of either side.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bullet;
