//! Screen-space <-> world-space mapping.
//!
//! Layout rules are written in screen space: origin at the top-left corner,
//! y growing downwards, positions naming an entity's top-left corner.
//! Bevy world space has its origin at the centre, y up, and a `Transform`
//! names the entity's centre.

use bevy::prelude::*;

use crate::common::config::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH as f32,
            height: WINDOW_HEIGHT as f32,
        }
    }
}

impl Playfield {
    /// World-space centre of a box whose screen-space top-left is `top_left`.
    pub fn world_center(&self, top_left: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            top_left.x + size.x * 0.5 - self.width * 0.5,
            self.height * 0.5 - (top_left.y + size.y * 0.5),
        )
    }

    /// Screen-space top-left of a box centred at `center` in world space.
    pub fn screen_top_left(&self, center: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            center.x + self.width * 0.5 - size.x * 0.5,
            self.height * 0.5 - center.y - size.y * 0.5,
        )
    }

    /// True once the box has left the visible area entirely.
    pub fn is_outside(&self, center: Vec2, size: Vec2) -> bool {
        let tl = self.screen_top_left(center, size);
        tl.x + size.x < 0.0 || tl.x > self.width || tl.y + size.y < 0.0 || tl.y > self.height
    }
}
