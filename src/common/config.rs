use std::{env, path::PathBuf};

// Runtime settings (not gameplay tuning).

pub const WINDOW_TITLE: &str = "Space Invaders";
pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 800;

/// Fixed persistence key of the high-score record.
pub const SAVE_KEY: &str = "hiscore.dat";

pub fn save_dir() -> PathBuf {
    env::var("SPACE_INVADERS_SAVE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

pub fn rng_seed() -> Option<u64> {
    env::var("SPACE_INVADERS_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
}
