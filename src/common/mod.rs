//! Common, shared types.

pub mod config;
pub mod delay_queue;
pub mod kind;
pub mod layers;
pub mod lifetime;
pub mod playfield;
pub mod rng;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
