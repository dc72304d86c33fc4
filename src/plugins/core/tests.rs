use bevy::prelude::*;

use crate::common::playfield::Playfield;
use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
    assert!(app.world().get_resource::<GameRng>().is_some());
    assert_eq!(*app.world().resource::<Playfield>(), Playfield::default());
}

#[test]
fn keeps_preinserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables::without_enemy_fire());
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().enemy_fire_chance, 0.0);
}
