mod common;

use space_invaders::common::kind::EntityKind;
use space_invaders::common::state::GameState;
use space_invaders::plugins::input::ActionDispatch;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn boot_shows_level_one_banner_then_populates() {
    let mut app = common::app_headless();

    common::run_until(&mut app, GameState::LevelTransition, 5);
    assert_eq!(common::session(&app).level(), 1);
    assert_eq!(common::entities_of(&mut app, EntityKind::LevelInfo).len(), 1);
    assert!(common::entities_of(&mut app, EntityKind::Enemy).is_empty());
    assert!(!app.world().resource::<ActionDispatch>().is_enabled());

    common::run_until(&mut app, GameState::Playing, 40);
    assert_eq!(common::entities_of(&mut app, EntityKind::Enemy).len(), 40);
    assert_eq!(common::entities_of(&mut app, EntityKind::Player).len(), 1);
    assert!(common::entities_of(&mut app, EntityKind::LevelInfo).is_empty());
    assert!(app.world().resource::<ActionDispatch>().is_enabled());
}

#[test]
fn banner_lasts_about_three_seconds() {
    let mut app = common::app_headless();
    common::run_until(&mut app, GameState::LevelTransition, 5);

    let mut frames = 0;
    while common::state(&app) == GameState::LevelTransition {
        app.update();
        frames += 1;
        assert!(frames < 40, "transition did not finish");
    }
    assert!(frames >= 25, "transition finished after {frames} frames");
}
