use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::{collect_messages, ensure_messages, run_system_once};

use super::*;

fn world_with_keys() -> World {
    let mut world = World::new();
    world.init_resource::<InputBindings>();
    world.init_resource::<ActionDispatch>();
    world.init_resource::<ButtonInput<KeyCode>>();
    ensure_messages::<ActionEvent>(&mut world);
    world
}

#[test]
fn key_down_emits_begin_and_active() {
    let mut world = world_with_keys();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyF);

    run_system_once(&mut world, dispatch_actions);

    let events = collect_messages::<ActionEvent>(&mut world);
    assert_eq!(
        events,
        vec![
            ActionEvent { action: Action::Shoot, phase: ActionPhase::Begin },
            ActionEvent { action: Action::Shoot, phase: ActionPhase::Active },
        ]
    );
}

fn begin(action: Action) -> ActionEvent {
    ActionEvent { action, phase: ActionPhase::Begin }
}

fn active(action: Action) -> ActionEvent {
    ActionEvent { action, phase: ActionPhase::Active }
}

fn end(action: Action) -> ActionEvent {
    ActionEvent { action, phase: ActionPhase::End }
}

/// Run one dispatch frame and return what it wrote.
fn dispatch_frame(world: &mut World) -> Vec<ActionEvent> {
    world.resource_mut::<Messages<ActionEvent>>().clear();
    run_system_once(world, dispatch_actions);
    let events = collect_messages::<ActionEvent>(world);
    world.resource_mut::<ButtonInput<KeyCode>>().clear();
    events
}

#[test]
fn held_key_is_active_only_and_release_ends() {
    let mut world = world_with_keys();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyD);

    assert_eq!(
        dispatch_frame(&mut world),
        vec![begin(Action::MoveRight), active(Action::MoveRight)]
    );
    assert_eq!(dispatch_frame(&mut world), vec![active(Action::MoveRight)]);

    world.resource_mut::<ButtonInput<KeyCode>>().release(KeyCode::KeyD);
    assert_eq!(dispatch_frame(&mut world), vec![end(Action::MoveRight)]);
    assert!(dispatch_frame(&mut world).is_empty());
}

#[test]
fn tap_between_frames_begins_and_ends() {
    let mut world = world_with_keys();
    {
        let mut keys = world.resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::KeyF);
        keys.release(KeyCode::KeyF);
    }

    assert_eq!(
        dispatch_frame(&mut world),
        vec![begin(Action::Shoot), end(Action::Shoot)]
    );
    assert!(world.resource::<ActionDispatch>().held().is_empty());
}

#[test]
fn disabling_ends_holds_in_progress() {
    let mut world = world_with_keys();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyD);
    dispatch_frame(&mut world);
    assert_eq!(world.resource::<ActionDispatch>().held(), &[Action::MoveRight]);

    world.resource_mut::<ActionDispatch>().disable();
    assert_eq!(dispatch_frame(&mut world), vec![end(Action::MoveRight)]);

    // Key released while frozen: nothing more to report.
    world.resource_mut::<ButtonInput<KeyCode>>().release(KeyCode::KeyD);
    assert!(dispatch_frame(&mut world).is_empty());

    world.resource_mut::<ActionDispatch>().enable();
    assert!(dispatch_frame(&mut world).is_empty());
}

#[test]
fn hold_surviving_a_freeze_begins_again() {
    let mut world = world_with_keys();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyA);
    dispatch_frame(&mut world);

    world.resource_mut::<ActionDispatch>().disable();
    assert_eq!(dispatch_frame(&mut world), vec![end(Action::MoveLeft)]);
    assert!(dispatch_frame(&mut world).is_empty());

    world.resource_mut::<ActionDispatch>().enable();
    assert_eq!(
        dispatch_frame(&mut world),
        vec![begin(Action::MoveLeft), active(Action::MoveLeft)]
    );
}

#[test]
fn unbound_keys_are_ignored() {
    let mut world = world_with_keys();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Space);

    run_system_once(&mut world, dispatch_actions);

    assert!(collect_messages::<ActionEvent>(&mut world).is_empty());
}

#[test]
fn no_keyboard_resource_is_a_noop() {
    let mut world = World::new();
    world.init_resource::<InputBindings>();
    world.init_resource::<ActionDispatch>();
    ensure_messages::<ActionEvent>(&mut world);

    run_system_once(&mut world, dispatch_actions);

    assert!(collect_messages::<ActionEvent>(&mut world).is_empty());
}

#[test]
fn rebinding_replaces_the_old_key() {
    let mut bindings = InputBindings::default();
    bindings.bind(Action::Shoot, KeyCode::Space);

    assert_eq!(bindings.key_for(Action::Shoot), Some(KeyCode::Space));
    assert_eq!(bindings.iter().filter(|(a, _)| *a == Action::Shoot).count(), 1);
}
