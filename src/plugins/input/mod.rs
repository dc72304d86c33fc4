//! Input bindings: named actions on discrete keys.
//!
//! Keys are sampled once per frame and turned into `ActionEvent` messages with
//! a phase, the same way for every action:
//! - `Begin`  on the first dispatched frame the key is down,
//! - `Active` on every dispatched frame the key is held (including the first),
//! - `End`    once the key is released, or as soon as dispatch is switched off.
//!
//! Consumers (player movement, shooting) only ever see messages. Dispatch as
//! a whole can be switched off with `ActionDispatch`; the level transition and
//! the game-over prompt use that to freeze the player. Every `Begin` is paired
//! with exactly one `End`, so a hold interrupted by a freeze still ends, and a
//! key still held when dispatch resumes begins again.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Shoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    Begin,
    Active,
    End,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub action: Action,
    pub phase: ActionPhase,
}

#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    bindings: Vec<(Action, KeyCode)>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Action::MoveLeft, KeyCode::KeyA),
                (Action::MoveRight, KeyCode::KeyD),
                (Action::Shoot, KeyCode::KeyF),
            ],
        }
    }
}

impl InputBindings {
    /// Rebind `action`, replacing any previous key.
    pub fn bind(&mut self, action: Action, key: KeyCode) {
        self.bindings.retain(|(a, _)| *a != action);
        self.bindings.push((action, key));
    }

    pub fn key_for(&self, action: Action) -> Option<KeyCode> {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, k)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, KeyCode)> + '_ {
        self.bindings.iter().copied()
    }
}

/// Global switch for action processing, plus the actions currently begun.
#[derive(Resource, Debug)]
pub struct ActionDispatch {
    enabled: bool,
    held: Vec<Action>,
}

impl Default for ActionDispatch {
    fn default() -> Self {
        Self {
            enabled: true,
            held: Vec::new(),
        }
    }
}

impl ActionDispatch {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Actions that saw `Begin` and still owe an `End`, in begin order.
    pub fn held(&self) -> &[Action] {
        &self.held
    }

    fn begin(&mut self, action: Action) -> bool {
        if self.held.contains(&action) {
            return false;
        }
        self.held.push(action);
        true
    }

    fn end(&mut self, action: Action) {
        self.held.retain(|a| *a != action);
    }
}

/// Ordering anchor for action consumers.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionDispatchSet;

pub fn plugin(app: &mut App) {
    app.init_resource::<InputBindings>()
        .init_resource::<ActionDispatch>()
        .add_message::<ActionEvent>()
        .add_systems(
            Update,
            dispatch_actions.in_set(ActionDispatchSet),
        );
}

/// Producer: translate bound key states into action messages.
///
/// While dispatch is off only the pending `End`s are flushed.
/// `ButtonInput<KeyCode>` is optional so headless apps (no `InputPlugin`) run
/// this as a no-op.
pub fn dispatch_actions(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<InputBindings>,
    mut dispatch: ResMut<ActionDispatch>,
    mut writer: MessageWriter<ActionEvent>,
) {
    if !dispatch.is_enabled() {
        if !dispatch.held.is_empty() {
            for action in std::mem::take(&mut dispatch.held) {
                writer.write(ActionEvent {
                    action,
                    phase: ActionPhase::End,
                });
            }
        }
        return;
    }

    let Some(keys) = keys else {
        return;
    };

    for (action, key) in bindings.iter() {
        let down = keys.pressed(key);
        // Pressed and released between two samples.
        let tapped = keys.just_pressed(key) && !down;

        if (down || tapped) && dispatch.begin(action) {
            writer.write(ActionEvent {
                action,
                phase: ActionPhase::Begin,
            });
        }
        if down {
            writer.write(ActionEvent {
                action,
                phase: ActionPhase::Active,
            });
        } else if dispatch.held.contains(&action) {
            dispatch.end(action);
            writer.write(ActionEvent {
                action,
                phase: ActionPhase::End,
            });
        }
    }
}

#[cfg(test)]
mod tests;
