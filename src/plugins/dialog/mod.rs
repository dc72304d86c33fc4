//! Modal dialogs: yes/no confirmation and single-line text input.
//!
//! ```text
//!   ShowDialog ──> open_dialogs ──> ActiveDialog + overlay UI
//!   KeyboardInput ──> read_dialog_keys ──> DialogKey
//!   DialogKey ──> apply_dialog_keys ──> DialogResponse, dialog closed
//! ```
//!
//! Only one dialog is open at a time. Callers react to `DialogResponse`; tests
//! inject `DialogKey` or `DialogResponse` directly.

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

/// Longest accepted text entry.
pub const MAX_INPUT_CHARS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    TextInput,
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ShowDialog {
    pub kind: DialogKind,
    pub prompt: String,
}

impl ShowDialog {
    pub fn confirm(prompt: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Confirm,
            prompt: prompt.into(),
        }
    }

    pub fn text_input(prompt: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::TextInput,
            prompt: prompt.into(),
        }
    }
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    Confirmed(bool),
    Submitted(String),
}

/// Keyboard input already reduced to what dialogs care about.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Char(char),
    Backspace,
    Enter,
    Escape,
}

#[derive(Debug, Clone)]
pub struct OpenDialog {
    pub kind: DialogKind,
    pub prompt: String,
    pub input: String,
    root: Option<Entity>,
}

impl OpenDialog {
    fn new(request: &ShowDialog) -> Self {
        Self {
            kind: request.kind,
            prompt: request.prompt.clone(),
            input: String::new(),
            root: None,
        }
    }

    /// Feed one key. Returns the response once the dialog is answered.
    pub fn press(&mut self, key: DialogKey) -> Option<DialogResponse> {
        match self.kind {
            DialogKind::Confirm => match key {
                DialogKey::Enter => Some(DialogResponse::Confirmed(true)),
                DialogKey::Escape => Some(DialogResponse::Confirmed(false)),
                DialogKey::Char(c) => match c.to_ascii_lowercase() {
                    'y' => Some(DialogResponse::Confirmed(true)),
                    'n' => Some(DialogResponse::Confirmed(false)),
                    _ => None,
                },
                DialogKey::Backspace => None,
            },
            DialogKind::TextInput => match key {
                DialogKey::Char(c) if !c.is_control() => {
                    if self.input.chars().count() < MAX_INPUT_CHARS {
                        self.input.push(c);
                    }
                    None
                }
                DialogKey::Backspace => {
                    self.input.pop();
                    None
                }
                DialogKey::Enter => {
                    let name = self.input.trim();
                    if name.is_empty() {
                        None
                    } else {
                        Some(DialogResponse::Submitted(name.to_string()))
                    }
                }
                DialogKey::Char(_) | DialogKey::Escape => None,
            },
        }
    }

    pub fn display_text(&self) -> String {
        match self.kind {
            DialogKind::Confirm => format!("{}\n[Y]es / [N]o", self.prompt),
            DialogKind::TextInput => format!("{}\n{}_", self.prompt, self.input),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ActiveDialog(pub Option<OpenDialog>);

impl ActiveDialog {
    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Component)]
pub struct DialogRoot;

#[derive(Component)]
pub struct DialogText;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogSet;

pub fn plugin(app: &mut App) {
    app.init_resource::<ActiveDialog>()
        .add_message::<ShowDialog>()
        .add_message::<DialogResponse>()
        .add_message::<DialogKey>()
        .add_message::<KeyboardInput>()
        .add_systems(
            Update,
            (
                open_dialogs,
                read_dialog_keys,
                apply_dialog_keys,
                refresh_dialog_text,
            )
                .chain()
                .in_set(DialogSet),
        );
}

pub fn open_dialogs(
    mut commands: Commands,
    mut requests: MessageReader<ShowDialog>,
    mut active: ResMut<ActiveDialog>,
) {
    for req in requests.read() {
        if let Some(prev) = active.0.take() {
            warn!("Dialog {:?} replaced before it was answered", prev.prompt);
            if let Some(root) = prev.root {
                commands.entity(root).try_despawn();
            }
        }

        let mut dialog = OpenDialog::new(req);
        dialog.root = Some(spawn_overlay(&mut commands, &dialog.display_text()));
        debug!("Dialog opened: {}", dialog.prompt);
        active.0 = Some(dialog);
    }
}

fn spawn_overlay(commands: &mut Commands, text: &str) -> Entity {
    commands
        .spawn((
            Name::new("Dialog"),
            DialogRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            GlobalZIndex(10),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    padding: UiRect::all(Val::Px(20.0)),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.08, 0.08, 0.12)),
            ))
            .with_children(|panel| {
                panel.spawn((
                    DialogText,
                    Text::new(text),
                    TextFont::from_font_size(22.0),
                    TextColor(Color::WHITE),
                ));
            });
        })
        .id()
}

/// Reduce raw keyboard messages to `DialogKey`s while a dialog is open.
pub fn read_dialog_keys(
    mut keyboard: MessageReader<KeyboardInput>,
    active: Res<ActiveDialog>,
    mut keys: MessageWriter<DialogKey>,
) {
    if !active.is_open() {
        keyboard.clear();
        return;
    }

    for ev in keyboard.read() {
        if ev.state != ButtonState::Pressed {
            continue;
        }
        match &ev.logical_key {
            Key::Enter => {
                keys.write(DialogKey::Enter);
            }
            Key::Escape => {
                keys.write(DialogKey::Escape);
            }
            Key::Backspace => {
                keys.write(DialogKey::Backspace);
            }
            Key::Space => {
                keys.write(DialogKey::Char(' '));
            }
            Key::Character(s) => {
                keys.write_batch(s.chars().map(DialogKey::Char));
            }
            _ => {}
        }
    }
}

pub fn apply_dialog_keys(
    mut commands: Commands,
    mut keys: MessageReader<DialogKey>,
    mut active: ResMut<ActiveDialog>,
    mut responses: MessageWriter<DialogResponse>,
) {
    for key in keys.read() {
        let Some(dialog) = active.0.as_mut() else {
            continue;
        };
        let Some(response) = dialog.press(*key) else {
            continue;
        };

        if let Some(root) = dialog.root {
            commands.entity(root).try_despawn();
        }
        debug!("Dialog answered: {response:?}");
        active.0 = None;
        responses.write(response);
    }
}

fn refresh_dialog_text(active: Res<ActiveDialog>, mut q_text: Query<&mut Text, With<DialogText>>) {
    if !active.is_changed() {
        return;
    }
    let Some(dialog) = active.0.as_ref() else {
        return;
    };
    for mut text in &mut q_text {
        text.0 = dialog.display_text();
    }
}
