//! Game-over flow.
//!
//! ```text
//!   OnEnter(GameOver)   freeze input, drop pending transition, "Game Over. Continue?"
//!     yes               -> Starting (fresh session, score back to 0)
//!     no, new record    -> NameEntry
//!     no                -> AppExit
//!   OnEnter(NameEntry)  "Enter your name"
//!     submitted         save {name, score}, AppExit
//! ```

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::dialog::{DialogResponse, DialogSet, ShowDialog};
use crate::plugins::persistence::{SaveData, SaveSlot};
use crate::plugins::session::{LevelFlow, Session};

pub const CONTINUE_PROMPT: &str = "Game Over. Continue?";
pub const NAME_PROMPT: &str = "Enter your name";

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::GameOver), prompt_continue)
        .add_systems(OnEnter(GameState::NameEntry), prompt_name)
        .add_systems(
            Update,
            (
                answer_continue.run_if(in_state(GameState::GameOver)),
                submit_name.run_if(in_state(GameState::NameEntry)),
            )
                .after(DialogSet),
        );
}

pub fn prompt_continue(mut flow: LevelFlow, mut dialogs: MessageWriter<ShowDialog>) {
    flow.suspend_actions();
    if flow.cancel_transition() {
        debug!("Pending level transition cancelled by game over");
    }
    info!("Game over at level {}", flow.session().level());
    dialogs.write(ShowDialog::confirm(CONTINUE_PROMPT));
}

fn prompt_name(mut dialogs: MessageWriter<ShowDialog>) {
    dialogs.write(ShowDialog::text_input(NAME_PROMPT));
}

pub fn answer_continue(
    mut responses: MessageReader<DialogResponse>,
    session: Res<Session>,
    slot: Res<SaveSlot>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for response in responses.read() {
        let DialogResponse::Confirmed(again) = response else {
            continue;
        };

        if *again {
            next_state.set(GameState::Starting);
        } else if slot.is_new_high_score(session.score()) {
            info!(
                "New high score {} beats {}",
                session.score(),
                slot.record().high_score
            );
            next_state.set(GameState::NameEntry);
        } else {
            exit.write(AppExit::Success);
        }
        return;
    }
}

pub fn submit_name(
    mut responses: MessageReader<DialogResponse>,
    session: Res<Session>,
    mut slot: ResMut<SaveSlot>,
    mut exit: MessageWriter<AppExit>,
) {
    for response in responses.read() {
        let DialogResponse::Submitted(name) = response else {
            continue;
        };

        // Failures are logged by the slot; exit regardless.
        let _ = slot.save(SaveData {
            name: name.clone(),
            high_score: session.score(),
        });
        exit.write(AppExit::Success);
        return;
    }
}
