//! Game session controller.
//!
//! Owns the `Session` counters and drives the level progression:
//!
//! ```text
//!   OnEnter(Starting)      start_new_game: clear world, reset counters,
//!                          spawn player, next_level()
//!   next_level()           level += 1, suspend actions, schedule InitLevel,
//!                          -> LevelTransition
//!   Update                 delay queue fires InitLevel -> Spawning
//!   OnEnter(Spawning)      enemy grid, resume actions -> Playing
//!   PostUpdate             LevelCleared (from the collision policy) -> next_level()
//! ```
//!
//! `next_level` is not re-entrant: while a transition is pending a second call
//! is rejected and logged. The only callers are the session start and the
//! every-40-kills trigger, and the latter cannot fire while actions are
//! suspended.

mod counters;

use std::time::Duration;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::delay_queue::{DelayQueue, TaskHandle};
use crate::common::kind::EntityKind;
use crate::common::playfield::Playfield;
use crate::common::rng::GameRng;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::input::ActionDispatch;
use crate::plugins::{collision, spawner};

pub use counters::{
    HitOutcome, KillOutcome, Session, KILLS_PER_LEVEL, POINTS_PER_KILL, STARTING_LIVES,
};

/// Payloads for the session's delay queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// End of the level banner: populate the next wave.
    InitLevel,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredTaskFired(pub DeferredTask);

/// A kill completed a wave.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCleared;

/// The player lost a life; `lives_left` is the count after the hit.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHit {
    pub lives_left: u32,
}

/// Counters were reset and a fresh player spawned.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStarted;

/// Handle of the in-flight level transition, if any.
#[derive(Resource, Debug, Default)]
pub struct LevelTransition {
    pending: Option<TaskHandle>,
}

impl LevelTransition {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Everything `next_level` touches, bundled so callers pass it explicitly.
#[derive(SystemParam)]
pub struct LevelFlow<'w> {
    session: ResMut<'w, Session>,
    dispatch: ResMut<'w, ActionDispatch>,
    delays: ResMut<'w, DelayQueue<DeferredTask>>,
    transition: ResMut<'w, LevelTransition>,
    next_state: ResMut<'w, NextState<GameState>>,
}

impl LevelFlow<'_> {
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Zero the counters and drop any transition still in flight.
    pub fn reset_session(&mut self) {
        self.cancel_transition();
        self.session.reset();
    }

    /// Begin the banner-and-repopulate sequence for the next level.
    ///
    /// Returns the new level, or `None` when the call was rejected (transition
    /// already pending, or the session is over).
    pub fn next_level(&mut self, tunables: &Tunables) -> Option<u32> {
        if self.transition.is_pending() {
            warn!("next_level called while a level transition is pending; ignored");
            return None;
        }
        if self.session.is_over() {
            debug!("next_level skipped: session is over");
            return None;
        }

        self.dispatch.disable();
        let level = self.session.advance_level();

        let delay = Duration::from_secs_f32(tunables.level_banner_secs);
        self.transition.pending = Some(self.delays.schedule(delay, DeferredTask::InitLevel));
        self.next_state.set(GameState::LevelTransition);

        info!("Level {level} starting");
        Some(level)
    }

    /// Returns true if a pending transition was cancelled.
    pub fn cancel_transition(&mut self) -> bool {
        match self.transition.pending.take() {
            Some(handle) => self.delays.cancel(handle),
            None => false,
        }
    }

    pub fn suspend_actions(&mut self) {
        self.dispatch.disable();
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Session>()
        .init_resource::<LevelTransition>()
        .init_resource::<DelayQueue<DeferredTask>>()
        .add_message::<DeferredTaskFired>()
        .add_message::<LevelCleared>()
        .add_message::<PlayerHit>()
        .add_message::<SessionStarted>();

    app.add_systems(OnEnter(GameState::Starting), start_new_game)
        .add_systems(OnEnter(GameState::Spawning), populate_level)
        .add_systems(
            Update,
            (
                tick_deferred_tasks,
                finish_level_transition.after(tick_deferred_tasks),
            ),
        )
        .add_systems(
            PostUpdate,
            advance_on_level_cleared.after(collision::resolve_contacts),
        );
}

/// Reset everything and start at level 1.
pub fn start_new_game(
    mut commands: Commands,
    mut flow: LevelFlow,
    q_tagged: Query<Entity, With<EntityKind>>,
    playfield: Res<Playfield>,
    tunables: Res<Tunables>,
    mut started: MessageWriter<SessionStarted>,
) {
    for e in &q_tagged {
        commands.entity(e).try_despawn();
    }

    flow.reset_session();
    spawner::spawn_player(&mut commands, &playfield);
    started.write(SessionStarted);

    info!("New game");
    flow.next_level(&tunables);
}

fn tick_deferred_tasks(
    time: Res<Time>,
    mut queue: ResMut<DelayQueue<DeferredTask>>,
    mut fired: MessageWriter<DeferredTaskFired>,
) {
    if queue.is_empty() {
        return;
    }
    for task in queue.tick(time.delta()) {
        fired.write(DeferredTaskFired(task));
    }
}

fn finish_level_transition(
    mut fired: MessageReader<DeferredTaskFired>,
    state: Res<State<GameState>>,
    mut transition: ResMut<LevelTransition>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for DeferredTaskFired(task) in fired.read() {
        match task {
            DeferredTask::InitLevel => {
                transition.pending = None;
                if *state.get() == GameState::LevelTransition {
                    next_state.set(GameState::Spawning);
                } else {
                    debug!("InitLevel fired outside a level transition ({:?})", state.get());
                }
            }
        }
    }
}

fn populate_level(
    mut commands: Commands,
    playfield: Res<Playfield>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    session: Res<Session>,
    mut dispatch: ResMut<ActionDispatch>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let spawned = spawner::init_level(&mut commands, &playfield, &tunables, &mut rng);
    dispatch.enable();
    next_state.set(GameState::Playing);
    debug!("Level {} populated with {spawned} enemies", session.level());
}

fn advance_on_level_cleared(
    mut cleared: MessageReader<LevelCleared>,
    mut flow: LevelFlow,
    tunables: Res<Tunables>,
) {
    for _ in cleared.read() {
        flow.next_level(&tunables);
    }
}
