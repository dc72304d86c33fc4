//! HUD: score line, life icons, level banner and achievement toasts.
//!
//! Everything here is derived from resources and messages; nothing in the HUD
//! feeds back into gameplay.
//! - score text: recomputed when `Session` changes;
//! - high-score text: recomputed when `SaveSlot` changes;
//! - life icons: rebuilt on `SessionStarted`, one animated away per `PlayerHit`;
//! - "Level N": spawned on entering `LevelTransition`, gone when it exits.

use bevy::color::palettes::css::AQUAMARINE;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::kind::EntityKind;
use crate::common::lifetime::Lifetime;
use crate::common::playfield::Playfield;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::achievements::AchievementUnlocked;
use crate::plugins::persistence::SaveSlot;
use crate::plugins::session::{PlayerHit, Session, SessionStarted};

pub const HUD_ORIGIN: Vec2 = Vec2::new(25.0, 10.0);
pub const HUD_GAP: f32 = 20.0;
pub const HUD_FONT_SIZE: f32 = 18.0;
pub const BANNER_FONT_SIZE: f32 = 44.0;

pub const LIFE_ICON_SIZE: f32 = 16.0;
pub const LIFE_ICON_PITCH: f32 = 32.0;
pub const LIFE_ICON_TOP: f32 = 10.0;
pub const LOST_LIFE_SIZE: f32 = 64.0;
/// Duration of each half of the lost-life animation.
pub const LOST_LIFE_PHASE_SECS: f32 = 0.66;

pub const TOAST_SECS: f32 = 3.0;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct HiScoreText;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeIcon {
    pub index: u32,
}

/// A life icon on its way out.
#[derive(Component, Debug, Clone, Copy)]
pub struct LostLife {
    pub from: Vec2,
    pub elapsed: f32,
}

#[derive(Component, Debug, Default)]
pub struct LevelBanner {
    pub elapsed: f32,
}

#[derive(Component)]
pub struct AchievementToast;

fn hud_color() -> Color {
    AQUAMARINE.into()
}

pub fn score_label(score: u32) -> String {
    format!("Score:[{score}]")
}

pub fn hi_score_label(slot: &SaveSlot) -> String {
    let record = slot.record();
    format!("HiScore:[{}]({})", record.high_score, record.name)
}

/// Screen-space top-left of life icon `index`.
pub fn life_icon_pos(index: u32, playfield: &Playfield) -> Vec2 {
    Vec2::new(
        playfield.width * 4.0 / 5.0 + index as f32 * LIFE_ICON_PITCH,
        LIFE_ICON_TOP,
    )
}

/// Top-left and edge length of a lost-life icon `elapsed` seconds in, or
/// `None` once the animation is over.
///
/// First half: grow from 16 to 64 while travelling to the screen centre.
/// Second half: shrink to nothing around the centre.
pub fn lost_life_frame(elapsed: f32, from: Vec2, playfield: &Playfield) -> Option<(Vec2, f32)> {
    let centre = Vec2::new(playfield.width, playfield.height) * 0.5;

    if elapsed < LOST_LIFE_PHASE_SECS {
        let t = elapsed / LOST_LIFE_PHASE_SECS;
        let size = LIFE_ICON_SIZE + (LOST_LIFE_SIZE - LIFE_ICON_SIZE) * t;
        let from_centre = from + Vec2::splat(LIFE_ICON_SIZE * 0.5);
        let c = from_centre.lerp(centre, t);
        Some((c - Vec2::splat(size * 0.5), size))
    } else if elapsed < 2.0 * LOST_LIFE_PHASE_SECS {
        let t = (elapsed - LOST_LIFE_PHASE_SECS) / LOST_LIFE_PHASE_SECS;
        let size = LOST_LIFE_SIZE * (1.0 - t);
        Some((centre - Vec2::splat(size * 0.5), size))
    } else {
        None
    }
}

/// Banner top edge: falls from the top towards mid-screen over the banner time.
pub fn banner_top(elapsed: f32, banner_secs: f32, playfield: &Playfield) -> f32 {
    let t = if banner_secs > 0.0 {
        (elapsed / banner_secs).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let rest = playfield.height * 0.5 - BANNER_FONT_SIZE;
    rest * (1.0 - (1.0 - t) * (1.0 - t))
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_score_line)
        .add_systems(OnEnter(GameState::LevelTransition), spawn_level_banner)
        .add_systems(
            Update,
            (
                refresh_score_text.run_if(resource_changed::<Session>),
                refresh_hi_score_text.run_if(resource_changed::<SaveSlot>),
                rebuild_life_icons,
                start_lost_life,
                animate_lost_lives,
                drop_level_banner,
                show_achievement_toasts,
            ),
        );
}

fn hud_text(label: String, size: f32) -> (Text, TextFont, TextColor) {
    (
        Text::new(label),
        TextFont::from_font_size(size),
        TextColor(hud_color()),
    )
}

pub fn spawn_score_line(mut commands: Commands, session: Res<Session>, slot: Res<SaveSlot>) {
    commands
        .spawn((
            Name::new("ScoreLine"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_ORIGIN.x),
                top: Val::Px(HUD_ORIGIN.y),
                column_gap: Val::Px(HUD_GAP),
                flex_direction: FlexDirection::Row,
                ..default()
            },
        ))
        .with_children(|row| {
            row.spawn((ScoreText, hud_text(score_label(session.score()), HUD_FONT_SIZE)));
            row.spawn((HiScoreText, hud_text(hi_score_label(&slot), HUD_FONT_SIZE)));
        });
}

pub fn refresh_score_text(session: Res<Session>, mut q: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut q {
        text.0 = score_label(session.score());
    }
}

fn refresh_hi_score_text(slot: Res<SaveSlot>, mut q: Query<&mut Text, With<HiScoreText>>) {
    for mut text in &mut q {
        text.0 = hi_score_label(&slot);
    }
}

fn icon_node(top_left: Vec2, size: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(top_left.x),
        top: Val::Px(top_left.y),
        width: Val::Px(size),
        height: Val::Px(size),
        ..default()
    }
}

pub fn rebuild_life_icons(
    mut commands: Commands,
    mut started: MessageReader<SessionStarted>,
    session: Res<Session>,
    playfield: Res<Playfield>,
    q_icons: Query<Entity, Or<(With<LifeIcon>, With<LostLife>)>>,
) {
    if started.read().count() == 0 {
        return;
    }

    for e in &q_icons {
        commands.entity(e).try_despawn();
    }
    for index in 0..session.lives() {
        commands.spawn((
            Name::new("LifeIcon"),
            LifeIcon { index },
            icon_node(life_icon_pos(index, &playfield), LIFE_ICON_SIZE),
            BackgroundColor(Color::srgb(0.2, 0.75, 0.9)),
        ));
    }
}

pub fn start_lost_life(
    mut commands: Commands,
    mut hits: MessageReader<PlayerHit>,
    playfield: Res<Playfield>,
    q_icons: Query<(Entity, &LifeIcon)>,
) {
    for hit in hits.read() {
        let Some((e, icon)) = q_icons.iter().find(|(_, i)| i.index == hit.lives_left) else {
            continue;
        };
        commands
            .entity(e)
            .remove::<LifeIcon>()
            .insert((
                LostLife {
                    from: life_icon_pos(icon.index, &playfield),
                    elapsed: 0.0,
                },
                GlobalZIndex(5),
            ));
    }
}

pub fn animate_lost_lives(
    mut commands: Commands,
    time: Res<Time>,
    playfield: Res<Playfield>,
    mut q: Query<(Entity, &mut LostLife, &mut Node)>,
) {
    for (e, mut lost, mut node) in &mut q {
        lost.elapsed += time.delta_secs();
        match lost_life_frame(lost.elapsed, lost.from, &playfield) {
            Some((top_left, size)) => *node = icon_node(top_left, size),
            None => {
                commands.entity(e).try_despawn();
            }
        }
    }
}

fn spawn_level_banner(mut commands: Commands, session: Res<Session>) {
    commands.spawn((
        Name::new("LevelBanner"),
        EntityKind::LevelInfo,
        LevelBanner::default(),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            top: Val::Px(0.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        DespawnOnExit(GameState::LevelTransition),
    ))
    .with_children(|banner| {
        banner.spawn(hud_text(format!("Level {}", session.level()), BANNER_FONT_SIZE));
    });
}

fn drop_level_banner(
    time: Res<Time>,
    tunables: Res<Tunables>,
    playfield: Res<Playfield>,
    mut q: Query<(&mut LevelBanner, &mut Node)>,
) {
    for (mut banner, mut node) in &mut q {
        banner.elapsed += time.delta_secs();
        node.top = Val::Px(banner_top(banner.elapsed, tunables.level_banner_secs, &playfield));
    }
}

pub fn show_achievement_toasts(
    mut commands: Commands,
    mut unlocked: MessageReader<AchievementUnlocked>,
    q_toasts: Query<(), With<AchievementToast>>,
) {
    let mut slot = q_toasts.iter().count();
    for AchievementUnlocked(a) in unlocked.read() {
        commands.spawn((
            Name::new("AchievementToast"),
            AchievementToast,
            Lifetime::from_seconds(TOAST_SECS),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_ORIGIN.x),
                bottom: Val::Px(HUD_ORIGIN.y + slot as f32 * (HUD_FONT_SIZE + 8.0)),
                padding: UiRect::all(Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|toast| {
            toast.spawn(hud_text(
                format!("Achievement unlocked: {}", a.name()),
                HUD_FONT_SIZE,
            ));
        });
        slot += 1;
    }
}
