//! Lighting plugin (Firefly) (render-only): a soft glow riding on the player ship.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::player::Player;

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Startup, setup)
        .add_systems(PostUpdate, follow_player_light.before(TransformSystems::Propagate));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: Color::srgb(0.6, 0.9, 1.0),
            radius: 260.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        Visibility::Hidden,
    ));
}

/// Track the ship; hide the light while no ship exists.
fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<(&mut Transform, &mut Visibility), (With<PlayerLight>, Without<Player>)>,
) {
    let Ok((mut tf_light, mut vis)) = q_light.single_mut() else {
        return;
    };
    let Ok(tf_player) = q_player.single() else {
        *vis = Visibility::Hidden;
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
    *vis = Visibility::Inherited;
}
