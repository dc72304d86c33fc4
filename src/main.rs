use bevy::prelude::AppExit;

fn main() -> AppExit {
    let _ = dotenvy::dotenv();
    space_invaders::game::run()
}
