pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;

/// Helper to create a player entity at the configured spawn point
pub fn create_player(
    world: &mut World,
    player_id: u8,
    config: &Config,
    rng: &mut GameRng,
) -> hecs::Entity {
    let size = glam::Vec2::new(config.player_width, config.player_height);
    world.spawn((
        Player::new(player_id, config.player_spawn, size),
        PlayerIntent::new(),
        Tint(PlayerColor::random(rng)),
    ))
}
