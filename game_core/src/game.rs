//! Frame loop controller: owns the entities and drives update/draw

use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::*;
use crate::{
    create_player, Aabb, Action, Config, GameRng, Player, PlayerIntent, RenderSurface, Tint,
};

pub struct Game {
    world: World,
    config: Config,
    rng: GameRng,
    /// Insertion order, which is also draw order
    order: Vec<Entity>,
    /// Entity that receives keyboard input
    controlled: Entity,
    frame: u64,
}

impl Game {
    /// Create a game with a single controllable player at the spawn point
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();
        let controlled = create_player(&mut world, 0, &config, &mut rng);

        Self {
            world,
            config,
            rng,
            order: vec![controlled],
            controlled,
            frame: 0,
        }
    }

    /// Add another player at the spawn point. It is drawn after existing ones.
    pub fn spawn_player(&mut self) -> Entity {
        let player_id = self.order.len() as u8;
        let entity = create_player(&mut self.world, player_id, &self.config, &mut self.rng);
        self.order.push(entity);
        entity
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controlled(&self) -> Entity {
        self.controlled
    }

    /// Entities in draw order
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    /// Number of frames rendered so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Copy of a player's state
    pub fn player(&self, entity: Entity) -> Option<Player> {
        self.world.get::<&Player>(entity).ok().map(|p| *p)
    }

    pub fn tint(&self, entity: Entity) -> Option<Tint> {
        self.world.get::<&Tint>(entity).ok().map(|t| *t)
    }

    /// Surface rectangle the game clears every frame
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::ZERO,
            Vec2::new(self.config.surface_width, self.config.surface_height),
        )
    }

    pub fn press(&mut self, action: Action) {
        apply_action(&mut self.world, self.controlled, action, true);
    }

    pub fn release(&mut self, action: Action) {
        apply_action(&mut self.world, self.controlled, action, false);
    }

    /// Handle a host key press. Returns the mapped action, if any.
    pub fn key_down(&mut self, key: &str) -> Option<Action> {
        let action = Action::from_key(key)?;
        self.press(action);
        Some(action)
    }

    /// Handle a host key release. Returns the mapped action, if any.
    pub fn key_up(&mut self, key: &str) -> Option<Action> {
        let action = Action::from_key(key)?;
        self.release(action);
        Some(action)
    }

    /// One render tick: clear, then update and draw each entity in order
    pub fn render(&mut self, surface: &mut dyn RenderSurface) {
        clear(surface, self.bounds(), &self.config.background);

        for &entity in &self.order {
            let Ok((player, intent, tint)) = self
                .world
                .query_one_mut::<(&mut Player, &PlayerIntent, &Tint)>(entity)
            else {
                continue;
            };
            update_player(player, &intent.held, &self.config);
            draw_player(surface, player, tint);
        }

        self.frame += 1;
    }
}
