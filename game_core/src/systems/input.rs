use hecs::{Entity, World};

use crate::components::*;
use crate::input::Action;

/// Press or release an action on a player's intent.
/// Returns false if the entity has no intent to update.
pub fn apply_action(world: &mut World, entity: Entity, action: Action, pressed: bool) -> bool {
    match world.query_one_mut::<&mut PlayerIntent>(entity) {
        Ok(intent) => {
            if pressed {
                intent.held.insert(action);
            } else {
                intent.held.remove(action);
            }
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_action_press_release() {
        let mut world = World::new();
        let entity = world.spawn((PlayerIntent::new(),));

        assert!(apply_action(&mut world, entity, Action::Jump, true));
        assert!(world
            .get::<&PlayerIntent>(entity)
            .unwrap()
            .held
            .contains(Action::Jump));

        assert!(apply_action(&mut world, entity, Action::Jump, false));
        assert!(world.get::<&PlayerIntent>(entity).unwrap().held.is_empty());
    }

    #[test]
    fn test_apply_action_without_intent() {
        let mut world = World::new();
        let entity = world.spawn((Tint(PlayerColor::Red),));
        assert!(!apply_action(&mut world, entity, Action::MoveLeft, true));
    }
}
