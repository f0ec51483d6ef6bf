use crate::{Action, ActionSet, Config, Player};

/// Advance a player by one frame from its held actions, then apply gravity
pub fn update_player(player: &mut Player, held: &ActionSet, config: &Config) {
    let left = held.contains(Action::MoveLeft);
    let right = held.contains(Action::MoveRight);

    // Right is applied last, so it wins when both are held
    if left {
        player.vel.x = -config.run_speed;
    }
    if right {
        player.vel.x = config.run_speed;
    }

    if !left && !right && player.vel.x != 0.0 {
        player.vel.x = decelerate(player.vel.x, config.deceleration);
    }

    // No double jump: the impulse needs ground under the player
    if held.contains(Action::Jump) && config.is_grounded(player.pos.y, player.size.y) {
        player.vel.y = config.jump_impulse;
    }

    player.pos += player.vel;

    if !config.is_grounded(player.pos.y, player.size.y) {
        player.vel.y += config.gravity;
    } else {
        player.vel.y = 0.0;
        player.pos.y = config.clamp_to_floor(player.pos.y, player.size.y);
    }
}

/// Move `speed` toward zero by `step`, landing exactly on zero
pub fn decelerate(speed: f32, step: f32) -> f32 {
    if speed.abs() <= step {
        0.0
    } else {
        speed - step.copysign(speed)
    }
}
