use crate::input::ActionSet;
use crate::map::Aabb;
use glam::Vec2;

/// Player component - a controllable rectangle
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub player_id: u8,
    pub pos: Vec2,  // Top-left corner, canvas pixels (y grows downward)
    pub vel: Vec2,  // Pixels per frame
    pub size: Vec2, // Width, height
}

impl Player {
    pub fn new(player_id: u8, pos: Vec2, size: Vec2) -> Self {
        Self {
            player_id,
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Bounding box of the player in surface coordinates
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Player palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerColor {
    Green,
    Blue,
    Purple,
    Red,
    Yellow,
}

impl PlayerColor {
    pub const PALETTE: [PlayerColor; 5] = [
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Purple,
        PlayerColor::Red,
        PlayerColor::Yellow,
    ];

    /// CSS fill style
    pub fn hex(self) -> &'static str {
        match self {
            PlayerColor::Green => "#11bf2b",
            PlayerColor::Blue => "#114bbf",
            PlayerColor::Purple => "#5f11bf",
            PlayerColor::Red => "#bf1d11",
            PlayerColor::Yellow => "#b9bf11",
        }
    }

    /// Pick a palette entry uniformly at random
    pub fn random(rng: &mut crate::GameRng) -> Self {
        use rand::Rng;
        let index = rng.0.gen_range(0..Self::PALETTE.len());
        Self::PALETTE[index]
    }
}

/// Display color of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint(pub PlayerColor);

/// Actions currently held for a player
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerIntent {
    pub held: ActionSet,
}

impl PlayerIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_player_new_is_at_rest() {
        let player = Player::new(0, Vec2::new(10.0, 0.0), Vec2::new(30.0, 50.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_player_aabb() {
        let player = Player::new(0, Vec2::new(10.0, 20.0), Vec2::new(30.0, 50.0));
        let aabb = player.aabb();
        assert_eq!(aabb.min, Vec2::new(10.0, 20.0));
        assert_eq!(aabb.max, Vec2::new(40.0, 70.0));
    }

    #[test]
    fn test_palette_hex_values_are_distinct() {
        for (i, a) in PlayerColor::PALETTE.iter().enumerate() {
            assert!(a.hex().starts_with('#'));
            assert_eq!(a.hex().len(), 7);
            for b in &PlayerColor::PALETTE[i + 1..] {
                assert_ne!(a.hex(), b.hex());
            }
        }
    }

    #[test]
    fn test_random_color_covers_palette() {
        let mut rng = GameRng::new(7);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let color = PlayerColor::random(&mut rng);
            assert!(PlayerColor::PALETTE.contains(&color));
            if !seen.contains(&color) {
                seen.push(color);
            }
        }
        assert_eq!(seen.len(), PlayerColor::PALETTE.len(), "Every color reachable");
    }
}
