use crate::params::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub background: String,
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_spawn: Vec2,
    pub run_speed: f32,
    pub deceleration: f32,
    pub jump_impulse: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            background: Params::BACKGROUND.to_string(),
            gravity: Params::GRAVITY,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            player_spawn: Vec2::new(Params::PLAYER_SPAWN_X, Params::PLAYER_SPAWN_Y),
            run_speed: Params::RUN_SPEED,
            deceleration: Params::DECELERATION,
            jump_impulse: Params::JUMP_IMPULSE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for a surface of the given size, everything else default
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Top edge a body of `height` rests at when standing on the floor
    pub fn floor_y(&self, height: f32) -> f32 {
        self.surface_height - height
    }

    /// Grounded means "not above the floor line". No platforms yet.
    pub fn is_grounded(&self, y: f32, height: f32) -> bool {
        y >= self.floor_y(height)
    }

    /// Clamp Y so a body never sinks through the floor
    pub fn clamp_to_floor(&self, y: f32, height: f32) -> f32 {
        y.min(self.floor_y(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.surface_width, 720.0);
        assert_eq!(config.surface_height, 405.0);
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.player_spawn, Vec2::new(10.0, 0.0));
        assert_eq!(config.background, "#f0756c");
    }

    #[test]
    fn test_config_floor_y() {
        let config = Config::new();
        assert_eq!(config.floor_y(50.0), 355.0, "Floor line for a 50px body");
    }

    #[test]
    fn test_config_is_grounded() {
        let config = Config::new();
        assert!(!config.is_grounded(0.0, 50.0), "Top of the surface is airborne");
        assert!(!config.is_grounded(354.75, 50.0), "Just above the floor is airborne");
        assert!(config.is_grounded(355.0, 50.0), "Exactly on the floor is grounded");
        assert!(config.is_grounded(360.0, 50.0), "Below the floor counts as grounded");
    }

    #[test]
    fn test_config_clamp_to_floor() {
        let config = Config::new();
        assert_eq!(config.clamp_to_floor(400.0, 50.0), 355.0);
        assert_eq!(config.clamp_to_floor(100.0, 50.0), 100.0);
        assert_eq!(config.clamp_to_floor(-20.0, 50.0), -20.0, "No ceiling clamp");
    }

    #[test]
    fn test_config_with_surface() {
        let config = Config::with_surface(320.0, 200.0);
        assert_eq!(config.floor_y(50.0), 150.0);
        assert_eq!(config.run_speed, 2.5);
    }
}
