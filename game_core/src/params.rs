/// Game tuning parameters for the side-scroller
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (canvas pixels)
    pub const SURFACE_WIDTH: f32 = 720.0;
    pub const SURFACE_HEIGHT: f32 = 405.0;
    pub const BACKGROUND: &'static str = "#f0756c";

    // Player
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPAWN_X: f32 = 10.0;
    pub const PLAYER_SPAWN_Y: f32 = 0.0;
    pub const RUN_SPEED: f32 = 2.5; // pixels per frame
    pub const DECELERATION: f32 = 0.25; // speed lost per frame once keys are released
    pub const JUMP_IMPULSE: f32 = -6.0;

    // Physics
    pub const GRAVITY: f32 = 0.25; // added to speed_y every airborne frame
}
