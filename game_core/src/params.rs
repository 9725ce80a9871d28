/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Stage (pixels)
    pub const STAGE_WIDTH: i32 = 800;
    pub const STAGE_HEIGHT: i32 = 600;
    pub const GROUND_HEIGHT: i32 = 112;

    // Scrolling layers (ms per 1px step)
    pub const SKY_INTERVAL_MS: u64 = 30;
    pub const LAND_INTERVAL_MS: u64 = 15; // twice the sky speed for parallax

    // Pipes
    pub const PIPE_WIDTH: i32 = 52;
    pub const PIPE_GAP: i32 = 150;
    pub const PIPE_MIN_HEIGHT: i32 = 60;
    pub const PIPE_STEP: i32 = 2; // px per move tick
    pub const PIPE_SPAWN_INTERVAL_MS: u64 = 2500;
    pub const PIPE_MOVE_INTERVAL_MS: u64 = 30;

    // Bird
    pub const BIRD_WIDTH: i32 = 33;
    pub const BIRD_HEIGHT: i32 = 26;
    pub const BIRD_LEFT: i32 = 200;
    pub const BIRD_START_TOP: f64 = 150.0;
    pub const BIRD_ACCEL: f64 = 0.002; // px/ms²
    pub const BIRD_JUMP_SPEED: f64 = -0.5; // px/ms, negative is up
    pub const WING_INTERVAL_MS: u64 = 100;
    pub const DROP_INTERVAL_MS: u64 = 16;

    // Rounds below this score get the extra game-over message
    pub const TAUNT_BELOW: u32 = 10;

    // Frame driver
    pub const MAX_FRAME_MS: u64 = 250;
}
