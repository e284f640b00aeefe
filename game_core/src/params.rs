/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (world units, origin at the centre, y up)
    pub const HORIZONTAL_BOUND: f32 = 500.0;
    pub const WALL_BOUND: f32 = 384.0;
    pub const PADDLE_TRAVEL: f32 = 350.0;

    // Paddle
    pub const PADDLE_X: f32 = 480.0;
    pub const PADDLE_HALF_LENGTH: f32 = 50.0;
    pub const PADDLE_HALF_WIDTH: f32 = 5.0;
    pub const PADDLE_SPEED: f32 = 200.0; // units per second
    pub const AUTOPLAY_DEAD_ZONE: f32 = 3.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_SPEED: f32 = 200.0;
    pub const LAUNCH_RISE_MIN: f32 = 0.5;
    pub const LAUNCH_RISE_MAX: f32 = 1.0;

    // Multiplied into velocity components on every bounce
    pub const JITTER_MIN: f32 = 0.99;
    pub const JITTER_MAX: f32 = 1.05;

    // Match flow
    pub const PLAY_TO: u32 = 10;
    pub const SERVE_AUTOPLAY_DELAY: f32 = 3.0; // seconds
    pub const TIME_SCALE: f32 = 2.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
