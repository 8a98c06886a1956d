/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Round
    pub const ROUND_MAX_SCORE: u32 = 11;
    pub const ROUND_OVER_TIMEOUT: f32 = 6.0; // seconds

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_MARGIN_X: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 500.0; // px per second

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED_Y: f32 = 300.0; // px per second
    pub const BALL_SPEED_INITIAL_X: f32 = 300.0; // px per second
    pub const BALL_SPEED_MAX_X: f32 = 500.0; // px per second
    pub const BALL_SPEED_INCREMENT_X: f32 = 20.0; // px per second
    pub const BALL_SERVE_DELAY: f32 = 2.0; // seconds

    // Net
    pub const NET_WIDTH: f32 = 5.0;
    pub const NET_HEIGHT: f32 = 15.0;
}
