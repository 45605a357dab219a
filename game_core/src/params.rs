/// Game tuning parameters for hand-tracked Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, matches the camera frame)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per tick, keyboard only
    pub const PADDLE_START_TOP: f32 = 200.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_SPEED_X: f32 = 2.0;
    pub const BALL_SERVE_SPEED_Y: f32 = 3.0; // vertical serve drawn from [-3, 3)
    pub const BALL_SPEED_MAX: f32 = 8.0; // per axis
    pub const BALL_SPEED_INCREASE: f32 = 1.1; // Multiply speed on paddle hit

    // Paddle hit deflection
    pub const BOUNCE_ANGLE_SENSITIVITY: f32 = 0.75;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Hand tracking
    pub const FINGERTIP_INDEX: usize = 8; // index fingertip keypoint
}
