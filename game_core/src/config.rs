use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_start_top: f32,
    pub ball_radius: f32,
    pub ball_serve_speed_x: f32,
    pub ball_serve_speed_y: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub bounce_angle_sensitivity: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_start_top: Params::PADDLE_START_TOP,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_speed_x: Params::BALL_SERVE_SPEED_X,
            ball_serve_speed_y: Params::BALL_SERVE_SPEED_Y,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            bounce_angle_sensitivity: Params::BOUNCE_ANGLE_SENSITIVITY,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the arena, where the ball is served from
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Largest valid paddle top
    pub fn max_paddle_top(&self) -> f32 {
        (self.arena_height - self.paddle_height).max(0.0)
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_top(&self, top: f32) -> f32 {
        top.clamp(0.0, self.max_paddle_top())
    }

    /// Which paddle a screen x coordinate belongs to
    pub fn side_of(&self, x: f32) -> Side {
        if x < self.arena_width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}
