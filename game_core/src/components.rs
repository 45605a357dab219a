use glam::Vec2;

use crate::{Config, GameRng};

/// Which half of the arena a paddle (or player) owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub top: f32, // Top edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, top: f32) -> Self {
        Self { side, top }
    }

    /// Whether a y coordinate lies within the paddle's vertical span (inclusive)
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y >= self.top && y <= self.top + height
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.top + height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // pixels per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the centre: random horizontal direction at a fixed speed,
    /// random vertical speed in a symmetric range
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.center();

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vy: f32 = rng.0.gen_range(-1.0..1.0);

        self.vel = Vec2::new(
            dir * config.ball_serve_speed_x,
            vy * config.ball_serve_speed_y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_spans_is_inclusive() {
        let paddle = Paddle::new(Side::Right, 180.0);
        assert!(paddle.spans(180.0, 80.0));
        assert!(paddle.spans(260.0, 80.0));
        assert!(paddle.spans(220.0, 80.0));
        assert!(!paddle.spans(179.9, 80.0));
        assert!(!paddle.spans(260.1, 80.0));
    }

    #[test]
    fn test_ball_reset_serves_from_center() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-5.0, 12.0), Vec2::new(-8.0, 8.0));

        for _ in 0..50 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.pos, config.center());
            assert_eq!(ball.vel.x.abs(), config.ball_serve_speed_x);
            assert!(ball.vel.y >= -config.ball_serve_speed_y);
            assert!(ball.vel.y < config.ball_serve_speed_y);
        }
    }

    #[test]
    fn test_ball_reset_serves_both_directions() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        let mut left = 0;
        let mut right = 0;
        for _ in 0..100 {
            ball.reset(&config, &mut rng);
            if ball.vel.x > 0.0 {
                right += 1;
            } else {
                left += 1;
            }
        }
        assert!(left > 0 && right > 0, "Serve direction should be random");
    }
}
