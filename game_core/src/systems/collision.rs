use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top and bottom walls.
///
/// The ball is not pushed back inside; it may overlap a wall by up to one
/// radius for a tick.
pub fn check_walls(ball: &mut Ball, config: &Config) -> bool {
    let r = config.ball_radius;
    if ball.pos.y - r < 0.0 || ball.pos.y + r > config.arena_height {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Whether the ball is touching this paddle's band while heading into it
fn touches_paddle(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    let r = config.ball_radius;
    let in_band = match paddle.side {
        Side::Left => ball.pos.x - r <= config.paddle_width && ball.vel.x < 0.0,
        Side::Right => {
            ball.pos.x + r >= config.arena_width - config.paddle_width && ball.vel.x > 0.0
        }
    };
    in_band && paddle.spans(ball.pos.y, config.paddle_height)
}

/// Send the ball back with more speed, deflected by where it struck.
///
/// Hits above the paddle centre go up, hits below go down; dead centre
/// returns flat.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let max = config.ball_speed_max;
    let vx = (-ball.vel.x * config.ball_speed_increase).clamp(-max, max);

    let half_height = config.paddle_height / 2.0;
    let relative = paddle.center_y(config.paddle_height) - ball.pos.y;
    let bounce_angle = (relative / half_height) * config.bounce_angle_sensitivity;

    ball.vel = Vec2::new(vx, -bounce_angle * vx.abs());
}

/// Check the ball against each paddle, right first
pub fn check_paddles(ball: &mut Ball, paddles: &[Paddle], config: &Config) -> bool {
    let mut hit = false;
    for side in [Side::Right, Side::Left] {
        for paddle in paddles.iter().filter(|p| p.side == side) {
            if touches_paddle(ball, paddle, config) {
                bounce_off_paddle(ball, paddle, config);
                log::debug!(
                    "{} paddle hit, ball vel ({:.2}, {:.2})",
                    side.label(),
                    ball.vel.x,
                    ball.vel.y
                );
                hit = true;
            }
        }
    }
    hit
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if check_walls(ball, config) {
            events.ball_hit_wall = true;
        }
        if check_paddles(ball, &paddles, config) {
            events.ball_hit_paddle = true;
        }
    }
}
