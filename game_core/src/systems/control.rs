use hecs::World;

use crate::{Config, FrameInput, HandObservation, KeyboardState, Paddle, Side};

/// Move paddles to the tracked fingertips.
///
/// A fingertip left of the midline drives the left paddle, anything else the
/// right one. When several hands land on the same side the last one wins.
pub fn apply_hand_control(world: &mut World, config: &Config, hands: &[HandObservation]) {
    let mut left_target = None;
    let mut right_target = None;

    // Non-finite tips never reach here, see HandObservation::fingertip
    for tip in hands.iter().filter_map(HandObservation::fingertip) {
        let top = config.clamp_paddle_top(tip.y - config.paddle_height / 2.0);
        match config.side_of(tip.x) {
            Side::Left => left_target = Some(top),
            Side::Right => right_target = Some(top),
        }
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let target = match paddle.side {
            Side::Left => left_target,
            Side::Right => right_target,
        };
        if let Some(top) = target {
            paddle.top = top;
        }
    }
}

/// Nudge paddles with the keyboard (W/S left, arrows right)
pub fn apply_keyboard_control(world: &mut World, config: &Config, keys: &KeyboardState) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = match paddle.side {
            Side::Left => (keys.left_up, keys.left_down),
            Side::Right => (keys.right_up, keys.right_down),
        };

        if up {
            paddle.top = config.clamp_paddle_top(paddle.top - config.paddle_speed);
        }
        if down {
            paddle.top = config.clamp_paddle_top(paddle.top + config.paddle_speed);
        }
    }
}

/// Hands first, then keyboard on top
pub fn map_controls(world: &mut World, config: &Config, input: &FrameInput) {
    apply_hand_control(world, config, input.hands);
    apply_keyboard_control(world, config, &input.keys);
}
