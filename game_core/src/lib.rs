pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance the hand-tracked Pong simulation by one tick
///
/// Gameplay only runs while the match is in progress; a finished match stays
/// frozen until the rematch key is held.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    fsm: &mut MatchFsm,
    events: &mut Events,
    rng: &mut GameRng,
    input: &FrameInput,
) {
    // Clear events at start of tick
    events.clear();

    if fsm.is_playing() {
        // 1. Map hands and keys to paddle positions
        map_controls(world, config, input);

        // 2. Move ball
        move_ball(world);

        // 3. Check collisions (walls, paddles)
        check_collisions(world, config, events);

        // 4. Check scoring (ball exited arena)
        check_scoring(world, config, score, fsm, events, rng);
    }

    // 5. Rematch from game over
    if fsm.is_game_over() {
        check_rematch(world, config, input.keys.rematch, score, fsm, events, rng);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, top: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, top),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
