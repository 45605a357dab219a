use crate::{Ball, Config, Events, GameRng, MatchAction, MatchFsm, Score, Side};
use hecs::World;

/// Award a point and either re-serve or end the match.
///
/// On the winning point the ball is left where it exited; it stays frozen
/// until a rematch.
pub fn score_point(
    ball: &mut Ball,
    side: Side,
    config: &Config,
    score: &mut Score,
    fsm: &mut MatchFsm,
    events: &mut Events,
    rng: &mut GameRng,
) {
    score.increment(side);
    events.mark_scored(side);
    log::debug!("{} scores: {}-{}", side.label(), score.left, score.right);

    if score.has_winner(config.win_score) == Some(side) {
        if fsm.transition(MatchAction::WinReached).success {
            events.game_over = true;
            log::info!(
                "{} player wins {}-{}",
                side.label(),
                score.left,
                score.right
            );
        }
    } else {
        ball.reset(config, rng);
    }
}

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    fsm: &mut MatchFsm,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Past the left edge the right player scores, and vice versa
        let scorer = if ball.pos.x < 0.0 {
            Some(Side::Right)
        } else if ball.pos.x > config.arena_width {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = scorer {
            score_point(ball, side, config, score, fsm, events, rng);
        }
    }
}

/// Start a fresh match from GameOver when the rematch key is held
pub fn check_rematch(
    world: &mut World,
    config: &Config,
    held: bool,
    score: &mut Score,
    fsm: &mut MatchFsm,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    if !held || !fsm.transition(MatchAction::Rematch).success {
        return false;
    }

    score.reset();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, rng);
    }
    events.rematch = true;
    log::info!("rematch started");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, MatchState};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, MatchFsm, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let fsm = MatchFsm::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, fsm, events, rng)
    }

    fn only_ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 200.0), Vec2::new(-2.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut fsm, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.arena_width + 0.1, 200.0),
            Vec2::new(2.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut fsm, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 200.0), Vec2::new(-8.0, 5.0));

        check_scoring(&mut world, &config, &mut score, &mut fsm, &mut events, &mut rng);

        let ball = only_ball(&world);
        assert_eq!(ball.pos, config.center(), "Ball should reset to center after scoring");
        assert_eq!(ball.vel.x.abs(), config.ball_serve_speed_x);
        assert!(ball.vel.y.abs() <= config.ball_serve_speed_y);
    }

    #[test]
    fn test_edges_are_not_scores() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-2.0, 0.0));
        create_ball(&mut world, Vec2::new(config.arena_width, 200.0), Vec2::new(2.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut fsm, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_winning_point_ends_match_and_freezes_ball() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        score.left = config.win_score - 1;
        let exit = Vec2::new(config.arena_width + 1.5, 300.0);
        create_ball(&mut world, exit, Vec2::new(3.0, 1.0));

        check_scoring(&mut world, &config, &mut score, &mut fsm, &mut events, &mut rng);

        assert_eq!(score.left, config.win_score);
        assert_eq!(fsm.state(), MatchState::GameOver);
        assert!(events.game_over);
        assert_eq!(only_ball(&world).pos, exit, "Winning point does not re-serve");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::ZERO, Vec2::ZERO);

        for _ in 0..3 {
            for (_e, ball) in world.query_mut::<&mut Ball>() {
                ball.pos.x = config.arena_width + 5.0;
            }
            check_scoring(&mut world, &config, &mut score, &mut fsm, &mut events, &mut rng);
            events.clear();
        }

        assert_eq!(score.left, 3, "Scores should accumulate");
        assert_eq!(score.right, 0);
        assert_eq!(fsm.state(), MatchState::Playing);
    }

    #[test]
    fn test_rematch_requires_game_over() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(2.0, 1.0));
        score.left = 2;

        let started = check_rematch(
            &mut world, &config, true, &mut score, &mut fsm, &mut events, &mut rng,
        );

        assert!(!started);
        assert_eq!(score.left, 2);
        assert_eq!(only_ball(&world).pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_rematch_resets_scores_and_ball() {
        let (mut world, config, mut score, mut fsm, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(700.0, 100.0), Vec2::new(2.0, 1.0));
        score.left = 5;
        score.right = 3;
        fsm.transition(MatchAction::WinReached);

        let idle = check_rematch(
            &mut world, &config, false, &mut score, &mut fsm, &mut events, &mut rng,
        );
        assert!(!idle, "No rematch without the key");
        assert_eq!(fsm.state(), MatchState::GameOver);

        let started = check_rematch(
            &mut world, &config, true, &mut score, &mut fsm, &mut events, &mut rng,
        );
        assert!(started);
        assert!(events.rematch);
        assert_eq!(score, Score::new());
        assert_eq!(fsm.state(), MatchState::Playing);
        assert_eq!(only_ball(&world).pos, config.center());
    }
}
