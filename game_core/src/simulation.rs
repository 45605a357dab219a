use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, FrameInput, GameRng, MatchFsm,
    MatchState, Paddle, Score, Side,
};

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub paddle_left_top: f32,
    pub paddle_right_top: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub state: MatchState,
    pub winner: Option<Side>,
}

/// A single local match: the world plus all resources the systems touch
pub struct Simulation {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub fsm: MatchFsm,
    pub events: Events,
    pub rng: GameRng,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        let top = config.clamp_paddle_top(config.paddle_start_top);
        create_paddle(&mut world, Side::Left, top);
        create_paddle(&mut world, Side::Right, top);

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        log::info!(
            "match started: {}x{} arena, first to {}",
            config.arena_width,
            config.arena_height,
            config.win_score
        );

        Self {
            world,
            config,
            score: Score::new(),
            fsm: MatchFsm::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Run one tick with this frame's input
    pub fn step(&mut self, input: &FrameInput) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.fsm,
            &mut self.events,
            &mut self.rng,
            input,
        );
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Winner of a finished match, the side that reached the win score
    pub fn winner(&self) -> Option<Side> {
        if !self.fsm.is_game_over() {
            return None;
        }
        self.score.has_winner(self.config.win_score)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_top(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.top)
    }

    /// Overwrite the ball state (scripted serves, tests)
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball().unwrap_or_else(|| Ball::new(self.config.center(), Vec2::ZERO));
        let start_top = self.config.clamp_paddle_top(self.config.paddle_start_top);

        Snapshot {
            ball_pos: ball.pos,
            ball_radius: self.config.ball_radius,
            paddle_left_top: self.paddle_top(Side::Left).unwrap_or(start_top),
            paddle_right_top: self.paddle_top(Side::Right).unwrap_or(start_top),
            paddle_width: self.config.paddle_width,
            paddle_height: self.config.paddle_height,
            arena_width: self.config.arena_width,
            arena_height: self.config.arena_height,
            score_left: self.score.left,
            score_right: self.score.right,
            state: self.fsm.state(),
            winner: self.winner(),
        }
    }
}
