//! Game phase machine
//!
//! Owns every piece of mutable state and advances it one frame at a time.
//! Each phase has its own update function that returns the phase to run
//! next frame.

use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Blink, Config, Events, GameRng, InputState, Paddle,
    Score, Side,
};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for the start key
    Start,
    /// Ball in play
    Play,
    /// A point was just scored, waiting for the start key
    Score,
}

/// Complete game state
pub struct Game {
    pub world: World,
    pub config: Config,
    pub phase: Phase,
    pub score: Score,
    pub start_blink: Blink,
    pub score_blink: Blink,
    pub left_scored_last: bool,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        // Create paddles
        let paddle_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Left, paddle_y);
        create_paddle(&mut world, Side::Right, paddle_y);

        // Ball waits at the centre until the first serve
        create_ball(&mut world, config.center(), glam::Vec2::ZERO);

        Self {
            world,
            config,
            phase: Phase::Start,
            score: Score::new(),
            start_blink: Blink::new(),
            score_blink: Blink::new(),
            left_scored_last: false,
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Advance one frame. `dt` is the wall-clock frame time in seconds and
    /// only drives prompt flashing; physics moves a fixed amount per frame.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.events.clear();

        let next = match self.phase {
            Phase::Start => self.update_start(input, dt),
            Phase::Play => self.update_play(input),
            Phase::Score => self.update_score(input, dt),
        };

        if next != self.phase {
            tracing::info!(from = ?self.phase, to = ?next, "phase change");
            self.phase = next;
        }
    }

    fn update_start(&mut self, input: &InputState, dt: f32) -> Phase {
        if input.start {
            self.start_blink.reset();
            self.serve();
            Phase::Play
        } else {
            self.start_blink.tick(dt, self.config.start_blink_interval);
            Phase::Start
        }
    }

    fn update_play(&mut self, input: &InputState) -> Phase {
        let scorer = step(
            &mut self.world,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        match scorer {
            Some(side) => {
                self.left_scored_last = side == Side::Left;
                // Either side scoring shows the continue prompt straight away
                self.score_blink.reset();
                tracing::info!(
                    scorer = ?side,
                    left = self.score.left,
                    right = self.score.right,
                    "point scored"
                );
                Phase::Score
            }
            None => Phase::Play,
        }
    }

    fn update_score(&mut self, input: &InputState, dt: f32) -> Phase {
        if input.start {
            self.score_blink.reset();
            self.serve();
            self.reset_paddles();
            Phase::Play
        } else {
            self.score_blink.tick(dt, self.config.score_blink_interval);
            Phase::Score
        }
    }

    /// Centre the ball with a fresh random diagonal at normal speed
    fn serve(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(&self.config, &mut self.rng);
        }
    }

    fn reset_paddles(&mut self) {
        let y = self.config.paddle_spawn_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = y;
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use glam::Vec2;

    const START: InputState = InputState {
        up: false,
        down: false,
        start: true,
    };
    const IDLE: InputState = InputState {
        up: false,
        down: false,
        start: false,
    };

    fn set_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    fn playing_game() -> Game {
        let mut game = Game::default();
        game.update(&START, 0.016);
        assert_eq!(game.phase, Phase::Play);
        game
    }

    #[test]
    fn test_initial_state() {
        let game = Game::default();
        assert_eq!(game.phase, Phase::Start);
        assert_eq!(game.score.left, 0);
        assert_eq!(game.score.right, 0);
        assert!(game.start_blink.visible);
        assert!(game.score_blink.visible);
        assert!(!game.left_scored_last);

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, game.config.center());
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.color, Color::BLUE);
    }

    #[test]
    fn test_start_key_begins_play() {
        let mut game = Game::default();
        game.start_blink.elapsed = 0.3;
        game.start_blink.visible = false;

        game.update(&START, 0.016);

        assert_eq!(game.phase, Phase::Play);
        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, game.config.center());
        assert_eq!(ball.vel.x.abs(), 8.0);
        assert_eq!(ball.vel.y.abs(), 8.0);
        assert!(game.start_blink.visible);
        assert_eq!(game.start_blink.elapsed, 0.0);

        let spawn = game.config.paddle_spawn_y();
        assert_eq!(game.paddle(Side::Left).unwrap().y, spawn, "Paddles unmoved");
        assert_eq!(game.paddle(Side::Right).unwrap().y, spawn, "Paddles unmoved");
    }

    #[test]
    fn test_start_prompt_flashes_while_waiting() {
        let mut game = Game::default();

        game.update(&IDLE, 0.3);
        assert!(game.start_blink.visible);
        game.update(&IDLE, 0.3);
        assert!(!game.start_blink.visible);
        game.update(&IDLE, 0.6);
        assert!(game.start_blink.visible);
        assert_eq!(game.phase, Phase::Start);

        // Nothing moves on the title screen
        assert_eq!(game.ball().unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn test_ball_crossing_right_edge_scores_for_left() {
        let mut game = playing_game();
        let width = game.config.arena_width;
        set_ball(&mut game, Vec2::new(width - 1.0, 270.0), Vec2::new(8.0, 8.0));

        game.update(&IDLE, 0.016);

        assert_eq!(game.phase, Phase::Score);
        assert_eq!(game.score.left, 1);
        assert_eq!(game.score.right, 0);
        assert!(game.left_scored_last);
        assert!(game.events.left_scored);
    }

    #[test]
    fn test_ball_crossing_left_edge_scores_for_right() {
        let mut game = playing_game();
        set_ball(&mut game, Vec2::new(4.0, 270.0), Vec2::new(-8.0, 8.0));

        game.update(&IDLE, 0.016);

        assert_eq!(game.phase, Phase::Score);
        assert_eq!(game.score.right, 1);
        assert_eq!(game.score.left, 0);
        assert!(!game.left_scored_last);
        assert!(game.events.right_scored);
    }

    #[test]
    fn test_score_prompt_visible_on_entry_for_either_side() {
        // Both scoring branches reset the continue prompt, not only the
        // player's: the prompt is always shown on the first Score frame.
        for (x, vx) in [(4.0, -8.0), (925.0, 8.0)] {
            let mut game = playing_game();
            game.score_blink.visible = false;
            game.score_blink.elapsed = 0.4;
            set_ball(&mut game, Vec2::new(x, 270.0), Vec2::new(vx, 8.0));

            game.update(&IDLE, 0.016);

            assert_eq!(game.phase, Phase::Score);
            assert!(game.score_blink.visible);
            assert_eq!(game.score_blink.elapsed, 0.0);
        }
    }

    #[test]
    fn test_scoring_frame_still_bounces_off_wall() {
        let mut game = playing_game();
        set_ball(&mut game, Vec2::new(4.0, 25.0), Vec2::new(-8.0, -8.0));

        game.update(&IDLE, 0.016);

        assert_eq!(game.phase, Phase::Score);
        assert_eq!(game.score.right, 1);
        assert!(game.events.ball_hit_wall);
        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(-4.0, 20.0));
        assert_eq!(ball.vel, Vec2::new(-8.0, 8.0));
    }

    #[test]
    fn test_scoring_frame_still_checks_paddles() {
        let mut game = playing_game();
        game.config.fast_bounce_chance = 0.0;
        // Crosses the right edge while overlapping the opponent's face
        set_ball(&mut game, Vec2::new(913.0, 270.0), Vec2::new(8.0, 8.0));

        game.update(&IDLE, 0.016);

        assert_eq!(game.phase, Phase::Score);
        assert_eq!(game.score.left, 1);
        assert!(game.left_scored_last);
        assert!(game.events.ball_hit_paddle);
        let ball = game.ball().unwrap();
        let paddle_x = game.config.paddle_x(Side::Right);
        assert_eq!(ball.pos, Vec2::new(paddle_x - 40.0, 278.0));
        assert_eq!(ball.vel, Vec2::new(-8.0, 8.0));
        assert_eq!(ball.color, Color::BLUE);
    }

    #[test]
    fn test_score_phase_flashes_and_waits() {
        let mut game = playing_game();
        set_ball(&mut game, Vec2::new(4.0, 270.0), Vec2::new(-8.0, 8.0));
        game.update(&IDLE, 0.016);
        let resting = game.ball().unwrap();

        game.update(&IDLE, 0.6);
        assert!(!game.score_blink.visible);
        game.update(&IDLE, 0.6);
        assert!(game.score_blink.visible);

        assert_eq!(game.phase, Phase::Score);
        assert_eq!(game.ball().unwrap().pos, resting.pos, "Ball frozen while scoring");
        assert_eq!(game.score.right, 1, "Score counted once");
    }

    #[test]
    fn test_continue_reserves_and_recentres() {
        let mut game = playing_game();
        game.update(&InputState { up: true, ..IDLE }, 0.016);
        set_ball(&mut game, Vec2::new(4.0, 100.0), Vec2::new(-16.0, 16.0));
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.color = Color::RED;
        }
        game.update(&IDLE, 0.016);
        assert_eq!(game.phase, Phase::Score);
        game.update(&IDLE, 0.6);

        game.update(&START, 0.016);

        assert_eq!(game.phase, Phase::Play);
        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, game.config.center());
        assert_eq!(ball.vel.x.abs(), game.config.ball_speed);
        assert_eq!(ball.vel.y.abs(), game.config.ball_speed);
        assert_eq!(ball.color, Color::BLUE);

        let spawn = game.config.paddle_spawn_y();
        assert_eq!(game.paddle(Side::Left).unwrap().y, spawn);
        assert_eq!(game.paddle(Side::Right).unwrap().y, spawn);
        assert!(game.score_blink.visible);
        assert_eq!(game.score_blink.elapsed, 0.0);
    }

    #[test]
    fn test_scores_never_reset_in_session() {
        let mut game = playing_game();
        for round in 1..=3 {
            set_ball(&mut game, Vec2::new(4.0, 270.0), Vec2::new(-8.0, 8.0));
            game.update(&IDLE, 0.016);
            assert_eq!(game.score.right, round);
            game.update(&START, 0.016);
        }
        assert_eq!(game.score.left, 0);
    }

    #[test]
    fn test_start_key_ignored_during_play() {
        let mut game = playing_game();
        let before = game.ball().unwrap();

        game.update(&START, 0.016);

        let after = game.ball().unwrap();
        assert_eq!(game.phase, Phase::Play);
        assert_eq!(after.vel, before.vel);
        assert_eq!(after.pos, before.pos + before.vel);
    }
}
