use crate::{Aabb, Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speed_fast: f32,
    /// Probability in [0, 1] that a paddle hit sends the ball back fast
    pub fast_bounce_chance: f64,
    pub start_blink_interval: f32,
    pub score_blink_interval: f32,
    pub text_size: f32,
    pub score_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::WINDOW_WIDTH,
            arena_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_speed_fast: Params::BALL_SPEED_FAST,
            fast_bounce_chance: Params::FAST_BOUNCE_CHANCE,
            start_blink_interval: Params::START_BLINK_INTERVAL,
            score_blink_interval: Params::SCORE_BLINK_INTERVAL,
            text_size: Params::TEXT_SIZE,
            score_size: Params::SCORE_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ball_diameter(&self) -> f32 {
        self.ball_radius * 2.0
    }

    /// Centre of the field, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width * 0.5, self.arena_height * 0.5)
    }

    /// Get X position (left edge) for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Top edge of a vertically centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height * 0.5 - self.paddle_height * 0.5
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }
}
