use glam::Vec2;
use rand::Rng;

use crate::{Color, Config, GameRng};

/// Which end of the field a paddle guards.
///
/// The left paddle is driven by the keyboard, the right one by the tracking AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2, // Pixels per frame
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            color: Color::BLUE,
        }
    }

    /// Reset ball to center with a random diagonal at normal speed
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.center();
        let vx = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let vy = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        self.vel = Vec2::new(vx, vy);
        self.color = Color::BLUE;
    }

    /// Send the ball back off the paddle on `side` whose left edge is at `paddle_x`.
    ///
    /// The ball is placed clear of the paddle face so it cannot collide again
    /// next frame. Vertical direction is kept; only its magnitude follows the
    /// new horizontal speed.
    pub fn rebound(&mut self, side: Side, paddle_x: f32, fast: bool, config: &Config) {
        let speed = if fast {
            config.ball_speed_fast
        } else {
            config.ball_speed
        };
        let vertical = if self.vel.y < 0.0 { -1.0 } else { 1.0 };

        match side {
            Side::Left => {
                self.pos.x = paddle_x + config.paddle_width + config.ball_radius;
                self.vel.x = speed;
            }
            Side::Right => {
                self.pos.x = paddle_x - config.ball_diameter();
                self.vel.x = -speed;
            }
        }
        self.vel.y = vertical * speed;
        self.color = if fast { Color::RED } else { Color::BLUE };
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
