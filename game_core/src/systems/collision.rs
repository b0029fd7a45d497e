use crate::{Ball, Config, Events, GameRng, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let floor = config.arena_height - radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let clamped = ball.pos.y.clamp(radius, floor);
        if clamped != ball.pos.y {
            ball.pos.y = clamped;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            tracing::trace!(y = clamped, "ball hit wall");
        }
    }
}

/// Check ball against both paddles, player first, and rebound off the first hit
pub fn check_paddle_hits(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let rect = config.paddle_rect(side, paddle_y);
            if !rect.intersects_circle(ball.pos, config.ball_radius) {
                continue;
            }

            let fast = rng.roll_fast(config.fast_bounce_chance);
            ball.rebound(side, rect.min.x, fast, config);
            events.ball_hit_paddle = true;
            tracing::debug!(?side, fast, "ball hit paddle");
            break;
        }
    }
}
