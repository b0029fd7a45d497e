use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball left the arena, returning the side that scored.
///
/// The ball is left where it is; serving again is the phase machine's job.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x)?;

    if ball_x < 0.0 {
        // Right player scores
        score.increment_right();
        events.right_scored = true;
        Some(Side::Right)
    } else if ball_x > config.arena_width - config.ball_diameter() {
        // Left player scores
        score.increment_left();
        events.left_scored = true;
        Some(Side::Left)
    } else {
        None
    }
}
