use crate::{Ball, Config, Paddle, PaddleIntent, Side};
use hecs::World;

/// Steer the right paddle toward the ball.
///
/// Pure tracking: the paddle centre chases the ball's current y by one step
/// per frame, with no prediction and no dead zone.
pub fn steer_opponent(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side != Side::Right {
            continue;
        }
        let center = paddle.y + config.paddle_height * 0.5;
        intent.dir = if center < ball_y {
            1
        } else if center > ball_y {
            -1
        } else {
            0
        };
    }
}
