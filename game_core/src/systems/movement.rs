use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.y += intent.dir as f32 * config.paddle_speed;

        // Clamp to arena bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball horizontally by one frame of velocity
pub fn advance_ball_x(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.x += ball.vel.x;
    }
}

/// Move ball vertically by one frame of velocity
pub fn advance_ball_y(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.y += ball.vel.y;
    }
}
