use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn the keyboard snapshot into a movement intent for the left paddle
pub fn ingest_input(world: &mut World, input: &InputState) {
    let dir = input.paddle_dir();
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Left {
            intent.dir = dir;
        }
    }
}
