pub mod canvas;
pub mod components;
pub mod config;
pub mod draw;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use canvas::*;
pub use components::*;
pub use config::*;
pub use draw::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of Pong physics, returning the side that scored (if any).
///
/// Every stage runs each frame; a score in stage 3 does not stop the wall
/// and paddle checks that follow it.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // 1. Player paddle from keyboard, 2. opponent paddle from ball tracking
    ingest_input(world, input);
    steer_opponent(world, config);
    move_paddles(world, config);

    // 3. Horizontal move, then check whether the ball left the field
    advance_ball_x(world);
    let scorer = check_scoring(world, config, score, events);

    // 4. Vertical move with top/bottom reflection
    advance_ball_y(world);
    bounce_off_walls(world, config, events);

    // 5. Paddle rebounds
    check_paddle_hits(world, config, events, rng);

    scorer
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
