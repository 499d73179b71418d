pub mod components;
pub mod config;
pub mod decoration;
pub mod fsm;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use decoration::*;
pub use fsm::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    input: &ResolvedInput,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move paddles based on intents
    move_paddles(world, court);

    // 3. Move ball
    move_ball(world);

    // 4. Bounce off top and bottom walls
    bounce_walls(world, court, events);

    // 5. Check scoring (ball exited court), resets the ball
    check_scoring(world, court, config, score, events, rng);

    // 6. Ball vs paddles
    check_paddle_collisions(world, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
