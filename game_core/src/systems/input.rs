use hecs::World;

use crate::components::*;
use crate::input::ResolvedInput;

/// Copy this frame's resolved input onto the paddle intents
pub fn ingest_inputs(world: &mut World, input: &ResolvedInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.side);
    }
}
