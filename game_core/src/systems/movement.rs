use crate::{Ball, Court, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents.
///
/// Keyboard up, keyboard down and the gamepad each issue their own move,
/// in that order, so clamping happens between them.
pub fn move_paddles(world: &mut World, court: &Court) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.key_up {
            paddle.move_by(-1.0, court);
        }
        if intent.key_down {
            paddle.move_by(1.0, court);
        }
        if intent.analog != 0.0 {
            paddle.move_by(intent.analog, court);
        }
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
