use crate::{Ball, Config, Court, Events, Paddle, Side};
use hecs::World;
use tracing::debug;

/// Flip vertical velocity when the ball is past the top or bottom wall.
///
/// The ball is not pushed back inside; it may overshoot by one tick.
pub fn bounce_walls(world: &mut World, court: &Court, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y < 0.0 || ball.pos.y > court.height - ball.size {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball collisions with paddles, left paddle first
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side.player_id());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            let rect = paddle.rect();
            let ball_rect = ball.rect();

            // Leading edge must be inside the paddle's horizontal span
            let leading_edge = match paddle.side {
                Side::Left => ball_rect.min.x,
                Side::Right => ball_rect.max.x,
            };
            if !rect.spans_x(leading_edge) || !rect.overlaps_y(&ball_rect) {
                continue;
            }

            ball.vel.x *= config.ball_bounce_multiplier;
            ball.pos.x = match paddle.side {
                Side::Left => rect.max.x,
                Side::Right => rect.min.x - ball.size,
            };
            ball.vel.y = deflection(ball.pos.y - paddle.y, paddle.height, config.ball_deflection_max);
            events.ball_hit_paddle = true;

            debug!(
                side = paddle.side.name(),
                vx = ball.vel.x,
                vy = ball.vel.y,
                "Ball hit paddle"
            );
        }
    }
}

/// Map a contact offset along the paddle (0 = top, `height` = bottom)
/// linearly onto `[-max, max]`
pub fn deflection(offset: f32, height: f32, max: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let t = (offset / height).clamp(0.0, 1.0);
    -max + t * 2.0 * max
}
