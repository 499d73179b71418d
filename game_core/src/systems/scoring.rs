use crate::{Ball, Config, Court, Events, GameRng, Score};
use hecs::World;
use tracing::info;

/// Check if ball left the court (scoring)
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
        } else if ball.pos.x > court.width {
            score.increment_left();
            events.left_scored = true;
        } else {
            continue;
        }

        info!(left = score.left, right = score.right, "Point scored");
        ball.reset(config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Court, Score, Events, GameRng) {
        let config = Config::new();
        let court = Court::new(&config);
        (
            World::new(),
            config,
            court,
            Score::new(),
            Events::new(),
            GameRng::new(12345), // Fixed seed for deterministic tests
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 200.0), Vec2::new(-8.0, 0.0), 15.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score { left: 0, right: 1 });
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(800.5, 200.0), Vec2::new(8.0, 0.0), 15.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score { left: 1, right: 0 });
        assert!(events.left_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-3.0, 12.0), Vec2::new(-8.0, 0.0), 15.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        let (_e, ball) = world.query_mut::<&Ball>().into_iter().next().unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 250.0));
        assert!(config.ball_serve_speeds_x.contains(&ball.vel.x));
        assert!(ball.vel.y.abs() <= config.ball_serve_speed_y);
    }

    #[test]
    fn test_edges_are_still_in_play() {
        // Exactly on either edge is not a point
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 100.0), Vec2::new(-4.0, 0.0), 15.0);
        create_ball(&mut world, Vec2::new(800.0, 100.0), Vec2::new(4.0, 0.0), 15.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(801.0, 12.0), Vec2::new(8.0, 0.0), 15.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);
        events.clear();
        world.get::<&mut Ball>(ball).unwrap().pos.x = 805.0;
        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
