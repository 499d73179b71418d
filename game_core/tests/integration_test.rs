use game_core::*;
use glam::Vec2;
use hecs::World;

struct Sim {
    world: World,
    config: Config,
    court: Court,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl Sim {
    fn new() -> Self {
        let config = Config::new();
        let court = Court::new(&config);
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        Self {
            world,
            config,
            court,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(12345),
        }
    }

    fn tick(&mut self, input: &ResolvedInput) {
        step(
            &mut self.world,
            &self.court,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            input,
        );
    }

    fn ball(&self) -> Ball {
        *self.world.query::<&Ball>().iter().next().unwrap().1
    }
}

fn place_ball(world: &mut World, pos: Vec2, vel: Vec2) {
    for (_e, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

fn ball_of(session: &Session) -> Ball {
    session.snapshot().ball.unwrap()
}

#[test]
fn test_ball_leaves_left_edge_after_two_ticks() {
    let mut sim = Sim::new();
    create_ball(&mut sim.world, Vec2::new(5.0, 250.0), Vec2::new(-4.0, 0.0), 15.0);
    let idle = ResolvedInput::default();

    sim.tick(&idle);
    assert_eq!(sim.ball().pos.x, 1.0);
    assert_eq!(sim.score, Score::new());
    assert!(!sim.events.right_scored);

    sim.tick(&idle);
    assert_eq!(sim.score, Score { left: 0, right: 1 });
    assert!(sim.events.right_scored);
    assert_eq!(sim.ball().pos, Vec2::new(400.0, 250.0));
    assert!(!sim.events.ball_hit_paddle, "A scored ball cannot also collide");
}

#[test]
fn test_rally_off_left_paddle() {
    let mut sim = Sim::new();
    // Left paddle spans x 30..45, y 210..290
    create_ball(&mut sim.world, Vec2::new(48.0, 245.0), Vec2::new(-4.0, 0.0), 15.0);
    let idle = ResolvedInput::default();

    sim.tick(&idle);

    let ball = sim.ball();
    assert!(sim.events.ball_hit_paddle);
    assert_eq!(ball.pos.x, 45.0);
    assert!((ball.vel.x - 4.4).abs() < 1e-5);
    assert!(ball.vel.y >= -4.0 && ball.vel.y <= 4.0);

    // Next tick the ball heads back into the court
    sim.tick(&idle);
    assert!(!sim.events.ball_hit_paddle);
    assert!(sim.ball().pos.x > 45.0);
}

#[test]
fn test_wall_bounce_during_step() {
    let mut sim = Sim::new();
    create_ball(&mut sim.world, Vec2::new(400.0, 1.0), Vec2::new(3.0, -3.0), 15.0);

    sim.tick(&ResolvedInput::default());

    let ball = sim.ball();
    assert_eq!(ball.pos, Vec2::new(403.0, -2.0));
    assert_eq!(ball.vel.y, 3.0);
    assert!(sim.events.ball_hit_wall);
}

#[test]
fn test_paddles_follow_intents_and_stay_in_court() {
    let mut sim = Sim::new();
    create_ball(&mut sim.world, Vec2::new(400.0, 250.0), Vec2::ZERO, 15.0);
    let mut input = ResolvedInput::default();
    input.left.key_up = true;
    input.right.analog = 1.0;

    for _ in 0..200 {
        sim.tick(&input);
    }

    for (_e, paddle) in sim.world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => assert_eq!(paddle.y, 0.0),
            Side::Right => assert_eq!(paddle.y, 420.0),
        }
    }
}

#[test]
fn test_session_keyboard_moves_left_paddle() {
    let mut session = Session::new(Config::new(), 1);
    let mut input = FrameInput::new();
    input.keyboard.press(Key::W);

    session.frame(&input);
    assert_eq!(session.snapshot().paddles[0].y, 204.0);

    for _ in 0..100 {
        session.frame(&input);
    }
    assert_eq!(session.snapshot().paddles[0].y, 0.0);
    assert_eq!(session.snapshot().paddles[1].y, 210.0);
}

#[test]
fn test_session_gamepad_and_keyboard_stack() {
    let mut session = Session::new(Config::new(), 1);
    let mut input = FrameInput::new();
    input.keyboard.press(Key::ArrowDown);
    input.gamepad = Some(GamepadSnapshot {
        connected: true,
        id: "Xbox Wireless Controller".to_string(),
        axes: vec![0.0, 0.0, 0.0, 0.5],
        buttons: vec![ButtonState::default(); 17],
    });

    session.frame(&input);

    // 6 from the arrow key plus 0.5 * 6 from the right stick
    assert_eq!(session.snapshot().paddles[1].y, 219.0);
}

#[test]
fn test_session_full_match_and_restart() {
    let mut session = Session::new(Config::new(), 7);
    let idle = FrameInput::new();

    for point in 1..=7u8 {
        place_ball(session.world_mut(), Vec2::new(-1.0, 250.0), Vec2::new(-4.0, 0.0));
        let events = session.frame(&idle);
        assert!(events.right_scored);
        assert_eq!(session.score().right, point);
    }

    assert_eq!(session.phase(), FsmState::GameOver);
    assert_eq!(session.winner(), Some(Side::Right));
    assert!(session.status_text().starts_with("Right player wins!"));

    // Simulation is frozen once the match is over
    let frozen = ball_of(&session);
    for _ in 0..10 {
        let events = session.frame(&idle);
        assert_eq!(events, Events::new());
    }
    assert_eq!(ball_of(&session).pos, frozen.pos);
    assert_eq!(session.score(), Score { left: 0, right: 7 });

    let mut restart = FrameInput::new();
    restart.keyboard.press(Key::Space);
    session.frame(&restart);

    assert_eq!(session.phase(), FsmState::Playing);
    assert_eq!(session.score(), Score::new());
    assert_eq!(session.status_text(), "");
    // Restarted ball was served from the centre and has moved one tick
    let ball = ball_of(&session);
    assert_eq!(ball.pos, Vec2::new(400.0, 250.0) + ball.vel);
}

#[test]
fn test_gamepad_start_restarts_after_game_over() {
    let mut session = Session::new(Config::new(), 3);
    for _ in 0..7 {
        place_ball(session.world_mut(), Vec2::new(801.0, 100.0), Vec2::new(4.0, 0.0));
        session.frame(&FrameInput::new());
    }
    assert_eq!(session.winner(), Some(Side::Left));

    let mut buttons = vec![ButtonState::default(); 17];
    buttons[Button::Start.default_index()].pressed = true;
    let input = FrameInput {
        keyboard: KeyboardState::new(),
        gamepad: Some(GamepadSnapshot {
            connected: true,
            id: "Generic USB Gamepad".to_string(),
            axes: vec![0.0; 4],
            buttons,
        }),
    };
    session.frame(&input);

    assert_eq!(session.phase(), FsmState::Playing);
    assert_eq!(session.score(), Score::new());
}

#[test]
fn test_space_mid_rally_does_nothing() {
    let mut session = Session::new(Config::new(), 11);
    place_ball(session.world_mut(), Vec2::new(-1.0, 250.0), Vec2::new(-4.0, 0.0));
    session.frame(&FrameInput::new());

    let mut input = FrameInput::new();
    input.keyboard.press(Key::Space);
    session.frame(&input);

    assert_eq!(session.score(), Score { left: 0, right: 1 });
    assert_eq!(session.phase(), FsmState::Playing);
}

#[test]
fn test_custom_button_mapping_through_session() {
    let mut session = Session::new(Config::new(), 2);
    assert_eq!(session.set_button_mapping("select", 4), Ok(Button::Select));
    assert_eq!(
        session.set_button_mapping("PADDLE_1", 4),
        Err(InputError::UnknownButton("PADDLE_1".to_string()))
    );

    let mut buttons = vec![ButtonState::default(); 17];
    buttons[4].pressed = true;
    let input = FrameInput {
        keyboard: KeyboardState::new(),
        gamepad: Some(GamepadSnapshot {
            connected: true,
            id: "Pad".to_string(),
            axes: vec![],
            buttons,
        }),
    };
    let before = session.decoration().kind();
    session.frame(&input);

    assert_eq!(session.decoration().kind(), before.toggled());
    assert_eq!(session.frame_count(), 1);
}
