//! One local match and everything it mutates
//!
//! The host owns a single `Session` and calls [`Session::frame`] once per
//! animation frame; rendering reads [`Session::snapshot`].

use hecs::World;
use tracing::{debug, info};

use crate::{
    create_ball, create_paddle, step, Ball, Button, Config, Court, DecorationManager, Ellipse,
    Events, FrameInput, FsmState, GameAction, GameFsm, GameRng, InputError, InputResolver, Paddle,
    Score, Side,
};

/// Read-only view of a session for rendering
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub paddles: Vec<Paddle>,
    pub ball: Option<Ball>,
    pub score: Score,
    pub phase: FsmState,
    pub winner: Option<Side>,
    pub shapes: &'a [Ellipse],
    pub palette_index: usize,
    pub decoration_alpha: f32,
}

pub struct Session {
    world: World,
    config: Config,
    court: Court,
    score: Score,
    events: Events,
    rng: GameRng,
    fsm: GameFsm,
    resolver: InputResolver,
    decoration: DecorationManager,
    frame: u64,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let court = Court::new(&config);
        let mut rng = GameRng::new(seed);
        let mut world = World::new();

        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        let ball = Ball::serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.size);

        let decoration = DecorationManager::new(&config, &court, &mut rng);
        let resolver = InputResolver::new(&config);

        info!(
            width = court.width,
            height = court.height,
            decoration = %decoration.label(),
            "Session started"
        );

        Self {
            world,
            config,
            court,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
            resolver,
            decoration,
            frame: 0,
        }
    }

    /// Advance one animation frame. Returns what happened in the simulation.
    pub fn frame(&mut self, input: &FrameInput) -> Events {
        let resolved = self.resolver.resolve(input);

        if resolved.actions.toggle_decoration {
            self.decoration.toggle_kind();
        }
        if resolved.actions.cycle_palette {
            self.decoration.cycle_palette();
        }
        if resolved.actions.restart {
            self.restart();
        }

        self.decoration.advance(self.frame);
        self.frame += 1;

        if !self.fsm.is_playing() {
            self.events.clear();
            return self.events;
        }

        step(
            &mut self.world,
            &self.court,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &resolved,
        );

        if let Some(winner) = self.score.winner(self.config.win_score) {
            self.fsm.transition(GameAction::GameOver);
            info!(
                winner = winner.name(),
                left = self.score.left,
                right = self.score.right,
                "Game over"
            );
        }

        self.events
    }

    /// Zero the score and serve a new ball. Only honoured once the match is over.
    pub fn restart(&mut self) -> bool {
        let result = self.fsm.transition(GameAction::Restart);
        if !result.success {
            debug!(state = ?result.from_state, "Restart ignored");
            return false;
        }

        self.score.reset();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
        info!("Match restarted");
        true
    }

    pub fn set_button_mapping(&mut self, name: &str, index: usize) -> Result<Button, InputError> {
        self.resolver.set_button_mapping(name, index)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(self.config.win_score)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn decoration(&self) -> &DecorationManager {
        &self.decoration
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Message shown over the court, empty while playing
    pub fn status_text(&self) -> String {
        match (self.fsm.state(), self.winner()) {
            (FsmState::GameOver, Some(side)) => {
                format!("{} player wins!\nPress SPACE to play again", side.name())
            }
            _ => String::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .collect();
        paddles.sort_by_key(|p| p.side.player_id());

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball);

        Snapshot {
            paddles,
            ball,
            score: self.score,
            phase: self.fsm.state(),
            winner: self.winner(),
            shapes: self.decoration.shapes(),
            palette_index: self.decoration.palette_index(),
            decoration_alpha: self.decoration.alpha(),
        }
    }
}
