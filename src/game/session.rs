use log::{debug, info};
use rand::RngCore;

use super::{
    action::Action,
    board::Board,
    config::GameConfig,
    rules,
    scheduler::Scheduler,
    state::GameState,
};

/// What a [`Session::tick`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A generation was applied
    pub evolved: bool,
    /// The caller should present a new frame
    pub redraw: bool,
}

/// One interactive run: game state, timing gates and the scratch buffer
/// generations are computed into.
pub struct Session {
    config: GameConfig,
    state: GameState,
    scheduler: Scheduler,
    next: Board,
    rng: Box<dyn RngCore>,
}

impl Session {
    /// Create a session using the thread-local RNG for randomize
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, Box::new(rand::thread_rng()))
    }

    /// Create a session with an explicit random source
    pub fn with_rng(config: GameConfig, rng: Box<dyn RngCore>) -> Self {
        let board = Board::new(config.rows, config.cols);
        let next = Board::new(board.rows(), board.cols());

        let mut session = Self {
            config,
            state: GameState::new(board),
            scheduler: Scheduler::new(),
            next,
            rng,
        };

        if session.config.random_start {
            session.randomize();
        }

        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Apply one input action
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("Quit requested at generation {}", self.state.generation);
                self.state.quit();
            }
            Action::MoveCursor(direction) => self.state.move_cursor(direction),
            Action::ToggleCell => self.state.toggle_under_cursor(),
            Action::ToggleRunning => {
                self.state.running = !self.state.running;
                if self.state.running {
                    // Resume one full interval from now rather than firing at once
                    self.scheduler.reset_update();
                }
                debug!("Running: {}", self.state.running);
            }
            Action::Randomize => self.randomize(),
            Action::Clear => {
                self.state.board.clear();
                self.state.running = false;
                self.state.generation = 0;
                info!("Board cleared");
            }
            Action::Step => {
                if !self.state.running {
                    self.evolve();
                }
            }
            Action::None => {}
        }
    }

    /// Advance timing at `now` (monotonic milliseconds).
    ///
    /// The update gate is only polled while running, and update is decided
    /// before draw so a generation applied here is part of this frame.
    pub fn tick(&mut self, now: u64) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.state.running && self.scheduler.should_update(now, self.config.update_rate_hz) {
            self.evolve();
            outcome.evolved = true;
        }

        if self.scheduler.should_draw(now, self.config.draw_rate_hz) {
            outcome.redraw = true;
        }

        outcome
    }

    fn evolve(&mut self) {
        rules::evolve_into(&self.state.board, &mut self.next);
        std::mem::swap(&mut self.state.board, &mut self.next);
        self.state.generation += 1;
    }

    fn randomize(&mut self) {
        self.state
            .board
            .randomize(self.config.alive_probability, &mut *self.rng);
        self.state.generation = 0;
        info!(
            "Board randomized, population {}",
            self.state.board.population()
        );
    }
}
