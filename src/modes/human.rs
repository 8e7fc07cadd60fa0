use log::{error, info, warn};
use std::time::Duration;

use crate::game::{Action, GameConfig, MonotonicClock, Session};
use crate::input::InputHandler;
use crate::metrics::LifeMetrics;
use crate::render::Snapshot;
use crate::terminal::{Screen, TerminalError, TerminalIo};

/// Interactive play at the keyboard
pub struct HumanMode {
    session: Session,
    metrics: LifeMetrics,
    input_handler: InputHandler,
    clock: MonotonicClock,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_session(Session::new(config))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            metrics: LifeMetrics::new(),
            input_handler: InputHandler::new(),
            clock: MonotonicClock::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn metrics(&self) -> &LifeMetrics {
        &self.metrics
    }

    /// Run until the player quits or the terminal fails.
    ///
    /// The terminal is restored on every path out of the loop. A loop error
    /// takes precedence over a restore error.
    pub async fn run<T>(&mut self, terminal: &mut T) -> Result<(), TerminalError>
    where
        T: TerminalIo + Screen,
    {
        if let Err(err) = terminal.enter_raw_mode() {
            error!("Terminal setup failed: {err}");
            // Setup may have got partway; undo what it can
            if let Err(restore_err) = terminal.restore_mode() {
                warn!("Restore after failed setup also failed: {restore_err}");
            }
            return Err(err);
        }

        let result = self.run_game_loop(terminal).await;

        let restored = terminal.restore_mode();
        match (result, restored) {
            (Err(err), Err(restore_err)) => {
                error!("Game loop failed: {err}; restore also failed: {restore_err}");
                Err(err)
            }
            (Err(err), Ok(())) => {
                error!("Game loop failed: {err}");
                Err(err)
            }
            (Ok(()), Err(restore_err)) => {
                error!("{restore_err}");
                Err(restore_err)
            }
            (Ok(()), Ok(())) => {
                info!(
                    "Exited after {} generations, {} frames",
                    self.session.state().generation,
                    self.metrics.frames_drawn
                );
                Ok(())
            }
        }
    }

    async fn run_game_loop<T>(&mut self, terminal: &mut T) -> Result<(), TerminalError>
    where
        T: TerminalIo + Screen,
    {
        let frame_sleep = Duration::from_millis(self.session.config().frame_sleep_ms);

        while !self.session.should_quit() {
            // Input first, so an edit shows up in this iteration's frame
            let key = terminal.read_key()?;
            self.handle_key(key);
            if self.session.should_quit() {
                break;
            }

            let outcome = self.session.tick(self.clock.now_ms());
            if outcome.redraw {
                self.draw(terminal)?;
            }

            tokio::time::sleep(frame_sleep).await;
        }

        Ok(())
    }

    fn handle_key(&mut self, key: Option<u8>) {
        let action = self.input_handler.handle_key(key);
        self.session.dispatch(action);

        if matches!(action, Action::Randomize | Action::Clear) {
            self.metrics
                .on_reset(self.session.state().board.population());
        }
    }

    fn draw<S: Screen>(&mut self, screen: &mut S) -> Result<(), TerminalError> {
        let snapshot = Snapshot::capture(self.session.state());
        self.metrics.update();
        self.metrics.on_frame(snapshot.population);
        screen.present(&snapshot, &self.metrics)
    }
}
