//! Main loop tests against a scripted terminal.

use std::collections::VecDeque;
use std::io;

use ascii_life::game::GameConfig;
use ascii_life::metrics::LifeMetrics;
use ascii_life::modes::HumanMode;
use ascii_life::render::Snapshot;
use ascii_life::terminal::{Screen, TerminalError, TerminalIo};

/// Reads past this point quit, so a broken loop cannot hang the test run
const READ_LIMIT: usize = 20_000;

#[derive(Default)]
struct ScriptedTerminal {
    keys: VecDeque<u8>,
    /// Send `q` once this many frames have been presented after the
    /// scripted keys ran out
    quit_after_frames: Option<usize>,
    frames_at_script_end: Option<usize>,
    fail_setup: bool,
    fail_read_at: Option<usize>,
    fail_restore: bool,

    entered: bool,
    restore_calls: usize,
    reads: usize,
    frames: Vec<Snapshot>,
}

impl ScriptedTerminal {
    fn with_keys(keys: &[u8]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl TerminalIo for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError> {
        if self.fail_setup {
            return Err(TerminalError::Setup(io::Error::other("not a tty")));
        }
        self.entered = true;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<u8>, TerminalError> {
        self.reads += 1;
        if self.fail_read_at == Some(self.reads) {
            return Err(TerminalError::Read(io::Error::other("stdin closed")));
        }
        if let Some(key) = self.keys.pop_front() {
            return Ok(Some(key));
        }
        let script_end = *self.frames_at_script_end.get_or_insert(self.frames.len());
        match self.quit_after_frames {
            Some(n) if self.frames.len() - script_end >= n => Ok(Some(b'q')),
            _ if self.reads >= READ_LIMIT => Ok(Some(b'q')),
            _ => Ok(None),
        }
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        self.restore_calls += 1;
        if self.fail_restore {
            return Err(TerminalError::Restore(io::Error::other("tcsetattr failed")));
        }
        Ok(())
    }
}

impl Screen for ScriptedTerminal {
    fn present(&mut self, snapshot: &Snapshot, _metrics: &LifeMetrics) -> Result<(), TerminalError> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

fn fast_config() -> GameConfig {
    let mut config = GameConfig::new(5, 10);
    config.update_rate_hz = 1000;
    config.draw_rate_hz = 1000;
    config.frame_sleep_ms = 1;
    config
}

#[tokio::test]
async fn quit_key_exits_and_restores() {
    let mut terminal = ScriptedTerminal::with_keys(b"q");
    let mut mode = HumanMode::new(fast_config());

    mode.run(&mut terminal).await.unwrap();

    assert!(terminal.entered);
    assert_eq!(terminal.restore_calls, 1);
    assert_eq!(terminal.reads, 1);
    assert!(terminal.frames.is_empty());
    assert!(mode.session().should_quit());
}

#[tokio::test]
async fn edits_show_up_in_rendered_frames() {
    let mut terminal = ScriptedTerminal::with_keys(b"tlt");
    terminal.quit_after_frames = Some(2);
    let mut mode = HumanMode::new(fast_config());

    mode.run(&mut terminal).await.unwrap();

    let last = terminal.frames.last().unwrap();
    assert_eq!(last.lines.len(), 5);
    assert_eq!(last.lines[0], "#X........");
    assert_eq!(last.lines[1], "..........");
    assert_eq!(last.population, 2);
    assert!(!last.running);
    assert_eq!(terminal.restore_calls, 1);
}

#[tokio::test]
async fn running_session_advances_generations() {
    // A horizontal blinker in the middle row, cursor parked away from it
    let mut terminal = ScriptedTerminal::with_keys(b"jjltltltjj ");
    terminal.quit_after_frames = Some(6);
    let mut mode = HumanMode::new(fast_config());

    mode.run(&mut terminal).await.unwrap();

    let last = terminal.frames.last().unwrap();
    assert!(last.running);
    assert!(last.generation >= 1);
    // A blinker keeps three cells whatever its phase
    assert_eq!(last.population, 3);
    assert!(mode.session().state().generation >= last.generation);
}

#[tokio::test]
async fn read_failure_restores_and_reports() {
    let mut terminal = ScriptedTerminal::default();
    terminal.fail_read_at = Some(3);
    let mut mode = HumanMode::new(fast_config());

    let err = mode.run(&mut terminal).await.unwrap_err();

    assert!(matches!(err, TerminalError::Read(_)));
    assert_eq!(terminal.restore_calls, 1);
}

#[tokio::test]
async fn read_failure_wins_over_restore_failure() {
    let mut terminal = ScriptedTerminal::default();
    terminal.fail_read_at = Some(1);
    terminal.fail_restore = true;
    let mut mode = HumanMode::new(fast_config());

    let err = mode.run(&mut terminal).await.unwrap_err();

    assert!(matches!(err, TerminalError::Read(_)));
    assert_eq!(terminal.restore_calls, 1);
}

#[tokio::test]
async fn setup_failure_never_enters_loop() {
    let mut terminal = ScriptedTerminal::with_keys(b"q");
    terminal.fail_setup = true;
    let mut mode = HumanMode::new(fast_config());

    let err = mode.run(&mut terminal).await.unwrap_err();

    assert!(matches!(err, TerminalError::Setup(_)));
    assert!(!terminal.entered);
    // Setup may have got partway, so one best-effort restore still runs
    assert_eq!(terminal.restore_calls, 1);
    assert_eq!(terminal.reads, 0);
    assert!(terminal.frames.is_empty());
}

#[tokio::test]
async fn restore_failure_on_quit_is_an_error() {
    let mut terminal = ScriptedTerminal::with_keys(b"q");
    terminal.fail_restore = true;
    let mut mode = HumanMode::new(fast_config());

    let err = mode.run(&mut terminal).await.unwrap_err();

    assert!(matches!(err, TerminalError::Restore(_)));
}
