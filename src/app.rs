// Main loop: the shuffle-until-sorted state machine and its driver.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::config::Config;
use crate::listener::Signal;
use crate::render::{Frame, Present};
use crate::sequence;

/// Where the loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Still shuffling.
    Running,
    /// Sorted; the final frame has been drawn and the loop idles.
    Sorted,
    /// Termination observed. Terminal.
    Exit,
}

/// One bogosort run.
///
/// Owns the sequence and every counter; nothing else mutates them.
pub struct Session<R> {
    config: Config,
    rng: R,
    sequence: Vec<u16>,
    iterations: u64,
    elapsed: Duration,
    /// Ticks since the last throttled render.
    throttle: u64,
    state: State,
}

impl<R: Rng> Session<R> {
    /// Start a run on a freshly generated sequence.
    pub fn new(config: Config, mut rng: R) -> Self {
        let values = sequence::generate(&mut rng, config.len, config.height);
        Session::with_sequence(config, rng, values)
    }

    /// Start a run on a given sequence.
    pub fn with_sequence(config: Config, rng: R, values: Vec<u16>) -> Self {
        Session {
            config,
            rng,
            sequence: values,
            iterations: 0,
            elapsed: Duration::ZERO,
            throttle: 0,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn sequence(&self) -> &[u16] {
        &self.sequence
    }

    /// Shuffles performed so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Elapsed time as of the last running tick. Frozen once sorted.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current state as a drawable frame.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            sequence: &self.sequence,
            iterations: self.iterations,
            elapsed: self.elapsed,
            sorted: self.state == State::Sorted,
        }
    }

    /// Advance one tick. `elapsed` is the time since the run started.
    ///
    /// While running: every `render_every` ticks the current frame goes to
    /// `out`; then the sequence is either shuffled or found sorted, in which
    /// case the final frame is presented immediately. Sorted and exited
    /// sessions do nothing.
    pub fn tick(&mut self, elapsed: Duration, out: &mut impl Present) -> State {
        if self.state != State::Running {
            return self.state;
        }

        self.elapsed = elapsed;
        if self.throttle == self.config.render_every {
            out.present(&self.frame());
            self.throttle = 0;
        }
        self.throttle += 1;

        if sequence::is_sorted(&self.sequence) {
            self.state = State::Sorted;
            info!(
                iterations = self.iterations,
                elapsed = ?self.elapsed,
                "sequence sorted"
            );
            out.present(&self.frame());
        } else {
            self.iterations += 1;
            sequence::shuffle(&mut self.rng, &mut self.sequence);
        }
        self.state
    }

    /// Stop for good. Later ticks are no-ops.
    pub fn exit(&mut self) {
        self.state = State::Exit;
    }
}

/// Drive `session` until the termination signal arrives.
///
/// Each pass runs one tick, pauses for `tick_pause`, then checks `signals`
/// once without blocking. `Quit` or a disconnected channel ends the run;
/// `Resize` syncs the output and, when idle in the sorted state, repaints
/// the final frame at the new size.
pub fn run<R: Rng>(
    session: &mut Session<R>,
    out: &mut impl Present,
    signals: &mut UnboundedReceiver<Signal>,
    started: Instant,
) {
    let pause = session.config().tick_pause;
    loop {
        session.tick(started.elapsed(), out);
        thread::sleep(pause);

        match signals.try_recv() {
            Ok(Signal::Quit) | Err(TryRecvError::Disconnected) => {
                session.exit();
                info!(iterations = session.iterations(), "exiting");
                return;
            }
            Ok(Signal::Resize(width, height)) => {
                debug!(width, height, "syncing to new terminal size");
                out.sync();
                if session.state() == State::Sorted {
                    out.present(&session.frame());
                }
            }
            Err(TryRecvError::Empty) => {}
        }
    }
}
