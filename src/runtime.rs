use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent};
use tracing::{debug, warn};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "terminal event reader stopped");
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to tick interval and returns the next event, or Tick on timeout
    pub fn step(&self) -> AppEvent {
        self.step_within(self.ticker.interval())
    }

    /// Like `step`, but wakes up early when `deadline` is sooner than the tick interval
    pub fn step_within(&self, deadline: Duration) -> AppEvent {
        let timeout = deadline.min(self.ticker.interval());
        match self.event_source.recv_timeout(timeout) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => AppEvent::Tick,
        }
    }
}

/// Countdown clock for one session.
///
/// The timer holds a single deadline, so starting it again always replaces the
/// previous run. Time is passed in by the caller, which lets tests drive it
/// without sleeping.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    period: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl SessionTimer {
    /// Shortest accepted period. Anything below is raised to it so `poll` always advances.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Self::MIN_PERIOD),
            next_due: None,
            generation: 0,
        }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Cancels any running countdown, then arms a new one. Returns the new generation.
    pub fn start(&mut self, now: Instant) -> u64 {
        self.cancel();
        self.generation += 1;
        self.next_due = Some(now + self.period);
        debug!(generation = self.generation, "timer started");
        self.generation
    }

    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            debug!(generation = self.generation, "timer cancelled");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole periods that elapsed up to `now`. A disarmed timer never fires.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while now >= due {
            fired += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        fired
    }

    /// Time left until the next tick, `None` when disarmed
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::every_second()
    }
}
