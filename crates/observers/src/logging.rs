use dichotomy_core::Observer;
use dichotomy_solvers::bisection::Event;
use tracing::Level;

/// An observer that emits one `tracing` event per bisection iteration.
///
/// The event's fields (`iter`, `a`, `b`, `mid`, `residual`, `half_width`) are
/// recorded as structured fields at the configured level, which defaults to
/// [`Level::DEBUG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level iterations are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Logs a single event.
    pub fn record(&self, event: &Event) {
        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    iter = event.iter,
                    a = event.left(),
                    b = event.right(),
                    mid = event.mid,
                    residual = event.residual,
                    half_width = event.half_width,
                    "bisection iteration"
                )
            };
        }

        // `event!` needs a constant level.
        match self.level {
            Level::ERROR => emit!(Level::ERROR),
            Level::WARN => emit!(Level::WARN),
            Level::INFO => emit!(Level::INFO),
            Level::DEBUG => emit!(Level::DEBUG),
            _ => emit!(Level::TRACE),
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl Observer<Event> for LogObserver {
    fn observe(&mut self, event: &Event) {
        self.record(event);
    }
}

impl Observer<Event> for &mut LogObserver {
    fn observe(&mut self, event: &Event) {
        self.record(event);
    }
}
