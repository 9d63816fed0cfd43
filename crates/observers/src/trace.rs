//! Observers that record or bound a search without inspecting the model.

use tracing::{Level, debug, error, info, trace, warn};

use extremum_core::{Model, Observer, OptimizationProblem};

use extremum_solvers::optimization::golden_section::Event;

use crate::traits::CanStopEarly;

/// Logs every golden section event through `tracing` and never acts.
///
/// Successful evaluations are logged at the configured level. Failures are
/// logged at `WARN` regardless, since they abort the search unless another
/// observer recovers from them.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    level: Level,
    events: usize,
}

impl TraceObserver {
    /// Creates an observer that logs evaluations at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, events: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

macro_rules! at_level {
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if level == Level::TRACE {
            trace!($($arg)+);
        } else if level == Level::DEBUG {
            debug!($($arg)+);
        } else if level == Level::INFO {
            info!($($arg)+);
        } else if level == Level::WARN {
            warn!($($arg)+);
        } else {
            error!($($arg)+);
        }
    }};
}

impl<M, P, A> Observer<Event<'_, M, P>, A> for TraceObserver
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P>) -> Option<A> {
        self.events += 1;
        let n = self.events;
        let other = event.other();

        match event {
            Event::Evaluated { point, .. } => {
                at_level!(
                    self.level,
                    event = n,
                    x = point.x,
                    objective = point.objective,
                    other_x = other.x,
                    other_objective = other.objective,
                    "evaluated"
                );
            }
            Event::ModelFailed { x, error, .. } => {
                warn!(event = n, x, error = %error, "model failed");
            }
            Event::ProblemFailed { x, error, .. } => {
                warn!(event = n, x, error = %error, "problem failed");
            }
            Event::NonFinite { x, value, .. } => {
                warn!(event = n, x, value, "non-finite objective");
            }
        }

        None
    }
}

/// Stops the solver after a fixed number of observed events.
///
/// Works with any solver whose action type implements [`CanStopEarly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    remaining: usize,
}

impl StopAfter {
    /// Creates an observer that stops on the `events`-th event.
    ///
    /// With `events == 0` the first event stops the solver.
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self { remaining: events }
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.remaining = self.remaining.saturating_sub(1);
        (self.remaining == 0).then(A::stop_early)
    }
}
