use extremum_core::Snapshot;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the optimum x.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

/// The estimated extremum of a scalar function, as returned by [`find`](super::find).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// The extremizing input, always within the searched interval.
    pub x: f64,

    /// The function value at `x`.
    pub value: f64,

    /// Number of shrink iterations performed.
    pub iters: usize,
}

impl<I, O> From<Solution<I, O>> for OptimizationResult {
    fn from(solution: Solution<I, O>) -> Self {
        Self {
            x: solution.x,
            value: solution.objective,
            iters: solution.iters,
        }
    }
}
