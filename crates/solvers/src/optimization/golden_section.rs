//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a closed interval `[lower, upper]`. It maintains two interior points
//! positioned by the golden ratio, compares their objectives, and shrinks the
//! bracket toward the better point. Because of the golden ratio spacing, the
//! surviving interior point is reused and each iteration costs exactly one new
//! evaluation.
//!
//! Maximization negates the objective and runs the same minimization (see
//! [`Mode::transform`]).
//!
//! When both interior objectives are exactly equal, the solver keeps the
//! sub-interval around the interior point closer to the midpoint of the
//! initial interval, and keeps the left sub-interval if both are equally
//! close. A constant function therefore converges to the initial midpoint.
//!
//! # Convergence
//!
//! The search converges once the outer bracket width is at most
//! `x_abs_tol + x_rel_tol * (upper - lower)` (see [`Config`]). The reported
//! `x` is the midpoint of that final bracket, evaluated once more for the
//! reported objective. If [`Config::max_iters`] shrink iterations pass first,
//! the search fails with [`Error::MaxIterationsExceeded`].
//!
//! # Limitations
//!
//! - **Single variable only**: Works with [`OptimizationProblem<1>`]
//! - **Derivative-free**: Slower convergence than gradient-based methods
//! - **Unimodal assumption**: On a function with several extrema in the
//!   interval, the search returns whichever local extremum the bracketing
//!   sequence lands on, which need not be the global one
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after initialization:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//! - [`Event::NonFinite`] — the objective was NaN or infinite
//!
//! Each event includes `other`, the other interior point. In golden section
//! search, this is always the current best. During **initialization**, the
//! solver evaluates two points but emits only one event (for the second point),
//! since the first has no `other` yet. The final midpoint evaluation is not
//! observed.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other` (useful for
//! error recovery or steering the search away from a region).
//!
//! # Example
//!
//! ```
//! use extremum_core::Mode;
//! use extremum_solvers::optimization::golden_section::find;
//!
//! let f = |x: f64| -(x - 3.0).powi(2);
//! let result = find(&f, -10.0, 10.0, Mode::Maximize, 1e-8).unwrap();
//!
//! assert!((result.x - 3.0).abs() < 1e-8);
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{OptimizationResult, Solution, Status};

use extremum_core::{Mode, Model, Observer, OptimizationProblem, ScalarFn, ScalarObjective};

use search::search;

/// Finds the extremum of `f` on `[lower, upper]`.
///
/// `tolerance` is an absolute bound on the width of the final bracket; the
/// iteration cap is [`Config::DEFAULT_MAX_ITERS`]. The returned `x` always lies
/// within `[lower, upper]`.
///
/// A `tolerance` smaller than the float spacing near the optimum can never be
/// reached and ends in [`Error::MaxIterationsExceeded`]; for large or far
/// off-origin intervals prefer [`find_default`] or a [`Config`] with a
/// relative tolerance.
///
/// # Errors
///
/// - [`Error::InvalidInterval`] if `lower >= upper` or either bound is not finite
/// - [`Error::InvalidTolerance`] if `tolerance` is not finite and positive
/// - [`Error::NonFiniteEvaluation`] if `f` returns NaN or an infinity
/// - [`Error::MaxIterationsExceeded`] if the bracket fails to shrink below
///   `tolerance` within the iteration cap
pub fn find<F>(
    f: &F,
    lower: f64,
    upper: f64,
    mode: Mode,
    tolerance: f64,
) -> Result<OptimizationResult, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    bracket::validate(lower, upper)?;
    let config = Config::absolute(tolerance)?;
    find_with_config(f, lower, upper, mode, &config)
}

/// Finds the extremum of `f` on `[lower, upper]` using [`Config::default`].
///
/// # Errors
///
/// Same as [`find`], except the tolerance is always valid.
pub fn find_default<F>(
    f: &F,
    lower: f64,
    upper: f64,
    mode: Mode,
) -> Result<OptimizationResult, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    find_with_config(f, lower, upper, mode, &Config::default())
}

/// Finds the extremum of `f` on `[lower, upper]` with an explicit config.
///
/// # Errors
///
/// Same as [`find`], except the tolerance was already validated by [`Config`].
pub fn find_with_config<F>(
    f: &F,
    lower: f64,
    upper: f64,
    mode: Mode,
    config: &Config,
) -> Result<OptimizationResult, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let model = ScalarFn(f);
    optimize_unobserved(&model, &ScalarObjective, [lower, upper], mode, config)
        .map(OptimizationResult::from)
}

/// Finds the optimum of the objective in the given direction.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, if the search does not
/// converge within [`Config::max_iters`], or if an evaluation fails and the
/// observer does not return [`Action::AssumeWorse`] to recover.
pub fn optimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    mode: Mode,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, observer, mode)
}

/// Finds the optimum of the objective without observer support.
///
/// # Errors
///
/// Same as [`optimize`], without observer recovery.
pub fn optimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    mode: Mode,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    optimize(model, problem, bracket, mode, config, ())
}

/// Finds the minimum of the objective using golden section search.
///
/// # Errors
///
/// See [`optimize`].
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    optimize(model, problem, bracket, Mode::Minimize, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`optimize`].
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// # Errors
///
/// See [`optimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    optimize(model, problem, bracket, Mode::Maximize, config, observer)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`optimize`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, bracket, config, ())
}
