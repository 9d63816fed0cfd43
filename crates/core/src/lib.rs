//! Core traits and types for bounded extremum search.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] — adapts solver variables to model inputs and
//!   extracts an objective from outputs
//! - [`Mode`] — whether the objective is minimized or maximized
//! - [`ScalarFn`] and [`ScalarObjective`] — adapters that let a plain
//!   `Fn(f64) -> f64` be searched directly

pub mod function;

mod mode;
mod model;
mod observer;
mod problem;

pub use function::{ScalarFn, ScalarObjective};
pub use mode::Mode;
pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::OptimizationProblem;
