use extremum_core::Mode;

use crate::optimization::evaluate::Evaluation;

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }

    /// Creates a point at `x` that loses every comparison in the given mode.
    pub(super) fn worst(x: f64, mode: Mode) -> Self {
        Self::new(x, mode.transform(f64::INFINITY))
    }

    /// Returns the score the solver minimizes for this point.
    pub(super) fn score(&self, mode: Mode) -> f64 {
        mode.transform(self.objective)
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        Self::new(eval.x[0], eval.objective)
    }
}
