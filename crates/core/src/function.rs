//! Adapters for searching plain scalar functions.
//!
//! Solvers work with a [`Model`] and an [`OptimizationProblem`]. Most callers
//! only have an `f(x)`, so [`ScalarFn`] wraps the function as a model and
//! [`ScalarObjective`] uses its output as the objective.

use std::convert::Infallible;

use crate::{Model, OptimizationProblem};

/// A model backed by a scalar function `f64 -> f64`.
///
/// The function is borrowed or owned by the wrapper for as long as the wrapper
/// lives; solvers never retain it past a single call.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F>(pub F);

impl<F> Model for ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

/// A one-variable problem whose input is `x` and whose objective is the model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarObjective;

impl OptimizationProblem<1> for ScalarObjective {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
