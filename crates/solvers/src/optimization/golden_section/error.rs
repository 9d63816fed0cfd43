use std::error::Error as StdError;

use crate::optimization::evaluate::EvalError;

use super::ConfigError;

/// Errors that can occur during golden section search.
///
/// No partial result accompanies an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid interval [{lower}, {upper}]: bounds must be finite with lower < upper")]
    InvalidInterval { lower: f64, upper: f64 },

    #[error("invalid tolerance: {0}")]
    InvalidTolerance(#[from] ConfigError),

    #[error("non-finite objective {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },

    #[error("bracket width {width} still above tolerance after {iters} iterations")]
    MaxIterationsExceeded { iters: usize, width: f64 },

    #[error("model error: {0}")]
    Model(Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Converts an evaluation failure at `x` into a solver error.
    pub(super) fn from_eval<ME, PE>(x: f64, err: EvalError<ME, PE>) -> Self
    where
        ME: StdError + Send + Sync + 'static,
        PE: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
            EvalError::NonFinite(value) => Self::NonFiniteEvaluation { x, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    #[test]
    fn non_finite_keeps_offending_x() {
        let err = Error::from_eval::<Infallible, Infallible>(2.5, EvalError::NonFinite(f64::NAN));

        match err {
            Error::NonFiniteEvaluation { x, value } => {
                assert_eq!(x, 2.5);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn messages_name_the_problem() {
        let err = Error::InvalidInterval {
            lower: 2.0,
            upper: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid interval [2, 1]: bounds must be finite with lower < upper"
        );

        let err = Error::from(ConfigError::XAbs);
        assert_eq!(
            err.to_string(),
            "invalid tolerance: x_abs_tol must be finite and non-negative"
        );
    }
}
