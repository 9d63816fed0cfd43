use thiserror::Error;

/// Configuration for the golden section solver.
///
/// The search converges once the outer bracket width is at most
/// `x_abs_tol + x_rel_tol * initial_width`, where `initial_width` is
/// `upper - lower` of the bracket the search started from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("at least one of x_abs_tol and x_rel_tol must be positive")]
    ZeroTolerance,
}

impl Default for Config {
    /// Returns a config with [`Config::DEFAULT_MAX_ITERS`] iterations and a
    /// relative tolerance of [`Config::DEFAULT_X_REL_TOL`].
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
            x_abs_tol: 0.0,
            x_rel_tol: Self::DEFAULT_X_REL_TOL,
        }
    }
}

impl Config {
    /// Default cap on shrink iterations.
    ///
    /// Each iteration shrinks the bracket by φ⁻¹ ≈ 0.618, so 200 iterations
    /// reduce the width by roughly 10⁻⁴¹.
    pub const DEFAULT_MAX_ITERS: usize = 200;

    /// Default tolerance relative to the initial interval width.
    pub const DEFAULT_X_REL_TOL: f64 = 1e-8;

    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite, or if
    /// both tolerances are zero.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if x_abs_tol == 0.0 && x_rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Creates a config with only an absolute tolerance and the default iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error unless `x_abs_tol` is finite and positive.
    pub fn absolute(x_abs_tol: f64) -> Result<Self, ConfigError> {
        Self::new(Self::DEFAULT_MAX_ITERS, x_abs_tol, 0.0)
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the bracket width at which a search over `initial_width` converges.
    #[must_use]
    pub fn width_tol(&self, initial_width: f64) -> f64 {
        self.x_abs_tol + self.x_rel_tol * initial_width
    }
}
