/// The optimization direction.
///
/// Solvers always minimize internally. [`Mode::transform`] maps an objective
/// into that internal score, so a maximization is a minimization of the
/// negated objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Search for the smallest objective.
    #[default]
    Minimize,

    /// Search for the largest objective.
    Maximize,
}

impl Mode {
    /// Transforms an objective value into the score a solver minimizes.
    ///
    /// - [`Mode::Minimize`]: returns the value unchanged
    /// - [`Mode::Maximize`]: negates the value
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }
}
