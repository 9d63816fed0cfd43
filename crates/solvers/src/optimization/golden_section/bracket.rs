use super::Error;

/// The inverse golden ratio: φ⁻¹ = (√5 − 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Checks that `[lower, upper]` is a finite interval with `lower < upper`.
pub(super) fn validate(lower: f64, upper: f64) -> Result<(), Error> {
    let finite = lower.is_finite() && upper.is_finite() && (upper - lower).is_finite();
    if finite && lower < upper {
        Ok(())
    } else {
        Err(Error::InvalidInterval { lower, upper })
    }
}

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior points positioned by the golden ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the bounds are reversed, equal,
    /// or not finite.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [left, right] = bracket;
        validate(left, right)?;

        let width = right - left;
        Ok(Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        })
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Shrinks the bounds to `[left, inner_right]` and computes a new `inner_left`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Shrinks the bounds to `[inner_left, right]` and computes a new `inner_right`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// Returns x for new `inner_left` after shrinking right (without mutating).
    pub(super) fn new_inner_left(&self) -> f64 {
        let new_width = self.inner_right - self.left;
        self.left + (1.0 - INV_PHI) * new_width
    }

    /// Returns x for new `inner_right` after shrinking left (without mutating).
    pub(super) fn new_inner_right(&self) -> f64 {
        let new_left = self.inner_left;
        let new_width = self.right - new_left;
        new_left + INV_PHI * new_width
    }
}
