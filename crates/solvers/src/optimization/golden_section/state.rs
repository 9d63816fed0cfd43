use extremum_core::{Mode, Snapshot};

use super::bracket::GoldenBracket;
use super::solution::Status;
use super::{Point, Solution};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ShrinkDirection {
    /// Shrink left bound; payload is x for new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink right bound; payload is x for new `inner_left`.
    ShrinkRight(f64),
}

pub(super) struct State<I, O> {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best_point: Point,
    best_snapshot: Snapshot<I, O>,
    /// Midpoint of the initial interval, used to break exact ties.
    center: f64,
}

impl<I, O> State<I, O> {
    pub(super) fn new(
        bracket: GoldenBracket,
        left: Point,
        right: Point,
        best_point: Point,
        best_snapshot: Snapshot<I, O>,
    ) -> Self {
        Self {
            bracket,
            left,
            right,
            best_point,
            best_snapshot,
            center: bracket.midpoint(),
        }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    pub(super) fn bracket(&self) -> &GoldenBracket {
        &self.bracket
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    ///
    /// On an exact tie, the interior point closer to the initial midpoint
    /// keeps its sub-interval; if both are equally close the left one does.
    pub(super) fn next_action(&self, mode: Mode) -> ShrinkDirection {
        let left_score = self.left.score(mode);
        let right_score = self.right.score(mode);

        let keep_left = if left_score == right_score {
            (self.left.x - self.center).abs() <= (self.right.x - self.center).abs()
        } else {
            left_score < right_score
        };

        if keep_left {
            ShrinkDirection::ShrinkRight(self.bracket.new_inner_left())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.new_inner_right())
        }
    }

    /// Apply shrink and update interior point with new evaluation.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                // [left, inner_right] becomes the bracket; old inner_left moves right.
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                // [inner_left, right] becomes the bracket; old inner_right moves left.
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }
    }

    /// Update best if this point has better score. Only call with real evaluations.
    pub(super) fn maybe_update_best(&mut self, point: &Point, mode: Mode, snapshot: Snapshot<I, O>) {
        if point.score(mode) < self.best_point.score(mode) {
            self.best_point = *point;
            self.best_snapshot = snapshot;
        }
    }

    pub(super) fn is_converged(&self, width_tol: f64) -> bool {
        self.bracket.width() <= width_tol
    }

    /// Returns the best evaluated point as a solution.
    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.best_point.x,
            objective: self.best_point.objective,
            snapshot: self.best_snapshot,
            iters,
        }
    }
}
