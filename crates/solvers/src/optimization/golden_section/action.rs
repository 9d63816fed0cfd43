/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best point evaluated so far.
    StopEarly,

    /// Treat this point as having a worse objective than the other point.
    ///
    /// The solver shrinks away from this point and never reports it as the
    /// best. Use this to recover from failed or non-finite evaluations, or to
    /// steer the search out of a region even when the evaluation succeeded.
    AssumeWorse,
}
