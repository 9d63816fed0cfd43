//! Numerical solvers for bounded extremum search.
//!
//! # Modules
//!
//! - [`optimization`] — minimize or maximize a scalar objective
//!
//! For the common case of a plain `f(x)`, reach for
//! [`optimization::golden_section::find`].

pub mod optimization;
