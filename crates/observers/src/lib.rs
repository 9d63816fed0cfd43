//! Reusable observers for extremum solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `extremum-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs each golden section event through `tracing`
//! - [`StopAfter`] — stops any solver after a fixed number of events
//!
//! [`Observer`]: extremum_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod trace;

pub use trace::{StopAfter, TraceObserver};
