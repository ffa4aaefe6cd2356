//! Core traits and types for the Newmark-β workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Oscillator`] — the damped single-degree-of-freedom equation of motion,
//!   exposed as a [`Model`] from kinematic [`State`] to acceleration

mod model;
mod observer;
mod oscillator;

pub use model::Model;
pub use observer::Observer;
pub use oscillator::{Oscillator, OscillatorError, State};
