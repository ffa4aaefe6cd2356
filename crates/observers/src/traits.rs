//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once can watch any solver whose events and actions
//! implement them.
//!
//! # Event traits
//!
//! - [`HasSample`] — events that carry an oscillator response sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use newmark_core::Observer;
//! use newmark_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the oscillator first crosses equilibrium.
//! struct FirstCrossing;
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for FirstCrossing {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.sample().displacement <= 0.0).then(A::stop_early)
//!     }
//! }
//! ```

use newmark_solvers::transient::newmark::{self, Sample};

/// An event that carries a response sample.
pub trait HasSample {
    /// Returns the sample for this event.
    fn sample(&self) -> &Sample;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasSample for newmark::Event {
    fn sample(&self) -> &Sample {
        &self.sample
    }
}

impl HasSample for Sample {
    fn sample(&self) -> &Sample {
        self
    }
}

impl CanStopEarly for newmark::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
