//! Solvers for transient problems: stepping a dynamic system through time.
//!
//! # Solvers
//!
//! - [`newmark`] — Newmark-β predictor/corrector stepping of a single
//!   degree-of-freedom oscillator driven by its initial conditions

pub mod newmark;
