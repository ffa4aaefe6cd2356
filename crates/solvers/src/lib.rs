//! Time integrators for the Newmark-β workspace.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step integrators that produce a full response
//!   history from initial conditions

pub mod transient;
