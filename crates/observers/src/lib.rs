//! Reusable observers for Newmark-β runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `newmark-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasSample`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`DivergenceGuard`] — stops a run once the response leaves a bound
//!
//! # Features
//!
//! - `plot` — Enables [`ResponsePlot`] for charting displacement, velocity,
//!   and acceleration against time via egui. This feature adds dependencies
//!   on `eframe` and `egui_plot`.
//!
//! [`Observer`]: newmark_core::Observer
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;

pub use guard::DivergenceGuard;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{ResponsePlot, ShowConfig, Trace};
