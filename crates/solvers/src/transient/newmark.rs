//! Newmark-β solver for an unforced, linear, single-degree-of-freedom oscillator.
//!
//! # Algorithm
//!
//! The oscillator obeys `m·a + c·v + k·x = 0`. Starting from the initial
//! displacement and velocity, the acceleration at `t = 0` is taken from the
//! equation of motion. Each step then runs a predictor/corrector pass:
//!
//! ```text
//! x̃ = x + Δt·v + (Δt²/2)·(1 − 2β)·a        predictor
//! ṽ = v + Δt·(1 − γ)·a
//! a' = model(x̃, ṽ)                          acceleration at the predicted state
//! x' = x̃ + β·Δt²·a'                         corrector
//! v' = ṽ + γ·Δt·a'
//! ```
//!
//! Because the system is linear and unforced, the new acceleration is read
//! straight off the predicted state and no effective-stiffness solve is
//! needed. Multi-degree-of-freedom and forced systems are not covered.
//!
//! # Stability
//!
//! Any finite (β, γ) is accepted. A scheme outside the classical stability
//! region, or a step that is large relative to the oscillator period, yields a
//! growing trajectory rather than an error. Callers that need a bounded run can
//! stop early from an observer.
//!
//! # Example
//!
//! ```
//! use newmark_solvers::transient::newmark::{self, Parameters};
//!
//! let params = Parameters {
//!     total_time: 1.0,
//!     ..Parameters::default()
//! };
//!
//! let trajectory = newmark::run(&params)?;
//!
//! assert_eq!(trajectory.len(), params.step_count()? + 1);
//! assert_eq!(trajectory[0].acceleration, -100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod parameters;
mod scheme;
mod solution;
mod trajectory;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use parameters::{ParameterError, Parameters};
pub use scheme::Scheme;
pub use solution::{Solution, Status};
pub use trajectory::{Sample, Trajectory};

use log::{debug, warn};
use newmark_core::{Model, Observer, State};

/// Upper bound on the samples reserved before stepping begins.
///
/// Longer runs still complete; their trajectory grows as it is filled.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Integrates an oscillator from its initial conditions for `params.total_time`.
///
/// Returns `floor(total_time / time_step) + 1` samples, the first being the
/// initial condition. Identical parameters always produce an identical
/// trajectory.
///
/// # Errors
///
/// Fails before producing any sample:
///
/// - [`Error::DivisionByZero`] if the mass is zero.
/// - [`Error::InvalidParameter`] if any field is non-finite, the time step is
///   not positive, the total time is negative, or the step count is not
///   representable.
pub fn run(params: &Parameters) -> Result<Trajectory, Error> {
    let steps = params.step_count()?;
    let oscillator = params.oscillator()?;

    let solution = solve_unobserved(
        &oscillator,
        params.scheme(),
        params.initial_state(),
        params.time_step,
        steps,
    )?;

    Ok(solution.trajectory)
}

/// Integrates an acceleration model with the Newmark-β predictor/corrector.
///
/// # Algorithm
///
/// 1. Call the model at the initial state to get the initial acceleration.
/// 2. Emit the initial sample (step 0).
/// 3. For each step:
///    - Predict displacement and velocity from the previous acceleration.
///    - Call the model at the predicted state to get the new acceleration.
///    - Correct displacement and velocity with the new acceleration.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with the full trajectory.
///
/// Sample `i` is stamped at `i·dt`, not at an accumulated sum of steps.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] before calling the model if `dt` is not
/// finite and positive, or if the scheme or initial state is not finite.
/// Returns [`Error::Model`] if the model fails at any point.
pub fn solve<M, Obs>(
    model: &M,
    scheme: Scheme,
    initial: State,
    dt: f64,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = State, Output = f64>,
    Obs: Observer<Event, Action>,
{
    check_inputs(scheme, initial, dt)?;

    if !scheme.is_unconditionally_stable() {
        warn!(
            "newmark: beta={} gamma={} is outside the unconditionally stable region; \
             the response may grow without bound",
            scheme.beta, scheme.gamma
        );
    }
    debug!(
        "newmark: integrating {steps} steps of dt={dt} (beta={}, gamma={})",
        scheme.beta, scheme.gamma
    );

    let Scheme { beta, gamma } = scheme;

    // Evaluate initial state.
    let mut state = initial;
    let mut acceleration = model.call(&state).map_err(Error::model)?;

    let mut trajectory =
        Trajectory::with_capacity(steps.saturating_add(1).min(MAX_PREALLOCATED_SAMPLES));
    let sample = Sample::new(0.0, state, acceleration);
    trajectory.push(sample);

    // Emit initial event.
    if let Some(Action::StopEarly) = observer.observe(&Event { step: 0, sample }) {
        debug!("newmark: stopped by observer before the first step");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        });
    }

    for step in 1..=steps {
        // Predict from the previous acceleration only.
        let predicted = State::new(
            state.displacement
                + dt * state.velocity
                + (dt * dt / 2.0) * ((1.0 - 2.0 * beta) * acceleration),
            state.velocity + dt * (1.0 - gamma) * acceleration,
        );

        let next_acceleration = model.call(&predicted).map_err(Error::model)?;

        // Correct with the new acceleration.
        state = State::new(
            predicted.displacement + beta * dt * dt * next_acceleration,
            predicted.velocity + gamma * dt * next_acceleration,
        );
        acceleration = next_acceleration;

        #[allow(clippy::cast_precision_loss)]
        let time = step as f64 * dt;
        let sample = Sample::new(time, state, acceleration);
        trajectory.push(sample);

        if let Some(Action::StopEarly) = observer.observe(&Event { step, sample }) {
            debug!("newmark: stopped by observer at step {step} (t={time})");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            });
        }
    }

    debug!("newmark: completed {steps} steps");

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

/// Integrates an acceleration model without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M>(
    model: &M,
    scheme: Scheme,
    initial: State,
    dt: f64,
    steps: usize,
) -> Result<Solution, Error>
where
    M: Model<Input = State, Output = f64>,
{
    solve(model, scheme, initial, dt, steps, ())
}

fn check_inputs(scheme: Scheme, initial: State, dt: f64) -> Result<(), ParameterError> {
    for (name, value) in [
        ("time step", dt),
        ("beta", scheme.beta),
        ("gamma", scheme.gamma),
        ("initial displacement", initial.displacement),
        ("initial velocity", initial.velocity),
    ] {
        if !value.is_finite() {
            return Err(ParameterError::NonFinite { name, value });
        }
    }
    if dt <= 0.0 {
        return Err(ParameterError::NonPositiveTimeStep(dt));
    }
    Ok(())
}
