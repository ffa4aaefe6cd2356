use newmark_core::{Oscillator, OscillatorError, State};
use thiserror::Error;

use super::Scheme;

/// Everything needed to run a Newmark integration of a damped oscillator.
///
/// A plain value: build one, then hand it to [`run`](super::run), which
/// validates it before computing anything. Fields missing from a serialized
/// record take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub initial_displacement: f64,
    pub initial_velocity: f64,
    pub time_step: f64,
    pub total_time: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Errors that can occur when validating [`Parameters`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("mass must be nonzero")]
    ZeroMass,

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("total time must be non-negative, got {0}")]
    NegativeTotalTime(f64),

    #[error("step count {0} is not representable")]
    StepCountOverflow(f64),
}

impl From<OscillatorError> for ParameterError {
    fn from(err: OscillatorError) -> Self {
        match err {
            OscillatorError::NonFinite { name, value } => Self::NonFinite { name, value },
            OscillatorError::ZeroMass => Self::ZeroMass,
        }
    }
}

impl Default for Parameters {
    /// A lightly damped oscillator (ω = 10 rad/s, ζ = 0.1) released from unit
    /// displacement and integrated for ten seconds with average acceleration.
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 2.0,
            initial_displacement: 1.0,
            initial_velocity: 0.0,
            time_step: 0.01,
            total_time: 10.0,
            beta: Scheme::AVERAGE_ACCELERATION.beta,
            gamma: Scheme::AVERAGE_ACCELERATION.gamma,
        }
    }
}

impl Parameters {
    /// Checks that the parameters describe a computable run.
    ///
    /// Checks run in order: every field finite, nonzero mass, positive time
    /// step, non-negative total time, and a representable step count. The
    /// first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] for the first violated condition.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.step_count().map(|_| ())
    }

    /// Returns the number of integration steps, `floor(total_time / time_step)`.
    ///
    /// The quotient is taken in floating point, so a horizon that is an exact
    /// decimal multiple of the step may round down by one (`0.3 / 0.1` gives 2).
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the parameters fail validation.
    pub fn step_count(&self) -> Result<usize, ParameterError> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        if self.mass == 0.0 {
            return Err(ParameterError::ZeroMass);
        }
        if self.time_step <= 0.0 {
            return Err(ParameterError::NonPositiveTimeStep(self.time_step));
        }
        if self.total_time < 0.0 {
            return Err(ParameterError::NegativeTotalTime(self.total_time));
        }

        let steps = (self.total_time / self.time_step).floor();

        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if !steps.is_finite() || steps >= limit {
            return Err(ParameterError::StepCountOverflow(steps));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as usize;
        Ok(steps)
    }

    /// Returns the oscillator described by the mass, stiffness, and damping.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if a coefficient is non-finite or the mass is zero.
    pub fn oscillator(&self) -> Result<Oscillator, ParameterError> {
        Oscillator::new(self.mass, self.stiffness, self.damping).map_err(ParameterError::from)
    }

    /// Returns the (β, γ) scheme weights.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        Scheme::new(self.beta, self.gamma)
    }

    /// Returns the state at `t = 0`.
    #[must_use]
    pub fn initial_state(&self) -> State {
        State::new(self.initial_displacement, self.initial_velocity)
    }

    fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("mass", self.mass),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("initial displacement", self.initial_displacement),
            ("initial velocity", self.initial_velocity),
            ("time step", self.time_step),
            ("total time", self.total_time),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ]
    }
}
