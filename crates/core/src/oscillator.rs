//! A damped single-degree-of-freedom oscillator.
//!
//! The oscillator obeys the unforced linear equation of motion
//!
//! ```text
//! m·a + c·v + k·x = 0
//! ```
//!
//! and is exposed as a [`Model`] from kinematic [`State`] to acceleration so
//! that time integrators can evaluate it without knowing its coefficients.

use std::convert::Infallible;

use thiserror::Error;

use crate::Model;

/// Displacement and velocity of the oscillator at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub displacement: f64,
    pub velocity: f64,
}

impl State {
    /// Creates a state from displacement and velocity.
    #[must_use]
    pub fn new(displacement: f64, velocity: f64) -> Self {
        Self {
            displacement,
            velocity,
        }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.displacement.is_finite() && self.velocity.is_finite()
    }
}

/// Errors that can occur when constructing an [`Oscillator`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OscillatorError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("mass must be nonzero")]
    ZeroMass,
}

/// Mass, stiffness, and viscous damping of a linear oscillator.
///
/// Construction guarantees finite coefficients and a nonzero mass, so the
/// acceleration is always defined. Negative stiffness or damping is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    mass: f64,
    stiffness: f64,
    damping: f64,
}

impl Oscillator {
    /// Creates an oscillator from its physical coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`OscillatorError::NonFinite`] if any coefficient is NaN or
    /// infinite, and [`OscillatorError::ZeroMass`] if `mass` is zero.
    pub fn new(mass: f64, stiffness: f64, damping: f64) -> Result<Self, OscillatorError> {
        for (name, value) in [
            ("mass", mass),
            ("stiffness", stiffness),
            ("damping", damping),
        ] {
            if !value.is_finite() {
                return Err(OscillatorError::NonFinite { name, value });
            }
        }
        if mass == 0.0 {
            return Err(OscillatorError::ZeroMass);
        }

        Ok(Self {
            mass,
            stiffness,
            damping,
        })
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Returns the acceleration implied by the equation of motion at `state`.
    #[must_use]
    pub fn acceleration(&self, state: &State) -> f64 {
        (-self.stiffness * state.displacement - self.damping * state.velocity) / self.mass
    }

    /// Returns the mechanical energy `½·m·v² + ½·k·x²` at `state`.
    #[must_use]
    pub fn energy(&self, state: &State) -> f64 {
        0.5 * self.mass * state.velocity.powi(2) + 0.5 * self.stiffness * state.displacement.powi(2)
    }

    /// Returns the undamped natural frequency `√(k/m)` in rad/s.
    ///
    /// NaN when `k/m` is negative.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Returns the damping ratio `c / (2·√(k·m))`.
    ///
    /// Infinite for a springless oscillator, NaN when `k·m` is negative.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Model for Oscillator {
    type Input = State;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &State) -> Result<f64, Infallible> {
        Ok(self.acceleration(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn oscillator() -> Oscillator {
        Oscillator::new(2.0, 50.0, 4.0).expect("valid coefficients")
    }

    #[test]
    fn acceleration_follows_equation_of_motion() {
        let osc = oscillator();
        let state = State::new(0.5, -1.0);

        // (-50·0.5 - 4·(-1)) / 2 = (-25 + 4) / 2
        assert_relative_eq!(osc.acceleration(&state), -10.5);
        assert_eq!(osc.call(&state), Ok(-10.5));
    }

    #[test]
    fn equilibrium_has_no_acceleration() {
        let osc = oscillator();
        assert_eq!(osc.acceleration(&State::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn energy_sums_kinetic_and_potential() {
        let osc = oscillator();
        let state = State::new(0.2, 3.0);

        // 0.5·2·9 + 0.5·50·0.04
        assert_relative_eq!(osc.energy(&state), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn frequency_and_damping_ratio() {
        let osc = Oscillator::new(1.0, 100.0, 2.0).expect("valid coefficients");

        assert_relative_eq!(osc.natural_frequency(), 10.0);
        assert_relative_eq!(osc.damping_ratio(), 0.1);
    }

    #[test]
    fn rejects_zero_mass() {
        assert_eq!(
            Oscillator::new(0.0, 1.0, 1.0),
            Err(OscillatorError::ZeroMass)
        );
        assert_eq!(
            Oscillator::new(-0.0, 1.0, 1.0),
            Err(OscillatorError::ZeroMass)
        );
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        assert!(matches!(
            Oscillator::new(1.0, f64::INFINITY, 0.0),
            Err(OscillatorError::NonFinite {
                name: "stiffness",
                ..
            })
        ));
        assert!(matches!(
            Oscillator::new(f64::NAN, 1.0, 0.0),
            Err(OscillatorError::NonFinite { name: "mass", .. })
        ));
    }

    #[test]
    fn accepts_negative_coefficients() {
        let osc = Oscillator::new(-1.0, -4.0, -0.5).expect("only zero mass is rejected");
        assert_relative_eq!(osc.acceleration(&State::new(1.0, 2.0)), -5.0);
    }
}
