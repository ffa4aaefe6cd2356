/// The (β, γ) weights of a Newmark-β scheme.
///
/// β weights the new acceleration in the displacement update and γ weights it
/// in the velocity update. Any finite pair is accepted; stability is the
/// caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheme {
    pub beta: f64,
    pub gamma: f64,
}

impl Scheme {
    /// Constant average acceleration (trapezoidal rule): β = ¼, γ = ½.
    pub const AVERAGE_ACCELERATION: Self = Self::new(0.25, 0.5);

    /// Linear acceleration over the step: β = ⅙, γ = ½.
    pub const LINEAR_ACCELERATION: Self = Self::new(1.0 / 6.0, 0.5);

    #[must_use]
    pub const fn new(beta: f64, gamma: f64) -> Self {
        Self { beta, gamma }
    }

    /// Returns `true` if both weights are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.beta.is_finite() && self.gamma.is_finite()
    }

    /// Returns `true` if the weights satisfy γ ≥ ½ and β ≥ (γ + ½)² / 4.
    ///
    /// This is the classical unconditional-stability region of the implicit
    /// Newmark family. The predictor/corrector recurrence in
    /// [`solve`](super::solve) evaluates the new acceleration at the predicted
    /// state, so it is additionally bounded by the step size: with the
    /// average-acceleration weights an undamped oscillator stays bounded only
    /// while ω·Δt ≤ 2.
    #[must_use]
    pub fn is_unconditionally_stable(&self) -> bool {
        self.gamma >= 0.5 && self.beta >= (self.gamma + 0.5).powi(2) / 4.0
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::AVERAGE_ACCELERATION
    }
}
