use super::Sample;

/// Event emitted by the Newmark solver for each sample.
///
/// Step 0 is the initial condition, emitted before any integration.
/// Steps 1..N are emitted after each predictor/corrector pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition, 1..N for integration steps).
    pub step: usize,

    /// The sample produced at this step.
    pub sample: Sample,
}
