use std::ops::Deref;

use newmark_core::State;

/// The oscillator's response at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub time: f64,
    pub displacement: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl Sample {
    pub(crate) fn new(time: f64, state: State, acceleration: f64) -> Self {
        Self {
            time,
            displacement: state.displacement,
            velocity: state.velocity,
            acceleration,
        }
    }

    /// Returns the displacement and velocity at this sample.
    #[must_use]
    pub fn state(&self) -> State {
        State::new(self.displacement, self.velocity)
    }
}

/// An ordered, read-only sequence of samples with strictly increasing time.
///
/// Index 0 is always the initial condition. Dereferences to `[Sample]` for
/// indexing, iteration, and slice methods.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Returns the samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Consumes the trajectory and returns its samples.
    #[must_use]
    pub fn into_vec(self) -> Vec<Sample> {
        self.samples
    }
}

impl Deref for Trajectory {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}

impl AsRef<[Sample]> for Trajectory {
    fn as_ref(&self) -> &[Sample] {
        &self.samples
    }
}

impl IntoIterator for Trajectory {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory() -> Trajectory {
        let mut trajectory = Trajectory::with_capacity(2);
        trajectory.push(Sample::new(0.0, State::new(1.0, 0.0), -4.0));
        trajectory.push(Sample::new(0.5, State::new(0.5, -1.0), -2.0));
        trajectory
    }

    #[test]
    fn derefs_to_samples() {
        let trajectory = trajectory();

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory[1].time, 0.5);
        assert_eq!(trajectory.last().map(Sample::state), Some(State::new(0.5, -1.0)));
    }

    #[test]
    fn iterates_in_order() {
        let trajectory = trajectory();

        let times: Vec<f64> = (&trajectory).into_iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 0.5]);

        let owned = trajectory.into_vec();
        assert_eq!(owned[0].acceleration, -4.0);
    }
}
