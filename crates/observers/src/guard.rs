use newmark_core::Observer;

use crate::traits::{CanStopEarly, HasSample};

/// Stops a run once the response leaves a bound.
///
/// The solver accepts schemes and step sizes that grow without bound. This
/// observer stops it at the first sample whose displacement, velocity, or
/// acceleration magnitude exceeds `limit` or is not finite, and remembers the
/// time at which that happened.
///
/// Pass `&mut guard` as the observer to inspect it after the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    limit: f64,
    tripped_at: Option<f64>,
}

impl DivergenceGuard {
    /// Creates a guard that trips when any magnitude exceeds `limit`.
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            tripped_at: None,
        }
    }

    /// Returns the time of the first out-of-bound sample, if any.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped_at
    }

    fn exceeds(&self, value: f64) -> bool {
        !value.is_finite() || value.abs() > self.limit
    }
}

impl<E: HasSample, A: CanStopEarly> Observer<E, A> for DivergenceGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        let sample = event.sample();
        let out_of_bound = [sample.displacement, sample.velocity, sample.acceleration]
            .into_iter()
            .any(|value| self.exceeds(value));

        if !out_of_bound {
            return None;
        }
        if self.tripped_at.is_none() {
            self.tripped_at = Some(sample.time);
        }
        Some(A::stop_early())
    }
}

/// Allows `&mut DivergenceGuard` to be passed to solvers that take an observer
/// by value, so [`DivergenceGuard::tripped_at`] can be read after the run.
impl<E: HasSample, A: CanStopEarly> Observer<E, A> for &mut DivergenceGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use newmark_core::{Oscillator, State};
    use newmark_solvers::transient::newmark::{self, Action, Sample, Scheme, Status};

    fn sample(time: f64, displacement: f64) -> Sample {
        Sample {
            time,
            displacement,
            velocity: 0.0,
            acceleration: 0.0,
        }
    }

    fn feed(guard: &mut DivergenceGuard, sample: Sample) -> Option<Action> {
        guard.observe(&sample)
    }

    #[test]
    fn stays_quiet_within_bound() {
        let mut guard = DivergenceGuard::new(10.0);

        assert_eq!(feed(&mut guard, sample(0.0, 9.5)), None);
        assert_eq!(feed(&mut guard, sample(0.1, -10.0)), None);
        assert_eq!(guard.tripped_at(), None);
    }

    #[test]
    fn trips_on_large_or_non_finite_values() {
        let mut guard = DivergenceGuard::new(10.0);
        assert_eq!(feed(&mut guard, sample(0.2, -10.5)), Some(Action::StopEarly));
        assert_eq!(guard.tripped_at(), Some(0.2));

        let mut guard = DivergenceGuard::new(10.0);
        assert_eq!(feed(&mut guard, sample(0.3, f64::NAN)), Some(Action::StopEarly));
        assert_eq!(guard.tripped_at(), Some(0.3));
    }

    #[test]
    fn remembers_first_trip() {
        let mut guard = DivergenceGuard::new(1.0);

        feed(&mut guard, sample(0.1, 2.0));
        feed(&mut guard, sample(0.2, 3.0));

        assert_eq!(guard.tripped_at(), Some(0.1));
    }

    #[test]
    fn stops_a_diverging_run() {
        // ω·Δt = 3 grows without bound.
        let oscillator = Oscillator::new(1.0, 100.0, 0.0).expect("valid coefficients");
        let mut guard = DivergenceGuard::new(1e3);

        let solution = newmark::solve(
            &oscillator,
            Scheme::default(),
            State::new(1.0, 0.0),
            0.3,
            1000,
            &mut guard,
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.steps < 1000);

        let last = solution.trajectory.last().expect("non-empty trajectory");
        assert_relative_eq!(guard.tripped_at().expect("guard tripped"), last.time);
    }

    #[test]
    fn lets_a_stable_run_complete() {
        let oscillator = Oscillator::new(1.0, 100.0, 2.0).expect("valid coefficients");
        let mut guard = DivergenceGuard::new(1e3);

        let solution = newmark::solve(
            &oscillator,
            Scheme::default(),
            State::new(1.0, 0.0),
            0.01,
            500,
            &mut guard,
        )
        .expect("should complete");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(guard.tripped_at(), None);
    }
}
