/// Receives solver events and optionally returns a control action.
///
/// Solvers emit an event of type `E` at well-defined points (for a time
/// integrator, once per accepted step). Returning `Some(action)` lets the
/// observer steer the solver; returning `None` lets it continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, as is `()`,
/// which ignores every event.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<u32, &'static str>>(mut observer: O, events: &[u32]) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn closure_observer_returns_actions() {
        let actions = drive(
            |event: &u32| if *event > 2 { Some("stop") } else { None },
            &[1, 2, 3, 4],
        );
        assert_eq!(actions, vec!["stop", "stop"]);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        let _ = drive(
            |event: &u32| {
                seen.push(*event);
                None
            },
            &[7, 8],
        );
        assert_eq!(seen, vec![7, 8]);
    }
}
