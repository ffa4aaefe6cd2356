/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Time integrators rely on this: re-evaluating a model at the same
/// state must yield the same derivative.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Allows a borrowed model to be used wherever a model is expected.
impl<M: Model + ?Sized> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl Model for Doubler {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(2.0 * input)
        }
    }

    fn call_twice<M: Model<Input = f64, Output = f64>>(model: M, x: f64) -> f64 {
        let Ok(once) = model.call(&x) else {
            panic!("model failed");
        };
        let Ok(twice) = model.call(&once) else {
            panic!("model failed");
        };
        twice
    }

    #[test]
    fn borrowed_model_delegates() {
        let model = Doubler;
        assert_eq!(call_twice(&model, 1.5), 6.0);
        assert_eq!(call_twice(model, 1.5), 6.0);
    }
}
