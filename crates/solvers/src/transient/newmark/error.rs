use std::error::Error as StdError;

use super::ParameterError;

/// Errors that can occur during Newmark integration.
///
/// All parameter checks run before the first sample is produced, so an error
/// never accompanies a partial trajectory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[source] ParameterError),

    #[error("division by zero: mass must be nonzero")]
    DivisionByZero,

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::ZeroMass => Self::DivisionByZero,
            other => Self::InvalidParameter(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_becomes_division_by_zero() {
        assert!(matches!(
            Error::from(ParameterError::ZeroMass),
            Error::DivisionByZero
        ));
    }

    #[test]
    fn other_parameter_errors_stay_invalid_parameter() {
        let err = Error::from(ParameterError::NegativeTotalTime(-1.0));
        assert!(matches!(
            err,
            Error::InvalidParameter(ParameterError::NegativeTotalTime(_))
        ));
        assert_eq!(
            err.to_string(),
            "invalid parameter: total time must be non-negative, got -1"
        );
    }
}
