//! Error handling logic

use std::fmt;

/// Errors raised while evaluating or plotting density matrices.
///
/// The evaluators never recover from a failure: any variant aborts the
/// single call that produced it and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum EvalError {
    /// Matrix shape is not what the operation expects
    /// (non-square, mismatched pair, or not the two-qubit 4x4 form).
    DimensionError {
        /// DimensionError failure message
        message: String,
    },

    /// An enumerated option received a value outside its recognized set.
    InvalidOption {
        /// Name of the offending option (e.g. `component`)
        option: String,
        /// The rejected value
        value: String,
    },

    /// Input failed the Hermitian / trace-one / positivity checks.
    /// Only raised when validation was explicitly requested.
    InvalidDensityMatrix {
        /// InvalidDensityMatrix failure message
        message: String,
    },

    /// A discarded imaginary or anti-Hermitian residue exceeded the strict tolerance.
    NumericalInstability {
        /// NumericalInstability failure message
        message: String,
    },

    /// The eigensolver failed to converge.
    DecompositionFailure {
        /// DecompositionFailure failure message
        message: String,
    },
}

impl EvalError {
    pub(crate) fn dimension(message: impl Into<String>) -> Self {
        EvalError::DimensionError { message: message.into() }
    }

    pub(crate) fn invalid_option(option: &str, value: &str) -> Self {
        EvalError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DimensionError { message } => write!(f, "Dimension Error: {}", message),
            EvalError::InvalidOption { option, value } => {
                write!(f, "Invalid Option: '{}' is not a recognized value for {}", value, option)
            }
            EvalError::InvalidDensityMatrix { message } => write!(f, "Invalid Density Matrix: {}", message),
            EvalError::NumericalInstability { message } => write!(f, "Numerical Instability: {}", message),
            EvalError::DecompositionFailure { message } => write!(f, "Decomposition Failure: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for EvalError {}
