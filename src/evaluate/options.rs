// src/evaluate/options.rs

use crate::core::constants::numeric::{EIGEN_EPSILON, EIGEN_MAX_ITERATIONS};
use crate::core::matrix::SolverSettings;
use crate::core::{ComplexMatrix, EvalError};
use crate::validation::validate_density_matrix;

/// Per-call configuration for the evaluators.
///
/// `EvalOptions::default()` reproduces the reference behavior: no input
/// validation, and imaginary residues are discarded without a check.
///
/// ```
/// use rhoeval::EvalOptions;
///
/// let strict = EvalOptions::new()
///     .validate_inputs(Some(1e-9))
///     .imaginary_tolerance(1e-9);
/// assert!(strict.validates_inputs());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalOptions {
    validate: bool,
    validation_tolerance: Option<f64>,
    imaginary_tolerance: Option<f64>,
    eigen_epsilon: Option<f64>,
    max_iterations: Option<usize>,
}

impl EvalOptions {
    /// Creates options with the reference defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `validation::validate_density_matrix` on every input before evaluating.
    /// `None` uses the default validation tolerance.
    pub fn validate_inputs(mut self, tolerance: Option<f64>) -> Self {
        self.validate = true;
        self.validation_tolerance = tolerance;
        self
    }

    /// Rejects any imaginary trace part or anti-Hermitian residue larger than
    /// `tolerance` with `EvalError::NumericalInstability` instead of discarding it.
    pub fn imaginary_tolerance(mut self, tolerance: f64) -> Self {
        self.imaginary_tolerance = Some(tolerance);
        self
    }

    /// Overrides the eigensolver convergence threshold.
    pub fn eigen_epsilon(mut self, epsilon: f64) -> Self {
        self.eigen_epsilon = Some(epsilon);
        self
    }

    /// Overrides the eigensolver iteration cap. nalgebra reads 0 as "no cap",
    /// so 0 falls back to the default cap instead.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Whether inputs are validated before evaluation.
    pub fn validates_inputs(&self) -> bool {
        self.validate
    }

    /// Strict tolerance for discarded imaginary parts, if any.
    pub fn strict_tolerance(&self) -> Option<f64> {
        self.imaginary_tolerance
    }

    pub(crate) fn solver(&self) -> SolverSettings {
        SolverSettings {
            epsilon: self.eigen_epsilon.unwrap_or(EIGEN_EPSILON),
            max_iterations: self.max_iterations.filter(|&n| n > 0).unwrap_or(EIGEN_MAX_ITERATIONS),
            residue_tolerance: self.imaginary_tolerance,
        }
    }

    /// Validates `m` when validation is switched on; a no-op otherwise.
    pub(crate) fn check_input(&self, m: &ComplexMatrix) -> Result<(), EvalError> {
        if self.validate {
            validate_density_matrix(m, self.validation_tolerance)?;
        }
        Ok(())
    }
}
