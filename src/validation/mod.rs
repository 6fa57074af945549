// src/validation/mod.rs

//! Shape checks and density-matrix checks.
//!
//! The evaluators only run the shape checks by default. The physical checks
//! (Hermitian, trace one, positive semi-definite) are opt-in, either called
//! directly or switched on through `EvalOptions::validate_inputs`.

use crate::core::constants::numeric::DEFAULT_VALIDATION_TOLERANCE;
use crate::core::constants::operators::TWO_QUBIT_DIM;
use crate::core::matrix::{SolverSettings, anti_hermitian_residue, hermitian_eigen};
use crate::core::{ComplexMatrix, EvalError};

// --- Shape Checks ---

/// Checks that `m` is square and returns its dimension.
///
/// # Returns
/// * `Ok(n)` for an `n x n` matrix.
/// * `Err(EvalError::DimensionError)` otherwise.
pub fn check_square(m: &ComplexMatrix) -> Result<usize, EvalError> {
    if m.is_square() {
        Ok(m.nrows())
    } else {
        Err(EvalError::dimension(format!(
            "expected a square matrix, got {}x{}",
            m.nrows(),
            m.ncols()
        )))
    }
}

/// Checks that `a` and `b` are square matrices of the same size.
pub fn check_same_dimension(a: &ComplexMatrix, b: &ComplexMatrix) -> Result<usize, EvalError> {
    let n = check_square(a)?;
    let m = check_square(b)?;
    if n != m {
        return Err(EvalError::dimension(format!(
            "matrices must have equal dimension, got {}x{} and {}x{}",
            n, n, m, m
        )));
    }
    Ok(n)
}

/// Checks that `m` has the two-qubit 4x4 shape.
pub fn check_two_qubit(m: &ComplexMatrix) -> Result<(), EvalError> {
    if m.nrows() == TWO_QUBIT_DIM && m.ncols() == TWO_QUBIT_DIM {
        Ok(())
    } else {
        Err(EvalError::dimension(format!(
            "expected a two-qubit {}x{} density matrix, got {}x{}",
            TWO_QUBIT_DIM,
            TWO_QUBIT_DIM,
            m.nrows(),
            m.ncols()
        )))
    }
}

// --- Density Matrix Checks ---

/// Checks `M ≈ M†` entry by entry.
///
/// # Arguments
/// * `m` - The matrix to check.
/// * `tolerance` - Largest allowed `|M_ij − conj(M_ji)| / 2`. Defaults to 1e-9.
pub fn check_hermitian(m: &ComplexMatrix, tolerance: Option<f64>) -> Result<(), EvalError> {
    check_square(m)?;
    let tol = tolerance.unwrap_or(DEFAULT_VALIDATION_TOLERANCE);
    let residue = anti_hermitian_residue(m);
    if residue > tol {
        Err(EvalError::InvalidDensityMatrix {
            message: format!("matrix is not Hermitian (residue {:e} > {:e})", residue, tol),
        })
    } else {
        Ok(())
    }
}

/// Checks `Tr(M) ≈ 1` (real part within tolerance, imaginary part within tolerance of zero).
pub fn check_trace(m: &ComplexMatrix, tolerance: Option<f64>) -> Result<(), EvalError> {
    check_square(m)?;
    let tol = tolerance.unwrap_or(DEFAULT_VALIDATION_TOLERANCE);
    let tr = m.trace();
    if (tr.re - 1.0).abs() > tol || tr.im.abs() > tol {
        Err(EvalError::InvalidDensityMatrix {
            message: format!("trace must be 1, got {}", tr),
        })
    } else {
        Ok(())
    }
}

/// Checks that every eigenvalue of the Hermitian part of `m` is `>= -tolerance`.
pub fn check_positive_semidefinite(m: &ComplexMatrix, tolerance: Option<f64>) -> Result<(), EvalError> {
    let tol = tolerance.unwrap_or(DEFAULT_VALIDATION_TOLERANCE);
    let (eigenvalues, _) = hermitian_eigen(m, &SolverSettings::default())?;
    let min = eigenvalues.iter().copied().fold(f64::INFINITY, f64::min);
    if min < -tol {
        Err(EvalError::InvalidDensityMatrix {
            message: format!("matrix is not positive semi-definite (min eigenvalue {:e})", min),
        })
    } else {
        Ok(())
    }
}

/// Runs every density-matrix check: square, Hermitian, trace one, PSD.
///
/// # Returns
/// * `Ok(())` if all checks pass.
/// * The first failing check's error otherwise.
pub fn validate_density_matrix(m: &ComplexMatrix, tolerance: Option<f64>) -> Result<(), EvalError> {
    check_square(m)?;
    check_hermitian(m, tolerance)?;
    check_trace(m, tolerance)?;
    check_positive_semidefinite(m, tolerance)?;
    Ok(())
}
