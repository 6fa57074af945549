// src/core/matrix.rs

//! Dense complex matrices and the shared PSD square root.

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use num_complex::Complex64;
use num_traits::Zero;
use tracing::{trace, warn};

use super::constants::numeric::{EIGEN_EPSILON, EIGEN_MAX_ITERATIONS, IMAGINARY_WARN_THRESHOLD};
use super::constants::operators::{SPIN_FLIP, TWO_QUBIT_DIM};
use super::error::EvalError;

/// Dense complex matrix used for every density matrix in this crate.
pub type ComplexMatrix = DMatrix<Complex64>;

/// Eigensolver limits plus the optional strict residue check.
/// (Internal; the public knob is `evaluate::EvalOptions`.)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SolverSettings {
    pub(crate) epsilon: f64,
    pub(crate) max_iterations: usize,
    /// `None` silently discards the anti-Hermitian part of a decomposed matrix.
    pub(crate) residue_tolerance: Option<f64>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            epsilon: EIGEN_EPSILON,
            max_iterations: EIGEN_MAX_ITERATIONS,
            residue_tolerance: None,
        }
    }
}

/// Builds a complex matrix from row-major real entries.
///
/// # Errors
/// `DimensionError` if `data.len() != nrows * ncols`.
pub fn from_real_row_slice(nrows: usize, ncols: usize, data: &[f64]) -> Result<ComplexMatrix, EvalError> {
    if data.len() != nrows * ncols {
        return Err(EvalError::dimension(format!(
            "{} entries cannot fill a {}x{} matrix",
            data.len(),
            nrows,
            ncols
        )));
    }
    Ok(DMatrix::from_row_iterator(nrows, ncols, data.iter().map(|&re| Complex64::new(re, 0.0))))
}

/// The two-qubit spin-flip operator Z (σy⊗σy), as a 4x4 complex matrix.
pub fn spin_flip() -> ComplexMatrix {
    DMatrix::from_fn(TWO_QUBIT_DIM, TWO_QUBIT_DIM, |i, j| Complex64::new(SPIN_FLIP[i][j], 0.0))
}

/// Largest entry of the anti-Hermitian part (M − M†)/2, measured in modulus.
/// Zero for an exactly Hermitian matrix. Only the leading square block is
/// inspected when `m` is not square.
pub fn anti_hermitian_residue(m: &ComplexMatrix) -> f64 {
    let n = m.nrows().min(m.ncols());
    let mut worst = 0.0_f64;
    for i in 0..n {
        for j in i..n {
            let diff = (m[(i, j)] - m[(j, i)].conj()) * 0.5;
            worst = worst.max(diff.norm());
        }
    }
    worst
}

/// Computes the positive semi-definite square root of a Hermitian matrix.
///
/// The matrix is eigendecomposed as M = U·diag(λ)·U†, every eigenvalue is
/// clamped with `max(0, λ)` before its square root is taken, and the result is
/// rebuilt as U·diag(√λ)·U†. Negative eigenvalues are rounding noise on a
/// matrix that is PSD in exact arithmetic; clamping keeps them from turning
/// into NaN.
///
/// Non-Hermitian input is tolerated: only the Hermitian part (M + M†)/2 is
/// decomposed, so the anti-Hermitian residue (the source of complex
/// eigenvalues) is dropped. This differs from taking the real part of the
/// general eigenvalues of M: both agree for Hermitian and near-Hermitian M,
/// but for a non-normal M such as [[1, 1], [0, 1]] the Hermitian part has
/// eigenvalues 0.5 and 1.5 where M has 1 and 1.
/// Use `evaluate::EvalOptions::imaginary_tolerance` to reject such input instead.
///
/// # Errors
/// * `DimensionError` if `m` is not square.
/// * `NumericalInstability` if `m` has a NaN or infinite entry.
/// * `DecompositionFailure` if the eigensolver does not converge.
pub fn sqrt_psd(m: &ComplexMatrix) -> Result<ComplexMatrix, EvalError> {
    sqrt_psd_with(m, &SolverSettings::default())
}

pub(crate) fn sqrt_psd_with(m: &ComplexMatrix, settings: &SolverSettings) -> Result<ComplexMatrix, EvalError> {
    let (eigenvalues, eigenvectors) = hermitian_eigen(m, settings)?;

    let negatives = eigenvalues.iter().filter(|&&l| l < 0.0).count();
    if negatives > 0 {
        trace!(negatives, min = eigenvalues.min(), "clamping negative eigenvalues to zero");
    }

    let roots: DVector<Complex64> = eigenvalues.map(|l| Complex64::new(l.max(0.0).sqrt(), 0.0));
    Ok(&eigenvectors * DMatrix::from_diagonal(&roots) * eigenvectors.adjoint())
}

/// Eigenvalues (real) and eigenvectors (columns) of the Hermitian part of `m`.
pub(crate) fn hermitian_eigen(
    m: &ComplexMatrix,
    settings: &SolverSettings,
) -> Result<(DVector<f64>, ComplexMatrix), EvalError> {
    if !m.is_square() {
        return Err(EvalError::dimension(format!(
            "eigendecomposition needs a square matrix, got {}x{}",
            m.nrows(),
            m.ncols()
        )));
    }

    if let Some(bad) = m.iter().find(|z| !z.re.is_finite() || !z.im.is_finite()) {
        return Err(EvalError::NumericalInstability {
            message: format!("cannot decompose a matrix with a non-finite entry ({})", bad),
        });
    }

    check_residue(anti_hermitian_residue(m), settings.residue_tolerance, "anti-Hermitian part")?;

    let hermitian_part = (m + m.adjoint()).map(|z| z * 0.5);
    let eigen = SymmetricEigen::try_new(hermitian_part, settings.epsilon, settings.max_iterations).ok_or_else(|| {
        EvalError::DecompositionFailure {
            message: format!(
                "Hermitian eigensolver did not converge on a {}x{} matrix within {} iterations",
                m.nrows(),
                m.ncols(),
                settings.max_iterations
            ),
        }
    })?;

    Ok((eigen.eigenvalues, eigen.eigenvectors))
}

/// Applies the strict/non-strict policy to a residue that is about to be discarded.
pub(crate) fn check_residue(residue: f64, tolerance: Option<f64>, what: &str) -> Result<(), EvalError> {
    match tolerance {
        Some(tol) if residue > tol => Err(EvalError::NumericalInstability {
            message: format!("{} of magnitude {:e} exceeds tolerance {:e}", what, residue, tol),
        }),
        None if residue > IMAGINARY_WARN_THRESHOLD => {
            warn!(residue, what, "discarding non-negligible residue");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Real part of the trace, discarding the imaginary residue under `tolerance`'s policy.
pub(crate) fn real_trace(m: &ComplexMatrix, tolerance: Option<f64>) -> Result<f64, EvalError> {
    let tr = m.diagonal().iter().fold(Complex64::zero(), |acc, z| acc + z);
    check_residue(tr.im.abs(), tolerance, "imaginary part of the trace")?;
    Ok(tr.re)
}
