// src/evaluate/concurrence.rs

use tracing::debug;

use super::EvalOptions;
use crate::core::matrix::{hermitian_eigen, spin_flip, sqrt_psd_with};
use crate::core::{ComplexMatrix, EvalError};
use crate::validation::check_two_qubit;

/// Wootters concurrence of a two-qubit (4x4) density matrix, in [0, 1].
///
/// With S = √ρ and the spin-flipped state ρ̃ = Z·ρ†·Z, the eigenvalues of
/// R = S·ρ̃·S are clamped at zero, square-rooted and sorted ascending into
/// λ1 ≤ λ2 ≤ λ3 ≤ λ4, giving C = max(0, λ4 − λ3 − λ2 − λ1).
///
/// The sort is explicit: eigensolver output order is never relied upon.
///
/// # Errors
/// * `DimensionError` if `rho` is not 4x4.
/// * `DecompositionFailure` if an eigendecomposition does not converge.
pub fn concurrence(rho: &ComplexMatrix) -> Result<f64, EvalError> {
    concurrence_with(rho, &EvalOptions::default())
}

/// [`concurrence`] with explicit options (input validation, strict residues, solver limits).
pub fn concurrence_with(rho: &ComplexMatrix, options: &EvalOptions) -> Result<f64, EvalError> {
    check_two_qubit(rho)?;
    options.check_input(rho)?;

    let solver = options.solver();
    let sqrt_rho = sqrt_psd_with(rho, &solver)?;
    let z = spin_flip();
    let flipped = &z * rho.adjoint() * &z;
    let r = &sqrt_rho * flipped * &sqrt_rho;

    let (eigenvalues, _) = hermitian_eigen(&r, &solver)?;
    let mut lambdas: Vec<f64> = eigenvalues.iter().map(|&l| l.max(0.0).sqrt()).collect();
    lambdas.sort_by(f64::total_cmp);

    let c = (lambdas[3] - lambdas[2] - lambdas[1] - lambdas[0]).max(0.0);
    debug!(concurrence = c, ?lambdas, "evaluated concurrence");
    Ok(c)
}
