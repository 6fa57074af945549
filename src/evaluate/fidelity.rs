// src/evaluate/fidelity.rs

use tracing::debug;

use super::EvalOptions;
use crate::core::matrix::{real_trace, sqrt_psd_with};
use crate::core::{ComplexMatrix, EvalError};
use crate::validation::check_same_dimension;

/// Uhlmann fidelity F(ρ, σ) = Tr √(√ρ · σ · √ρ) between two density matrices.
///
/// 1 for identical states, 0 for perfectly distinguishable ones. Symmetric in
/// its arguments. This is the non-squared convention: for pure states it
/// equals |⟨ψ|φ⟩|.
///
/// The real part of the final trace is returned; its imaginary residue is
/// dropped without a check. Use [`fidelity_with`] and
/// `EvalOptions::imaginary_tolerance` for a strict variant.
///
/// # Errors
/// * `DimensionError` if either input is not square or the sizes differ.
/// * `DecompositionFailure` if an eigendecomposition does not converge.
pub fn fidelity(rho: &ComplexMatrix, sigma: &ComplexMatrix) -> Result<f64, EvalError> {
    fidelity_with(rho, sigma, &EvalOptions::default())
}

/// [`fidelity`] with explicit options (input validation, strict residues, solver limits).
pub fn fidelity_with(rho: &ComplexMatrix, sigma: &ComplexMatrix, options: &EvalOptions) -> Result<f64, EvalError> {
    let dim = check_same_dimension(rho, sigma)?;
    options.check_input(rho)?;
    options.check_input(sigma)?;

    let solver = options.solver();
    let sqrt_rho = sqrt_psd_with(rho, &solver)?;
    let product = &sqrt_rho * sigma * &sqrt_rho;
    let sqrt_product = sqrt_psd_with(&product, &solver)?;
    let f = real_trace(&sqrt_product, solver.residue_tolerance)?;

    debug!(dim, fidelity = f, "evaluated fidelity");
    Ok(f)
}
