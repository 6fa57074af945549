// src/lib.rs

//! `rhoeval` - Fidelity and concurrence of quantum-state density matrices
//!
//! This library evaluates two scalar metrics on density matrices: the
//! Uhlmann fidelity between two states and the Wootters concurrence of a
//! two-qubit state. Both are stateless pure functions built on one shared
//! positive semi-definite matrix square root. A bar-chart layout of a density
//! matrix is available in [`plot`] for visual inspection.

pub mod core;
pub mod evaluate;
pub mod plot;
pub mod states;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{ComplexMatrix, EvalError, sqrt_psd};
pub use evaluate::{EvalOptions, concurrence, concurrence_with, fidelity, fidelity_with};
pub use plot::{BarPlot, ColorStyle, Component, PlotOptions, plot_rho, plot_rho_from_strs};
pub use states::BellState;
pub use validation::validate_density_matrix;

// Example 1: Fidelity against the maximally mixed state
// A maximally entangled two-qubit state has fidelity 1/2 with I/4.
/// ```
/// use rhoeval::{fidelity, EvalError};
/// use rhoeval::core::from_real_row_slice;
/// use rhoeval::states::maximally_mixed;
///
/// # fn main() -> Result<(), EvalError> {
/// let rho = from_real_row_slice(4, 4, &[
///     0.0,  0.0,  0.0, 0.0,
///     0.0,  0.5, -0.5, 0.0,
///     0.0, -0.5,  0.5, 0.0,
///     0.0,  0.0,  0.0, 0.0,
/// ])?;
/// let sigma = maximally_mixed(4)?;
///
/// let f = fidelity(&rho, &sigma)?;
/// assert!((f - 0.5).abs() < 1e-7);
///
/// // Identical states are indistinguishable
/// assert!((fidelity(&rho, &rho)? - 1.0).abs() < 1e-7);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Concurrence of the singlet and of white noise
// The singlet is maximally entangled; I/4 is separable.
/// ```
/// use rhoeval::{concurrence, BellState, EvalError};
/// use rhoeval::states::{bell_state, maximally_mixed, werner_state};
///
/// # fn main() -> Result<(), EvalError> {
/// let singlet = bell_state(BellState::PsiMinus);
/// assert!((concurrence(&singlet)? - 1.0).abs() < 1e-7);
/// assert!(concurrence(&maximally_mixed(4)?)?.abs() < 1e-7);
///
/// // Werner states: C = max(0, (3p - 1) / 2)
/// let c = concurrence(&werner_state(0.8)?)?;
/// assert!((c - 0.7).abs() < 1e-7);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 3: Strict evaluation
// Validation and strict residue checks are opt-in through `EvalOptions`.
/// ```
/// use rhoeval::{concurrence_with, ComplexMatrix, EvalError, EvalOptions};
///
/// let options = EvalOptions::new().validate_inputs(None).imaginary_tolerance(1e-9);
///
/// // The identity has trace 4, so it is not a density matrix.
/// let not_a_state = ComplexMatrix::identity(4, 4);
/// match concurrence_with(&not_a_state, &options) {
///     Err(EvalError::InvalidDensityMatrix { message }) => println!("rejected: {}", message),
///     other => panic!("expected a validation failure, got {:?}", other),
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
