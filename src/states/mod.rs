// src/states/mod.rs

//! Reference density matrices.
//!
//! Named two-qubit states used as fixed points for the evaluators, plus
//! seeded random states for reproducible sampling. Every constructor returns a
//! Hermitian, trace-one, positive semi-definite matrix.

use std::f64::consts::{FRAC_1_SQRT_2, TAU};
use std::fmt;

use nalgebra::DMatrix;
use num_complex::Complex64;
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

use crate::core::constants::operators::TWO_QUBIT_DIM;
use crate::core::{ComplexMatrix, EvalError};

/// The four maximally entangled two-qubit Bell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BellState {
    /// (|00⟩ + |11⟩)/√2
    PhiPlus,
    /// (|00⟩ − |11⟩)/√2
    PhiMinus,
    /// (|01⟩ + |10⟩)/√2
    PsiPlus,
    /// (|01⟩ − |10⟩)/√2, the singlet
    PsiMinus,
}

impl BellState {
    /// State vector in the computational basis |00⟩, |01⟩, |10⟩, |11⟩.
    pub fn amplitudes(&self) -> [Complex64; 4] {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let o = Complex64::zero();
        match self {
            BellState::PhiPlus => [h, o, o, h],
            BellState::PhiMinus => [h, o, o, -h],
            BellState::PsiPlus => [o, h, h, o],
            BellState::PsiMinus => [o, h, -h, o],
        }
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BellState::PhiPlus => write!(f, "Φ+"),
            BellState::PhiMinus => write!(f, "Φ-"),
            BellState::PsiPlus => write!(f, "Ψ+"),
            BellState::PsiMinus => write!(f, "Ψ-"),
        }
    }
}

/// The maximally mixed state I/dim.
///
/// # Errors
/// `DimensionError` if `dim` is zero.
pub fn maximally_mixed(dim: usize) -> Result<ComplexMatrix, EvalError> {
    if dim == 0 {
        return Err(EvalError::dimension("a density matrix needs dimension >= 1"));
    }
    let weight = Complex64::new(1.0 / dim as f64, 0.0);
    Ok(DMatrix::from_diagonal_element(dim, dim, weight))
}

/// Projector |ψ⟩⟨ψ| onto a pure state. The vector is normalized first.
///
/// # Errors
/// * `DimensionError` for an empty vector.
/// * `InvalidDensityMatrix` for a zero vector.
pub fn pure_state_projector(psi: &[Complex64]) -> Result<ComplexMatrix, EvalError> {
    if psi.is_empty() {
        return Err(EvalError::dimension("a pure state needs at least one amplitude"));
    }
    let norm = psi.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return Err(EvalError::InvalidDensityMatrix {
            message: format!("cannot normalize a state vector of norm {}", norm),
        });
    }
    let n = psi.len();
    Ok(DMatrix::from_fn(n, n, |i, j| psi[i] * psi[j].conj() / (norm * norm)))
}

/// Density matrix of one of the Bell states.
pub fn bell_state(which: BellState) -> ComplexMatrix {
    let amps = which.amplitudes();
    DMatrix::from_fn(TWO_QUBIT_DIM, TWO_QUBIT_DIM, |i, j| amps[i] * amps[j].conj())
}

/// Werner state p·|Ψ-⟩⟨Ψ-| + (1 − p)·I/4.
///
/// Entangled for p > 1/3, where its concurrence is (3p − 1)/2.
///
/// # Errors
/// `InvalidDensityMatrix` if `p` is outside [0, 1].
pub fn werner_state(p: f64) -> Result<ComplexMatrix, EvalError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(EvalError::InvalidDensityMatrix {
            message: format!("Werner weight must lie in [0, 1], got {}", p),
        });
    }
    let singlet = bell_state(BellState::PsiMinus).map(|z| z * p);
    let noise = maximally_mixed(TWO_QUBIT_DIM)?.map(|z| z * (1.0 - p));
    Ok(singlet + noise)
}

/// Random mixed state of dimension `dim`, drawn from the Hilbert-Schmidt
/// measure: ρ = G·G† / Tr(G·G†) with G a complex Ginibre matrix.
///
/// The same `seed` always yields the same matrix.
///
/// # Errors
/// `DimensionError` if `dim` is zero.
pub fn random_density_matrix(dim: usize, seed: u64) -> Result<ComplexMatrix, EvalError> {
    if dim == 0 {
        return Err(EvalError::dimension("a density matrix needs dimension >= 1"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let g: ComplexMatrix = DMatrix::from_fn(dim, dim, |_, _| complex_gaussian(&mut rng));
    let gram = &g * g.adjoint();
    let tr = gram.trace().re;
    Ok(gram.map(|z| z / tr))
}

/// Random normalized pure state vector of dimension `dim`, uniform on the unit sphere.
///
/// # Errors
/// `DimensionError` if `dim` is zero.
pub fn random_pure_state(dim: usize, seed: u64) -> Result<Vec<Complex64>, EvalError> {
    if dim == 0 {
        return Err(EvalError::dimension("a pure state needs dimension >= 1"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let raw: Vec<Complex64> = (0..dim).map(|_| complex_gaussian(&mut rng)).collect();
    let norm = raw.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
    if norm == 0.0 {
        // Measure-zero draw; fall back to the first basis vector.
        let mut basis = vec![Complex64::zero(); dim];
        basis[0] = Complex64::one();
        return Ok(basis);
    }
    Ok(raw.into_iter().map(|c| c / norm).collect())
}

/// Standard complex normal sample via Box-Muller.
fn complex_gaussian(rng: &mut StdRng) -> Complex64 {
    let u1: f64 = StandardUniform.sample(rng);
    let u2: f64 = StandardUniform.sample(rng);
    // 1 - u1 lies in (0, 1], keeping ln finite
    let radius = (-2.0 * (1.0 - u1).ln()).sqrt();
    let angle = TAU * u2;
    Complex64::new(radius * angle.cos(), radius * angle.sin())
}
