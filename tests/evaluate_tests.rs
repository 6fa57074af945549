// tests/evaluate_tests.rs

// Import necessary types from the rhoeval crate
use rhoeval::core::from_real_row_slice;
use rhoeval::states::{
    bell_state, maximally_mixed, pure_state_projector, random_density_matrix, random_pure_state, werner_state,
};
use rhoeval::{
    BellState, ComplexMatrix, EvalError, EvalOptions, concurrence, concurrence_with, fidelity, fidelity_with,
};

use num_complex::Complex64;

const TOL: f64 = 1e-7;

// Helper: the entangled state used throughout the reference scenarios
fn entangled_rho() -> ComplexMatrix {
    #[rustfmt::skip]
    let data = [
        0.0,  0.0,  0.0, 0.0,
        0.0,  0.5, -0.5, 0.0,
        0.0, -0.5,  0.5, 0.0,
        0.0,  0.0,  0.0, 0.0,
    ];
    from_real_row_slice(4, 4, &data).expect("16 entries fill a 4x4 matrix")
}

// Helper: assert two floats agree within a tolerance, with a readable message
fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{}: got {}, expected {} (tol {})",
        what,
        actual,
        expected,
        tol
    );
}

#[test]
fn test_fidelity_entangled_vs_maximally_mixed() -> Result<(), EvalError> {
    let f = fidelity(&entangled_rho(), &maximally_mixed(4)?)?;
    assert_close(f, 0.5, TOL, "F(singlet, I/4)");
    Ok(())
}

#[test]
fn test_concurrence_entangled_state() -> Result<(), EvalError> {
    assert_close(concurrence(&entangled_rho())?, 1.0, TOL, "C(singlet)");
    Ok(())
}

#[test]
fn test_concurrence_maximally_mixed() -> Result<(), EvalError> {
    assert_close(concurrence(&maximally_mixed(4)?)?, 0.0, TOL, "C(I/4)");
    Ok(())
}

#[test]
fn test_fidelity_with_itself() -> Result<(), EvalError> {
    let rho = entangled_rho();
    assert_close(fidelity(&rho, &rho)?, 1.0, TOL, "F(rho, rho)");
    let mixed = maximally_mixed(4)?;
    assert_close(fidelity(&mixed, &mixed)?, 1.0, TOL, "F(I/4, I/4)");
    Ok(())
}

#[test]
fn test_fidelity_is_symmetric() -> Result<(), EvalError> {
    let rho = random_density_matrix(4, 11)?;
    let sigma = random_density_matrix(4, 12)?;
    assert_close(fidelity(&rho, &sigma)?, fidelity(&sigma, &rho)?, 1e-8, "symmetry");
    Ok(())
}

#[test]
fn test_orthogonal_bell_states_have_zero_fidelity() -> Result<(), EvalError> {
    let phi = bell_state(BellState::PhiPlus);
    let psi = bell_state(BellState::PsiMinus);
    assert_close(fidelity(&phi, &psi)?, 0.0, 1e-6, "F(Φ+, Ψ-)");
    Ok(())
}

#[test]
fn test_pure_state_fidelity_is_overlap() -> Result<(), EvalError> {
    // F(|ψ><ψ|, |φ><φ|) = |<ψ|φ>|
    let psi = random_pure_state(4, 123)?;
    let phi = random_pure_state(4, 456)?;
    let overlap: Complex64 = psi.iter().zip(phi.iter()).map(|(a, b)| a.conj() * b).sum();

    let rho = pure_state_projector(&psi)?;
    let sigma = pure_state_projector(&phi)?;
    assert_close(fidelity(&rho, &sigma)?, overlap.norm(), 1e-6, "pure-state fidelity");
    Ok(())
}

#[test]
fn test_every_bell_state_is_maximally_entangled() -> Result<(), EvalError> {
    for which in [BellState::PhiPlus, BellState::PhiMinus, BellState::PsiPlus, BellState::PsiMinus] {
        assert_close(concurrence(&bell_state(which))?, 1.0, TOL, &format!("C({})", which));
    }
    Ok(())
}

#[test]
fn test_product_state_is_separable() -> Result<(), EvalError> {
    // |+>|0> = (|00> + |10>)/√2
    let h = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    let rho = pure_state_projector(&[h, zero, h, zero])?;
    assert_close(concurrence(&rho)?, 0.0, 1e-6, "C(|+0>)");
    Ok(())
}

#[test]
fn test_imaginary_phase_on_bell_amplitude_zeroes_concurrence() -> Result<(), EvalError> {
    // The spin flip uses ρ† (equal to ρ), not ρ*: an i on |11> makes R vanish.
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let zero = Complex64::new(0.0, 0.0);
    let real_phase = pure_state_projector(&[Complex64::new(h, 0.0), zero, zero, Complex64::new(h, 0.0)])?;
    let imag_phase = pure_state_projector(&[Complex64::new(h, 0.0), zero, zero, Complex64::new(0.0, h)])?;
    assert_close(concurrence(&real_phase)?, 1.0, TOL, "C((|00> + |11>)/√2)");
    assert_close(concurrence(&imag_phase)?, 0.0, TOL, "C((|00> + i|11>)/√2)");
    Ok(())
}

#[test]
fn test_werner_state_concurrence()-> Result<(), EvalError> {
    for p in [0.0, 0.2, 1.0 / 3.0, 0.5, 0.75, 0.9] {
        let expected = ((3.0 * p - 1.0) / 2.0_f64).max(0.0);
        assert_close(concurrence(&werner_state(p)?)?, expected, 1e-6, &format!("C(Werner p={})", p));
    }
    Ok(())
}

#[test]
fn test_repeated_calls_are_identical() -> Result<(), EvalError> {
    let rho = random_density_matrix(4, 99)?;
    let sigma = random_density_matrix(4, 100)?;
    let first = (fidelity(&rho, &sigma)?, concurrence(&rho)?);
    for _ in 0..5 {
        assert_eq!((fidelity(&rho, &sigma)?, concurrence(&rho)?), first);
    }
    Ok(())
}

#[test]
fn test_dimension_errors() {
    let two = maximally_mixed(2).expect("valid dimension");
    let four = maximally_mixed(4).expect("valid dimension");
    let wide = ComplexMatrix::zeros(4, 3);

    assert!(matches!(fidelity(&two, &four), Err(EvalError::DimensionError { .. })));
    assert!(matches!(fidelity(&wide, &wide), Err(EvalError::DimensionError { .. })));
    assert!(matches!(concurrence(&two), Err(EvalError::DimensionError { .. })));
    assert!(matches!(concurrence(&wide), Err(EvalError::DimensionError { .. })));
}

#[test]
fn test_fidelity_works_beyond_two_qubits() -> Result<(), EvalError> {
    let rho = random_density_matrix(3, 5)?;
    let f = fidelity(&rho, &maximally_mixed(3)?)?;
    assert!(f > 0.0 && f <= 1.0 + 1e-9, "fidelity out of range: {}", f);
    Ok(())
}

#[test]
fn test_strict_mode_rejects_non_hermitian_input() -> Result<(), EvalError> {
    let mut skewed = entangled_rho();
    skewed[(1, 2)] = Complex64::new(-0.5, 0.01);

    // Reference behavior: the residue is silently discarded
    assert!(concurrence(&skewed).is_ok());

    let strict = EvalOptions::new().imaginary_tolerance(1e-9);
    assert!(matches!(concurrence_with(&skewed, &strict), Err(EvalError::NumericalInstability { .. })));
    assert!(matches!(
        fidelity_with(&skewed, &maximally_mixed(4)?, &strict),
        Err(EvalError::NumericalInstability { .. })
    ));

    // Valid inputs pass the strict checks
    let f = fidelity_with(&entangled_rho(), &maximally_mixed(4)?, &strict)?;
    assert_close(f, 0.5, TOL, "strict F(singlet, I/4)");
    Ok(())
}

#[test]
fn test_validation_option() -> Result<(), EvalError> {
    let options = EvalOptions::new().validate_inputs(None);
    let not_psd = from_real_row_slice(2, 2, &[0.5, 1.0, 1.0, 0.5])?;

    assert!(matches!(
        fidelity_with(&not_psd, &not_psd, &options),
        Err(EvalError::InvalidDensityMatrix { .. })
    ));
    assert_close(concurrence_with(&werner_state(1.0)?, &options)?, 1.0, 1e-6, "validated C(singlet)");
    Ok(())
}

#[test]
fn test_slightly_negative_input_stays_finite() -> Result<(), EvalError> {
    // Singlet with a -1e-12 perturbation on an empty diagonal entry
    let mut rho = entangled_rho();
    rho[(0, 0)] = Complex64::new(-1e-12, 0.0);
    let f = fidelity(&rho, &maximally_mixed(4)?)?;
    let c = concurrence(&rho)?;
    assert!(f.is_finite() && c.is_finite());
    assert_close(f, 0.5, 1e-6, "perturbed fidelity");
    assert_close(c, 1.0, 1e-6, "perturbed concurrence");
    Ok(())
}
