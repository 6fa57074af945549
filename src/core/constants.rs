//! Numerical constants shared by the evaluators, validation and plotting.

/// Tolerances and solver limits.
pub mod numeric {
    /// Convergence threshold handed to the Hermitian eigensolver.
    pub const EIGEN_EPSILON: f64 = f64::EPSILON;
    /// Iteration cap for the eigensolver. Zero would mean "unbounded".
    pub const EIGEN_MAX_ITERATIONS: usize = 10_000;
    /// Default tolerance for Hermitian / trace / positivity checks.
    pub const DEFAULT_VALIDATION_TOLERANCE: f64 = 1e-9;
    /// Imaginary residue above which a `warn!` is emitted even in non-strict mode.
    pub const IMAGINARY_WARN_THRESHOLD: f64 = 1e-6;
}

/// Fixed operators.
pub mod operators {
    /// Two-qubit spin-flip operator σy⊗σy in the computational basis, row-major.
    /// Real anti-diagonal; the sign pattern and order are significant.
    pub const SPIN_FLIP: [[f64; 4]; 4] = [
        [0.0, 0.0, 0.0, -1.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0, 0.0],
    ];
    /// Dimension of a two-qubit density matrix.
    pub const TWO_QUBIT_DIM: usize = 4;
}

/// Plot defaults and colors (RGBA, components in [0, 1]).
pub mod plot {
    /// Default bar footprint.
    pub const DEFAULT_BOX_SIZE: f64 = 0.6;
    /// `#1f77b4`
    pub const BLUE: [f64; 4] = [0.12156863, 0.46666667, 0.70588235, 1.0];
    /// Light grey used by the black-and-white style.
    pub const WHITE: [f64; 4] = [0.80, 0.80, 0.80, 1.0];
    /// Vertical axis limits.
    pub const Z_LIMITS: (f64, f64) = (-1.0, 1.0);
}
