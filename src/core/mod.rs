// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod matrix;

// Re-export public types for convenient access via `rhoeval::core::TypeName`
pub use error::EvalError;
pub use matrix::{ComplexMatrix, anti_hermitian_residue, from_real_row_slice, spin_flip, sqrt_psd};

pub mod constants;
pub use constants::operators::TWO_QUBIT_DIM; // Re-export
