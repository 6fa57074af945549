// src/evaluate/mod.rs

//! Scalar metrics of density matrices: Uhlmann fidelity and Wootters concurrence.
//!
//! Both evaluators are stateless pure functions. They share the PSD square
//! root in `core::matrix` and only check shapes unless `EvalOptions` asks for
//! more. Calls are independent and may run concurrently from any thread.

mod concurrence;
mod fidelity;
mod options;

pub use concurrence::{concurrence, concurrence_with};
pub use fidelity::{fidelity, fidelity_with};
pub use options::EvalOptions;
