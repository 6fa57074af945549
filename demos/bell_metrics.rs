//! Example printing fidelity and concurrence for the usual two-qubit states,
//! then laying out a bar chart of one of them with a text renderer.

use rhoeval::plot::{Axes, Bar, BarRenderer};
use rhoeval::states::{bell_state, maximally_mixed, werner_state};
use rhoeval::{BellState, EvalError, EvalOptions, concurrence, fidelity, fidelity_with, plot_rho_from_strs};

// Prints every bar as one line on stdout
struct StdoutRenderer {
    drawn: usize,
}

impl BarRenderer for StdoutRenderer {
    fn set_axes(&mut self, axes: &Axes) -> Result<(), EvalError> {
        println!("axes: x {:?}, y {:?}, z {:?}", axes.x, axes.y, axes.z);
        Ok(())
    }

    fn draw_bar(&mut self, bar: &Bar) -> Result<(), EvalError> {
        if bar.dz > 0.0 {
            println!("  ({}, {}) height {:+.3} color {}", bar.row, bar.col, bar.value, bar.color);
        }
        self.drawn += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), EvalError> {
        println!("{} bars laid out", self.drawn);
        Ok(())
    }
}

fn main() -> Result<(), EvalError> {
    println!("--- rhoeval Example: Bell-state metrics ---");

    let noise = maximally_mixed(4)?;
    let singlet = bell_state(BellState::PsiMinus);

    // --- Reference scenarios ---
    println!("\nF(Ψ-, I/4) = {:.9}  (expected 0.5)", fidelity(&singlet, &noise)?);
    println!("C(Ψ-)      = {:.9}  (expected 1)", concurrence(&singlet)?);
    println!("C(I/4)     = {:.9}  (expected 0)", concurrence(&noise)?);

    // --- All four Bell states ---
    println!("\nBell states:");
    for which in [BellState::PhiPlus, BellState::PhiMinus, BellState::PsiPlus, BellState::PsiMinus] {
        let rho = bell_state(which);
        println!("  {}: C = {:.6}, F with Ψ- = {:.6}", which, concurrence(&rho)?, fidelity(&rho, &singlet)?);
    }

    // --- Werner family: entangled only above p = 1/3 ---
    println!("\nWerner states:");
    for p in [0.0, 0.25, 1.0 / 3.0, 0.5, 0.8, 1.0] {
        let rho = werner_state(p)?;
        println!("  p = {:.3}: C = {:.6}", p, concurrence(&rho)?);
    }

    // --- Strict evaluation rejects a non-state ---
    let strict = EvalOptions::new().validate_inputs(None);
    let not_a_state = rhoeval::ComplexMatrix::identity(4, 4);
    match fidelity_with(&not_a_state, &noise, &strict) {
        Ok(f) => println!("\nunexpectedly accepted the identity: F = {}", f),
        Err(e) => println!("\nstrict mode: {}", e),
    }

    // --- Bar chart of the singlet ---
    println!("\nBar chart of Re(Ψ-):");
    match plot_rho_from_strs(&singlet, 0.6, "real", "bw")? {
        Some(plot) => plot.render(&mut StdoutRenderer { drawn: 0 })?,
        None => println!("box size out of range, nothing to draw"),
    }

    Ok(())
}
