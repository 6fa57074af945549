// src/plot/mod.rs

//! 3-D bar-chart description of a density matrix.
//!
//! `plot_rho` turns the real or imaginary part of a matrix into a grid of
//! bars (position, footprint, signed height, color). Drawing is delegated to
//! a [`BarRenderer`]; this module has no graphics backend of its own and
//! nothing in the evaluators depends on it.

mod colormap;
mod options;

pub use colormap::{Colormap, LinearSegmentedColormap, Rgba};
pub use options::{ColorStyle, Component, PlotOptions};

use std::fmt;

use tracing::debug;

use crate::core::constants::plot::{BLUE, WHITE, Z_LIMITS};
use crate::core::{ComplexMatrix, EvalError};
use crate::validation::check_square;

/// One bar of the chart. `(x, y, z)` is the lower corner; `dz` is always >= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub row: usize,
    pub col: usize,
    /// Signed matrix value this bar represents.
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub color: Rgba,
}

/// Axis limits and tick positions (tick labels are left blank).
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
    /// Shared by x and y: the center of each grid cell.
    pub ticks: Vec<f64>,
    pub z_ticks: Vec<f64>,
}

/// A fully laid-out bar chart, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlot {
    pub component: Component,
    pub axes: Axes,
    /// Row-major: bar `i * n + j` shows entry `(i, j)`.
    pub bars: Vec<Bar>,
}

/// Terminal sink for a [`BarPlot`].
pub trait BarRenderer {
    fn set_axes(&mut self, axes: &Axes) -> Result<(), EvalError>;
    fn draw_bar(&mut self, bar: &Bar) -> Result<(), EvalError>;
    fn finish(&mut self) -> Result<(), EvalError> {
        Ok(())
    }
}

impl BarPlot {
    /// Hands the axes and then every bar, in row-major order, to `renderer`.
    pub fn render<R: BarRenderer + ?Sized>(&self, renderer: &mut R) -> Result<(), EvalError> {
        renderer.set_axes(&self.axes)?;
        for bar in &self.bars {
            renderer.draw_bar(bar)?;
        }
        renderer.finish()
    }

    /// Grid size n of the plotted n x n matrix.
    pub fn grid(&self) -> usize {
        self.axes.ticks.len()
    }

    pub fn bar(&self, row: usize, col: usize) -> Option<&Bar> {
        let n = self.grid();
        if row < n && col < n { self.bars.get(row * n + col) } else { None }
    }
}

impl fmt::Display for BarPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bar plot ({} part, {}x{}):", self.component, self.grid(), self.grid())?;
        for bar in &self.bars {
            writeln!(
                f,
                "  [{},{}] {:+.4} at ({:.2}, {:.2}, {:.2}) size {:.2}x{:.2}x{:.4} {}",
                bar.row, bar.col, bar.value, bar.x, bar.y, bar.z, bar.dx, bar.dy, bar.dz, bar.color
            )?;
        }
        Ok(())
    }
}

/// Lays out a bar chart of the real or imaginary part of `rho`.
///
/// Entry `(i, j)` becomes a bar at `x = j + p`, `y = i + p` with
/// `p = (1 − box_size) / 2` and a `box_size` square footprint. A negative
/// value v draws a bar from `z = v` up to 0; a positive one from 0 up to v.
///
/// # Returns
/// * `Ok(None)` when `box_size` is outside [0, 1]; nothing is laid out.
/// * `Ok(Some(plot))` otherwise.
///
/// # Errors
/// `DimensionError` if `rho` is empty or not square.
pub fn plot_rho(rho: &ComplexMatrix, options: &PlotOptions<'_>) -> Result<Option<BarPlot>, EvalError> {
    if !box_size_in_range(options.box_size) {
        return Ok(None);
    }
    let n = check_square(rho)?;
    if n == 0 {
        return Err(EvalError::dimension("cannot plot an empty matrix"));
    }

    let offset = 0.5 * (1.0 - options.box_size);
    let values: Vec<f64> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| options.component.extract(rho[(i, j)]))
        .collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    let default_cmap = LinearSegmentedColormap::default();
    let cmap: &dyn Colormap = match options.colormap {
        Some(custom) => custom,
        None => &default_cmap,
    };
    let blue = Rgba::from_array(BLUE);
    let white = Rgba::from_array(WHITE);

    let bars = values
        .iter()
        .enumerate()
        .map(|(k, &value)| {
            let (row, col) = (k / n, k % n);
            let color = match options.color_style {
                ColorStyle::Cmap => cmap.map((value - min) / 2.0),
                ColorStyle::Bw => {
                    if (row == n - 1) != (col == n - 1) { white } else { blue }
                }
                ColorStyle::Blue => blue,
            };
            Bar {
                row,
                col,
                value,
                x: col as f64 + offset,
                y: row as f64 + offset,
                z: value.min(0.0),
                dx: options.box_size,
                dy: options.box_size,
                dz: value.abs(),
                color,
            }
        })
        .collect();

    let extent = n as f64;
    let axes = Axes {
        x: (0.0, extent),
        y: (0.0, extent),
        z: Z_LIMITS,
        ticks: (0..n).map(|i| i as f64 + 0.5).collect(),
        z_ticks: vec![-1.0, -0.5, 0.0, 0.5, 1.0],
    };

    debug!(grid = n, component = %options.component, style = %options.color_style, "laid out bar plot");
    Ok(Some(BarPlot { component: options.component, axes, bars }))
}

/// [`plot_rho`] keyed by the string forms of the options.
///
/// `box_size` is checked first: when it is outside [0, 1] the result is
/// `Ok(None)` and the option strings are never parsed.
///
/// # Errors
/// * `InvalidOption` for an unrecognized `component` or `color_style`.
/// * `DimensionError` as for [`plot_rho`].
pub fn plot_rho_from_strs(
    rho: &ComplexMatrix,
    box_size: f64,
    component: &str,
    color_style: &str,
) -> Result<Option<BarPlot>, EvalError> {
    if !box_size_in_range(box_size) {
        return Ok(None);
    }
    plot_rho(rho, &PlotOptions::from_strs(box_size, component, color_style)?)
}

fn box_size_in_range(box_size: f64) -> bool {
    let ok = (0.0..=1.0).contains(&box_size);
    if !ok {
        debug!(box_size, "box size outside [0, 1], nothing to plot");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn sample_rho() -> ComplexMatrix {
        // [[0,0,0,0],[0,1,i,0],[0,-i,1,0],[0,0,0,0]]
        let mut rho = ComplexMatrix::zeros(4, 4);
        rho[(1, 1)] = Complex64::new(1.0, 0.0);
        rho[(1, 2)] = Complex64::new(0.0, 1.0);
        rho[(2, 1)] = Complex64::new(0.0, -1.0);
        rho[(2, 2)] = Complex64::new(1.0, 0.0);
        rho
    }

    #[test]
    fn out_of_range_box_size_plots_nothing() -> Result<(), EvalError> {
        for box_size in [-0.1, 1.5, f64::NAN] {
            let opts = PlotOptions { box_size, ..PlotOptions::default() };
            assert!(plot_rho(&sample_rho(), &opts)?.is_none());
        }
        Ok(())
    }

    #[test]
    fn negative_values_hang_below_zero() -> Result<(), EvalError> {
        let opts = PlotOptions { component: Component::Imag, ..PlotOptions::default() };
        let plot = plot_rho(&sample_rho(), &opts)?.ok_or(EvalError::dimension("no plot"))?;
        let below = plot.bar(2, 1).ok_or(EvalError::dimension("missing bar"))?;
        assert_eq!(below.value, -1.0);
        assert_eq!(below.z, -1.0);
        assert_eq!(below.dz, 1.0);
        let above = plot.bar(1, 2).ok_or(EvalError::dimension("missing bar"))?;
        assert_eq!(above.z, 0.0);
        assert_eq!(above.dz, 1.0);
        Ok(())
    }

    #[test]
    fn bars_are_centered_in_their_cells() -> Result<(), EvalError> {
        let opts = PlotOptions { box_size: 0.4, ..PlotOptions::default() };
        let plot = plot_rho(&sample_rho(), &opts)?.ok_or(EvalError::dimension("no plot"))?;
        assert_eq!(plot.bars.len(), 16);
        let bar = plot.bar(1, 3).ok_or(EvalError::dimension("missing bar"))?;
        assert!((bar.x - 3.3).abs() < 1e-12);
        assert!((bar.y - 1.3).abs() < 1e-12);
        assert_eq!(bar.dx, 0.4);
        assert_eq!(plot.axes.ticks, vec![0.5, 1.5, 2.5, 3.5]);
        Ok(())
    }

    #[test]
    fn non_square_is_rejected() {
        let rho = ComplexMatrix::zeros(2, 3);
        assert!(matches!(plot_rho(&rho, &PlotOptions::default()), Err(EvalError::DimensionError { .. })));
    }
}
