// src/plot/options.rs

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;

use super::colormap::Colormap;
use crate::core::EvalError;
use crate::core::constants::plot::DEFAULT_BOX_SIZE;

/// Which part of each matrix entry is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Component {
    #[default]
    Real,
    Imag,
}

impl Component {
    pub fn extract(&self, z: Complex64) -> f64 {
        match self {
            Component::Real => z.re,
            Component::Imag => z.im,
        }
    }
}

impl FromStr for Component {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(Component::Real),
            "imag" => Ok(Component::Imag),
            other => Err(EvalError::invalid_option("component", other)),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Real => write!(f, "real"),
            Component::Imag => write!(f, "imag"),
        }
    }
}

/// How bars are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorStyle {
    /// Color by height through the colormap.
    #[default]
    Cmap,
    /// Blue bars, light grey on the last row and column (bottom-right corner stays blue).
    Bw,
    /// Every bar blue; the colormap is ignored.
    Blue,
}

impl FromStr for ColorStyle {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cmap" => Ok(ColorStyle::Cmap),
            "bw" => Ok(ColorStyle::Bw),
            "blue" => Ok(ColorStyle::Blue),
            other => Err(EvalError::invalid_option("color_style", other)),
        }
    }
}

impl fmt::Display for ColorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorStyle::Cmap => write!(f, "cmap"),
            ColorStyle::Bw => write!(f, "bw"),
            ColorStyle::Blue => write!(f, "blue"),
        }
    }
}

/// Configuration for `plot_rho`.
///
/// `colormap: None` uses `LinearSegmentedColormap::default()`, built per call.
#[derive(Clone, Copy)]
pub struct PlotOptions<'a> {
    /// Bar footprint in [0, 1]; anything else makes `plot_rho` produce nothing.
    pub box_size: f64,
    pub component: Component,
    pub color_style: ColorStyle,
    pub colormap: Option<&'a dyn Colormap>,
}

impl Default for PlotOptions<'_> {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            component: Component::default(),
            color_style: ColorStyle::default(),
            colormap: None,
        }
    }
}

impl<'a> PlotOptions<'a> {
    /// Builds options from the string forms `"real" | "imag"` and `"cmap" | "bw" | "blue"`.
    ///
    /// # Errors
    /// `InvalidOption` naming the first unrecognized value.
    pub fn from_strs(box_size: f64, component: &str, color_style: &str) -> Result<Self, EvalError> {
        Ok(Self {
            box_size,
            component: component.parse()?,
            color_style: color_style.parse()?,
            colormap: None,
        })
    }

    pub fn with_colormap(mut self, colormap: &'a dyn Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }
}

impl fmt::Debug for PlotOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotOptions")
            .field("box_size", &self.box_size)
            .field("component", &self.component)
            .field("color_style", &self.color_style)
            .field("colormap", &self.colormap.map(|_| "<custom>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_values() -> Result<(), EvalError> {
        let opts = PlotOptions::from_strs(0.4, "imag", "bw")?;
        assert_eq!(opts.component, Component::Imag);
        assert_eq!(opts.color_style, ColorStyle::Bw);
        assert_eq!("blue".parse::<ColorStyle>()?, ColorStyle::Blue);
        Ok(())
    }

    #[test]
    fn unrecognized_values_are_invalid_options() {
        assert_eq!(
            "phase".parse::<Component>(),
            Err(EvalError::InvalidOption { option: "component".into(), value: "phase".into() })
        );
        assert!(matches!(
            PlotOptions::from_strs(0.6, "real", "rainbow"),
            Err(EvalError::InvalidOption { .. })
        ));
    }

    #[test]
    fn defaults() {
        let opts = PlotOptions::default();
        assert_eq!(opts.box_size, 0.6);
        assert_eq!(opts.component, Component::Real);
        assert_eq!(opts.color_style, ColorStyle::Cmap);
        assert!(opts.colormap.is_none());
    }
}
