// src/plot/colormap.rs

use std::fmt;

use crate::core::EvalError;
use crate::core::constants::plot::BLUE;

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Parses `#rrggbb` (leading `#` optional) into an opaque color.
    pub fn from_hex(hex: &str) -> Result<Self, EvalError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(EvalError::invalid_option("color", hex));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| EvalError::invalid_option("color", hex))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0))
    }

    fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({:.3}, {:.3}, {:.3}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Maps a normalized value to a color.
///
/// Implemented for [`LinearSegmentedColormap`] and for any `Fn(f64) -> Rgba`.
pub trait Colormap: Send + Sync {
    fn map(&self, value: f64) -> Rgba;
}

impl<F> Colormap for F
where
    F: Fn(f64) -> Rgba + Send + Sync,
{
    fn map(&self, value: f64) -> Rgba {
        self(value)
    }
}

/// Piecewise-linear colormap through a list of (position, color) stops.
/// Inputs are clipped to [0, 1]; NaN maps to the first stop.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSegmentedColormap {
    stops: Vec<(f64, Rgba)>,
}

impl LinearSegmentedColormap {
    /// Evenly spaced stops from `#rrggbb` strings.
    ///
    /// # Errors
    /// `InvalidOption` for an empty list or a malformed color.
    pub fn from_hex(colors: &[&str]) -> Result<Self, EvalError> {
        let parsed = colors.iter().map(|c| Rgba::from_hex(c)).collect::<Result<Vec<_>, _>>()?;
        Self::evenly_spaced(parsed)
    }

    /// Evenly spaced stops from colors. A single color gives a constant map.
    pub fn evenly_spaced(colors: Vec<Rgba>) -> Result<Self, EvalError> {
        match colors.len() {
            0 => Err(EvalError::invalid_option("colormap", "<empty>")),
            1 => Ok(Self { stops: vec![(0.0, colors[0]), (1.0, colors[0])] }),
            n => {
                let last = (n - 1) as f64;
                let stops = colors.into_iter().enumerate().map(|(i, c)| (i as f64 / last, c)).collect();
                Ok(Self { stops })
            }
        }
    }

    pub fn stops(&self) -> &[(f64, Rgba)] {
        &self.stops
    }
}

impl Default for LinearSegmentedColormap {
    /// Uniform `#1f77b4` blue.
    fn default() -> Self {
        let blue = Rgba::from_array(BLUE);
        Self { stops: vec![(0.0, blue), (1.0, blue)] }
    }
}

impl Colormap for LinearSegmentedColormap {
    fn map(&self, value: f64) -> Rgba {
        let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if v <= p1 {
                let span = p1 - p0;
                let t = if span > 0.0 { (v - p0) / span } else { 0.0 };
                return c0.lerp(c1, t);
            }
        }
        // Stops always end at 1.0, so this is only reached through rounding.
        self.stops[self.stops.len() - 1].1
    }
}
