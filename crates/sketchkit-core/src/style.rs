//! Stroke style captured by each tool at creation.

use crate::error::{SketchError, SketchResult};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StyleColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for StyleColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<StyleColor> for Color {
    fn from(color: StyleColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Line color, width and alpha applied to a tool's output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolStyle {
    /// Line (and fill) color.
    pub color: StyleColor,
    /// Line width in pixels. Must be positive.
    pub width: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub alpha: f64,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            color: StyleColor::black(),
            width: 10.0,
            alpha: 1.0,
        }
    }
}

impl ToolStyle {
    /// Create a validated style.
    pub fn new(color: impl Into<StyleColor>, width: f64, alpha: f64) -> SketchResult<Self> {
        let style = Self {
            color: color.into(),
            width,
            alpha,
        };
        style.validate()?;
        Ok(style)
    }

    /// Check the width is positive and the alpha lies in `0.0..=1.0`.
    pub fn validate(&self) -> SketchResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SketchError::InvalidStyle(format!(
                "line width must be positive, got {}",
                self.width
            )));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SketchError::InvalidStyle(format!(
                "line alpha must be within 0..=1, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// The line color as a peniko Color.
    pub fn color(&self) -> Color {
        self.color.into()
    }

    /// The line color with the style alpha folded into its alpha channel.
    pub fn color_with_alpha(&self) -> Color {
        let alpha = (f64::from(self.color.a) * self.alpha.clamp(0.0, 1.0)).round() as u8;
        Color::from_rgba8(self.color.r, self.color.g, self.color.b, alpha)
    }
}
