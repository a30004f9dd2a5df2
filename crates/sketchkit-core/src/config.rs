//! Surface configuration.

use crate::error::{SketchError, SketchResult};
use crate::geometry::RenderMode;
use crate::style::{StyleColor, ToolStyle};
use crate::tools::{PenOptions, ToolKind};
use serde::{Deserialize, Serialize};

/// Initial settings for a sketch surface.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    pub tool: ToolKind,
    pub line_color: StyleColor,
    pub line_width: f64,
    pub line_alpha: f64,
    pub pen: PenOptions,
    /// Per-channel tolerance for the fill tool.
    pub fill_tolerance: u8,
    pub render_mode: RenderMode,
}

impl Default for SketchConfig {
    fn default() -> Self {
        let style = ToolStyle::default();
        Self {
            width: 800,
            height: 600,
            tool: ToolKind::default(),
            line_color: style.color,
            line_width: style.width,
            line_alpha: style.alpha,
            pen: PenOptions::default(),
            fill_tolerance: 0,
            render_mode: RenderMode::default(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SketchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The tool style described by this configuration.
    pub fn style(&self) -> ToolStyle {
        ToolStyle {
            color: self.line_color,
            width: self.line_width,
            alpha: self.line_alpha,
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SketchError::InvalidGeometry(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        self.style().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SketchConfig::default();
        assert_eq!(config.tool, ToolKind::Pen);
        assert_eq!(config.style(), ToolStyle::default());
        assert_eq!(config.render_mode, RenderMode::Original);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SketchConfig::from_json(
            r#"{ "width": 320, "height": 240, "tool": "ellipse_fill", "pen": { "pressure_simulation": true } }"#,
        )
        .unwrap();
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.tool, ToolKind::EllipseFill);
        assert!(config.pen.pressure_simulation);
        assert_eq!(config.line_width, 10.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SketchConfig {
            render_mode: RenderMode::AspectFit,
            fill_tolerance: 12,
            ..SketchConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(SketchConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SketchConfig::from_json(r#"{ "width": 0 }"#),
            Err(SketchError::InvalidGeometry(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "line_alpha": 3.0 }"#),
            Err(SketchError::InvalidStyle(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "tool": "spray" }"#),
            Err(SketchError::Config(_))
        ));
    }
}
