use crate::HandwriterResult;
use handscript_core::geom::{Point, point};
use handscript_render::{AnimationConfig, Error as RenderError};
use serde::{Deserialize, Serialize};

/// Knobs for the whole pipeline. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandwriterConfig {
    /// Em size in pixels.
    pub font_size: f64,
    /// Pen speed in pixels per second.
    pub speed: f64,
    /// Top-left pen position of the expression.
    pub position: Point,
    /// Extra gap after each glyph, as a fraction of the font size.
    pub spacing: f64,
    /// Maximum per-coordinate jitter in pixels; 0 draws exact outlines.
    pub jitter: f64,
    /// Fixed jitter seed. Unset means a fresh random seed per plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Catmull-Rom tension.
    pub smoothing_tension: f64,
    /// Distance between resampled points in pixels; 0 keeps smoothed points as they are.
    pub resample_spacing: f64,
    pub pause_between_strokes: f64,
    pub pause_between_chars: f64,
}

impl Default for HandwriterConfig {
    fn default() -> Self {
        Self {
            font_size: 40.0,
            speed: 300.0,
            position: point(100.0, 100.0),
            spacing: 0.1,
            jitter: 0.3,
            seed: None,
            smoothing_tension: 0.5,
            resample_spacing: 5.0,
            pause_between_strokes: 30.0,
            pause_between_chars: 0.0,
        }
    }
}

impl HandwriterConfig {
    pub fn from_json(text: &str) -> HandwriterResult<Self> {
        let config: Self = serde_json::from_str(text).map_err(handscript_core::Error::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig::new(self.speed)
            .with_pause_between_strokes(self.pause_between_strokes)
            .with_pause_between_chars(self.pause_between_chars)
    }

    pub fn validate(&self) -> HandwriterResult<()> {
        let checks: [(&'static str, f64, bool, &'static str); 5] = [
            (
                "font_size",
                self.font_size,
                self.font_size > 0.0,
                "must be a positive pixel size",
            ),
            ("spacing", self.spacing, true, "must be finite"),
            (
                "jitter",
                self.jitter,
                self.jitter >= 0.0,
                "must be a non-negative pixel offset",
            ),
            (
                "smoothing_tension",
                self.smoothing_tension,
                self.smoothing_tension >= 0.0,
                "must be non-negative",
            ),
            (
                "resample_spacing",
                self.resample_spacing,
                self.resample_spacing >= 0.0,
                "must be a non-negative pixel distance",
            ),
        ];
        for (field, value, ok, reason) in checks {
            if !(value.is_finite() && ok) {
                return Err(RenderError::InvalidConfig {
                    field,
                    value,
                    reason,
                }
                .into());
            }
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(RenderError::InvalidConfig {
                field: "position",
                value: self.position.x + self.position.y,
                reason: "must be a finite point",
            }
            .into());
        }
        self.animation().validate()?;
        Ok(())
    }
}
