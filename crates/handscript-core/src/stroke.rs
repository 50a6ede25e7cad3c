use crate::geom::{Point, polyline_length};
use serde::{Deserialize, Serialize};

/// One continuous pen-down path.
///
/// Strokes are values: smoothing, resampling and jitter all build a new `Stroke` rather than
/// editing one in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
    /// Pen-up time (ms) before this stroke starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<f64>,
    /// Set on the first stroke of every glyph or decoration mark.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub starts_glyph: bool,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            delay_ms: None,
            starts_glyph: false,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    pub fn starting_glyph(mut self, starts_glyph: bool) -> Self {
        self.starts_glyph = starts_glyph;
        self
    }

    /// Same metadata, different geometry.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            delay_ms: self.delay_ms,
            starts_glyph: self.starts_glyph,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn arc_length(&self) -> f64 {
        polyline_length(&self.points)
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
