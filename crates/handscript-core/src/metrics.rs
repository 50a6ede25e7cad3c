use crate::geom::point;
use crate::stroke::Stroke;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Normalized outline and spacing data for one character.
///
/// Stroke coordinates live in a unit box with a top-left origin. Instances are shared behind
/// `Arc` so every occurrence of a character in a layout points at the same outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMetrics {
    #[serde(rename = "char")]
    pub ch: char,
    pub strokes: Vec<Stroke>,
    /// Baseline position inside the box, 0 = top, 1 = bottom.
    pub baseline: f64,
    /// Width over height.
    pub aspect_ratio: f64,
    /// Horizontal pen advance after the glyph, relative to its own width.
    pub advance: f64,
}

impl SymbolMetrics {
    pub fn new(
        ch: char,
        strokes: Vec<Stroke>,
        baseline: f64,
        aspect_ratio: f64,
        advance: f64,
    ) -> Result<Self> {
        let metrics = Self {
            ch,
            strokes,
            baseline,
            aspect_ratio,
            advance,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidGlyph {
            ch: self.ch,
            message,
        };
        if !self.baseline.is_finite() {
            return Err(invalid(format!("baseline must be finite, got {}", self.baseline)));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(invalid(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.advance.is_finite() && self.advance >= 0.0) {
            return Err(invalid(format!(
                "advance must be non-negative, got {}",
                self.advance
            )));
        }
        let bad_point = self
            .strokes
            .iter()
            .flat_map(|s| s.points.iter())
            .any(|p| !(p.x.is_finite() && p.y.is_finite()));
        if bad_point {
            return Err(invalid("outline contains a non-finite point".to_string()));
        }
        Ok(())
    }

    /// Boxed "X" drawn for characters the provider does not know.
    pub fn placeholder(ch: char) -> Self {
        let stroke =
            |pts: &[(f64, f64)]| Stroke::new(pts.iter().map(|&(x, y)| point(x, y)).collect());
        Self {
            ch,
            strokes: vec![
                stroke(&[(0.1, 0.1), (0.9, 0.1), (0.9, 0.9), (0.1, 0.9), (0.1, 0.1)]),
                stroke(&[(0.1, 0.1), (0.9, 0.9)]),
                stroke(&[(0.9, 0.1), (0.1, 0.9)]),
            ],
            baseline: 0.85,
            aspect_ratio: 0.7,
            advance: 0.75,
        }
    }
}

/// Character lookup used by the layout engine.
///
/// Lookups are total: implementations return a placeholder for characters they cannot draw, so
/// layout never fails because of a missing glyph.
pub trait SymbolMetricsProvider {
    fn lookup(&self, ch: char) -> Arc<SymbolMetrics>;

    fn contains(&self, ch: char) -> bool;
}

impl<P: SymbolMetricsProvider + ?Sized> SymbolMetricsProvider for Arc<P> {
    fn lookup(&self, ch: char) -> Arc<SymbolMetrics> {
        (**self).lookup(ch)
    }

    fn contains(&self, ch: char) -> bool {
        (**self).contains(ch)
    }
}

/// Provider that knows no glyphs at all; every lookup yields the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

impl SymbolMetricsProvider for PlaceholderProvider {
    fn lookup(&self, ch: char) -> Arc<SymbolMetrics> {
        Arc::new(SymbolMetrics::placeholder(ch))
    }

    fn contains(&self, _ch: char) -> bool {
        false
    }
}
