//! Built-in handwritten glyph set.
//!
//! Covers digits, the Latin letters most used in formulas, common Greek letters, arithmetic and
//! relational operators, delimiters and the large operators `∫ ∑ ∏`. Anything else resolves to
//! [`SymbolMetrics::placeholder`].

mod table;

use crate::geom::point;
use crate::metrics::{SymbolMetrics, SymbolMetricsProvider};
use crate::stroke::Stroke;
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BuiltinGlyphs {
    glyphs: FxHashMap<char, Arc<SymbolMetrics>>,
}

impl Default for BuiltinGlyphs {
    fn default() -> Self {
        let mut glyphs = FxHashMap::default();
        for def in table::GLYPHS {
            let strokes = def
                .strokes
                .iter()
                .map(|pts| Stroke::new(pts.iter().map(|&(x, y)| point(x, y)).collect()))
                .collect();
            glyphs.insert(
                def.ch,
                Arc::new(SymbolMetrics {
                    ch: def.ch,
                    strokes,
                    baseline: def.baseline,
                    aspect_ratio: def.aspect_ratio,
                    advance: def.advance,
                }),
            );
        }
        Self { glyphs }
    }
}

impl BuiltinGlyphs {
    /// An empty set; every lookup falls back to the placeholder until glyphs are inserted.
    pub fn empty() -> Self {
        Self {
            glyphs: FxHashMap::default(),
        }
    }

    /// Adds or replaces a glyph after validating its metrics.
    pub fn insert(&mut self, metrics: SymbolMetrics) -> Result<()> {
        metrics.validate()?;
        self.glyphs.insert(metrics.ch, Arc::new(metrics));
        Ok(())
    }

    /// Merges glyphs from a JSON array of [`SymbolMetrics`].
    pub fn extend_from_json(&mut self, text: &str) -> Result<usize> {
        let extra: Vec<SymbolMetrics> = serde_json::from_str(text)?;
        let count = extra.len();
        for metrics in extra {
            self.insert(metrics)?;
        }
        Ok(count)
    }

    pub fn get(&self, ch: char) -> Option<&Arc<SymbolMetrics>> {
        self.glyphs.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Known characters in ascending code point order.
    pub fn chars(&self) -> Vec<char> {
        let mut out: Vec<char> = self.glyphs.keys().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn validate_all(&self) -> Result<()> {
        for metrics in self.glyphs.values() {
            metrics.validate()?;
            if metrics.strokes.iter().any(Stroke::is_empty) {
                return Err(Error::InvalidGlyph {
                    ch: metrics.ch,
                    message: "outline contains an empty stroke".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl SymbolMetricsProvider for BuiltinGlyphs {
    fn lookup(&self, ch: char) -> Arc<SymbolMetrics> {
        if let Some(metrics) = self.glyphs.get(&ch) {
            return Arc::clone(metrics);
        }
        tracing::warn!(?ch, "glyph not found; drawing placeholder");
        Arc::new(SymbolMetrics::placeholder(ch))
    }

    fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }
}
