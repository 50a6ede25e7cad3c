//! Positioned glyphs and decoration marks to absolute-space strokes.
//!
//! Scaling and rotation are exact; jitter is the only random step and draws from a caller-owned
//! [`Rng`], so tests can pass a seeded generator or disable jitter entirely.

mod curve;

pub use curve::{arc_length, resample, smooth};

use crate::layout::{DecorationStroke, PositionedSymbol};
use handscript_core::Stroke;
use handscript_core::geom::{Point, Rotation, point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for jitter: seeded for reproducible output, otherwise from OS entropy.
pub fn jitter_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Strokes for every symbol (in order, outline order within each symbol) followed by one stroke
/// per decoration mark.
///
/// `jitter` is the maximum per-coordinate displacement in pixels. With `jitter == 0` the result
/// is a pure function of the inputs and `rng` is never touched.
pub fn generate_strokes<R: Rng + ?Sized>(
    symbols: &[PositionedSymbol],
    decorations: &[DecorationStroke],
    jitter: f64,
    rng: &mut R,
) -> Vec<Stroke> {
    let mut out = Vec::with_capacity(
        symbols.iter().map(|s| s.metrics.strokes.len()).sum::<usize>() + decorations.len(),
    );

    for symbol in symbols {
        for mut stroke in symbol_outline(symbol) {
            jitter_points(&mut stroke.points, jitter, rng);
            out.push(stroke);
        }
    }

    for decoration in decorations {
        let mut points = decoration.points.clone();
        jitter_points(&mut points, jitter, rng);
        out.push(Stroke::new(points).starting_glyph(true));
    }

    out
}

/// The symbol's normalized outline mapped into absolute space, without jitter.
///
/// Pre-delays from the metrics are kept; the first stroke is flagged as starting a glyph.
pub fn symbol_outline(symbol: &PositionedSymbol) -> Vec<Stroke> {
    let origin = symbol.origin;
    let width = symbol.width();
    let height = symbol.height;
    let center = symbol.center();
    let rotation = symbol.rotation.map(Rotation::radians);

    let place = |p: &Point| {
        let placed = point(origin.x + p.x * width, origin.y + p.y * height);
        match rotation {
            Some(rotation) => center + rotation.transform_vector(placed - center),
            None => placed,
        }
    };

    symbol
        .metrics
        .strokes
        .iter()
        .enumerate()
        .map(|(i, stroke)| {
            stroke
                .with_points(stroke.points.iter().map(place).collect())
                .starting_glyph(i == 0)
        })
        .collect()
}

/// Adds an independent uniform offset in `[-amount, amount]` to every coordinate.
pub fn jitter_points<R: Rng + ?Sized>(points: &mut [Point], amount: f64, rng: &mut R) {
    let amount = amount.abs();
    if amount == 0.0 || !amount.is_finite() {
        return;
    }
    for p in points {
        p.x += rng.gen_range(-amount..=amount);
        p.y += rng.gen_range(-amount..=amount);
    }
}
