#![forbid(unsafe_code)]

//! Headless handwriting pipeline stages.
//!
//! - [`layout`]: expression tree to positioned glyphs, decoration marks and a box
//! - [`strokes`]: positioned glyphs to absolute polylines, plus curve utilities
//! - [`animator`]: strokes to a timed [`DrawingPlan`] with snapshot and frame queries
//!
//! Every stage is a pure function of its inputs apart from the injectable jitter source.

pub mod animator;
pub mod layout;
pub mod strokes;

pub use animator::{
    AnimationConfig, DrawingInstruction, DrawingPlan, Frame, Frames, create_drawing_plan,
    truncate_polyline,
};
pub use layout::{
    DecorationStroke, LayoutContext, LayoutEngine, LayoutResult, PositionedSymbol,
};
pub use strokes::{arc_length, generate_strokes, jitter_rng, resample, smooth};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {field} ({value}): {reason}")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
