#![forbid(unsafe_code)]

//! `handscript` turns a math expression tree into a timed sequence of handwritten pen strokes.
//!
//! The pipeline is layout → stroke generation → smoothing/resampling → drawing plan. Parsing
//! math notation and painting strokes are left to the host: trees come in as
//! [`ExpressionNode`] values (or their JSON form) and plans go out as plain data.
//!
//! ```no_run
//! use handscript::{ExpressionNode, Handwriter};
//!
//! let tree = ExpressionNode::fraction(ExpressionNode::text("1"), ExpressionNode::text("x"));
//! let plan = Handwriter::default().create_drawing_plan(&tree)?;
//! for frame in plan.frames(60.0)? {
//!     // hand `frame.strokes` to a canvas
//!     let _ = frame;
//! }
//! # Ok::<(), handscript::HandwriterError>(())
//! ```

mod config;
mod handwriter;

pub use handscript_core::*;

pub use config::HandwriterConfig;
pub use handwriter::{Handwriter, create_handwritten_equation};

/// Layout, stroke and timing stages, for callers that want to drive them one by one.
pub mod render {
    pub use handscript_render::{
        AnimationConfig, DecorationStroke, DrawingInstruction, DrawingPlan, Frame, Frames,
        LayoutContext, LayoutEngine, LayoutResult, PositionedSymbol, arc_length,
        create_drawing_plan, generate_strokes, jitter_rng, resample, smooth, truncate_polyline,
    };
    pub use handscript_render::{animator, layout, strokes};
}

#[derive(Debug, thiserror::Error)]
pub enum HandwriterError {
    #[error(transparent)]
    Core(#[from] handscript_core::Error),
    #[error(transparent)]
    Render(#[from] handscript_render::Error),
}

pub type HandwriterResult<T> = std::result::Result<T, HandwriterError>;
