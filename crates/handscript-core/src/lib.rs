#![forbid(unsafe_code)]

//! Data model for handwritten math (headless).
//!
//! This crate owns the values that flow between the pipeline stages:
//! - the expression tree handed over by an external parser ([`ExpressionNode`])
//! - normalized glyph outlines and the provider trait that serves them ([`SymbolMetrics`],
//!   [`SymbolMetricsProvider`], [`BuiltinGlyphs`])
//! - absolute-space strokes and layout boxes ([`Stroke`], [`LayoutBox`])
//!
//! Layout, stroke generation and timing live in `handscript-render`.

pub mod error;
pub mod geom;
pub mod glyphs;
pub mod metrics;
pub mod node;
pub mod stroke;

pub use error::{Error, Result};
pub use geom::{LayoutBox, Point, point};
pub use glyphs::BuiltinGlyphs;
pub use metrics::{PlaceholderProvider, SymbolMetrics, SymbolMetricsProvider};
pub use node::{
    AccentNode, DelimiterNode, ExpressionNode, FractionNode, GroupNode, LargeOperatorKind,
    LargeOperatorNode, ScriptKind, ScriptNode, SqrtNode, TextNode,
};
pub use stroke::Stroke;
