//! Recursive layout of an expression tree into positioned glyphs and decoration marks.
//!
//! Every rule receives a [`LayoutContext`] (pen position, font size, baseline) and returns a
//! [`LayoutResult`] whose `bounds` is the only thing its parent looks at. The multipliers used by
//! the rules are calibrated for the built-in handwritten glyphs and are kept as literal
//! constants in the rule modules.

mod accent;
mod delimiter;
mod fraction;
mod large_op;
mod radical;
mod script;
mod text;

use handscript_core::geom::{LayoutBox, Point, point};
use handscript_core::{
    ExpressionNode, LargeOperatorKind, ScriptKind, SymbolMetrics, SymbolMetricsProvider,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub font_size: f64,
    /// Extra gap after each glyph, as a fraction of the font size.
    pub spacing: f64,
    pub current_x: f64,
    pub current_y: f64,
    pub baseline_y: f64,
}

impl LayoutContext {
    /// Baseline placement used for a fresh expression: 0.7 em below the pen position.
    pub const BASELINE_FROM_TOP: f64 = 0.7;

    pub fn at(position: Point, font_size: f64, spacing: f64) -> Self {
        Self {
            font_size,
            spacing,
            current_x: position.x,
            current_y: position.y,
            baseline_y: position.y + font_size * Self::BASELINE_FROM_TOP,
        }
    }

    pub fn with_font_size(self, font_size: f64) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_x(self, current_x: f64) -> Self {
        Self { current_x, ..self }
    }

    pub fn with_baseline(self, baseline_y: f64) -> Self {
        Self { baseline_y, ..self }
    }
}

/// A glyph placed in absolute space. Width is always `height * aspect_ratio`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedSymbol {
    #[serde(rename = "char", serialize_with = "serialize_metrics_char")]
    pub metrics: Arc<SymbolMetrics>,
    /// Top-left corner.
    pub origin: Point,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

fn serialize_metrics_char<S: serde::Serializer>(
    metrics: &Arc<SymbolMetrics>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_char(metrics.ch)
}

impl PositionedSymbol {
    pub fn new(metrics: Arc<SymbolMetrics>, origin: Point, height: f64) -> Self {
        Self {
            metrics,
            origin,
            height,
            rotation: None,
        }
    }

    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = Some(radians);
        self
    }

    pub fn ch(&self) -> char {
        self.metrics.ch
    }

    pub fn width(&self) -> f64 {
        self.height * self.metrics.aspect_ratio
    }

    pub fn center(&self) -> Point {
        point(
            self.origin.x + self.width() / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }
}

/// A structural mark (fraction bar, radical, accent) already in absolute coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationStroke {
    pub points: Vec<Point>,
}

impl DecorationStroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub symbols: Vec<PositionedSymbol>,
    pub decorations: Vec<DecorationStroke>,
    pub bounds: LayoutBox,
}

impl LayoutResult {
    /// Nothing to draw; a zero-size box at the pen position.
    pub fn empty(ctx: &LayoutContext) -> Self {
        Self {
            symbols: Vec::new(),
            decorations: Vec::new(),
            bounds: LayoutBox::empty_at(ctx.current_x, ctx.current_y),
        }
    }

    /// Moves everything, glyphs, marks and bounds, horizontally.
    pub fn shifted_x(mut self, dx: f64) -> Self {
        if dx == 0.0 {
            return self;
        }
        for sym in &mut self.symbols {
            sym.origin.x += dx;
        }
        for deco in &mut self.decorations {
            for p in &mut deco.points {
                p.x += dx;
            }
        }
        self.bounds = self.bounds.translate(dx, 0.0);
        self
    }

    /// Moves the glyphs and marks of `other` into `self`; bounds are left to the caller.
    fn absorb(&mut self, other: LayoutResult) {
        self.symbols.extend(other.symbols);
        self.decorations.extend(other.decorations);
    }
}

/// Lays out expression trees against a glyph provider.
///
/// The engine holds no state besides the provider reference; one engine can lay out any number
/// of trees.
#[derive(Clone, Copy)]
pub struct LayoutEngine<'p> {
    provider: &'p dyn SymbolMetricsProvider,
}

impl std::fmt::Debug for LayoutEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine").finish_non_exhaustive()
    }
}

impl<'p> LayoutEngine<'p> {
    pub fn new(provider: &'p dyn SymbolMetricsProvider) -> Self {
        Self { provider }
    }

    pub fn layout(&self, node: &ExpressionNode, ctx: &LayoutContext) -> LayoutResult {
        match node {
            ExpressionNode::Text(n) | ExpressionNode::Symbol(n) | ExpressionNode::Operator(n) => {
                self.layout_text(&n.value, ctx)
            }
            ExpressionNode::Fraction(n) => self.layout_fraction(n, ctx),
            ExpressionNode::Superscript(n) => self.layout_script(ScriptKind::Superscript, n, ctx),
            ExpressionNode::Subscript(n) => self.layout_script(ScriptKind::Subscript, n, ctx),
            ExpressionNode::Sqrt(n) => self.layout_sqrt(n, ctx),
            ExpressionNode::Integral(n) => {
                self.layout_large_operator(LargeOperatorKind::Integral, n, ctx)
            }
            ExpressionNode::Sum(n) => self.layout_large_operator(LargeOperatorKind::Sum, n, ctx),
            ExpressionNode::Product(n) => {
                self.layout_large_operator(LargeOperatorKind::Product, n, ctx)
            }
            ExpressionNode::Parenthesis(n)
            | ExpressionNode::Bracket(n)
            | ExpressionNode::Brace(n) => self.layout_delimiter(n, ctx),
            ExpressionNode::Accent(n) => self.layout_accent(n, ctx),
            ExpressionNode::Group(n) => self.layout_group(&n.children, ctx),
            ExpressionNode::Unknown => {
                tracing::warn!(
                    x = ctx.current_x,
                    y = ctx.current_y,
                    "unknown expression node; laying out as empty"
                );
                LayoutResult::empty(ctx)
            }
        }
    }

    fn layout_group(&self, children: &[ExpressionNode], ctx: &LayoutContext) -> LayoutResult {
        let mut out = LayoutResult::empty(ctx);
        let mut x = ctx.current_x;
        let mut min_y = ctx.baseline_y;
        let mut max_y = ctx.baseline_y;

        for child in children {
            let child = self.layout(child, &ctx.with_x(x));
            x += child.bounds.width;
            min_y = min_y.min(child.bounds.y);
            max_y = max_y.max(child.bounds.bottom());
            out.absorb(child);
        }

        out.bounds = LayoutBox {
            x: ctx.current_x,
            y: min_y,
            width: x - ctx.current_x,
            height: max_y - min_y,
            baseline: ctx.baseline_y - min_y,
        };
        out
    }

    fn glyph(&self, ch: char) -> Arc<SymbolMetrics> {
        self.provider.lookup(ch)
    }
}
