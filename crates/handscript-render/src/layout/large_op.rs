use super::{LayoutContext, LayoutEngine, LayoutResult, PositionedSymbol};
use handscript_core::geom::{LayoutBox, point};
use handscript_core::{LargeOperatorKind, LargeOperatorNode};

const INTEGRAL_HEIGHT: f64 = 2.8;
const OPERATOR_HEIGHT: f64 = 2.0;
/// Share of the operator height drawn above the baseline.
const ABOVE_BASELINE: f64 = 0.6;
const LIMIT_SCALE: f64 = 0.45;

// Limit placement, tuned by eye against the built-in glyphs.
const LOWER_LIMIT_DX: f64 = -0.1;
const LOWER_LIMIT_DROP: f64 = 1.1;
const UPPER_LIMIT_X: f64 = 0.6;
const UPPER_LIMIT_RAISE: f64 = 1.8;

impl LayoutEngine<'_> {
    pub(super) fn layout_large_operator(
        &self,
        kind: LargeOperatorKind,
        node: &LargeOperatorNode,
        ctx: &LayoutContext,
    ) -> LayoutResult {
        let font_size = ctx.font_size;
        let x = ctx.current_x;
        let height = match kind {
            LargeOperatorKind::Integral => font_size * INTEGRAL_HEIGHT,
            LargeOperatorKind::Sum | LargeOperatorKind::Product => font_size * OPERATOR_HEIGHT,
        };

        let metrics = self.glyph(kind.symbol());
        tracing::debug!(?kind, symbol = %kind.symbol(), height, "laying out large operator");

        let width = height * metrics.aspect_ratio;
        let y = ctx.baseline_y - height * ABOVE_BASELINE;
        let mut total_width = width * metrics.advance;
        let mut min_y = y;
        let mut max_y = y + height;

        let mut out = LayoutResult::empty(ctx);
        out.symbols
            .push(PositionedSymbol::new(metrics, point(x, y), height));

        let limit_ctx = ctx.with_font_size(font_size * LIMIT_SCALE);

        if let Some(lower) = &node.lower {
            let lower = self.layout(
                lower,
                &limit_ctx
                    .with_x(x + font_size * LOWER_LIMIT_DX)
                    .with_baseline(ctx.baseline_y + font_size * LOWER_LIMIT_DROP),
            );
            max_y = max_y.max(lower.bounds.bottom());
            total_width = total_width.max(lower.bounds.right() - x);
            out.absorb(lower);
        }

        if let Some(upper) = &node.upper {
            let upper = self.layout(
                upper,
                &limit_ctx
                    .with_x(x + width * UPPER_LIMIT_X)
                    .with_baseline(ctx.baseline_y - font_size * UPPER_LIMIT_RAISE),
            );
            min_y = min_y.min(upper.bounds.y);
            total_width = total_width.max(upper.bounds.right() - x);
            out.absorb(upper);
        }

        out.bounds = LayoutBox {
            x,
            y: min_y,
            width: total_width,
            height: max_y - min_y,
            baseline: ctx.baseline_y - min_y,
        };
        out
    }
}
